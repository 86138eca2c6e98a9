//=========================================================================
// Cursor Errors
//=========================================================================
//
// Errors raised by cursor lifecycle operations.
//
//=========================================================================

//=== External Dependencies ===============================================

use thiserror::Error;

//=== CursorError =========================================================

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CursorError {
    /// Activation requires at least one target.
    #[error("cursor has no targets to select")]
    NoTargets,
}

//=========================================================================
// Unit Tests
//=========================================================================
