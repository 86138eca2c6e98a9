//=========================================================================
// Input
//=========================================================================
//
// Menu input vocabulary and state.
//
// Architecture:
//   Winit key → KeyBindings → SignalEvent → SignalTracker → InputQuery
//
// Components only ever see `&dyn InputQuery`; how the host polls devices
// stays on the host side.
//
//=========================================================================

//=== Module Declarations =================================================

mod bindings;
mod signal;
mod state_tracker;

//=== Public API ==========================================================

pub use bindings::KeyBindings;
pub use signal::{Axis, Direction, InputSignal, SignalEvent};
pub use state_tracker::SignalTracker;

//=== InputQuery ==========================================================

/// Read-only view of the current frame's menu input.
pub trait InputQuery {
    /// `true` only on the frame the signal went down.
    fn is_pressed(&self, signal: InputSignal) -> bool;

    /// `true` every frame the signal is down.
    fn is_held(&self, signal: InputSignal) -> bool;
}
