//=========================================================================
// Cursor
//=========================================================================
//
// Menu selection cursor.
//
// Architecture:
//   SelectionCursor
//     ├─ options: Vec<SelectableRef>   (shared with the scene)
//     ├─ gate: MoveGate                (cooldown state machine)
//     └─ marker: Marker                (smoothed visual position)
//
//=========================================================================

//=== Module Declarations =================================================

mod config;
mod errors;
mod gate;
mod marker;
mod selectable;
mod selection_cursor;

//=== Public API ==========================================================

pub use config::{AxisMode, CursorConfig};
pub use errors::CursorError;
pub use gate::{GateState, MoveGate};
pub use marker::Marker;
pub use selectable::{Selectable, SelectableRef};
pub use selection_cursor::{CursorState, SelectionCursor};
