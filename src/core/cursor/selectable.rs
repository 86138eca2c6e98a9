//=========================================================================
// Selectable
//=========================================================================
//
// Capability set a menu entry exposes to the cursor.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec3;

//=== Internal Dependencies ===============================================

use crate::core::input::Direction;

//=== Selectable Trait ====================================================

/// A target the cursor can rest on.
///
/// Only [`anchor`](Selectable::anchor) is required. Callbacks default to
/// doing nothing and targets default to active.
///
/// ```
/// use menu_gameplay::prelude::*;
///
/// struct QuitButton {
///     position: Vec3,
///     quit_requested: bool,
/// }
///
/// impl Selectable for QuitButton {
///     fn anchor(&self) -> Vec3 {
///         self.position
///     }
///
///     fn on_confirm(&mut self) {
///         self.quit_requested = true;
///     }
/// }
/// ```
pub trait Selectable {
    /// Point the marker travels to while this target is selected.
    fn anchor(&self) -> Vec3;

    /// Inactive targets ignore confirm and cancel.
    fn is_active(&self) -> bool {
        true
    }

    /// Called once per cursor activation with the target's list slot.
    fn on_cursor_init(&mut self, _slot: usize) {}

    /// The cursor moved onto this target.
    fn on_cursor_arrive(&mut self) {}

    /// The cursor moved away from this target.
    fn on_cursor_leave(&mut self) {}

    fn on_confirm(&mut self) {}

    fn on_cancel(&mut self) {}

    /// Raw direction held while this target is selected, whether or not
    /// the cursor moved.
    fn on_directional_input(&mut self, _direction: Direction) {}
}

/// Shared, non-owning handle to a target. The scene owns the target.
pub type SelectableRef = Rc<RefCell<dyn Selectable>>;
