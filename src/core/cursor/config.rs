//=========================================================================
// Cursor Configuration
//=========================================================================
//
// Static per-instance settings authored by level design.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::audio::SoundClip;
use crate::core::input::{Axis, Direction};

//=== AxisMode ============================================================

/// Which directional pair moves the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisMode {
    Vertical,
    Horizontal,
}

impl AxisMode {
    pub fn axis(self) -> Axis {
        match self {
            AxisMode::Vertical => Axis::Vertical,
            AxisMode::Horizontal => Axis::Horizontal,
        }
    }

    /// Returns `true` if `direction` navigates along this mode's axis.
    pub fn accepts(self, direction: Direction) -> bool {
        direction.axis() == self.axis()
    }
}

//=== CursorConfig ========================================================

/// Settings for a [`super::SelectionCursor`].
///
/// # Default Values
///
/// - **move_cooldown**: 0.0 (no cooldown)
/// - **movement_time**: 0.1 seconds
/// - **single_use / keep_selected_index**: off
/// - **start_animation / idle_animation**: off
/// - **sounds**: `cursor_move`, `cursor_confirm`, `cursor_cancel`
///
/// ```
/// use menu_gameplay::prelude::*;
///
/// let config = CursorConfig::new(AxisMode::Vertical)
///     .with_move_cooldown(0.15)
///     .with_idle_animation(true)
///     .single_use(true);
/// ```
#[derive(Debug, Clone)]
pub struct CursorConfig {
    pub(super) mode: AxisMode,
    pub(super) single_use: bool,
    pub(super) keep_selected_index: bool,
    pub(super) move_cooldown: f32,
    pub(super) movement_time: f32,
    pub(super) start_animation: bool,
    pub(super) idle_animation: bool,
    pub(super) move_sound: SoundClip,
    pub(super) confirm_sound: SoundClip,
    pub(super) cancel_sound: SoundClip,
}

impl CursorConfig {
    pub fn new(mode: AxisMode) -> Self {
        Self {
            mode,
            single_use: false,
            keep_selected_index: false,
            move_cooldown: 0.0,
            movement_time: 0.1,
            start_animation: false,
            idle_animation: false,
            move_sound: SoundClip::new("cursor_move"),
            confirm_sound: SoundClip::new("cursor_confirm"),
            cancel_sound: SoundClip::new("cursor_cancel"),
        }
    }

    /// Stops handling input after the first confirm or cancel.
    pub fn single_use(mut self, enabled: bool) -> Self {
        self.single_use = enabled;
        self
    }

    /// Keeps the selected index across activations instead of resetting to 0.
    pub fn keep_selected_index(mut self, enabled: bool) -> Self {
        self.keep_selected_index = enabled;
        self
    }

    /// Sets the minimum time between accepted actions.
    ///
    /// # Panics
    ///
    /// Panics if `seconds` is negative.
    pub fn with_move_cooldown(mut self, seconds: f32) -> Self {
        assert!(seconds >= 0.0, "Move cooldown must not be negative, got {}", seconds);
        self.move_cooldown = seconds;
        self
    }

    /// Sets the marker smoothing time.
    ///
    /// # Panics
    ///
    /// Panics if `seconds <= 0.0`.
    pub fn with_movement_time(mut self, seconds: f32) -> Self {
        assert!(seconds > 0.0, "Movement time must be positive, got {}", seconds);
        self.movement_time = seconds;
        self
    }

    pub fn with_start_animation(mut self, enabled: bool) -> Self {
        self.start_animation = enabled;
        self
    }

    pub fn with_idle_animation(mut self, enabled: bool) -> Self {
        self.idle_animation = enabled;
        self
    }

    pub fn with_sounds(mut self, movement: SoundClip, confirm: SoundClip, cancel: SoundClip) -> Self {
        self.move_sound = movement;
        self.confirm_sound = confirm;
        self.cancel_sound = cancel;
        self
    }

    pub fn mode(&self) -> AxisMode {
        self.mode
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
