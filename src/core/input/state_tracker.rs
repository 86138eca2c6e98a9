//=========================================================================
// Signal Tracker
//=========================================================================
//
// Menu signal state with per-frame delta tracking.
//
// Architecture:
//   SignalEvent → process_events() → HashSet (signals held) → query
//
// Frame lifecycle: begin_frame() → process_events() → query
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashSet;
use std::fmt;

//=== Internal Dependencies ===============================================

use super::signal::{InputSignal, SignalEvent};
use super::InputQuery;

//=== SignalTracker =======================================================

/// Tracks persistent state (signals held) and per-frame deltas (signals
/// newly pressed / released).
#[derive(Default)]
pub struct SignalTracker {
    //--- Persistent State (survives frame boundary) ----------------------
    held: HashSet<InputSignal>,

    //--- Frame Deltas (reset each frame via begin_frame()) --------------
    pressed_this_frame: HashSet<InputSignal>,
    released_this_frame: HashSet<InputSignal>,
}

impl SignalTracker {
    /// Creates a tracker with nothing held.
    pub fn new() -> Self {
        Self::default()
    }

    //--- Frame Processing -------------------------------------------------

    /// Clears frame-specific deltas (pressed/released flags).
    pub fn begin_frame(&mut self) {
        self.pressed_this_frame.clear();
        self.released_this_frame.clear();
    }

    /// Processes signal events, updating internal state.
    pub fn process_events(&mut self, events: &[SignalEvent]) {
        for event in events {
            self.process_event(*event);
        }
    }

    /// Processes a single signal event.
    pub fn process_event(&mut self, event: SignalEvent) {
        match event {
            SignalEvent::Pressed(signal) => {
                // Auto-repeat of a held signal is not a new press
                if self.held.insert(signal) {
                    self.pressed_this_frame.insert(signal);
                }
            }
            SignalEvent::Released(signal) => {
                if self.held.remove(&signal) {
                    self.released_this_frame.insert(signal);
                }
            }
        }
    }

    //--- Queries ----------------------------------------------------------

    /// Returns `true` if the signal transitioned UP → DOWN this frame.
    pub fn is_pressed(&self, signal: InputSignal) -> bool {
        self.pressed_this_frame.contains(&signal)
    }

    /// Returns `true` while the signal is held.
    pub fn is_held(&self, signal: InputSignal) -> bool {
        self.held.contains(&signal)
    }

    /// Returns `true` if the signal transitioned DOWN → UP this frame.
    pub fn is_released(&self, signal: InputSignal) -> bool {
        self.released_this_frame.contains(&signal)
    }
}

impl InputQuery for SignalTracker {
    fn is_pressed(&self, signal: InputSignal) -> bool {
        SignalTracker::is_pressed(self, signal)
    }

    fn is_held(&self, signal: InputSignal) -> bool {
        SignalTracker::is_held(self, signal)
    }
}

//=== Debug Trait =========================================================
//
// Prints held signals in priority order so log lines stay stable.
//
impl fmt::Debug for SignalTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let held: Vec<_> = InputSignal::ALL
            .iter()
            .filter(|s| self.held.contains(s))
            .collect();
        let pressed: Vec<_> = InputSignal::ALL
            .iter()
            .filter(|s| self.pressed_this_frame.contains(s))
            .collect();

        f.debug_struct("SignalTracker")
            .field("held", &held)
            .field("pressed", &pressed)
            .finish()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn press(signal: InputSignal) -> SignalEvent {
        SignalEvent::Pressed(signal)
    }

    fn release(signal: InputSignal) -> SignalEvent {
        SignalEvent::Released(signal)
    }

    #[test]
    fn press_is_edge_hold_is_level() {
        let mut tracker = SignalTracker::new();

        tracker.begin_frame();
        tracker.process_events(&[press(InputSignal::Confirm)]);
        assert!(tracker.is_pressed(InputSignal::Confirm));
        assert!(tracker.is_held(InputSignal::Confirm));

        tracker.begin_frame();
        assert!(!tracker.is_pressed(InputSignal::Confirm));
        assert!(tracker.is_held(InputSignal::Confirm));
    }

    #[test]
    fn repeated_press_is_not_new() {
        let mut tracker = SignalTracker::new();

        tracker.begin_frame();
        tracker.process_events(&[press(InputSignal::Down)]);

        tracker.begin_frame();
        tracker.process_events(&[press(InputSignal::Down)]);
        assert!(!tracker.is_pressed(InputSignal::Down));
        assert!(tracker.is_held(InputSignal::Down));
    }

    #[test]
    fn release_clears_hold() {
        let mut tracker = SignalTracker::new();

        tracker.process_events(&[press(InputSignal::Left)]);
        tracker.begin_frame();
        tracker.process_events(&[release(InputSignal::Left)]);

        assert!(!tracker.is_held(InputSignal::Left));
        assert!(tracker.is_released(InputSignal::Left));
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut tracker = SignalTracker::new();

        tracker.process_events(&[release(InputSignal::Cancel)]);
        assert!(!tracker.is_released(InputSignal::Cancel));
    }

    #[test]
    fn press_and_release_in_same_frame() {
        let mut tracker = SignalTracker::new();

        tracker.process_events(&[press(InputSignal::Confirm), release(InputSignal::Confirm)]);

        assert!(tracker.is_pressed(InputSignal::Confirm));
        assert!(!tracker.is_held(InputSignal::Confirm));
    }

    #[test]
    fn debug_lists_held_signals() {
        let mut tracker = SignalTracker::new();
        tracker.process_events(&[press(InputSignal::Up)]);

        let text = format!("{:?}", tracker);
        assert!(text.contains("Up"));
    }
}
