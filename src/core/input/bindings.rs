//=========================================================================
// Key Bindings
//=========================================================================
//
// Maps physical Winit keys to menu signals.
//
// Architecture:
//   (PhysicalKey, ElementState) → HashMap<KeyCode, InputSignal> → SignalEvent
//
// Several keys may drive the same signal; a key drives at most one.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

use log::debug;
use winit::event::ElementState;
use winit::keyboard::{KeyCode, PhysicalKey};

//=== Internal Dependencies ===============================================

use super::signal::{InputSignal, SignalEvent};

//=== KeyBindings =========================================================

/// Key → signal lookup table.
///
/// [`KeyBindings::default`] installs the usual menu layout:
///
/// | Signal  | Keys                      |
/// |---------|---------------------------|
/// | Up      | ArrowUp, W                |
/// | Down    | ArrowDown, S              |
/// | Left    | ArrowLeft, A              |
/// | Right   | ArrowRight, D             |
/// | Confirm | Enter, Space, Z           |
/// | Cancel  | Escape, Backspace, X      |
#[derive(Debug, Clone)]
pub struct KeyBindings {
    keys: HashMap<KeyCode, InputSignal>,
}

impl KeyBindings {
    /// Creates an empty table.
    pub fn empty() -> Self {
        Self {
            keys: HashMap::new(),
        }
    }

    //--- Binding API ------------------------------------------------------

    /// Binds a key to a signal, replacing any previous binding of that key.
    pub fn bind(&mut self, key: KeyCode, signal: InputSignal) {
        if let Some(old) = self.keys.insert(key, signal) {
            debug!("Rebound {:?}: {:?} -> {:?}", key, old, signal);
        }
    }

    /// Removes the binding of a key.
    pub fn unbind(&mut self, key: KeyCode) {
        self.keys.remove(&key);
    }

    /// Returns the signal bound to a key.
    pub fn signal_for(&self, key: KeyCode) -> Option<InputSignal> {
        self.keys.get(&key).copied()
    }

    //--- Event Mapping ----------------------------------------------------

    /// Translates a Winit key transition into a signal event.
    ///
    /// Unidentified physical keys and unbound keys yield `None`.
    pub fn translate(&self, key: PhysicalKey, state: ElementState) -> Option<SignalEvent> {
        let PhysicalKey::Code(code) = key else {
            return None;
        };

        let signal = self.signal_for(code)?;
        Some(match state {
            ElementState::Pressed => SignalEvent::Pressed(signal),
            ElementState::Released => SignalEvent::Released(signal),
        })
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        use InputSignal::*;

        let mut bindings = Self::empty();
        for (key, signal) in [
            (KeyCode::ArrowUp, Up),
            (KeyCode::KeyW, Up),
            (KeyCode::ArrowDown, Down),
            (KeyCode::KeyS, Down),
            (KeyCode::ArrowLeft, Left),
            (KeyCode::KeyA, Left),
            (KeyCode::ArrowRight, Right),
            (KeyCode::KeyD, Right),
            (KeyCode::Enter, Confirm),
            (KeyCode::Space, Confirm),
            (KeyCode::KeyZ, Confirm),
            (KeyCode::Escape, Cancel),
            (KeyCode::Backspace, Cancel),
            (KeyCode::KeyX, Cancel),
        ] {
            bindings.bind(key, signal);
        }
        bindings
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
