//=========================================================================
// Core Components
//
// Gameplay components and the seams they share with the host engine.
//
// Responsibilities:
// - Menu input vocabulary and per-frame state (`input`)
// - Selection cursor over menu targets (`cursor`)
// - One-shot collectibles (`pickup`)
// - Collaborator seams: audio output, world commands, frame context
//
// Notes:
// Everything here runs synchronously inside the host's tick or event
// callback. Collaborators are injected; nothing is looked up globally.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod audio;
pub mod cursor;
pub mod frame;
pub mod input;
pub mod math;
pub mod pickup;
pub mod world;

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use crossbeam_channel::unbounded;
    use glam::Vec3;
    use winit::event::ElementState;
    use winit::keyboard::{KeyCode, PhysicalKey};

    use super::audio::ChannelAudio;
    use super::cursor::{AxisMode, CursorConfig, Selectable, SelectableRef, SelectionCursor};
    use super::frame::FrameContext;
    use super::input::{KeyBindings, SignalTracker};

    struct Entry {
        row: f32,
        confirmed: bool,
    }

    impl Selectable for Entry {
        fn anchor(&self) -> Vec3 {
            Vec3::new(0.0, self.row, 0.0)
        }

        fn on_confirm(&mut self) {
            self.confirmed = true;
        }
    }

    #[test]
    fn keyboard_drives_cursor_end_to_end() {
        let entries: Vec<Rc<RefCell<Entry>>> = (0..3)
            .map(|i| {
                Rc::new(RefCell::new(Entry {
                    row: -(i as f32),
                    confirmed: false,
                }))
            })
            .collect();
        let targets: Vec<SelectableRef> = entries
            .iter()
            .map(|e| e.clone() as SelectableRef)
            .collect();

        let (tx, _rx) = unbounded();
        let mut cursor = SelectionCursor::new(
            CursorConfig::new(AxisMode::Vertical),
            targets,
            Box::new(ChannelAudio::new(tx)),
            Vec3::ZERO,
        );
        cursor.activate().unwrap();

        let bindings = KeyBindings::default();
        let mut input = SignalTracker::new();
        let mut frame = |keys: &[(KeyCode, ElementState)], cursor: &mut SelectionCursor| {
            input.begin_frame();
            for (key, state) in keys {
                if let Some(event) = bindings.translate(PhysicalKey::Code(*key), *state) {
                    input.process_event(event);
                }
            }
            cursor.update(&FrameContext::new(1.0 / 60.0, 0.0, 800.0, &input));
        };

        frame(&[(KeyCode::ArrowDown, ElementState::Pressed)], &mut cursor);
        frame(&[(KeyCode::ArrowDown, ElementState::Released)], &mut cursor);
        frame(&[(KeyCode::Enter, ElementState::Pressed)], &mut cursor);

        assert_eq!(cursor.selected_index(), 1);
        assert!(entries[1].borrow().confirmed);
        assert!(!entries[0].borrow().confirmed);
    }
}
