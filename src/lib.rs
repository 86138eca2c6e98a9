//=========================================================================
// Menu Gameplay — Library Root
//
// Gameplay components for a host game loop: a menu selection cursor and
// a collectible pickup.
//
// Responsibilities:
// - Expose the components and their collaborator seams (`core`)
// - Provide a prelude with the commonly used types
//
// Typical usage:
// ```no_run
// use menu_gameplay::prelude::*;
//
// let (tx, rx) = crossbeam_channel::unbounded();   // rx → host mixer
// let mut cursor = SelectionCursor::new(
//     CursorConfig::new(AxisMode::Vertical),
//     menu_entries,                                  // Vec<SelectableRef>
//     Box::new(ChannelAudio::new(tx)),
//     Vec3::ZERO,
// );
// cursor.activate().ok();
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds the components, input handling and host seams.
//
pub mod core;

//--- Convenience ---------------------------------------------------------
//
// `prelude` re-exports what a host typically needs in one import.
//
pub mod prelude;
