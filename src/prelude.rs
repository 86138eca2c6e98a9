//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use menu_gameplay::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Math
pub use glam::Vec3;

// Collaborator seams
pub use crate::core::audio::{AudioOutput, AudioRequest, ChannelAudio, SoundClip};
pub use crate::core::frame::FrameContext;
pub use crate::core::world::{ObjectId, WorldCommand, PLAYER_TAG};

// Input
pub use crate::core::input::{
    Axis, Direction, InputQuery, InputSignal, KeyBindings, SignalEvent, SignalTracker,
};

// Cursor
pub use crate::core::cursor::{
    AxisMode, CursorConfig, CursorError, CursorState, Selectable, SelectableRef, SelectionCursor,
};

// Pickup
pub use crate::core::pickup::{
    Backpack, Contact, ContactOutcome, PickupConfig, PickupItem, PickupState, RewardCounter,
};
