//=========================================================================
// World
//=========================================================================
//
// Identity and command types shared with the host's scene graph.
//
// Components never remove themselves; they send a `WorldCommand` and the
// host applies it at its tick boundary.
//
//=========================================================================

//=== ObjectId ============================================================

/// Host-assigned identity of a world object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub u64);

//=== WorldCommand ========================================================

/// Structural change requested from the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorldCommand {
    /// Remove the object permanently.
    Despawn(ObjectId),
}

//=== Tags ================================================================

/// Tag carried by the player's body.
pub const PLAYER_TAG: &str = "Player";
