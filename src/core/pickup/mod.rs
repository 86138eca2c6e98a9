//=========================================================================
// Pickup
//=========================================================================
//
// Collectibles and the reward counter they credit.
//
//=========================================================================

//=== Module Declarations =================================================

mod pickup_item;
mod reward;

//=== Public API ==========================================================

pub use pickup_item::{Contact, ContactOutcome, PickupConfig, PickupItem, PickupState};
pub use reward::{Backpack, RewardCounter};
