//=========================================================================
// Pickup Item
//=========================================================================
//
// One-shot collectible. Rewards the player on first contact, then asks
// the host to remove it.
//
//   Available ──player contact──> Collected (terminal)
//       │
//       └── any other contact: no effect
//
//=========================================================================

//=== External Dependencies ===============================================

use std::cell::RefCell;
use std::rc::Rc;

use crossbeam_channel::Sender;
use glam::{Quat, Vec3};
use log::{debug, error, info};

//=== Internal Dependencies ===============================================

use super::reward::RewardCounter;
use crate::core::audio::{AudioOutput, SoundClip};
use crate::core::frame::FrameContext;
use crate::core::world::{ObjectId, WorldCommand, PLAYER_TAG};

//=== PickupConfig ========================================================

/// Static pickup settings.
///
/// # Default Values
///
/// - **collect_sound**: `pickup_collect`
/// - **spin_speed**: 90 degrees per second
/// - **spin_axis**: [`Vec3::Y`]
#[derive(Debug, Clone)]
pub struct PickupConfig {
    value: i32,
    collect_sound: SoundClip,
    spin_speed: f32,
    spin_axis: Vec3,
}

impl PickupConfig {
    pub fn new(value: i32) -> Self {
        Self {
            value,
            collect_sound: SoundClip::new("pickup_collect"),
            spin_speed: 90.0,
            spin_axis: Vec3::Y,
        }
    }

    pub fn with_collect_sound(mut self, clip: SoundClip) -> Self {
        self.collect_sound = clip;
        self
    }

    /// Sets the art spin rate in degrees per second.
    pub fn with_spin_speed(mut self, degrees_per_second: f32) -> Self {
        self.spin_speed = degrees_per_second;
        self
    }

    /// Sets the spin axis. The axis is stored normalized.
    ///
    /// # Panics
    ///
    /// Panics if `axis` has zero length.
    pub fn with_spin_axis(mut self, axis: Vec3) -> Self {
        assert!(axis.length_squared() > 0.0, "Spin axis must not be zero");
        self.spin_axis = axis.normalize();
        self
    }

    pub fn value(&self) -> i32 {
        self.value
    }
}

//=== Contact =============================================================

/// A body entering the pickup's trigger volume.
pub struct Contact<'a> {
    pub tag: &'a str,

    /// The body's audio output, if it has one.
    pub audio: Option<&'a mut dyn AudioOutput>,
}

impl<'a> Contact<'a> {
    /// Contact by the player, whose audio output plays the collect sound.
    pub fn player(audio: &'a mut dyn AudioOutput) -> Self {
        Self {
            tag: PLAYER_TAG,
            audio: Some(audio),
        }
    }

    /// Contact by any other tagged body.
    pub fn tagged(tag: &'a str) -> Self {
        Self { tag, audio: None }
    }

    pub fn is_player(&self) -> bool {
        self.tag == PLAYER_TAG
    }
}

//=== ContactOutcome ======================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactOutcome {
    Collected { value: i32 },
    Ignored,
}

//=== PickupState =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickupState {
    Available,
    Collected,
}

//=== PickupItem ==========================================================

/// Collectible that adds its value to a [`RewardCounter`].
pub struct PickupItem {
    id: ObjectId,
    config: PickupConfig,
    reward: Rc<RefCell<dyn RewardCounter>>,
    commands: Sender<WorldCommand>,
    state: PickupState,
    art_rotation: Quat,
}

impl PickupItem {
    //--- Construction -----------------------------------------------------

    /// Creates an available pickup.
    ///
    /// `reward` is the counter credited on collection; `commands` reaches
    /// the host that owns object `id`.
    pub fn new(
        id: ObjectId,
        config: PickupConfig,
        reward: Rc<RefCell<dyn RewardCounter>>,
        commands: Sender<WorldCommand>,
    ) -> Self {
        Self {
            id,
            config,
            reward,
            commands,
            state: PickupState::Available,
            art_rotation: Quat::IDENTITY,
        }
    }

    //--- Events -----------------------------------------------------------

    /// Handles a body entering the trigger volume.
    pub fn on_contact(&mut self, contact: Contact<'_>) -> ContactOutcome {
        if self.state == PickupState::Collected || !contact.is_player() {
            return ContactOutcome::Ignored;
        }

        let value = self.config.value;
        self.reward.borrow_mut().add(value);

        match contact.audio {
            Some(audio) => audio.play_one_shot(&self.config.collect_sound),
            None => debug!("Player contact without audio output, collect sound skipped"),
        }

        self.state = PickupState::Collected;
        if let Err(e) = self.commands.try_send(WorldCommand::Despawn(self.id)) {
            error!("Failed to request removal of {:?}: {}", self.id, e);
        }

        info!("Pickup {:?} collected (+{})", self.id, value);
        ContactOutcome::Collected { value }
    }

    //--- Update Loop ------------------------------------------------------

    /// Spins the art. Cosmetic only.
    pub fn update(&mut self, ctx: &FrameContext<'_>) {
        if self.state == PickupState::Collected {
            return;
        }
        let step = Quat::from_axis_angle(
            self.config.spin_axis,
            (self.config.spin_speed * ctx.delta).to_radians(),
        );
        // Renormalize so drift does not build up over long sessions
        self.art_rotation = (self.art_rotation * step).normalize();
    }

    //--- Queries ----------------------------------------------------------

    pub fn id(&self) -> ObjectId {
        self.id
    }

    pub fn state(&self) -> PickupState {
        self.state
    }

    pub fn value(&self) -> i32 {
        self.config.value
    }

    /// Local rotation of the art, accumulated around
    /// [`spin_axis`](Self::spin_axis).
    pub fn art_rotation(&self) -> Quat {
        self.art_rotation
    }

    pub fn spin_axis(&self) -> Vec3 {
        self.config.spin_axis
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
