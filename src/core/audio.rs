//=========================================================================
// Audio
//=========================================================================
//
// One-shot sound playback seam.
//
// Components hold a `dyn AudioOutput` and never talk to the mixer
// directly. `ChannelAudio` is the stock implementation: it queues
// requests on a bounded crossbeam channel drained by the host mixer.
//
//   Component ──play_one_shot()──> ChannelAudio ──try_send──> Mixer thread
//
//=========================================================================

//=== External Dependencies ===============================================

use std::sync::Arc;

use crossbeam_channel::{Sender, TrySendError};
use log::{error, warn};
use thiserror::Error;

//=== SoundClip ===========================================================

/// Handle to a sound asset, identified by name.
///
/// Cloning is cheap; the name is shared.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SoundClip(Arc<str>);

impl SoundClip {
    pub fn new(name: &str) -> Self {
        Self(Arc::from(name))
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

//=== AudioOutput =========================================================

/// Plays fire-and-forget sounds.
pub trait AudioOutput {
    fn play_one_shot(&mut self, clip: &SoundClip);
}

//=== AudioRequest ========================================================

/// Message sent to the host mixer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioRequest {
    PlayOneShot(SoundClip),
}

//=== AudioError ==========================================================

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AudioError {
    #[error("audio queue is full, dropped `{0}`")]
    QueueFull(String),

    #[error("audio mixer disconnected, dropped `{0}`")]
    Disconnected(String),
}

//=== ChannelAudio ========================================================

/// [`AudioOutput`] that forwards requests to the mixer over a channel.
///
/// Never blocks the caller: a full queue drops the sound.
#[derive(Debug, Clone)]
pub struct ChannelAudio {
    sender: Sender<AudioRequest>,
}

impl ChannelAudio {
    pub fn new(sender: Sender<AudioRequest>) -> Self {
        Self { sender }
    }

    /// Queues a one-shot request, reporting why it was dropped.
    pub fn try_play(&self, clip: &SoundClip) -> Result<(), AudioError> {
        self.sender
            .try_send(AudioRequest::PlayOneShot(clip.clone()))
            .map_err(|e| match e {
                TrySendError::Full(_) => AudioError::QueueFull(clip.name().to_owned()),
                TrySendError::Disconnected(_) => {
                    AudioError::Disconnected(clip.name().to_owned())
                }
            })
    }
}

impl AudioOutput for ChannelAudio {
    fn play_one_shot(&mut self, clip: &SoundClip) {
        match self.try_play(clip) {
            Ok(()) => {}
            Err(e @ AudioError::QueueFull(_)) => warn!("{}", e),
            Err(e @ AudioError::Disconnected(_)) => error!("{}", e),
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
