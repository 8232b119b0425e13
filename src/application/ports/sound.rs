//! Sound player port for phase-transition cues

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::alert::SoundConfig;

/// The two bundled alarm cues, one per phase start
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// Played when a work phase begins
    WorkStart,
    /// Played when a rest phase begins
    RestStart,
}

impl SoundCue {
    /// Fixed logical file name of the bundled clip for this cue
    pub const fn file_name(&self) -> &'static str {
        match self {
            Self::WorkStart => "alarm-work.mp3",
            Self::RestStart => "alarm-rest.mp3",
        }
    }
}

/// Errors that can occur during cue playback
#[derive(Debug, Clone, Error)]
pub enum SoundError {
    /// No audio output device available
    #[error("Audio device not available: {0}")]
    DeviceNotAvailable(String),

    /// Failed to start playback
    #[error("Playback failed: {0}")]
    PlaybackFailed(String),
}

/// Port for phase-transition sound playback.
///
/// `play` is fire-and-forget: it returns once playback has been started
/// (or skipped), never once it has finished. A missing clip resource is
/// not an error; the cue is silently dropped.
#[async_trait]
pub trait SoundPlayer: Send + Sync {
    /// Play a cue according to the session's sound snapshot
    async fn play(&self, cue: SoundCue, config: &SoundConfig) -> Result<(), SoundError>;
}

/// Blanket implementation for boxed sound players
#[async_trait]
impl SoundPlayer for Box<dyn SoundPlayer> {
    async fn play(&self, cue: SoundCue, config: &SoundConfig) -> Result<(), SoundError> {
        self.as_ref().play(cue, config).await
    }
}
