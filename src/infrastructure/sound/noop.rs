//! No-op sound adapter
//!
//! Used when transition sounds are disabled.

use async_trait::async_trait;

use crate::application::ports::{SoundCue, SoundError, SoundPlayer};
use crate::domain::alert::SoundConfig;

/// No-op sound player that does nothing
pub struct NoOpSoundPlayer;

impl NoOpSoundPlayer {
    /// Create a new no-op sound player
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoOpSoundPlayer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SoundPlayer for NoOpSoundPlayer {
    async fn play(&self, _cue: SoundCue, _config: &SoundConfig) -> Result<(), SoundError> {
        Ok(())
    }
}
