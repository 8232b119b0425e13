//! Sound infrastructure adapters
//!
//! Plays the bundled alarm clips or a synthesized beep at phase
//! transitions.

mod noop;
mod rodio;

pub use noop::NoOpSoundPlayer;
pub use rodio::RodioSoundPlayer;

use crate::application::ports::SoundPlayer;
use crate::domain::alert::RingMode;

/// Create a sound player adapter for the session's ring mode
pub fn create_sound_player(mode: RingMode) -> Box<dyn SoundPlayer> {
    match mode {
        RingMode::Silent => Box::new(NoOpSoundPlayer::new()),
        _ => Box::new(RodioSoundPlayer::new()),
    }
}
