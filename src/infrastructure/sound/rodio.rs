//! Rodio-based sound adapter
//!
//! Plays the bundled alarm clips from the application data directory,
//! or synthesizes a beep tone when the system beep is selected.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use rodio::source::{SineWave, Source};
use rodio::{Decoder, OutputStream, Sink};

use crate::application::ports::{SoundCue, SoundError, SoundPlayer};
use crate::domain::alert::{RingMode, SoundConfig};

/// Sound player implementation using rodio.
///
/// Playback is detached onto a blocking task, so `play` returns as soon
/// as the cue has been dispatched. A clip that cannot be resolved under
/// the sounds directory is silently skipped.
pub struct RodioSoundPlayer {
    sounds_dir: PathBuf,
}

impl RodioSoundPlayer {
    /// Create a player resolving clips under the default data directory
    pub fn new() -> Self {
        let sounds_dir = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("pomodoro-alarm")
            .join("sounds");
        Self { sounds_dir }
    }

    /// Create with a custom sounds directory
    pub fn with_sounds_dir(path: impl Into<PathBuf>) -> Self {
        Self {
            sounds_dir: path.into(),
        }
    }
}

impl Default for RodioSoundPlayer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SoundPlayer for RodioSoundPlayer {
    async fn play(&self, cue: SoundCue, config: &SoundConfig) -> Result<(), SoundError> {
        match config.mode() {
            RingMode::Silent => Ok(()),
            RingMode::SystemBeep => {
                // Fixed beep, ignoring volume and clip resources
                tokio::task::spawn_blocking(|| {
                    let _ = play_beep_sync();
                });
                Ok(())
            }
            RingMode::Clip => {
                let path = self.sounds_dir.join(cue.file_name());
                if !path.exists() {
                    // Missing resource: no sound, no error surfaced
                    return Ok(());
                }
                let volume = config.volume().as_f32();
                tokio::task::spawn_blocking(move || {
                    let _ = play_clip_sync(&path, volume);
                });
                Ok(())
            }
        }
    }
}

/// Play a clip synchronously (called from spawn_blocking)
fn play_clip_sync(path: &Path, volume: f32) -> Result<(), SoundError> {
    let (_stream, stream_handle) = OutputStream::try_default()
        .map_err(|e| SoundError::DeviceNotAvailable(e.to_string()))?;
    let sink =
        Sink::try_new(&stream_handle).map_err(|e| SoundError::PlaybackFailed(e.to_string()))?;

    let file = File::open(path).map_err(|e| SoundError::PlaybackFailed(e.to_string()))?;
    let source =
        Decoder::new(BufReader::new(file)).map_err(|e| SoundError::PlaybackFailed(e.to_string()))?;

    sink.set_volume(volume);
    sink.append(source);
    sink.sleep_until_end();

    Ok(())
}

/// Play a short beep tone synchronously (called from spawn_blocking)
fn play_beep_sync() -> Result<(), SoundError> {
    let (_stream, stream_handle) = OutputStream::try_default()
        .map_err(|e| SoundError::DeviceNotAvailable(e.to_string()))?;
    let sink =
        Sink::try_new(&stream_handle).map_err(|e| SoundError::PlaybackFailed(e.to_string()))?;

    // 880Hz blip with a short fade so it does not click
    let tone = SineWave::new(880.0)
        .take_duration(Duration::from_millis(150))
        .fade_in(Duration::from_millis(20))
        .amplify(0.3);
    sink.append(tone);
    sink.sleep_until_end();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::alert::Volume;

    #[tokio::test]
    async fn missing_clip_is_silently_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let player = RodioSoundPlayer::with_sounds_dir(dir.path());
        let config = SoundConfig::clip(Volume::new(0.5));

        // No clip files exist in the temp dir; play must still succeed
        assert!(player.play(SoundCue::WorkStart, &config).await.is_ok());
        assert!(player.play(SoundCue::RestStart, &config).await.is_ok());
    }

    #[tokio::test]
    async fn silent_mode_plays_nothing() {
        let player = RodioSoundPlayer::new();
        let config = SoundConfig::silent();
        assert!(player.play(SoundCue::WorkStart, &config).await.is_ok());
    }

    // Requires audio hardware and may not work in CI

    #[tokio::test]
    #[ignore = "Requires audio hardware"]
    async fn can_play_system_beep() {
        let player = RodioSoundPlayer::new();
        let config = SoundConfig::beep();
        let result = player.play(SoundCue::WorkStart, &config).await;
        assert!(result.is_ok());
    }
}
