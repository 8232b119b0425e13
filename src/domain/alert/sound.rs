//! Sound configuration value objects

use std::fmt;

/// Default clip playback volume
pub const DEFAULT_VOLUME: f32 = 0.2;

/// How phase-transition sounds are rendered.
/// The clip ring and the system beep are mutually exclusive by
/// construction; `from_flags` resolves conflicting inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RingMode {
    /// No sound at transitions
    Silent,
    /// Play the bundled alarm clip at the configured volume
    #[default]
    Clip,
    /// Emit a fixed system beep, ignoring volume and resources
    SystemBeep,
}

impl RingMode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Silent => "silent",
            Self::Clip => "clip",
            Self::SystemBeep => "system-beep",
        }
    }
}

impl fmt::Display for RingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Clip playback volume, clamped to [0.0, 1.0] on construction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Volume(f32);

impl Volume {
    /// Create a volume, clamping out-of-range values
    pub fn new(level: f32) -> Self {
        Self(level.clamp(0.0, 1.0))
    }

    /// Get the level as a float in [0.0, 1.0]
    pub const fn as_f32(&self) -> f32 {
        self.0
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self(DEFAULT_VOLUME)
    }
}

/// Immutable per-session sound snapshot, read once at Start
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SoundConfig {
    mode: RingMode,
    volume: Volume,
}

impl SoundConfig {
    /// Build from the two frontend toggles. The toggles are mutually
    /// exclusive in the UI, but tolerate arbitrary combinations here:
    /// both set resolves to the beep, both clear resolves to silence.
    pub fn from_flags(use_clip_ring: bool, use_system_beep: bool, volume: Volume) -> Self {
        let mode = if use_system_beep {
            RingMode::SystemBeep
        } else if use_clip_ring {
            RingMode::Clip
        } else {
            RingMode::Silent
        };
        Self { mode, volume }
    }

    /// Clip ring at the given volume
    pub fn clip(volume: Volume) -> Self {
        Self {
            mode: RingMode::Clip,
            volume,
        }
    }

    /// System beep (volume is irrelevant)
    pub fn beep() -> Self {
        Self {
            mode: RingMode::SystemBeep,
            volume: Volume::default(),
        }
    }

    /// No sound
    pub fn silent() -> Self {
        Self {
            mode: RingMode::Silent,
            volume: Volume::default(),
        }
    }

    pub fn mode(&self) -> RingMode {
        self.mode
    }

    pub fn volume(&self) -> Volume {
        self.volume
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn volume_clamps_to_unit_range() {
        assert_eq!(Volume::new(-0.5).as_f32(), 0.0);
        assert_eq!(Volume::new(0.2).as_f32(), 0.2);
        assert_eq!(Volume::new(1.5).as_f32(), 1.0);
    }

    #[test]
    fn default_volume_matches_slider_default() {
        assert_eq!(Volume::default().as_f32(), DEFAULT_VOLUME);
    }

    #[test]
    fn from_flags_clip_only() {
        let config = SoundConfig::from_flags(true, false, Volume::new(0.7));
        assert_eq!(config.mode(), RingMode::Clip);
        assert_eq!(config.volume().as_f32(), 0.7);
    }

    #[test]
    fn from_flags_beep_only() {
        let config = SoundConfig::from_flags(false, true, Volume::default());
        assert_eq!(config.mode(), RingMode::SystemBeep);
    }

    #[test]
    fn from_flags_both_clear_is_silent() {
        let config = SoundConfig::from_flags(false, false, Volume::default());
        assert_eq!(config.mode(), RingMode::Silent);
    }

    #[test]
    fn from_flags_both_set_beep_takes_precedence() {
        let config = SoundConfig::from_flags(true, true, Volume::default());
        assert_eq!(config.mode(), RingMode::SystemBeep);
    }

    #[test]
    fn ring_mode_display() {
        assert_eq!(RingMode::Silent.to_string(), "silent");
        assert_eq!(RingMode::Clip.to_string(), "clip");
        assert_eq!(RingMode::SystemBeep.to_string(), "system-beep");
    }
}
