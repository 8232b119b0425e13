//! Application configuration value object

use serde::{Deserialize, Serialize};

use crate::domain::alert::{SoundConfig, Volume, NotificationConfig};
use crate::domain::cycle::{DEFAULT_CYCLES, DEFAULT_REST_MINUTES, DEFAULT_WORK_MINUTES};

/// Application configuration.
/// All fields are optional to support partial configs and merging.
/// The interval fields stay raw strings so invalid values surface
/// through the same input validation path as direct CLI input.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub work_minutes: Option<String>,
    pub rest_minutes: Option<String>,
    pub cycles: Option<String>,
    pub ring: Option<bool>,
    pub system_beep: Option<bool>,
    pub volume: Option<f64>,
    pub notify: Option<bool>,
    pub notify_always_on_top: Option<bool>,
    pub notify_pause: Option<bool>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            work_minutes: Some(DEFAULT_WORK_MINUTES.to_string()),
            rest_minutes: Some(DEFAULT_REST_MINUTES.to_string()),
            cycles: Some(DEFAULT_CYCLES.to_string()),
            ring: Some(true),
            system_beep: Some(false),
            volume: Some(0.2),
            notify: Some(false),
            notify_always_on_top: Some(false),
            notify_pause: Some(false),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            work_minutes: other.work_minutes.or(self.work_minutes),
            rest_minutes: other.rest_minutes.or(self.rest_minutes),
            cycles: other.cycles.or(self.cycles),
            ring: other.ring.or(self.ring),
            system_beep: other.system_beep.or(self.system_beep),
            volume: other.volume.or(self.volume),
            notify: other.notify.or(self.notify),
            notify_always_on_top: other.notify_always_on_top.or(self.notify_always_on_top),
            notify_pause: other.notify_pause.or(self.notify_pause),
        }
    }

    /// Raw work interval field, or the "25" default
    pub fn work_minutes_or_default(&self) -> String {
        self.work_minutes
            .clone()
            .unwrap_or_else(|| DEFAULT_WORK_MINUTES.to_string())
    }

    /// Raw rest interval field, or the "5" default
    pub fn rest_minutes_or_default(&self) -> String {
        self.rest_minutes
            .clone()
            .unwrap_or_else(|| DEFAULT_REST_MINUTES.to_string())
    }

    /// Raw cycle count field, or the "8" default
    pub fn cycles_or_default(&self) -> String {
        self.cycles
            .clone()
            .unwrap_or_else(|| DEFAULT_CYCLES.to_string())
    }

    /// Get the clip ring setting, on by default
    pub fn ring_or_default(&self) -> bool {
        self.ring.unwrap_or(true)
    }

    /// Get the system beep setting, or false if not set
    pub fn system_beep_or_default(&self) -> bool {
        self.system_beep.unwrap_or(false)
    }

    /// Get the clip volume, or the 0.2 default
    pub fn volume_or_default(&self) -> f64 {
        self.volume.unwrap_or(0.2)
    }

    /// Get the notify setting, or false if not set
    pub fn notify_or_default(&self) -> bool {
        self.notify.unwrap_or(false)
    }

    /// Get the always-on-top setting, or false if not set
    pub fn notify_always_on_top_or_default(&self) -> bool {
        self.notify_always_on_top.unwrap_or(false)
    }

    /// Get the pause-for-acknowledgement setting, or false if not set
    pub fn notify_pause_or_default(&self) -> bool {
        self.notify_pause.unwrap_or(false)
    }

    /// Resolve the per-session sound snapshot.
    /// A hand-edited file with both toggles set resolves to the beep.
    pub fn sound_config(&self) -> SoundConfig {
        SoundConfig::from_flags(
            self.ring_or_default(),
            self.system_beep_or_default(),
            Volume::new(self.volume_or_default() as f32),
        )
    }

    /// Resolve the per-session notification snapshot
    pub fn notification_config(&self) -> NotificationConfig {
        NotificationConfig::new(
            self.notify_or_default(),
            self.notify_always_on_top_or_default(),
            self.notify_pause_or_default(),
        )
    }
}
