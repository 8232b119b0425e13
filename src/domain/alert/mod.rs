//! Per-session alert configuration snapshots

mod notification;
mod sound;

pub use notification::NotificationConfig;
pub use sound::{RingMode, SoundConfig, Volume};
