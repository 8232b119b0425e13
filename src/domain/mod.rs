//! Domain layer - Core business logic
//!
//! Contains value objects, entities, and domain errors.
//! This layer has no dependencies on external systems.

pub mod alert;
pub mod config;
pub mod cycle;
pub mod error;

// Re-export common types
pub use alert::{NotificationConfig, RingMode, SoundConfig, Volume};
pub use config::AppConfig;
pub use cycle::{Minutes, Phase, Session, SessionParams};
pub use error::*;
