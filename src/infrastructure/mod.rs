//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the audio output, the desktop notification
//! service, and the config file.

pub mod config;
pub mod notification;
pub mod sound;

// Re-export adapters
pub use config::XdgConfigStore;
pub use notification::{create_presenter, NoOpPresenter, NotifyRustPresenter};
pub use sound::{create_sound_player, NoOpSoundPlayer, RodioSoundPlayer};
