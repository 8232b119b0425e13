//! Notification infrastructure module
//!
//! Provides cross-platform desktop notifications using notify-rust.

mod noop;
mod notify_rust;

pub use noop::NoOpPresenter;
pub use notify_rust::NotifyRustPresenter;

use crate::application::ports::NotificationPresenter;

/// Create the default notification presenter for the current platform
pub fn create_presenter() -> Box<dyn NotificationPresenter> {
    Box::new(NotifyRustPresenter::new())
}
