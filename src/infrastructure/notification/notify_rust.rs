//! Cross-platform notification adapter using notify-rust
//!
//! Works on Windows, macOS, and Linux. Acknowledgement gating (waiting
//! for the user to dismiss the notification) relies on the XDG close
//! signal and degrades to non-blocking where that is unavailable.

use async_trait::async_trait;

use crate::application::ports::{NotificationError, NotificationPresenter};
use crate::domain::alert::NotificationConfig;

/// Notification title used for every phase message
const NOTIFICATION_TITLE: &str = "Pomodoro Notification";

/// Cross-platform presenter using notify-rust
pub struct NotifyRustPresenter {
    /// Application name for notifications
    app_name: String,
}

impl NotifyRustPresenter {
    /// Create a new notify-rust presenter
    pub fn new() -> Self {
        Self {
            app_name: "Pomodoro Alarm".to_string(),
        }
    }

    /// Create with custom app name
    pub fn with_app_name(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
        }
    }
}

impl Default for NotifyRustPresenter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NotificationPresenter for NotifyRustPresenter {
    async fn show(
        &self,
        message: &str,
        config: &NotificationConfig,
    ) -> Result<(), NotificationError> {
        if !config.is_enabled() {
            return Ok(());
        }

        let app_name = self.app_name.clone();
        let message = message.to_owned();
        let always_on_top = config.always_on_top();
        let wait_for_dismissal = config.blocks_until_acknowledged();

        // notify-rust operations can block (and the acknowledgement wait
        // always does), so run in spawn_blocking
        tokio::task::spawn_blocking(move || {
            show_sync(&app_name, &message, always_on_top, wait_for_dismissal)
        })
        .await
        .map_err(|e| NotificationError::ShowFailed(format!("Task join error: {}", e)))?
    }
}

#[cfg(all(unix, not(target_os = "macos")))]
fn show_sync(
    app_name: &str,
    message: &str,
    always_on_top: bool,
    wait_for_dismissal: bool,
) -> Result<(), NotificationError> {
    let mut notification = notify_rust::Notification::new();
    notification
        .appname(app_name)
        .summary(NOTIFICATION_TITLE)
        .body(message)
        .icon("appointment-soon");

    // Critical urgency keeps the notification on screen until dismissed,
    // the closest analogue to an always-on-top alert window
    if always_on_top {
        notification.urgency(notify_rust::Urgency::Critical);
    }
    if wait_for_dismissal {
        notification.timeout(notify_rust::Timeout::Never);
    }

    let handle = notification
        .show()
        .map_err(|e| NotificationError::ShowFailed(e.to_string()))?;

    if wait_for_dismissal {
        // Returns when the server reports the notification closed
        handle.on_close(|| {});
    }

    Ok(())
}

#[cfg(not(all(unix, not(target_os = "macos"))))]
fn show_sync(
    app_name: &str,
    message: &str,
    _always_on_top: bool,
    _wait_for_dismissal: bool,
) -> Result<(), NotificationError> {
    notify_rust::Notification::new()
        .appname(app_name)
        .summary(NOTIFICATION_TITLE)
        .body(message)
        .show()
        .map_err(|e| NotificationError::ShowFailed(e.to_string()))?;

    Ok(())
}
