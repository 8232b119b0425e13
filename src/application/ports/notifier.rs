//! Notification presenter port

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::alert::NotificationConfig;

/// Notification errors
#[derive(Debug, Clone, Error)]
pub enum NotificationError {
    #[error("Failed to show notification: {0}")]
    ShowFailed(String),
}

/// Port for phase-transition notifications.
///
/// Contract:
/// - config disabled: no-op, returns immediately.
/// - enabled, non-blocking: returns once the notification is presented;
///   it stays visible independently.
/// - enabled, acknowledgement-gated: the returned future resolves only
///   when the user dismisses the notification. The caller treats that
///   resolution as the resume signal.
#[async_trait]
pub trait NotificationPresenter: Send + Sync {
    /// Present a message according to the session's notification snapshot
    async fn show(&self, message: &str, config: &NotificationConfig)
        -> Result<(), NotificationError>;
}

/// Blanket implementation for boxed presenters
#[async_trait]
impl NotificationPresenter for Box<dyn NotificationPresenter> {
    async fn show(
        &self,
        message: &str,
        config: &NotificationConfig,
    ) -> Result<(), NotificationError> {
        self.as_ref().show(message, config).await
    }
}
