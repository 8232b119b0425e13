//! No-op notification adapter

use async_trait::async_trait;

use crate::application::ports::{NotificationError, NotificationPresenter};
use crate::domain::alert::NotificationConfig;

/// No-op presenter that shows nothing and never blocks
pub struct NoOpPresenter;

impl NoOpPresenter {
    /// Create a new no-op presenter
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoOpPresenter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NotificationPresenter for NoOpPresenter {
    async fn show(
        &self,
        _message: &str,
        _config: &NotificationConfig,
    ) -> Result<(), NotificationError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn noop_returns_ok_even_when_gated() {
        let presenter = NoOpPresenter::new();
        let config = NotificationConfig::new(true, true, true);
        assert!(presenter.show("Work period started", &config).await.is_ok());
    }
}
