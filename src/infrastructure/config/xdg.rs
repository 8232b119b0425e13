//! XDG config store adapter

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use crate::application::ports::ConfigStore;
use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;

/// XDG-compliant config store
pub struct XdgConfigStore {
    path: PathBuf,
}

impl XdgConfigStore {
    /// Create a new XDG config store with default path
    pub fn new() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("~/.config"))
            .join("pomodoro-alarm");

        Self {
            path: config_dir.join("config.toml"),
        }
    }

    /// Create with custom path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Parse TOML content into AppConfig
    fn parse_toml(content: &str) -> Result<AppConfig, ConfigError> {
        let config: AppConfig =
            toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;

        Ok(config)
    }

    /// Serialize AppConfig to TOML
    fn to_toml(config: &AppConfig) -> Result<String, ConfigError> {
        toml::to_string_pretty(config).map_err(|e| ConfigError::WriteError(e.to_string()))
    }
}

impl Default for XdgConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConfigStore for XdgConfigStore {
    async fn load(&self) -> Result<AppConfig, ConfigError> {
        if !self.exists() {
            // Return empty config if file doesn't exist
            return Ok(AppConfig::empty());
        }

        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|e| ConfigError::ReadError(e.to_string()))?;

        Self::parse_toml(&content)
    }

    async fn save(&self, config: &AppConfig) -> Result<(), ConfigError> {
        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| ConfigError::WriteError(e.to_string()))?;
        }

        let content = Self::to_toml(config)?;
        fs::write(&self.path, content)
            .await
            .map_err(|e| ConfigError::WriteError(e.to_string()))?;

        Ok(())
    }

    fn path(&self) -> PathBuf {
        self.path.clone()
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }

    async fn init(&self) -> Result<(), ConfigError> {
        if self.exists() {
            return Err(ConfigError::AlreadyExists(
                self.path.display().to_string(),
            ));
        }

        self.save(&AppConfig::defaults()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (tempfile::TempDir, XdgConfigStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = XdgConfigStore::with_path(dir.path().join("config.toml"));
        (dir, store)
    }

    #[tokio::test]
    async fn load_missing_file_returns_empty() {
        let (_dir, store) = temp_store();
        let config = store.load().await.unwrap();
        assert!(config.work_minutes.is_none());
        assert!(config.notify.is_none());
    }

    #[tokio::test]
    async fn save_and_load_round_trip() {
        let (_dir, store) = temp_store();

        let config = AppConfig {
            work_minutes: Some("50".to_string()),
            volume: Some(0.7),
            notify: Some(true),
            ..Default::default()
        };
        store.save(&config).await.unwrap();

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded.work_minutes, Some("50".to_string()));
        assert_eq!(loaded.volume, Some(0.7));
        assert_eq!(loaded.notify, Some(true));
        assert!(loaded.cycles.is_none());
    }

    #[tokio::test]
    async fn init_writes_defaults() {
        let (_dir, store) = temp_store();
        store.init().await.unwrap();

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded.work_minutes, Some("25".to_string()));
        assert_eq!(loaded.rest_minutes, Some("5".to_string()));
        assert_eq!(loaded.cycles, Some("8".to_string()));
        assert_eq!(loaded.ring, Some(true));
    }

    #[tokio::test]
    async fn init_fails_when_file_exists() {
        let (_dir, store) = temp_store();
        store.init().await.unwrap();

        let err = store.init().await.unwrap_err();
        assert!(matches!(err, ConfigError::AlreadyExists(_)));
    }

    #[tokio::test]
    async fn invalid_toml_is_a_parse_error() {
        let (_dir, store) = temp_store();
        tokio::fs::write(store.path(), "work_minutes = [not toml")
            .await
            .unwrap();

        let err = store.load().await.unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }
}
