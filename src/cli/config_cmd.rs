//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::error::ConfigError;

use super::args::{is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS};
use super::presenter::Presenter;

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value).await,
        ConfigAction::Get { key } => handle_get(store, presenter, &key).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => handle_path(store, presenter),
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init().await?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
}

async fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    // Validate key
    if !is_valid_config_key(key) {
        return Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
        });
    }

    // Validate value based on key type
    validate_config_value(key, value)?;

    // Load existing config
    let mut config = store.load().await?;

    // Update the appropriate field
    match key {
        "work_minutes" => config.work_minutes = Some(value.to_string()),
        "rest_minutes" => config.rest_minutes = Some(value.to_string()),
        "cycles" => config.cycles = Some(value.to_string()),
        "ring" => config.ring = Some(parse_bool_value(key, value)?),
        "system_beep" => config.system_beep = Some(parse_bool_value(key, value)?),
        "volume" => config.volume = Some(parse_volume(key, value)?),
        "notify" => config.notify = Some(parse_bool_value(key, value)?),
        "notify_always_on_top" => {
            config.notify_always_on_top = Some(parse_bool_value(key, value)?)
        }
        "notify_pause" => config.notify_pause = Some(parse_bool_value(key, value)?),
        _ => unreachable!(), // Already validated
    }

    // Save config
    store.save(&config).await?;
    presenter.success(&format!("{} = {}", key, value));

    Ok(())
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    // Validate key
    if !is_valid_config_key(key) {
        return Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
        });
    }

    let config = store.load().await?;

    let value = match key {
        "work_minutes" => config.work_minutes,
        "rest_minutes" => config.rest_minutes,
        "cycles" => config.cycles,
        "ring" => config.ring.map(|b| b.to_string()),
        "system_beep" => config.system_beep.map(|b| b.to_string()),
        "volume" => config.volume.map(|v| v.to_string()),
        "notify" => config.notify.map(|b| b.to_string()),
        "notify_always_on_top" => config.notify_always_on_top.map(|b| b.to_string()),
        "notify_pause" => config.notify_pause.map(|b| b.to_string()),
        _ => unreachable!(),
    };

    match value {
        Some(v) => presenter.output(&v),
        None => presenter.output("(not set)"),
    }

    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;

    presenter.key_value(
        "work_minutes",
        config.work_minutes.as_deref().unwrap_or("(not set)"),
    );
    presenter.key_value(
        "rest_minutes",
        config.rest_minutes.as_deref().unwrap_or("(not set)"),
    );
    presenter.key_value("cycles", config.cycles.as_deref().unwrap_or("(not set)"));
    presenter.key_value("ring", &display_option(config.ring));
    presenter.key_value("system_beep", &display_option(config.system_beep));
    presenter.key_value("volume", &display_option(config.volume));
    presenter.key_value("notify", &display_option(config.notify));
    presenter.key_value(
        "notify_always_on_top",
        &display_option(config.notify_always_on_top),
    );
    presenter.key_value("notify_pause", &display_option(config.notify_pause));

    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().to_string_lossy());
    Ok(())
}

/// Validate a config value based on key type
fn validate_config_value(key: &str, value: &str) -> Result<(), ConfigError> {
    match key {
        "work_minutes" | "rest_minutes" | "cycles" => {
            let parsed = value.trim().parse::<u32>();
            if !matches!(parsed, Ok(n) if n > 0) {
                return Err(ConfigError::ValidationError {
                    key: key.to_string(),
                    message: format!("\"{}\" is not a positive integer", value),
                });
            }
        }
        "ring" | "system_beep" | "notify" | "notify_always_on_top" | "notify_pause" => {
            parse_bool_value(key, value)?;
        }
        "volume" => {
            parse_volume(key, value)?;
        }
        _ => {}
    }
    Ok(())
}

fn parse_bool_value(key: &str, value: &str) -> Result<bool, ConfigError> {
    parse_bool(value).map_err(|_| ConfigError::ValidationError {
        key: key.to_string(),
        message: "Value must be 'true' or 'false'".to_string(),
    })
}

fn parse_volume(key: &str, value: &str) -> Result<f64, ConfigError> {
    let level = value
        .trim()
        .parse::<f64>()
        .map_err(|_| ConfigError::ValidationError {
            key: key.to_string(),
            message: format!("\"{}\" is not a number", value),
        })?;
    if !(0.0..=1.0).contains(&level) {
        return Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: "Volume must be between 0.0 and 1.0".to_string(),
        });
    }
    Ok(level)
}

/// Parse a boolean value
fn parse_bool(value: &str) -> Result<bool, ()> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(()),
    }
}

fn display_option<T: ToString>(value: Option<T>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| "(not set)".to_string())
}
