//! CLI argument definitions using Clap

use clap::{Parser, Subcommand};

use crate::domain::alert::{NotificationConfig, SoundConfig};

/// Pomodoro Alarm - work/rest interval timer
#[derive(Parser, Debug)]
#[command(name = "pomodoro-alarm")]
#[command(version = "0.1.0")]
#[command(about = "Work/rest interval timer with sound cues and desktop notifications")]
#[command(long_about = None)]
pub struct Cli {
    /// Work period in minutes
    #[arg(short = 'w', long, value_name = "MINUTES")]
    pub work: Option<String>,

    /// Rest period in minutes
    #[arg(short = 'r', long, value_name = "MINUTES")]
    pub rest: Option<String>,

    /// Number of work/rest cycles
    #[arg(short = 'c', long, value_name = "COUNT")]
    pub cycles: Option<String>,

    /// Play the alarm clip at phase transitions
    #[arg(long, conflicts_with = "system_beep")]
    pub ring: bool,

    /// Emit a system beep instead of the alarm clip
    #[arg(long)]
    pub system_beep: bool,

    /// Disable all transition sounds
    #[arg(long, conflicts_with_all = ["ring", "system_beep"])]
    pub silent: bool,

    /// Alarm clip volume (0.0 to 1.0)
    #[arg(short = 'v', long, value_name = "LEVEL")]
    pub volume: Option<f64>,

    /// Show desktop notifications at phase transitions
    #[arg(short = 'n', long)]
    pub notify: bool,

    /// Request urgent notifications that stay on screen until dismissed
    #[arg(long, requires = "notify")]
    pub always_on_top: bool,

    /// Hold each phase timer until its notification is dismissed
    #[arg(short = 'p', long, requires = "notify")]
    pub pause: bool,

    /// Config subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Parsed session options, resolved from defaults, file, and CLI.
/// The interval fields stay raw strings: validating them is the
/// controller's job, and a bad value must not abort before the
/// invalid-input status can be reported.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub work_minutes: String,
    pub rest_minutes: String,
    pub cycles: String,
    pub sound: SoundConfig,
    pub notify: NotificationConfig,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &[
    "work_minutes",
    "rest_minutes",
    "cycles",
    "ring",
    "system_beep",
    "volume",
    "notify",
    "notify_always_on_top",
    "notify_pause",
];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parses_defaults() {
        let cli = Cli::parse_from(["pomodoro-alarm"]);
        assert!(cli.work.is_none());
        assert!(cli.rest.is_none());
        assert!(cli.cycles.is_none());
        assert!(!cli.ring);
        assert!(!cli.system_beep);
        assert!(!cli.silent);
        assert!(cli.volume.is_none());
        assert!(!cli.notify);
        assert!(!cli.always_on_top);
        assert!(!cli.pause);
    }

    #[test]
    fn cli_parses_intervals() {
        let cli = Cli::parse_from(["pomodoro-alarm", "-w", "50", "-r", "10", "-c", "4"]);
        assert_eq!(cli.work, Some("50".to_string()));
        assert_eq!(cli.rest, Some("10".to_string()));
        assert_eq!(cli.cycles, Some("4".to_string()));
    }

    #[test]
    fn cli_keeps_intervals_as_raw_text() {
        // Malformed values must survive parsing so the controller can
        // reject them with the invalid-input status
        let cli = Cli::parse_from(["pomodoro-alarm", "--work", "abc"]);
        assert_eq!(cli.work, Some("abc".to_string()));
    }

    #[test]
    fn cli_parses_sound_flags() {
        let cli = Cli::parse_from(["pomodoro-alarm", "--ring", "-v", "0.5"]);
        assert!(cli.ring);
        assert!(!cli.system_beep);
        assert_eq!(cli.volume, Some(0.5));
    }

    #[test]
    fn cli_rejects_ring_with_system_beep() {
        let result = Cli::try_parse_from(["pomodoro-alarm", "--ring", "--system-beep"]);
        assert!(result.is_err());
    }

    #[test]
    fn cli_rejects_silent_with_ring() {
        let result = Cli::try_parse_from(["pomodoro-alarm", "--silent", "--ring"]);
        assert!(result.is_err());
    }

    #[test]
    fn cli_parses_notification_flags() {
        let cli = Cli::parse_from(["pomodoro-alarm", "-n", "--always-on-top", "-p"]);
        assert!(cli.notify);
        assert!(cli.always_on_top);
        assert!(cli.pause);
    }

    #[test]
    fn cli_rejects_pause_without_notify() {
        let result = Cli::try_parse_from(["pomodoro-alarm", "--pause"]);
        assert!(result.is_err());
    }

    #[test]
    fn cli_rejects_always_on_top_without_notify() {
        let result = Cli::try_parse_from(["pomodoro-alarm", "--always-on-top"]);
        assert!(result.is_err());
    }

    #[test]
    fn cli_parses_config_init() {
        let cli = Cli::parse_from(["pomodoro-alarm", "config", "init"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Config {
                action: ConfigAction::Init
            })
        ));
    }

    #[test]
    fn cli_parses_config_set() {
        let cli = Cli::parse_from(["pomodoro-alarm", "config", "set", "work_minutes", "50"]);
        if let Some(Commands::Config {
            action: ConfigAction::Set { key, value },
        }) = cli.command
        {
            assert_eq!(key, "work_minutes");
            assert_eq!(value, "50");
        } else {
            panic!("Expected Config Set command");
        }
    }

    #[test]
    fn valid_config_keys() {
        assert!(is_valid_config_key("work_minutes"));
        assert!(is_valid_config_key("volume"));
        assert!(is_valid_config_key("notify_pause"));
        assert!(!is_valid_config_key("invalid_key"));
    }

    #[test]
    fn verify_cli() {
        // Verify the CLI definition is valid
        Cli::command().debug_assert();
    }
}
