//! Pomodoro Alarm CLI entry point

use std::process::ExitCode;

use clap::Parser;

use pomodoro_alarm::cli::{
    app::{load_merged_config, run_session, EXIT_ERROR},
    args::{Cli, Commands},
    config_cmd::handle_config_command,
    presenter::Presenter,
    SessionOptions,
};
use pomodoro_alarm::domain::config::AppConfig;
use pomodoro_alarm::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let presenter = Presenter::new();

    // Handle subcommands
    if let Some(Commands::Config { action }) = cli.command {
        let store = XdgConfigStore::new();
        if let Err(e) = handle_config_command(action, &store, &presenter).await {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
        return ExitCode::SUCCESS;
    }

    // Build CLI config from args. The sound flags are tri-state: each
    // one both selects its own mode and deselects the other, and
    // --silent deselects both, so a flag can override the config file.
    let (ring, system_beep) = if cli.silent {
        (Some(false), Some(false))
    } else if cli.system_beep {
        (Some(false), Some(true))
    } else if cli.ring {
        (Some(true), Some(false))
    } else {
        (None, None)
    };

    let cli_config = AppConfig {
        work_minutes: cli.work.clone(),
        rest_minutes: cli.rest.clone(),
        cycles: cli.cycles.clone(),
        ring,
        system_beep,
        volume: cli.volume,
        notify: if cli.notify { Some(true) } else { None },
        notify_always_on_top: if cli.always_on_top { Some(true) } else { None },
        notify_pause: if cli.pause { Some(true) } else { None },
    };

    // Merge config
    let config = load_merged_config(cli_config).await;

    let options = SessionOptions {
        work_minutes: config.work_minutes_or_default(),
        rest_minutes: config.rest_minutes_or_default(),
        cycles: config.cycles_or_default(),
        sound: config.sound_config(),
        notify: config.notification_config(),
    };

    run_session(options).await
}
