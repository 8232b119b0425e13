//! Main app runner for a timer session

use std::process::ExitCode;
use std::sync::{Arc, Mutex as StdMutex};

use crate::application::cycle::{STATUS_DONE, STATUS_RESTING, STATUS_WAITING, STATUS_WORKING};
use crate::application::ports::ConfigStore;
use crate::application::{
    CycleCallbacks, CycleController, CycleError, CycleOutcome, StartInput,
};
use crate::domain::config::AppConfig;
use crate::domain::cycle::Phase;
use crate::infrastructure::{create_presenter, create_sound_player, XdgConfigStore};

use super::args::SessionOptions;
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Run a timer session until it completes or Ctrl-C stops it
pub async fn run_session(options: SessionOptions) -> ExitCode {
    let presenter = Arc::new(StdMutex::new(Presenter::new()));

    // Create adapters
    let sound = create_sound_player(options.sound.mode());
    let notifier = create_presenter();

    let controller = Arc::new(
        CycleController::new(sound, notifier)
            .with_callbacks(session_callbacks(Arc::clone(&presenter))),
    );

    let input = StartInput {
        work_minutes: options.work_minutes,
        rest_minutes: options.rest_minutes,
        cycles: options.cycles,
        sound: options.sound,
        notify: options.notify,
    };

    let token = match controller.start(input).await {
        Ok(token) => token,
        Err(e @ CycleError::InvalidInput(_)) => {
            report_error(&presenter, &e.to_string());
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
        Err(e) => {
            report_error(&presenter, &e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    };

    // Ctrl-C is the Stop control: cancel the running phase, reset the
    // fields, and let the session task wind down.
    let stopper = Arc::clone(&controller);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            stopper.stop().await;
        }
    });

    match controller.run(token).await {
        Ok(CycleOutcome::Completed) => ExitCode::from(EXIT_SUCCESS),
        Ok(CycleOutcome::Stopped) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => {
            report_error(&presenter, &e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Load and merge configuration from file and CLI
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = store.load().await.unwrap_or_else(|_| AppConfig::empty());

    // Merge: defaults < file < cli
    AppConfig::defaults().merge(file_config).merge(cli_config)
}

/// Wire the controller's status and field updates to the terminal
fn session_callbacks(presenter: Arc<StdMutex<Presenter>>) -> CycleCallbacks {
    let status_presenter = Arc::clone(&presenter);
    let phase_presenter = Arc::clone(&presenter);
    let reset_presenter = presenter;

    CycleCallbacks {
        on_status: Some(Box::new(move |status| {
            let Ok(mut p) = status_presenter.lock() else {
                return;
            };
            match status {
                STATUS_DONE => p.spinner_success(STATUS_DONE),
                STATUS_WAITING => {
                    p.stop_spinner();
                    p.status(STATUS_WAITING);
                }
                // Phase statuses are carried by the spinner; errors are
                // reported at the call site.
                _ => {}
            }
        })),
        on_phase_started: Some(Box::new(move |phase, minutes| {
            let Ok(mut p) = phase_presenter.lock() else {
                return;
            };
            let status = match phase {
                Phase::Working => STATUS_WORKING,
                Phase::Resting => STATUS_RESTING,
                _ => return,
            };
            p.start_spinner(&format!("{} ({})", status, minutes));
        })),
        on_reset: Some(Box::new(move |params| {
            let Ok(p) = reset_presenter.lock() else {
                return;
            };
            p.info(&format!(
                "Fields reset to defaults: work={}, rest={}, cycles={}",
                params.work, params.rest, params.cycles
            ));
        })),
    }
}

fn report_error(presenter: &Arc<StdMutex<Presenter>>, message: &str) {
    if let Ok(mut p) = presenter.lock() {
        p.stop_spinner();
        p.error(message);
    }
}
