//! Work/rest cycle use case

use std::sync::Mutex as StdMutex;

use thiserror::Error;
use tokio::sync::{watch, Mutex};

use crate::domain::alert::{NotificationConfig, SoundConfig};
use crate::domain::cycle::{InvalidPhaseTransition, Minutes, Phase, Session, SessionParams};
use crate::domain::error::InvalidInputError;

use super::ports::{NotificationPresenter, SoundCue, SoundPlayer};

/// Status shown while no session is active
pub const STATUS_WAITING: &str = "Waiting to start...";
/// Status on entering a work phase
pub const STATUS_WORKING: &str = "Work period started";
/// Status on entering a rest phase
pub const STATUS_RESTING: &str = "Rest period started";
/// Status once all cycles are completed
pub const STATUS_DONE: &str = "Done!";
/// Status after a rejected Start
pub const STATUS_INVALID_INPUT: &str = "Invalid input values!";

/// Notification body for a work phase start
pub const MSG_WORK_STARTED: &str = "Work period started";
/// Notification body for a rest phase start
pub const MSG_REST_STARTED: &str = "Rest period started";
/// Notification body when the session finishes
pub const MSG_SESSION_COMPLETED: &str = "Pomodoro session completed!";

/// Errors from the cycle use case
#[derive(Debug, Error)]
pub enum CycleError {
    #[error(transparent)]
    InvalidInput(#[from] InvalidInputError),

    #[error("A session is already running (phase: {phase})")]
    AlreadyRunning { phase: Phase },

    #[error("No active session")]
    NoActiveSession,

    #[error(transparent)]
    InvalidTransition(#[from] InvalidPhaseTransition),
}

/// Start inputs: the three raw text fields plus the per-session
/// config snapshots, read once and immutable for the session.
#[derive(Debug, Clone)]
pub struct StartInput {
    pub work_minutes: String,
    pub rest_minutes: String,
    pub cycles: String,
    pub sound: SoundConfig,
    pub notify: NotificationConfig,
}

/// How a session run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// All cycles ran to completion
    Completed,
    /// Stop was issued while the session was in flight
    Stopped,
}

/// Opaque session generation token returned by `start` and consumed
/// by `run`. A Stop invalidates it, so a late timer elapse or a late
/// notification dismissal cannot revive a stopped session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunToken(u64);

/// Callbacks for status and field updates, the frontend's view of
/// the controller.
#[derive(Default)]
#[allow(clippy::type_complexity)]
pub struct CycleCallbacks {
    /// Called with the status text on every transition and on error
    pub on_status: Option<Box<dyn Fn(&str) + Send + Sync>>,
    /// Called when a work or rest phase begins, with its duration
    pub on_phase_started: Option<Box<dyn Fn(Phase, Minutes) + Send + Sync>>,
    /// Called when Stop restores the displayed fields to defaults
    pub on_reset: Option<Box<dyn Fn(&SessionParams) + Send + Sync>>,
}

struct ActiveRun {
    session: Session,
    sound_config: SoundConfig,
    notify_config: NotificationConfig,
}

/// Work/rest cycle controller.
///
/// Owns the session state machine and dispatches the per-phase side
/// effects. Driven by `start`/`stop` from the frontend; `run` is the
/// session task and must be polled (typically spawned) after `start`.
pub struct CycleController<S, N>
where
    S: SoundPlayer,
    N: NotificationPresenter,
{
    sound: S,
    notifier: N,
    active: Mutex<Option<ActiveRun>>,
    generation: watch::Sender<u64>,
    status: StdMutex<String>,
    callbacks: CycleCallbacks,
}

impl<S, N> CycleController<S, N>
where
    S: SoundPlayer,
    N: NotificationPresenter,
{
    /// Create a new controller with no callbacks
    pub fn new(sound: S, notifier: N) -> Self {
        let (generation, _) = watch::channel(0);
        Self {
            sound,
            notifier,
            active: Mutex::new(None),
            generation,
            status: StdMutex::new(STATUS_WAITING.to_string()),
            callbacks: CycleCallbacks::default(),
        }
    }

    /// Attach frontend callbacks
    pub fn with_callbacks(mut self, callbacks: CycleCallbacks) -> Self {
        self.callbacks = callbacks;
        self
    }

    /// Current status text (the single status label)
    pub fn status(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Current phase; Idle when no session exists
    pub async fn phase(&self) -> Phase {
        self.active
            .lock()
            .await
            .as_ref()
            .map(|run| run.session.phase())
            .unwrap_or(Phase::Idle)
    }

    /// Start a session from the three raw input fields.
    ///
    /// Malformed or non-positive input is a local, non-fatal error: the
    /// invalid-input status is reported and no state changes. On success
    /// the returned token must be passed to `run` to drive the session.
    pub async fn start(&self, input: StartInput) -> Result<RunToken, CycleError> {
        let params = match SessionParams::parse(
            &input.work_minutes,
            &input.rest_minutes,
            &input.cycles,
        ) {
            Ok(params) => params,
            Err(e) => {
                self.set_status(STATUS_INVALID_INPUT);
                return Err(e.into());
            }
        };

        let mut guard = self.active.lock().await;
        if let Some(run) = guard.as_ref() {
            if run.session.phase() != Phase::Done {
                return Err(CycleError::AlreadyRunning {
                    phase: run.session.phase(),
                });
            }
        }
        *guard = Some(ActiveRun {
            session: Session::new(params),
            sound_config: input.sound,
            notify_config: input.notify,
        });

        let mut token = 0;
        self.generation.send_modify(|g| {
            *g += 1;
            token = *g;
        });
        Ok(RunToken(token))
    }

    /// Stop the session from any state: cancel the pending timer,
    /// drop the session, and restore the displayed fields to defaults.
    pub async fn stop(&self) {
        // Invalidate the generation before any await point so an
        // in-flight timer elapse or dismissal loses the select race.
        self.generation.send_modify(|g| *g += 1);
        *self.active.lock().await = None;
        self.set_status(STATUS_WAITING);
        if let Some(cb) = &self.callbacks.on_reset {
            cb(&SessionParams::defaults());
        }
    }

    /// Drive the session started under `token` until it completes or
    /// is stopped. A stale token returns `Stopped` immediately.
    pub async fn run(&self, token: RunToken) -> Result<CycleOutcome, CycleError> {
        let gen = token.0;
        let mut stop_rx = self.generation.subscribe();
        if *stop_rx.borrow() != gen {
            return Ok(CycleOutcome::Stopped);
        }

        let (sound_config, notify_config, work, rest) = {
            let guard = self.active.lock().await;
            let run = guard.as_ref().ok_or(CycleError::NoActiveSession)?;
            (
                run.sound_config,
                run.notify_config,
                run.session.work_minutes(),
                run.session.rest_minutes(),
            )
        };

        let Some(mut phase) = self.transition(gen, Session::begin_work).await? else {
            return Ok(CycleOutcome::Stopped);
        };
        loop {
            let next = match phase {
                Phase::Working => {
                    if !self
                        .enter_phase(gen, &mut stop_rx, phase, work, &sound_config, &notify_config)
                        .await
                    {
                        return Ok(CycleOutcome::Stopped);
                    }
                    self.transition(gen, Session::begin_rest).await?
                }
                Phase::Resting => {
                    if !self
                        .enter_phase(gen, &mut stop_rx, phase, rest, &sound_config, &notify_config)
                        .await
                    {
                        return Ok(CycleOutcome::Stopped);
                    }
                    self.transition(gen, Session::complete_rest).await?
                }
                Phase::Done => {
                    self.set_status(STATUS_DONE);
                    // The completion notification has no continuation to
                    // gate, so it is never acknowledgement-blocking.
                    let completion = NotificationConfig::new(
                        notify_config.is_enabled(),
                        notify_config.always_on_top(),
                        false,
                    );
                    let _ = self.notifier.show(MSG_SESSION_COMPLETED, &completion).await;
                    return Ok(CycleOutcome::Completed);
                }
                Phase::Idle => {
                    return Err(CycleError::InvalidTransition(InvalidPhaseTransition {
                        current_phase: Phase::Idle,
                        action: "run session".to_string(),
                    }))
                }
            };
            match next {
                Some(p) => phase = p,
                None => return Ok(CycleOutcome::Stopped),
            }
        }
    }

    /// Phase-entry protocol, identical for work and rest:
    /// 1. status update naming the phase,
    /// 2. fire-and-forget sound cue,
    /// 3. notification, suspending until dismissal when configured,
    /// 4. single-shot countdown timer for the phase duration.
    ///
    /// Returns false when the session was stopped while in flight.
    async fn enter_phase(
        &self,
        gen: u64,
        stop_rx: &mut watch::Receiver<u64>,
        phase: Phase,
        minutes: Minutes,
        sound: &SoundConfig,
        notify: &NotificationConfig,
    ) -> bool {
        let (status, cue, message) = match phase {
            Phase::Working => (STATUS_WORKING, SoundCue::WorkStart, MSG_WORK_STARTED),
            Phase::Resting => (STATUS_RESTING, SoundCue::RestStart, MSG_REST_STARTED),
            _ => return false,
        };

        self.set_status(status);
        if let Some(cb) = &self.callbacks.on_phase_started {
            cb(phase, minutes);
        }

        // Playback failures (missing clip, no device) are not surfaced.
        let _ = self.sound.play(cue, sound).await;

        if notify.blocks_until_acknowledged() {
            tokio::select! {
                biased;
                _ = stop_rx.wait_for(|g| *g != gen) => return false,
                res = self.notifier.show(message, notify) => { let _ = res; }
            }
            // A Stop that raced with the dismissal must still win.
            if *self.generation.borrow() != gen {
                return false;
            }
        } else {
            // Disabled: presenter no-ops. Enabled non-blocking: returns
            // once presented. Either way the timer starts immediately.
            let _ = self.notifier.show(message, notify).await;
        }

        tokio::select! {
            biased;
            _ = stop_rx.wait_for(|g| *g != gen) => false,
            _ = tokio::time::sleep(minutes.as_std()) => true,
        }
    }

    /// Apply a session transition under the lock, unless the session
    /// was stopped in the meantime (None).
    async fn transition(
        &self,
        gen: u64,
        f: fn(&mut Session) -> Result<Phase, InvalidPhaseTransition>,
    ) -> Result<Option<Phase>, CycleError> {
        let mut guard = self.active.lock().await;
        if *self.generation.borrow() != gen {
            return Ok(None);
        }
        let run = guard.as_mut().ok_or(CycleError::NoActiveSession)?;
        Ok(Some(f(&mut run.session)?))
    }

    fn set_status(&self, status: &str) {
        if let Ok(mut current) = self.status.lock() {
            *current = status.to_string();
        }
        if let Some(cb) = &self.callbacks.on_status {
            cb(status);
        }
    }
}
