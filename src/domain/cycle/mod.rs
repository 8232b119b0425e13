//! Work/rest cycle state machine and its validated inputs

mod params;
mod phase;
mod session;

pub use params::{Minutes, SessionParams, DEFAULT_CYCLES, DEFAULT_REST_MINUTES, DEFAULT_WORK_MINUTES};
pub use phase::{InvalidPhaseTransition, Phase};
pub use session::Session;
