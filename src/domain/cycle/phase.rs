//! Cycle phase states

use std::fmt;
use thiserror::Error;

/// Segments of the work/rest cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Idle,
    Working,
    Resting,
    Done,
}

impl Phase {
    /// Get the string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Working => "working",
            Self::Resting => "resting",
            Self::Done => "done",
        }
    }

    /// Whether a phase timer may currently be in flight
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::Working | Self::Resting)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error when an invalid phase transition is attempted
#[derive(Debug, Clone, Error)]
#[error("Invalid phase transition: cannot {action} while in {current_phase} phase")]
pub struct InvalidPhaseTransition {
    pub current_phase: Phase,
    pub action: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_display() {
        assert_eq!(Phase::Idle.to_string(), "idle");
        assert_eq!(Phase::Working.to_string(), "working");
        assert_eq!(Phase::Resting.to_string(), "resting");
        assert_eq!(Phase::Done.to_string(), "done");
    }

    #[test]
    fn only_work_and_rest_are_active() {
        assert!(Phase::Working.is_active());
        assert!(Phase::Resting.is_active());
        assert!(!Phase::Idle.is_active());
        assert!(!Phase::Done.is_active());
    }

    #[test]
    fn error_display() {
        let err = InvalidPhaseTransition {
            current_phase: Phase::Working,
            action: "begin work".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("begin work"));
        assert!(msg.contains("working"));
    }
}
