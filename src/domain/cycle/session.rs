//! Cycle session entity

use crate::domain::cycle::params::{Minutes, SessionParams};
use crate::domain::cycle::phase::{InvalidPhaseTransition, Phase};

/// Cycle session entity.
/// Owns the work/rest configuration and the phase state machine.
///
/// State machine:
///   IDLE    -> WORKING          (begin_work, cycles remaining)
///   IDLE    -> DONE             (begin_work, no cycles remaining)
///   WORKING -> RESTING          (begin_rest)
///   RESTING -> WORKING | DONE   (complete_rest: decrement, then begin_work)
///
/// DONE is terminal; the controller replaces the session on the next Start.
#[derive(Debug, Clone)]
pub struct Session {
    work: Minutes,
    rest: Minutes,
    cycles_remaining: u32,
    phase: Phase,
}

impl Session {
    /// Create a new session in the idle phase
    pub fn new(params: SessionParams) -> Self {
        Self {
            work: params.work,
            rest: params.rest,
            cycles_remaining: params.cycles,
            phase: Phase::Idle,
        }
    }

    /// Get the current phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Work interval duration
    pub fn work_minutes(&self) -> Minutes {
        self.work
    }

    /// Rest interval duration
    pub fn rest_minutes(&self) -> Minutes {
        self.rest
    }

    /// Cycles not yet completed
    pub fn cycles_remaining(&self) -> u32 {
        self.cycles_remaining
    }

    /// Begin a work phase, from IDLE or RESTING.
    /// The session is DONE exactly when a work phase begins with no
    /// cycles remaining.
    pub fn begin_work(&mut self) -> Result<Phase, InvalidPhaseTransition> {
        if !matches!(self.phase, Phase::Idle | Phase::Resting) {
            return Err(InvalidPhaseTransition {
                current_phase: self.phase,
                action: "begin work".to_string(),
            });
        }
        self.phase = if self.cycles_remaining == 0 {
            Phase::Done
        } else {
            Phase::Working
        };
        Ok(self.phase)
    }

    /// Transition from WORKING to RESTING when the work timer elapses.
    /// Does not touch the cycle count.
    pub fn begin_rest(&mut self) -> Result<Phase, InvalidPhaseTransition> {
        if self.phase != Phase::Working {
            return Err(InvalidPhaseTransition {
                current_phase: self.phase,
                action: "begin rest".to_string(),
            });
        }
        self.phase = Phase::Resting;
        Ok(self.phase)
    }

    /// Complete a rest phase: decrement the cycle count exactly once,
    /// then begin the next work phase (or DONE when none remain).
    pub fn complete_rest(&mut self) -> Result<Phase, InvalidPhaseTransition> {
        if self.phase != Phase::Resting {
            return Err(InvalidPhaseTransition {
                current_phase: self.phase,
                action: "complete rest".to_string(),
            });
        }
        self.cycles_remaining = self.cycles_remaining.saturating_sub(1);
        self.begin_work()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(work: u32, rest: u32, cycles: u32) -> Session {
        Session::new(
            SessionParams::parse(&work.to_string(), &rest.to_string(), &cycles.to_string())
                .unwrap(),
        )
    }

    #[test]
    fn new_session_is_idle() {
        let s = session(25, 5, 8);
        assert_eq!(s.phase(), Phase::Idle);
        assert_eq!(s.cycles_remaining(), 8);
        assert_eq!(s.work_minutes().get(), 25);
        assert_eq!(s.rest_minutes().get(), 5);
    }

    #[test]
    fn begin_work_from_idle() {
        let mut s = session(25, 5, 8);
        assert_eq!(s.begin_work().unwrap(), Phase::Working);
        assert_eq!(s.cycles_remaining(), 8);
    }

    #[test]
    fn begin_work_from_working_fails() {
        let mut s = session(25, 5, 8);
        s.begin_work().unwrap();

        let err = s.begin_work().unwrap_err();
        assert_eq!(err.current_phase, Phase::Working);
        assert!(err.action.contains("begin work"));
    }

    #[test]
    fn begin_rest_from_working() {
        let mut s = session(25, 5, 8);
        s.begin_work().unwrap();

        assert_eq!(s.begin_rest().unwrap(), Phase::Resting);
        // Working -> Resting never decrements
        assert_eq!(s.cycles_remaining(), 8);
    }

    #[test]
    fn begin_rest_from_idle_fails() {
        let mut s = session(25, 5, 8);
        let err = s.begin_rest().unwrap_err();
        assert_eq!(err.current_phase, Phase::Idle);
    }

    #[test]
    fn complete_rest_decrements_and_resumes_work() {
        let mut s = session(25, 5, 2);
        s.begin_work().unwrap();
        s.begin_rest().unwrap();

        assert_eq!(s.complete_rest().unwrap(), Phase::Working);
        assert_eq!(s.cycles_remaining(), 1);
    }

    #[test]
    fn complete_rest_on_last_cycle_is_done() {
        let mut s = session(25, 5, 1);
        s.begin_work().unwrap();
        s.begin_rest().unwrap();

        assert_eq!(s.complete_rest().unwrap(), Phase::Done);
        assert_eq!(s.cycles_remaining(), 0);
    }

    #[test]
    fn complete_rest_from_working_fails() {
        let mut s = session(25, 5, 1);
        s.begin_work().unwrap();

        let err = s.complete_rest().unwrap_err();
        assert_eq!(err.current_phase, Phase::Working);
    }

    #[test]
    fn done_is_terminal() {
        let mut s = session(1, 1, 1);
        s.begin_work().unwrap();
        s.begin_rest().unwrap();
        s.complete_rest().unwrap();
        assert_eq!(s.phase(), Phase::Done);

        assert!(s.begin_work().is_err());
        assert!(s.begin_rest().is_err());
        assert!(s.complete_rest().is_err());
    }

    #[test]
    fn alternates_exactly_n_times_before_done() {
        let n = 3;
        let mut s = session(1, 1, n);
        let mut work_phases = 0;

        s.begin_work().unwrap();
        loop {
            assert_eq!(s.phase(), Phase::Working);
            work_phases += 1;
            s.begin_rest().unwrap();
            if s.complete_rest().unwrap() == Phase::Done {
                break;
            }
        }

        assert_eq!(work_phases, n);
        assert_eq!(s.cycles_remaining(), 0);
    }
}
