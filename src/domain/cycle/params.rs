//! Validated session input value objects

use std::fmt;
use std::str::FromStr;
use std::time::Duration as StdDuration;

use crate::domain::error::InvalidInputError;

/// Default work interval (minutes)
pub const DEFAULT_WORK_MINUTES: u32 = 25;

/// Default rest interval (minutes)
pub const DEFAULT_REST_MINUTES: u32 = 5;

/// Default total number of work+rest cycles
pub const DEFAULT_CYCLES: u32 = 8;

/// Value object for a phase duration in whole minutes.
/// Immutable and positive by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Minutes(u32);

impl Minutes {
    /// Create from a positive minute count. Returns None for zero.
    pub const fn new(minutes: u32) -> Option<Self> {
        if minutes == 0 {
            None
        } else {
            Some(Self(minutes))
        }
    }

    /// Get the raw minute count
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Convert to std::time::Duration
    pub const fn as_std(&self) -> StdDuration {
        StdDuration::from_secs(self.0 as u64 * 60)
    }
}

impl fmt::Display for Minutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}m", self.0)
    }
}

/// Validated Start inputs: work interval, rest interval, total cycles.
/// Built from the raw field strings the frontend hands over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionParams {
    pub work: Minutes,
    pub rest: Minutes,
    pub cycles: u32,
}

impl SessionParams {
    /// Parse the three raw input fields. Each must be a positive integer;
    /// the first offending field is reported.
    pub fn parse(work: &str, rest: &str, cycles: &str) -> Result<Self, InvalidInputError> {
        let work = parse_positive("work minutes", work)?;
        let rest = parse_positive("rest minutes", rest)?;
        let cycles = parse_positive("cycles", cycles)?;

        // parse_positive guarantees non-zero
        Ok(Self {
            work: Minutes(work),
            rest: Minutes(rest),
            cycles,
        })
    }

    /// The field defaults restored by Stop (25, 5, 8)
    pub const fn defaults() -> Self {
        Self {
            work: Minutes(DEFAULT_WORK_MINUTES),
            rest: Minutes(DEFAULT_REST_MINUTES),
            cycles: DEFAULT_CYCLES,
        }
    }
}

impl Default for SessionParams {
    fn default() -> Self {
        Self::defaults()
    }
}

fn parse_positive(field: &'static str, value: &str) -> Result<u32, InvalidInputError> {
    let trimmed = value.trim();
    match u32::from_str(trimmed) {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(InvalidInputError {
            field,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_inputs() {
        let params = SessionParams::parse("25", "5", "8").unwrap();
        assert_eq!(params.work.get(), 25);
        assert_eq!(params.rest.get(), 5);
        assert_eq!(params.cycles, 8);
    }

    #[test]
    fn parse_trims_whitespace() {
        let params = SessionParams::parse(" 1 ", "2", " 3").unwrap();
        assert_eq!(params.work.get(), 1);
        assert_eq!(params.cycles, 3);
    }

    #[test]
    fn parse_rejects_non_numeric() {
        let err = SessionParams::parse("abc", "5", "8").unwrap_err();
        assert_eq!(err.field, "work minutes");
        assert_eq!(err.value, "abc");
    }

    #[test]
    fn parse_rejects_zero() {
        assert!(SessionParams::parse("25", "0", "8").is_err());
        assert!(SessionParams::parse("0", "5", "8").is_err());
        assert!(SessionParams::parse("25", "5", "0").is_err());
    }

    #[test]
    fn parse_rejects_negative_and_empty() {
        assert!(SessionParams::parse("-1", "5", "8").is_err());
        assert!(SessionParams::parse("25", "", "8").is_err());
        assert!(SessionParams::parse("25", "5", "2.5").is_err());
    }

    #[test]
    fn parse_reports_first_bad_field() {
        let err = SessionParams::parse("25", "x", "y").unwrap_err();
        assert_eq!(err.field, "rest minutes");
    }

    #[test]
    fn defaults_are_25_5_8() {
        let params = SessionParams::defaults();
        assert_eq!(params.work.get(), 25);
        assert_eq!(params.rest.get(), 5);
        assert_eq!(params.cycles, 8);
    }

    #[test]
    fn minutes_rejects_zero() {
        assert!(Minutes::new(0).is_none());
        assert_eq!(Minutes::new(5).unwrap().get(), 5);
    }

    #[test]
    fn minutes_as_std_duration() {
        let m = Minutes::new(2).unwrap();
        assert_eq!(m.as_std(), StdDuration::from_secs(120));
    }

    #[test]
    fn minutes_display() {
        assert_eq!(Minutes::new(25).unwrap().to_string(), "25m");
    }

    #[test]
    fn invalid_input_error_message() {
        let err = SessionParams::parse("25", "5", "nope").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Invalid input values!"));
        assert!(msg.contains("nope"));
        assert!(msg.contains("cycles"));
    }
}
