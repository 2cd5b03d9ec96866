//! Touch options and flag resolution

use crate::error::{Result, TouchError};
use chrono::{Local, NaiveDate, TimeZone};
use std::time::SystemTime;

/// Length of a `YYYYMMDDHHMM` literal
const TIME_LITERAL_LEN: usize = 12;

/// Resolved, immutable option set shared by every file of one invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TouchOptions {
    /// Do not create missing files
    pub no_create: bool,
    /// Change only the access time
    pub access_only: bool,
    /// Change only the modification time
    pub mod_only: bool,
    /// Use this instant instead of the current time
    pub custom_time: Option<SystemTime>,
    /// Report every action
    pub verbose: bool,
}

impl TouchOptions {
    pub fn selection(&self) -> TimeSelection {
        TimeSelection::from_flags(self.access_only, self.mod_only)
    }
}

/// Which of the two instants a touch sets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeSelection {
    AccessOnly,
    ModificationOnly,
    Both,
}

impl TimeSelection {
    /// Access time wins when both `-a` and `-m` are given.
    pub fn from_flags(access_only: bool, mod_only: bool) -> Self {
        match (access_only, mod_only) {
            (true, _) => TimeSelection::AccessOnly,
            (false, true) => TimeSelection::ModificationOnly,
            (false, false) => TimeSelection::Both,
        }
    }

    /// `(accessed, modified)` arguments for `FileSystem::set_times`
    pub fn instants(self, at: SystemTime) -> (Option<SystemTime>, Option<SystemTime>) {
        match self {
            TimeSelection::AccessOnly => (Some(at), None),
            TimeSelection::ModificationOnly => (None, Some(at)),
            TimeSelection::Both => (Some(at), Some(at)),
        }
    }

    /// Human-readable name of the instant(s) touched
    pub fn describe(self) -> &'static str {
        match self {
            TimeSelection::AccessOnly => "access time",
            TimeSelection::ModificationOnly => "modification time",
            TimeSelection::Both => "access and modification time",
        }
    }
}

/// Parse a `YYYYMMDDHHMM` literal as local time.
///
/// Seconds are zero. A wall-clock time repeated by a DST fall-back resolves
/// to the earlier instant; one skipped by a spring-forward is rejected.
pub fn parse_custom_time(literal: &str) -> Result<SystemTime> {
    let invalid = |reason: &str| TouchError::InvalidTime {
        literal: literal.to_string(),
        reason: reason.to_string(),
    };

    if literal.len() != TIME_LITERAL_LEN || !literal.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid("expected exactly 12 digits (YYYYMMDDHHMM)"));
    }

    // All ASCII digits, so slicing and parsing cannot fail
    let field = |range: std::ops::Range<usize>| literal[range].parse::<u32>().unwrap_or(0);
    let year = field(0..4) as i32;
    let (month, day) = (field(4..6), field(6..8));
    let (hour, minute) = (field(8..10), field(10..12));

    let naive = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| invalid("no such calendar date"))?
        .and_hms_opt(hour, minute, 0)
        .ok_or_else(|| invalid("hour must be 00-23 and minute 00-59"))?;

    let local = Local
        .from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| TouchError::NonexistentLocalTime {
            literal: literal.to_string(),
        })?;

    Ok(SystemTime::from(local))
}
