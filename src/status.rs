//! Step status values.
//!
//! A step result starts out as [`Status::NotSet`] (or [`Status::NotRun`] when
//! the step is skipped outright) and ends in exactly one terminal value once
//! its status reporter exits.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Status of a step or test result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    /// The step is pending; its outcome is not known yet.
    #[default]
    NotSet,

    /// The step was not executed.
    NotRun,

    /// The step passed.
    Pass,

    /// The step failed.
    Fail,

    /// The step was skipped while executing.
    Skip,
}

impl Status {
    /// Check if this is a terminal state (no more changes expected).
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Status::NotSet)
    }

    /// The canonical upper-case name used in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::NotSet => "NOT SET",
            Status::NotRun => "NOT RUN",
            Status::Pass => "PASS",
            Status::Fail => "FAIL",
            Status::Skip => "SKIP",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown status name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for Status {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().replace('_', " ").as_str() {
            "NOT SET" => Ok(Status::NotSet),
            "NOT RUN" => Ok(Status::NotRun),
            "PASS" => Ok(Status::Pass),
            "FAIL" => Ok(Status::Fail),
            "SKIP" => Ok(Status::Skip),
            _ => Err(UnknownStatus(s.to_string())),
        }
    }
}
