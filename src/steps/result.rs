//! Mutable step results.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::status::Status;
use crate::steps::descriptor::{StepDescriptor, StepKind};

/// Outcome record of one step invocation.
///
/// Owned by the caller. The status reporter moves `status` to a terminal
/// value and is the only writer of the start and end timestamps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StepResult {
    /// Step name as reported.
    pub name: String,

    /// Documentation as reported.
    #[serde(default)]
    pub doc: String,

    /// Result kind; teardown results always surface their failure message.
    #[serde(default)]
    pub kind: StepKind,

    /// Current status.
    #[serde(default)]
    pub status: Status,

    /// Failure or skip message, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    start_time: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    end_time: Option<DateTime<Utc>>,
}

impl StepResult {
    /// Create a pending result mirroring a descriptor.
    pub fn new(descriptor: &StepDescriptor) -> Self {
        Self {
            name: descriptor.name.clone(),
            doc: descriptor.doc.clone(),
            kind: descriptor.kind,
            ..Default::default()
        }
    }

    /// Whether the step failed.
    pub fn failed(&self) -> bool {
        self.status == Status::Fail
    }

    /// Whether the step passed.
    pub fn passed(&self) -> bool {
        self.status == Status::Pass
    }

    /// Whether the step was skipped while executing.
    pub fn skipped(&self) -> bool {
        self.status == Status::Skip
    }

    /// Whether this is a teardown result.
    pub fn is_teardown(&self) -> bool {
        self.kind == StepKind::Teardown
    }

    /// When the step started.
    pub fn start_time(&self) -> Option<DateTime<Utc>> {
        self.start_time
    }

    /// When the step ended.
    pub fn end_time(&self) -> Option<DateTime<Utc>> {
        self.end_time
    }

    /// Time between start and end, once both are known.
    pub fn elapsed(&self) -> Option<Duration> {
        let (start, end) = (self.start_time?, self.end_time?);
        (end - start).to_std().ok()
    }

    pub(crate) fn mark_started(&mut self) {
        self.start_time = Some(Utc::now());
    }

    pub(crate) fn mark_ended(&mut self) {
        self.end_time = Some(Utc::now());
    }
}
