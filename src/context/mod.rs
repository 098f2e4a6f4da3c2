//! Execution context seen by a status reporter.
//!
//! This module provides:
//! - [`ExecutionContext`] trait describing what a status reporter needs from
//!   the surrounding engine
//! - [`EngineContext`] for real runs, logging through `tracing`
//! - [`MockContext`] capturing every interaction for tests
//!
//! # Example
//!
//! ```
//! use stepguard::context::{EngineContext, ExecutionContext, TestRun};
//! use stepguard::Status;
//!
//! let mut ctx = EngineContext::new().with_test(TestRun::new("Login Works"));
//! ctx.warn("Something looks odd");
//! assert_eq!(ctx.test().map(|t| t.status), Some(Status::NotSet));
//! assert_eq!(ctx.warnings().count(), 1);
//! ```

pub mod engine;
pub mod mock;

pub use engine::{EngineContext, LogEntry, LogLevel};
pub use mock::{MockContext, MockEvent};

use serde::{Deserialize, Serialize};

use crate::status::Status;
use crate::steps::CombinedStep;

/// The enclosing top-level test.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TestRun {
    /// Test name.
    pub name: String,

    /// Current test status.
    #[serde(default)]
    pub status: Status,
}

impl TestRun {
    /// Create a pending test.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: Status::NotSet,
        }
    }

    /// Set the status.
    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }
}

/// State of the run a step executes in.
///
/// Passed explicitly to every status reporter. Implementations are owned by
/// the single thread running the current step stack.
pub trait ExecutionContext {
    /// The enclosing test, if any.
    fn test(&self) -> Option<&TestRun>;

    /// Mutable access to the enclosing test, if any.
    fn test_mut(&mut self) -> Option<&mut TestRun>;

    /// Notify that a step is starting.
    fn start_step(&mut self, step: &mut CombinedStep<'_>);

    /// Notify that a step has ended. Hooks may change the result's status.
    ///
    /// Also called while a panic unwinds out of a step body, so this must
    /// not panic itself; a second panic aborts the process.
    fn end_step(&mut self, step: &mut CombinedStep<'_>);

    /// Log a warning.
    fn warn(&mut self, message: &str);

    /// Log a debug message.
    fn debug(&mut self, message: &str);

    /// Record a failure.
    fn fail(&mut self, message: &str);

    /// Record a skip.
    fn skip(&mut self, message: &str);

    /// Whether a timeout has occurred.
    fn timeout_occurred(&self) -> bool;

    /// Flag that a timeout occurred.
    fn set_timeout_occurred(&mut self, occurred: bool);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_test_is_pending() {
        let test = TestRun::new("Smoke");
        assert_eq!(test.name, "Smoke");
        assert_eq!(test.status, Status::NotSet);
    }

    #[test]
    fn with_status_sets_status() {
        let test = TestRun::new("Smoke").with_status(Status::Pass);
        assert_eq!(test.status, Status::Pass);
    }
}
