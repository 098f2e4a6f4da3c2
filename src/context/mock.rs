//! Mock execution context for testing.
//!
//! `MockContext` implements the `ExecutionContext` trait and captures all
//! interactions for later assertion. It can be scripted to override a step's
//! status from its `end_step` hook, the way a listener would.
//!
//! # Example
//!
//! ```
//! use stepguard::context::{ExecutionContext, MockContext};
//!
//! let mut ctx = MockContext::new();
//! ctx.fail("Something broke");
//! ctx.warn("Careful");
//!
//! assert_eq!(ctx.failures(), ["Something broke"]);
//! assert_eq!(ctx.warnings(), ["Careful"]);
//! ```

use crate::status::Status;
use crate::steps::CombinedStep;

use super::{ExecutionContext, TestRun};

/// One call made on a [`MockContext`], in the order it happened.
///
/// Calls that record an outcome also capture the enclosing test's status at
/// the time of the call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockEvent {
    Started { step: String, status: Status },
    Ended { step: String, status: Status },
    Warned(String),
    Debugged(String),
    Failed { message: String, test_status: Option<Status> },
    Skipped { message: String, test_status: Option<Status> },
    TimeoutFlagged(bool),
}

/// Mock context for testing.
///
/// Captures every call. Notifications are stored as `(name, status)` pairs
/// seen at the moment of the call.
#[derive(Debug, Default)]
pub struct MockContext {
    test: Option<TestRun>,
    timeout_occurred: bool,
    started: Vec<(String, Status)>,
    ended: Vec<(String, Status)>,
    warnings: Vec<String>,
    debug_messages: Vec<String>,
    failures: Vec<String>,
    skips: Vec<String>,
    events: Vec<MockEvent>,
    /// Status forced onto every step by `end_step`.
    end_status_override: Option<Status>,
}

impl MockContext {
    /// Create a mock with no enclosing test.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock whose enclosing test has the given status.
    pub fn with_test_status(status: Status) -> Self {
        Self {
            test: Some(TestRun::new("Mock Test").with_status(status)),
            ..Default::default()
        }
    }

    /// Make `end_step` set every ending step to `status`.
    pub fn override_end_status(&mut self, status: Status) {
        self.end_status_override = Some(status);
    }

    /// Steps notified as started.
    pub fn started(&self) -> &[(String, Status)] {
        &self.started
    }

    /// Steps notified as ended, with the status they had before any override.
    pub fn ended(&self) -> &[(String, Status)] {
        &self.ended
    }

    /// Logged warnings.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Logged debug messages.
    pub fn debug_messages(&self) -> &[String] {
        &self.debug_messages
    }

    /// Recorded failures.
    pub fn failures(&self) -> &[String] {
        &self.failures
    }

    /// Recorded skips.
    pub fn skips(&self) -> &[String] {
        &self.skips
    }

    /// Every call, in order.
    pub fn events(&self) -> &[MockEvent] {
        &self.events
    }

    fn test_status(&self) -> Option<Status> {
        self.test.as_ref().map(|t| t.status)
    }
}

impl ExecutionContext for MockContext {
    fn test(&self) -> Option<&TestRun> {
        self.test.as_ref()
    }

    fn test_mut(&mut self) -> Option<&mut TestRun> {
        self.test.as_mut()
    }

    fn start_step(&mut self, step: &mut CombinedStep<'_>) {
        self.started.push((step.name().to_string(), step.status()));
        self.events.push(MockEvent::Started {
            step: step.name().to_string(),
            status: step.status(),
        });
    }

    fn end_step(&mut self, step: &mut CombinedStep<'_>) {
        self.ended.push((step.name().to_string(), step.status()));
        self.events.push(MockEvent::Ended {
            step: step.name().to_string(),
            status: step.status(),
        });
        if let Some(status) = self.end_status_override {
            step.set_status(status);
        }
    }

    fn warn(&mut self, message: &str) {
        self.warnings.push(message.to_string());
        self.events.push(MockEvent::Warned(message.to_string()));
    }

    fn debug(&mut self, message: &str) {
        self.debug_messages.push(message.to_string());
        self.events.push(MockEvent::Debugged(message.to_string()));
    }

    fn fail(&mut self, message: &str) {
        self.failures.push(message.to_string());
        self.events.push(MockEvent::Failed {
            message: message.to_string(),
            test_status: self.test_status(),
        });
    }

    fn skip(&mut self, message: &str) {
        self.skips.push(message.to_string());
        self.events.push(MockEvent::Skipped {
            message: message.to_string(),
            test_status: self.test_status(),
        });
    }

    fn timeout_occurred(&self) -> bool {
        self.timeout_occurred
    }

    fn set_timeout_occurred(&mut self, occurred: bool) {
        self.timeout_occurred = occurred;
        self.events.push(MockEvent::TimeoutFlagged(occurred));
    }
}
