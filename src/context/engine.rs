//! Execution context used for real runs.
//!
//! `EngineContext` keeps the stack of running steps and logs through
//! `tracing`. Everything logged is also kept so the host can surface it later.
//! Listener delivery belongs to the host engine, which wraps or replaces this
//! context.

use std::fmt;

use tracing::{debug, info, warn};

use crate::steps::CombinedStep;

use super::{ExecutionContext, TestRun};

/// Level of a logged context message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Warn,
    Fail,
    Skip,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Warn => "WARN",
            LogLevel::Fail => "FAIL",
            LogLevel::Skip => "SKIP",
        };
        write!(f, "{}", s)
    }
}

/// A message logged through the context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
}

/// Execution context for real runs.
#[derive(Debug, Default)]
pub struct EngineContext {
    test: Option<TestRun>,
    steps: Vec<String>,
    timeout_occurred: bool,
    log: Vec<LogEntry>,
}

impl EngineContext {
    /// Create a context with no enclosing test.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the enclosing test.
    pub fn with_test(mut self, test: TestRun) -> Self {
        self.test = Some(test);
        self
    }

    /// Replace the enclosing test, returning the previous one.
    pub fn set_test(&mut self, test: Option<TestRun>) -> Option<TestRun> {
        std::mem::replace(&mut self.test, test)
    }

    /// Number of steps currently running.
    pub fn depth(&self) -> usize {
        self.steps.len()
    }

    /// Name of the innermost running step.
    pub fn current_step(&self) -> Option<&str> {
        self.steps.last().map(String::as_str)
    }

    /// Everything logged so far.
    pub fn log(&self) -> &[LogEntry] {
        &self.log
    }

    /// Logged warnings.
    pub fn warnings(&self) -> impl Iterator<Item = &str> {
        self.messages(LogLevel::Warn)
    }

    /// Logged failures.
    pub fn failures(&self) -> impl Iterator<Item = &str> {
        self.messages(LogLevel::Fail)
    }

    /// Logged skips.
    pub fn skips(&self) -> impl Iterator<Item = &str> {
        self.messages(LogLevel::Skip)
    }

    fn messages(&self, level: LogLevel) -> impl Iterator<Item = &str> {
        self.log
            .iter()
            .filter(move |entry| entry.level == level)
            .map(|entry| entry.message.as_str())
    }

    fn record(&mut self, level: LogLevel, message: &str) {
        self.log.push(LogEntry {
            level,
            message: message.to_string(),
        });
    }
}

impl ExecutionContext for EngineContext {
    fn test(&self) -> Option<&TestRun> {
        self.test.as_ref()
    }

    fn test_mut(&mut self) -> Option<&mut TestRun> {
        self.test.as_mut()
    }

    fn start_step(&mut self, step: &mut CombinedStep<'_>) {
        self.steps.push(step.name().to_string());
        debug!(step = step.name(), depth = self.steps.len(), "Step started");
    }

    fn end_step(&mut self, step: &mut CombinedStep<'_>) {
        debug!(
            step = step.name(),
            status = %step.status(),
            depth = self.steps.len(),
            "Step ended"
        );
        self.steps.pop();
    }

    fn warn(&mut self, message: &str) {
        warn!("{}", message);
        self.record(LogLevel::Warn, message);
    }

    fn debug(&mut self, message: &str) {
        debug!("{}", message);
        self.record(LogLevel::Debug, message);
    }

    fn fail(&mut self, message: &str) {
        info!(depth = self.steps.len(), "FAIL {}", message);
        self.record(LogLevel::Fail, message);
    }

    fn skip(&mut self, message: &str) {
        info!(depth = self.steps.len(), "SKIP {}", message);
        self.record(LogLevel::Skip, message);
    }

    fn timeout_occurred(&self) -> bool {
        self.timeout_occurred
    }

    fn set_timeout_occurred(&mut self, occurred: bool) {
        self.timeout_occurred = occurred;
    }
}
