//! Classified step failures.
//!
//! [`Failure`] is the closed set of ways a step can fail. The status reporter
//! builds one from whatever the step body returned (see [`classify`]) and uses
//! it to decide the result's terminal status and message.

use std::backtrace::BacktraceStatus;
use std::fmt::Write as _;

use thiserror::Error;

use crate::context::ExecutionContext;
use crate::error::{SkipExecution, StepError, TimeoutExceeded};
use crate::status::Status;

/// A classified step failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Failure {
    /// Failure classified upstream, e.g. by the engine or a nested step.
    #[error("{message}")]
    Execution {
        message: String,
        skip: bool,
        exit: bool,
    },

    /// Malformed step invocation.
    #[error("{message}")]
    Data { message: String, syntax: bool },

    /// Error raised by the step's implementation.
    #[error("{}", .details.message)]
    Handler {
        details: ErrorDetails,
        timeout: bool,
        skip: bool,
    },

    /// A listener failed the step after it was finalized.
    #[error("{message}")]
    Listener { message: String },
}

impl Failure {
    /// A plain failure.
    pub fn execution(message: impl Into<String>) -> Self {
        Failure::Execution {
            message: message.into(),
            skip: false,
            exit: false,
        }
    }

    /// A failure that should stop the whole run.
    pub fn fatal(message: impl Into<String>) -> Self {
        Failure::Execution {
            message: message.into(),
            skip: false,
            exit: true,
        }
    }

    /// A skip.
    pub fn skipped(message: impl Into<String>) -> Self {
        Failure::Execution {
            message: message.into(),
            skip: true,
            exit: false,
        }
    }

    /// The failure raised when an `end_step` listener fails a finished step.
    pub fn listener(step_name: &str) -> Self {
        Failure::Listener {
            message: format!(
                "Step '{}' failed in listener method 'end_step'.",
                step_name
            ),
        }
    }

    /// Status the failed step gets.
    pub fn status(&self) -> Status {
        if self.is_skip() {
            Status::Skip
        } else {
            Status::Fail
        }
    }

    /// Human readable message.
    pub fn message(&self) -> &str {
        match self {
            Failure::Execution { message, .. }
            | Failure::Data { message, .. }
            | Failure::Listener { message } => message,
            Failure::Handler { details, .. } => &details.message,
        }
    }

    /// Whether the failure stems from invalid step syntax.
    pub fn is_syntax(&self) -> bool {
        matches!(self, Failure::Data { syntax: true, .. })
    }

    /// Whether the failure was caused by a timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Failure::Handler { timeout: true, .. })
    }

    /// Whether the step requested to be skipped.
    pub fn is_skip(&self) -> bool {
        matches!(
            self,
            Failure::Execution { skip: true, .. } | Failure::Handler { skip: true, .. }
        )
    }

    /// Whether the run should stop after this failure.
    pub fn is_exit(&self) -> bool {
        matches!(
            self,
            Failure::Execution { exit: true, .. } | Failure::Listener { .. }
        )
    }
}

/// Diagnostics extracted from a handler error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorDetails {
    /// Top-level error message.
    pub message: String,

    /// Cause chain and backtrace, when there is more than the message.
    pub traceback: Option<String>,
}

impl ErrorDetails {
    /// Extract diagnostics from an error.
    pub fn new(error: &anyhow::Error) -> Self {
        let message = match error.to_string() {
            m if m.trim().is_empty() => "Unknown error".to_string(),
            m => m,
        };

        let mut traceback = String::new();
        let causes: Vec<String> = error.chain().skip(1).map(|c| c.to_string()).collect();
        if !causes.is_empty() {
            traceback.push_str("Caused by:");
            for (i, cause) in causes.iter().enumerate() {
                let _ = write!(traceback, "\n    {}: {}", i, cause);
            }
        }
        let backtrace = error.backtrace();
        if backtrace.status() == BacktraceStatus::Captured {
            if !traceback.is_empty() {
                traceback.push('\n');
            }
            let _ = write!(traceback, "Stack backtrace:\n{}", backtrace);
        }

        Self {
            message,
            traceback: (!traceback.is_empty()).then_some(traceback),
        }
    }
}

/// Turn an error returned by a step body into a [`Failure`].
///
/// Everything but an already classified failure is recorded on the context
/// (fail, skip, timeout flag, debug trace) before this returns.
pub fn classify<C>(error: StepError, context: &mut C) -> Failure
where
    C: ExecutionContext + ?Sized,
{
    match error {
        StepError::Status(failure) => failure,
        StepError::Data(err) => {
            context.fail(&err.message);
            Failure::Data {
                syntax: err.is_syntax(),
                message: err.message,
            }
        }
        StepError::Handler(err) => {
            let details = ErrorDetails::new(&err);
            let timeout = err.chain().any(|c| c.is::<TimeoutExceeded>());
            let skip = err.chain().any(|c| c.is::<SkipExecution>());
            if timeout {
                context.set_timeout_occurred(true);
            }
            if skip {
                context.skip(&details.message);
            } else {
                context.fail(&details.message);
            }
            if let Some(traceback) = &details.traceback {
                context.debug(traceback);
            }
            Failure::Handler {
                details,
                timeout,
                skip,
            }
        }
    }
}
