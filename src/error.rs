//! Errors a step body can return.
//!
//! A step body reports how it ended through [`StepOutcome`]. The status
//! reporter classifies any [`StepError`] into a [`Failure`](crate::Failure)
//! when the step's scope exits.
//!
//! # Error Handling Strategy
//!
//! - Use [`StepError::Status`] to pass along a failure that is already
//!   classified, typically one returned by a nested step
//! - Use [`DataError`] for malformed step invocations
//! - Use `anyhow::Error` (via [`StepError::Handler`]) for anything the step's
//!   implementation raised; wrap [`TimeoutExceeded`] or [`SkipExecution`] into
//!   the chain to mark a timeout or a skip request

use thiserror::Error;

use crate::failure::Failure;

/// Result of running a step body.
pub type StepOutcome = std::result::Result<(), StepError>;

/// Error returned from a step body.
#[derive(Debug, Error)]
pub enum StepError {
    /// Already classified execution status; passed through unchanged.
    #[error(transparent)]
    Status(#[from] Failure),

    /// Malformed step invocation.
    #[error(transparent)]
    Data(#[from] DataError),

    /// Error raised by the step's underlying implementation.
    #[error(transparent)]
    Handler(#[from] anyhow::Error),
}

/// Where a data error originated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataErrorKind {
    /// Invalid step syntax.
    Syntax,

    /// A keyword could not be resolved.
    Keyword,

    /// A variable could not be resolved.
    Variable,

    /// Any other definition problem.
    Other,
}

/// Error in the step definition or invocation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct DataError {
    /// Origin of the error.
    pub kind: DataErrorKind,

    /// Human readable message.
    pub message: String,
}

impl DataError {
    /// Create a data error of the given kind.
    pub fn new(kind: DataErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Invalid syntax.
    pub fn syntax(message: impl Into<String>) -> Self {
        Self::new(DataErrorKind::Syntax, message)
    }

    /// Unresolvable keyword.
    pub fn keyword(message: impl Into<String>) -> Self {
        Self::new(DataErrorKind::Keyword, message)
    }

    /// Unresolvable variable.
    pub fn variable(message: impl Into<String>) -> Self {
        Self::new(DataErrorKind::Variable, message)
    }

    /// Whether the error is a syntax error rather than a name resolution one.
    pub fn is_syntax(&self) -> bool {
        !matches!(self.kind, DataErrorKind::Keyword | DataErrorKind::Variable)
    }
}

/// Marks a handler error as caused by a timeout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct TimeoutExceeded {
    /// Human readable message.
    pub message: String,
}

impl TimeoutExceeded {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Marks a handler error as a request to skip the step.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct SkipExecution {
    /// Human readable message.
    pub message: String,
}

impl SkipExecution {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
