//! Stepguard - scoped status reporting for test-execution steps.
//!
//! A [`StatusReporter`] wraps the execution of one step. It owns the step's
//! pass/fail decision, classifies whatever the step body returned into a
//! [`Failure`], notifies the [`ExecutionContext`](context::ExecutionContext)
//! when the step starts and ends, and reconciles any status a listener changed
//! on the way out.
//!
//! # Modules
//!
//! - [`context`] - Execution context trait, engine and mock contexts
//! - [`error`] - Errors a step body can return
//! - [`failure`] - Classified failures and the classification rules
//! - [`logging`] - Tracing subscriber setup
//! - [`reporter`] - The status reporter scope guard and its options
//! - [`status`] - Step status values
//! - [`steps`] - Step descriptors, results, and notification payloads
//!
//! # Example
//!
//! ```
//! use stepguard::context::{EngineContext, TestRun};
//! use stepguard::{ReporterOptions, Status, StatusReporter, StepDescriptor, StepResult};
//!
//! let mut ctx = EngineContext::new().with_test(TestRun::new("Checkout"));
//! let step = StepDescriptor::new("Add To Cart");
//! let mut result = StepResult::new(&step);
//!
//! let outcome = StatusReporter::new(&step, &mut result, &mut ctx, ReporterOptions::default())
//!     .run(|_ctx| Err(anyhow::anyhow!("Item out of stock").into()));
//!
//! assert_eq!(outcome.unwrap_err().message(), "Item out of stock");
//! assert_eq!(result.status, Status::Fail);
//! assert_eq!(ctx.failures().collect::<Vec<_>>(), ["Item out of stock"]);
//! ```

pub mod context;
pub mod error;
pub mod failure;
pub mod logging;
pub mod reporter;
pub mod status;
pub mod steps;

pub use error::{DataError, DataErrorKind, SkipExecution, StepError, StepOutcome, TimeoutExceeded};
pub use failure::{classify, ErrorDetails, Failure};
pub use reporter::{ActiveStep, ReporterOptions, StatusReporter};
pub use status::Status;
pub use steps::{CombinedStep, StepDescriptor, StepKind, StepResult};
