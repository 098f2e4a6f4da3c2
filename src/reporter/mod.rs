//! Scoped status reporting for a single step.
//!
//! [`StatusReporter`] brackets the execution of one step:
//!
//! - entering ([`StatusReporter::enter`]) stamps the start time, notifies
//!   `start_step` and warns if the step is deprecated
//! - finishing ([`ActiveStep::finish`]) classifies the body's outcome, sets
//!   the terminal status, notifies `end_step` and reconciles any status a
//!   listener changed
//!
//! The exit path runs exactly once. An [`ActiveStep`] dropped without being
//! finished, e.g. while a panic unwinds, finalizes the result itself.
//!
//! # Example
//!
//! ```
//! use stepguard::context::MockContext;
//! use stepguard::{ReporterOptions, Status, StatusReporter, StepDescriptor, StepResult};
//!
//! let step = StepDescriptor::new("Open Browser");
//! let mut result = StepResult::new(&step);
//! let mut ctx = MockContext::new();
//!
//! let outcome = StatusReporter::new(&step, &mut result, &mut ctx, ReporterOptions::default())
//!     .run(|_ctx| Ok(()));
//!
//! assert!(outcome.is_ok());
//! assert_eq!(result.status, Status::Pass);
//! ```

pub mod deprecation;
pub mod options;

pub use deprecation::deprecation_warning;
pub use options::ReporterOptions;

use tracing::{debug, warn};

use crate::context::ExecutionContext;
use crate::error::{StepError, StepOutcome};
use crate::failure::{classify, Failure};
use crate::status::Status;
use crate::steps::{CombinedStep, StepDescriptor, StepResult};

/// Guard owning the pass/fail decision for one step.
///
/// Construction only primes the result's status; everything else happens
/// when the scope is entered and finished.
#[derive(Debug)]
pub struct StatusReporter<'a, C: ExecutionContext + ?Sized> {
    data: &'a StepDescriptor,
    result: &'a mut StepResult,
    context: &'a mut C,
    pass_status: Status,
    suppress: bool,
}

impl<'a, C: ExecutionContext + ?Sized> StatusReporter<'a, C> {
    /// Create a reporter for `data`, writing into `result`.
    ///
    /// A running step starts as NOT SET and passes as PASS; a step that is
    /// not run is NOT RUN from the start and stays so.
    pub fn new(
        data: &'a StepDescriptor,
        result: &'a mut StepResult,
        context: &'a mut C,
        options: ReporterOptions,
    ) -> Self {
        let pass_status = if options.run {
            Status::Pass
        } else {
            Status::NotRun
        };
        result.status = if options.run {
            Status::NotSet
        } else {
            Status::NotRun
        };
        Self {
            data,
            result,
            context,
            pass_status,
            suppress: options.suppress,
        }
    }

    /// Enter the step's scope.
    pub fn enter(self) -> ActiveStep<'a, C> {
        let StatusReporter {
            data,
            result,
            context,
            pass_status,
            suppress,
        } = self;

        let initial_test_status = context.test().map(|test| test.status);
        result.mark_started();
        debug!(step = %data.name, kind = %data.kind, "Entering step");

        let mut combined = CombinedStep::new(data, &mut *result);
        context.start_step(&mut combined);
        if let Some(warning) = deprecation_warning(combined.name(), combined.doc()) {
            context.warn(&warning);
        }

        ActiveStep {
            data,
            result,
            context,
            pass_status,
            suppress,
            initial_test_status,
            finished: false,
        }
    }

    /// Run `body` inside the step's scope.
    ///
    /// The body gets the context so it can report nested steps. Returns the
    /// step's failure unless the reporter suppresses it.
    pub fn run<F>(self, body: F) -> Result<(), Failure>
    where
        F: FnOnce(&mut C) -> StepOutcome,
    {
        let mut active = self.enter();
        let outcome = body(active.context());
        active.finish(outcome)
    }
}

/// An entered step scope.
#[derive(Debug)]
pub struct ActiveStep<'a, C: ExecutionContext + ?Sized> {
    data: &'a StepDescriptor,
    result: &'a mut StepResult,
    context: &'a mut C,
    pass_status: Status,
    suppress: bool,
    initial_test_status: Option<Status>,
    finished: bool,
}

impl<'a, C: ExecutionContext + ?Sized> ActiveStep<'a, C> {
    /// The execution context, for running nested steps.
    pub fn context(&mut self) -> &mut C {
        &mut *self.context
    }

    /// Status of the enclosing test when the scope was entered.
    pub fn initial_test_status(&self) -> Option<Status> {
        self.initial_test_status
    }

    /// Leave the scope with the body's outcome.
    pub fn finish(mut self, outcome: StepOutcome) -> Result<(), Failure> {
        self.finished = true;
        self.exit(outcome)
    }

    fn exit(&mut self, outcome: StepOutcome) -> Result<(), Failure> {
        let mut failure = outcome.err().map(|err| classify(err, &mut *self.context));

        match &failure {
            None => self.result.status = self.pass_status,
            Some(failure) => {
                if self.pass_status != Status::NotRun {
                    self.result.status = failure.status();
                }
                if self.result.is_teardown() {
                    self.result.message = Some(failure.message().to_string());
                }
            }
        }

        if self.initial_test_status == Some(Status::Pass) {
            if let Some(test) = self.context.test_mut() {
                test.status = self.result.status;
            }
        }

        self.result.mark_ended();
        let status_before = self.result.status;
        self.context
            .end_step(&mut CombinedStep::new(self.data, &mut *self.result));

        if self.result.status != status_before && self.result.failed() {
            debug!(
                step = %self.data.name,
                before = %status_before,
                "Listener failed step after it ended"
            );
            failure = Some(Failure::listener(&self.data.name));
        }

        debug!(step = %self.data.name, status = %self.result.status, "Leaving step");
        match failure {
            Some(failure) if self.suppress => {
                debug!(step = %self.data.name, %failure, "Suppressed step failure");
                Ok(())
            }
            Some(failure) => Err(failure),
            None => Ok(()),
        }
    }
}

impl<C: ExecutionContext + ?Sized> Drop for ActiveStep<'_, C> {
    fn drop(&mut self) {
        if self.finished {
            return;
        }
        // `end_step` still runs here while unwinding; a panic inside it aborts.
        if let Err(failure) = self.abandon() {
            warn!(step = %self.data.name, %failure, "Step scope dropped before finishing");
        }
    }
}

impl<C: ExecutionContext + ?Sized> ActiveStep<'_, C> {
    /// Run the exit path for a scope that was never finished.
    fn abandon(&mut self) -> Result<(), Failure> {
        self.finished = true;
        let message = if std::thread::panicking() {
            "Step body panicked"
        } else {
            "Step body did not complete"
        };
        self.exit(Err(StepError::Handler(anyhow::anyhow!(message))))
    }
}
