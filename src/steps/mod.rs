//! Step definitions and results.
//!
//! - [`StepDescriptor`] - Static, read-only definition of a step
//! - [`StepResult`] - Mutable outcome record the status reporter finalizes
//! - [`CombinedStep`] - Descriptor and result merged into one notification payload
//!
//! # Example
//!
//! ```
//! use stepguard::steps::{CombinedStep, StepDescriptor, StepKind, StepResult};
//!
//! let step = StepDescriptor::new("Close Browser").with_kind(StepKind::Teardown);
//! let mut result = StepResult::new(&step);
//! let combined = CombinedStep::new(&step, &mut result);
//! assert_eq!(combined.name(), "Close Browser");
//! assert!(result.is_teardown());
//! ```

pub mod combined;
pub mod descriptor;
pub mod result;

pub use combined::CombinedStep;
pub use descriptor::{StepDescriptor, StepKind};
pub use result::StepResult;
