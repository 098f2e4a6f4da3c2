//! Notification payload combining a descriptor with its live result.

use crate::status::Status;
use crate::steps::descriptor::{StepDescriptor, StepKind};
use crate::steps::result::StepResult;

/// View handed to `start_step`/`end_step` hooks.
///
/// Attribute lookups prefer the result and fall back to the descriptor.
/// Listeners may change the status and message through this view.
#[derive(Debug)]
pub struct CombinedStep<'a> {
    data: &'a StepDescriptor,
    result: &'a mut StepResult,
}

impl<'a> CombinedStep<'a> {
    /// Combine a descriptor and a result.
    pub fn new(data: &'a StepDescriptor, result: &'a mut StepResult) -> Self {
        Self { data, result }
    }

    /// Step name.
    pub fn name(&self) -> &str {
        if self.result.name.is_empty() {
            &self.data.name
        } else {
            &self.result.name
        }
    }

    /// Step documentation.
    pub fn doc(&self) -> &str {
        if self.result.doc.is_empty() {
            &self.data.doc
        } else {
            &self.result.doc
        }
    }

    /// Result kind.
    pub fn kind(&self) -> StepKind {
        self.result.kind
    }

    /// Current result status.
    pub fn status(&self) -> Status {
        self.result.status
    }

    /// Override the result status.
    pub fn set_status(&mut self, status: Status) {
        self.result.status = status;
    }

    /// Current result message.
    pub fn message(&self) -> Option<&str> {
        self.result.message.as_deref()
    }

    /// Override the result message.
    pub fn set_message(&mut self, message: impl Into<String>) {
        self.result.message = Some(message.into());
    }

    /// The static definition.
    pub fn data(&self) -> &StepDescriptor {
        self.data
    }

    /// The live result.
    pub fn result(&self) -> &StepResult {
        &*self.result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_result_attributes() {
        let data = StepDescriptor::new("Original").with_doc("data doc");
        let mut result = StepResult::new(&data);
        result.name = "Renamed".to_string();
        let combined = CombinedStep::new(&data, &mut result);
        assert_eq!(combined.name(), "Renamed");
        assert_eq!(combined.doc(), "data doc");
    }

    #[test]
    fn falls_back_to_descriptor() {
        let data = StepDescriptor::new("From Data").with_doc("documented");
        let mut result = StepResult::default();
        let combined = CombinedStep::new(&data, &mut result);
        assert_eq!(combined.name(), "From Data");
        assert_eq!(combined.doc(), "documented");
    }

    #[test]
    fn mutations_reach_result() {
        let data = StepDescriptor::new("Step");
        let mut result = StepResult::new(&data);
        {
            let mut combined = CombinedStep::new(&data, &mut result);
            combined.set_status(Status::Fail);
            combined.set_message("changed by listener");
        }
        assert_eq!(result.status, Status::Fail);
        assert_eq!(result.message.as_deref(), Some("changed by listener"));
    }
}
