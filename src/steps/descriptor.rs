//! Static step definitions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
    /// A top-level test body.
    Test,

    /// An ordinary keyword call.
    #[default]
    Keyword,

    /// A setup run before a test or suite.
    Setup,

    /// A teardown run after a test or suite.
    Teardown,
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StepKind::Test => "test",
            StepKind::Keyword => "keyword",
            StepKind::Setup => "setup",
            StepKind::Teardown => "teardown",
        };
        write!(f, "{}", s)
    }
}

/// Read-only definition of a step.
///
/// Owned by the caller and only read by the status reporter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepDescriptor {
    /// Step name.
    pub name: String,

    /// Documentation, possibly starting with a `*DEPRECATED*` marker.
    #[serde(default)]
    pub doc: String,

    /// Step kind.
    #[serde(default)]
    pub kind: StepKind,
}

impl StepDescriptor {
    /// Create a keyword descriptor with no documentation.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the documentation.
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = doc.into();
        self
    }

    /// Set the kind.
    pub fn with_kind(mut self, kind: StepKind) -> Self {
        self.kind = kind;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_descriptor_is_undocumented_keyword() {
        let step = StepDescriptor::new("Log");
        assert_eq!(step.name, "Log");
        assert!(step.doc.is_empty());
        assert_eq!(step.kind, StepKind::Keyword);
    }

    #[test]
    fn builders_set_fields() {
        let step = StepDescriptor::new("Close All")
            .with_doc("Closes everything.")
            .with_kind(StepKind::Teardown);
        assert_eq!(step.doc, "Closes everything.");
        assert_eq!(step.kind, StepKind::Teardown);
    }

    #[test]
    fn kind_display() {
        assert_eq!(StepKind::Teardown.to_string(), "teardown");
        assert_eq!(StepKind::Keyword.to_string(), "keyword");
    }
}
