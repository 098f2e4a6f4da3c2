//! Status reporter options.

use serde::{Deserialize, Serialize};

/// Options for a status reporter.
///
/// Deserializable so host engines can keep them in their own configuration;
/// missing fields take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReporterOptions {
    /// Whether the step actually runs. When false the step ends as NOT RUN.
    pub run: bool,

    /// Swallow the step's failure instead of returning it to the caller.
    pub suppress: bool,
}

impl Default for ReporterOptions {
    fn default() -> Self {
        Self {
            run: true,
            suppress: false,
        }
    }
}

impl ReporterOptions {
    /// Options for a step that is not run.
    pub fn not_run() -> Self {
        Self {
            run: false,
            ..Default::default()
        }
    }

    /// Also swallow failures.
    pub fn suppressing(mut self) -> Self {
        self.suppress = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_runs_and_propagates() {
        let options = ReporterOptions::default();
        assert!(options.run);
        assert!(!options.suppress);
    }

    #[test]
    fn not_run_keeps_propagation() {
        let options = ReporterOptions::not_run();
        assert!(!options.run);
        assert!(!options.suppress);
        assert!(options.suppressing().suppress);
    }

    #[test]
    fn deserializes_partial_yaml() {
        let options: ReporterOptions = serde_yaml::from_str("suppress: true").unwrap();
        assert!(options.run);
        assert!(options.suppress);
    }

    #[test]
    fn deserializes_empty_json() {
        let options: ReporterOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, ReporterOptions::default());
    }
}
