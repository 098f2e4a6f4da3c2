//! Library integration tests.

use stepguard::{DataError, Failure, StepError};

#[test]
fn error_types_are_public() {
    let err = DataError::keyword("No keyword with name 'Foo' found.");
    assert!(err.to_string().contains("Foo"));
    assert!(!err.is_syntax());
}

#[test]
fn step_outcome_alias_is_public() {
    fn body() -> stepguard::StepOutcome {
        Err(DataError::syntax("bad").into())
    }
    assert!(matches!(body(), Err(StepError::Data(_))));
}

#[test]
fn failure_is_a_std_error() {
    let failure = Failure::execution("went wrong");
    let err: anyhow::Error = failure.into();
    assert_eq!(err.to_string(), "went wrong");
}
