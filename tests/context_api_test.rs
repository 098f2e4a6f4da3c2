//! Integration tests for execution contexts.

use stepguard::context::{EngineContext, ExecutionContext, LogLevel, MockContext};
use stepguard::{classify, CombinedStep, DataError, Failure, Status, StepDescriptor, StepResult};

#[test]
fn public_api_accessible() {
    let _ctx = EngineContext::new();
    let _mock = MockContext::new();
    let _level = LogLevel::Warn;
}

#[test]
fn start_step_uses_combined_name() {
    let mut ctx = EngineContext::new();
    let step = StepDescriptor::new("Navigate");
    let mut result = StepResult::new(&step);
    result.name = "Navigate To Login".to_string();

    ctx.start_step(&mut CombinedStep::new(&step, &mut result));

    assert_eq!(ctx.current_step(), Some("Navigate To Login"));
    assert_eq!(ctx.depth(), 1);
}

#[test]
fn classification_is_idempotent_for_failures() {
    let mut ctx = MockContext::new();
    let first = classify(DataError::syntax("Bad syntax").into(), &mut ctx);
    let second = classify(first.clone().into(), &mut ctx);

    assert_eq!(first, second);
    assert_eq!(ctx.failures().len(), 1);
}

#[test]
fn works_behind_trait_object() {
    let mut engine = EngineContext::new();
    let ctx: &mut dyn ExecutionContext = &mut engine;
    let failure = classify(anyhow::anyhow!("dyn boom").into(), ctx);

    assert_eq!(failure.status(), Status::Fail);
    assert!(matches!(failure, Failure::Handler { .. }));
    assert_eq!(engine.failures().collect::<Vec<_>>(), ["dyn boom"]);
}
