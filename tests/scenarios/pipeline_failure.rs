//! Test: Pipeline Failure - a failing step aborts the run

use crate::helpers::*;
use patterns::core::{PipelineContext, PipelineError, PipelineState};

/// The failing step is reported by index and name; later steps never run
#[test]
fn test_failure_aborts_remaining_steps() {
    let mut recording = RecordingPipeline::new("aborting");
    recording
        .pipeline
        .add_step("increment", |ctx: &mut PipelineContext| ctx.data += 1)
        .add_fallible_step("check positive", |ctx: &mut PipelineContext| {
            if ctx.data > 0 {
                anyhow::bail!("counter {} is not allowed to be positive", ctx.data);
            }
            Ok(())
        })
        .add_step("never runs", |ctx: &mut PipelineContext| ctx.data = 100);

    let result = recording.run_from(0);

    assert_eq!(result.state, PipelineState::Failed);
    assert_eq!(result.failed_step(), Some((1, "check positive".to_string())));
    assert_eq!(result.context.data, 1);
    assert_eq!(result.started_steps(), vec!["increment", "check positive"]);
    assert_execution_order(&result, &["increment"]);

    let message = result.result.unwrap_err().to_string();
    assert!(message.contains("check positive"));
    assert!(message.contains("not allowed to be positive"));
}

/// A fallible step that succeeds behaves like any other step
#[test]
fn test_fallible_step_success() {
    let mut recording = RecordingPipeline::new("fallible");
    recording
        .pipeline
        .add_fallible_step("parse", |ctx: &mut PipelineContext| {
            ctx.data = "41".parse::<i64>()?;
            Ok(())
        })
        .add_step("increment", |ctx: &mut PipelineContext| ctx.data += 1);

    let result = recording.run_from(0);

    assert_pipeline_completed(&result);
    assert_eq!(result.context.data, 42);
}

/// The underlying error stays reachable through the error source chain
#[test]
fn test_error_source_is_preserved() {
    let mut recording = RecordingPipeline::new("parse failure");
    recording
        .pipeline
        .add_fallible_step("parse", |ctx: &mut PipelineContext| {
            ctx.data = "forty-two".parse::<i64>()?;
            Ok(())
        });

    let result = recording.run_from(0);

    match result.result {
        Err(PipelineError::StepFailed { index, source, .. }) => {
            assert_eq!(index, 0);
            assert!(source.downcast_ref::<std::num::ParseIntError>().is_some());
        }
        other => panic!("expected step failure, got {:?}", other),
    }
}

/// A failed pipeline cannot be re-run
#[test]
fn test_failed_pipeline_is_not_rerun() {
    let mut recording = RecordingPipeline::new("single shot");
    recording
        .pipeline
        .add_fallible_step("fail", |_: &mut PipelineContext| anyhow::bail!("boom"));

    let first = recording.run_from(0);
    assert_eq!(first.state, PipelineState::Failed);

    let second = recording.run_from(0);
    assert!(matches!(
        second.result,
        Err(PipelineError::AlreadyExecuted {
            state: PipelineState::Failed,
            ..
        })
    ));
}
