//! Test: Pipeline Order - steps run in registration order

use crate::helpers::*;
use patterns::core::{Pipeline, PipelineContext};

/// Single increment step turns {data: 1} into {data: 2}
#[test]
fn test_single_increment() {
    let mut recording = RecordingPipeline::new("increment");
    recording
        .pipeline
        .add_step("increment", |ctx: &mut PipelineContext| ctx.data += 1);

    let result = recording.run_from(1);

    assert_pipeline_completed(&result);
    assert_eq!(result.context.data, 2);
    assert_execution_order(&result, &["increment"]);
}

fn add_five(ctx: &mut PipelineContext) {
    ctx.data += 5;
}

fn square(ctx: &mut PipelineContext) {
    ctx.data *= ctx.data;
}

fn negate(ctx: &mut PipelineContext) {
    ctx.data = -ctx.data;
}

fn halve(ctx: &mut PipelineContext) {
    ctx.data /= 2;
}

/// Running the pipeline matches applying each step by hand
#[test]
fn test_matches_sequential_application() {
    let steps: [(&str, fn(&mut PipelineContext)); 4] = [
        ("add five", add_five),
        ("square", square),
        ("negate", negate),
        ("halve", halve),
    ];

    for start in [-3, 0, 1, 7] {
        let mut by_hand = PipelineContext::new(start);
        for (_, step) in &steps {
            step(&mut by_hand);
        }

        let mut pipeline = Pipeline::new("composed");
        for (name, step) in &steps {
            pipeline.add_step(*name, *step);
        }
        let ctx = pipeline.run(PipelineContext::new(start)).unwrap();

        assert_eq!(ctx, by_hand, "start value {}", start);
    }
}

/// Reordering the same steps changes the result
#[test]
fn test_order_is_significant() {
    let mut add_then_double = Pipeline::new("add then double");
    add_then_double
        .add_step("add", |ctx: &mut PipelineContext| ctx.data += 1)
        .add_step("double", |ctx: &mut PipelineContext| ctx.data *= 2);

    let mut double_then_add = Pipeline::new("double then add");
    double_then_add
        .add_step("double", |ctx: &mut PipelineContext| ctx.data *= 2)
        .add_step("add", |ctx: &mut PipelineContext| ctx.data += 1);

    assert_eq!(add_then_double.run(PipelineContext::new(3)).unwrap().data, 8);
    assert_eq!(double_then_add.run(PipelineContext::new(3)).unwrap().data, 7);
}

/// Each step observes what earlier steps left in the context
#[test]
fn test_steps_see_predecessor_notes() {
    let mut recording = RecordingPipeline::new("notes");
    recording
        .pipeline
        .add_step("validate", |ctx: &mut PipelineContext| ctx.add_note("validated"))
        .add_step("count notes", |ctx: &mut PipelineContext| {
            ctx.data = ctx.notes.len() as i64
        })
        .add_step("duplicate", |ctx: &mut PipelineContext| ctx.data += 0);

    let result = recording.run_from(0);

    assert_pipeline_completed(&result);
    assert_eq!(result.context.data, 1);
    assert_eq!(result.context.notes, vec!["validated"]);
    assert_execution_order(&result, &["validate", "count notes", "duplicate"]);
}
