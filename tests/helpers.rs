//! Test utility functions for patterns

#![allow(dead_code)]

use patterns::core::{Pipeline, PipelineContext, PipelineError, PipelineEvent, PipelineState};
use patterns::demo::{run_demonstration, Section, SectionReport};
use patterns::DemoOptions;

use std::sync::{Arc, Mutex};

/// Pipeline whose events are captured for later assertions
pub struct RecordingPipeline {
    pub pipeline: Pipeline<PipelineContext>,
    events: Arc<Mutex<Vec<PipelineEvent>>>,
}

impl RecordingPipeline {
    pub fn new(name: &str) -> Self {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = events.clone();

        let mut pipeline = Pipeline::new(name);
        pipeline.add_event_handler(move |event| sink.lock().unwrap().push(event.clone()));

        Self { pipeline, events }
    }

    /// Run against a context starting at `data`
    pub fn run_from(&mut self, data: i64) -> PipelineTestResult {
        let mut context = PipelineContext::new(data);
        let result = self.pipeline.execute(&mut context);

        PipelineTestResult {
            context,
            result,
            state: self.pipeline.state(),
            events: self.events.lock().unwrap().clone(),
        }
    }
}

/// Test result from running a pipeline
#[derive(Debug)]
pub struct PipelineTestResult {
    pub context: PipelineContext,
    pub result: Result<(), PipelineError>,
    pub state: PipelineState,
    pub events: Vec<PipelineEvent>,
}

impl PipelineTestResult {
    /// Names of steps that completed, in order
    pub fn completed_steps(&self) -> Vec<String> {
        self.events
            .iter()
            .filter_map(|e| match e {
                PipelineEvent::StepCompleted { name, .. } => Some(name.clone()),
                _ => None,
            })
            .collect()
    }

    /// Names of steps that were started, in order
    pub fn started_steps(&self) -> Vec<String> {
        self.events
            .iter()
            .filter_map(|e| match e {
                PipelineEvent::StepStarted { name, .. } => Some(name.clone()),
                _ => None,
            })
            .collect()
    }

    /// Index and name of the step that failed, if any
    pub fn failed_step(&self) -> Option<(usize, String)> {
        match &self.result {
            Err(PipelineError::StepFailed { index, name, .. }) => Some((*index, name.clone())),
            _ => None,
        }
    }
}

/// Assert that the pipeline ran every step and finished
pub fn assert_pipeline_completed(result: &PipelineTestResult) {
    assert!(
        result.result.is_ok(),
        "Pipeline should complete, got {:?}",
        result.result
    );
    assert_eq!(result.state, PipelineState::Done);
}

/// Assert that steps completed in exactly this order
pub fn assert_execution_order(result: &PipelineTestResult, expected: &[&str]) {
    let completed = result.completed_steps();
    assert_eq!(
        completed, expected,
        "Steps should complete in registration order"
    );
}

/// Run the demonstration with default options
pub async fn run_default(sections: &[Section]) -> Vec<SectionReport> {
    run_demonstration(&DemoOptions::default(), sections)
        .await
        .expect("Demonstration should not fail")
}

/// Banner and content lines for a set of reports
pub fn rendered_lines(reports: &[SectionReport]) -> Vec<String> {
    reports.iter().flat_map(|r| r.render()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_pipeline_captures_events() {
        let mut recording = RecordingPipeline::new("recorded");
        recording
            .pipeline
            .add_step("a", |ctx: &mut PipelineContext| ctx.data += 1)
            .add_step("b", |ctx: &mut PipelineContext| ctx.data += 1);

        let result = recording.run_from(0);

        assert_pipeline_completed(&result);
        assert_execution_order(&result, &["a", "b"]);
        assert_eq!(result.started_steps(), vec!["a", "b"]);
        assert_eq!(result.failed_step(), None);
    }

    #[tokio::test]
    async fn test_rendered_lines_start_with_banner() {
        let reports = run_default(&[Section::Options]).await;
        let lines = rendered_lines(&reports);
        assert_eq!(lines[0], "---- Options ----");
    }
}
