//! Step pipeline - an ordered list of steps applied to a shared context

use crate::core::state::PipelineState;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// A unit of work applied to the context
pub type StepFn<C> = Box<dyn FnMut(&mut C) -> anyhow::Result<()> + Send>;

/// Type for event handlers
pub type EventHandler = Arc<dyn Fn(&PipelineEvent) + Send + Sync>;

/// A named step registered on a pipeline
pub struct Step<C> {
    /// Step name, used in events and errors
    pub name: String,

    run: StepFn<C>,
}

impl<C> fmt::Debug for Step<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Step").field("name", &self.name).finish()
    }
}

/// Events that can occur while a pipeline runs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineEvent {
    StepStarted {
        index: usize,
        name: String,
    },
    StepCompleted {
        index: usize,
        name: String,
    },
    StepFailed {
        index: usize,
        name: String,
        error: String,
    },
}

/// Errors surfaced by [`Pipeline::execute`]
#[derive(Debug, Error)]
pub enum PipelineError {
    /// A step returned an error; the steps after it did not run
    #[error("step {index} ('{name}') failed: {source}")]
    StepFailed {
        index: usize,
        name: String,
        #[source]
        source: anyhow::Error,
    },

    /// Pipelines are single-shot
    #[error("pipeline '{name}' cannot run again (state: {state:?})")]
    AlreadyExecuted { name: String, state: PipelineState },
}

/// An ordered sequence of steps run against one context
pub struct Pipeline<C> {
    name: String,
    steps: Vec<Step<C>>,
    state: PipelineState,
    event_handlers: Vec<EventHandler>,
}

impl<C> Pipeline<C> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            steps: Vec::new(),
            state: PipelineState::Building,
            event_handlers: Vec::new(),
        }
    }

    /// Append a step that mutates the context in place
    pub fn add_step<F>(&mut self, name: impl Into<String>, mut step: F) -> &mut Self
    where
        F: FnMut(&mut C) + Send + 'static,
    {
        self.steps.push(Step {
            name: name.into(),
            run: Box::new(move |ctx| {
                step(ctx);
                Ok(())
            }),
        });
        self
    }

    /// Append a step that may fail and abort the run
    pub fn add_fallible_step<F>(&mut self, name: impl Into<String>, step: F) -> &mut Self
    where
        F: FnMut(&mut C) -> anyhow::Result<()> + Send + 'static,
    {
        self.steps.push(Step {
            name: name.into(),
            run: Box::new(step),
        });
        self
    }

    /// Add an event handler
    pub fn add_event_handler<F>(&mut self, handler: F) -> &mut Self
    where
        F: Fn(&PipelineEvent) + Send + Sync + 'static,
    {
        self.event_handlers.push(Arc::new(handler));
        self
    }

    fn emit_event(&self, event: PipelineEvent) {
        for handler in &self.event_handlers {
            handler(&event);
        }
    }

    pub fn state(&self) -> PipelineState {
        self.state
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Step names in registration order
    pub fn step_names(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.name.as_str()).collect()
    }

    /// Run every step against `context`, in registration order
    ///
    /// Stops at the first failing step. The context keeps whatever the
    /// preceding steps did to it.
    ///
    /// A step that panics leaves the pipeline `Executing` with its steps
    /// gone; any later call returns `AlreadyExecuted`.
    pub fn execute(&mut self, context: &mut C) -> Result<(), PipelineError> {
        if self.state != PipelineState::Building {
            return Err(PipelineError::AlreadyExecuted {
                name: self.name.clone(),
                state: self.state,
            });
        }

        self.state = PipelineState::Executing;
        debug!("Running pipeline '{}' ({} steps)", self.name, self.steps.len());

        let mut steps = std::mem::take(&mut self.steps);
        let mut outcome = Ok(());

        for (index, step) in steps.iter_mut().enumerate() {
            self.emit_event(PipelineEvent::StepStarted {
                index,
                name: step.name.clone(),
            });

            if let Err(source) = (step.run)(context) {
                warn!("Step {} ('{}') failed: {}", index, step.name, source);
                self.emit_event(PipelineEvent::StepFailed {
                    index,
                    name: step.name.clone(),
                    error: source.to_string(),
                });
                outcome = Err(PipelineError::StepFailed {
                    index,
                    name: step.name.clone(),
                    source,
                });
                break;
            }

            debug!("Step {} ('{}') completed", index, step.name);
            self.emit_event(PipelineEvent::StepCompleted {
                index,
                name: step.name.clone(),
            });
        }

        self.steps = steps;
        self.state = if outcome.is_ok() {
            PipelineState::Done
        } else {
            PipelineState::Failed
        };
        outcome
    }

    /// Consume the pipeline, run it, and hand back the final context
    pub fn run(mut self, mut context: C) -> Result<C, PipelineError> {
        self.execute(&mut context)?;
        Ok(context)
    }
}

impl<C> fmt::Debug for Pipeline<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("name", &self.name)
            .field("steps", &self.steps)
            .field("state", &self.state)
            .finish()
    }
}
