//! patterns - a showcase of common object-oriented and reactive design patterns

pub mod cli;
pub mod core;
pub mod demo;
pub mod patterns;

// Re-export commonly used types
pub use crate::core::{DemoOptions, Outcome, Pipeline, PipelineContext, PipelineError, PipelineEvent, PipelineState};
pub use crate::demo::{run_demonstration, Demonstration, Section, SectionReport};
