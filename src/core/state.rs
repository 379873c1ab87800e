//! Pipeline lifecycle state

use serde::{Deserialize, Serialize};

/// Lifecycle of a single-shot pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PipelineState {
    /// Steps are still being registered
    Building,
    /// Steps are running
    Executing,
    /// Every step ran
    Done,
    /// A step failed and the run was aborted
    Failed,
}

impl Default for PipelineState {
    fn default() -> Self {
        PipelineState::Building
    }
}
