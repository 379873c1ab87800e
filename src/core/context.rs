//! Pipeline context - shared state passed through every step

use serde::{Deserialize, Serialize};

/// Mutable state threaded through a pipeline run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineContext {
    /// Counter mutated by the steps
    pub data: i64,

    /// Free-form notes left by steps for their successors
    pub notes: Vec<String>,
}

impl PipelineContext {
    /// Create a context with an initial counter value
    pub fn new(data: i64) -> Self {
        Self {
            data,
            notes: Vec::new(),
        }
    }

    /// Leave a note for later steps
    pub fn add_note(&mut self, note: impl Into<String>) {
        self.notes.push(note.into());
    }
}
