//! Core building blocks
//!
//! The two reusable shapes of the crate: the [`Outcome`] wrapper and the
//! step [`Pipeline`], plus the options every demonstration reads.

pub mod config;
pub mod context;
pub mod outcome;
pub mod pipeline;
pub mod state;

pub use config::{DemoOptions, ExportFormat};
pub use context::*;
pub use outcome::*;
pub use pipeline::*;
pub use state::*;
