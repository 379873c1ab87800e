//! Scenario-based tests for patterns

#[path = "../helpers.rs"]
mod helpers;

mod outcome_properties;
mod pipeline_failure;
mod pipeline_order;
mod specification_filter;
