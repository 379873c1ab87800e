//! CLI output formatting

use crate::{
    core::{DemoOptions, PipelineEvent},
    demo::{Section, SectionReport},
};
use console::Emoji;
use serde_json::{json, Value};

// Re-export style
pub use console::style;

// Emojis for output
pub static CHECK: Emoji<'_, '_> = Emoji("✅ ", "✓ ");
pub static CROSS: Emoji<'_, '_> = Emoji("❌ ", "✗ ");
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "i ");
pub static ROCKET: Emoji<'_, '_> = Emoji("🚀 ", "> ");

/// One line per section: position, title, and the name accepted by `--only`
pub fn format_section_list() -> Vec<String> {
    Section::ALL
        .iter()
        .enumerate()
        .map(|(i, section)| {
            format!(
                "{:>2}. {} ({})",
                i + 1,
                style(section.title()).bold(),
                style(section_arg(*section)).dim()
            )
        })
        .collect()
}

/// Name of a section as accepted on the command line
pub fn section_arg(section: Section) -> String {
    use clap::ValueEnum;
    section
        .to_possible_value()
        .map(|value| value.get_name().to_string())
        .unwrap_or_else(|| section.title().to_string())
}

/// `list --json` document: section names in run order
pub fn section_list_json() -> Value {
    let names: Vec<String> = Section::ALL.iter().map(|s| section_arg(*s)).collect();
    json!({ "sections": names })
}

/// `run --json` document: every report with its section name and lines
pub fn reports_json(reports: &[SectionReport]) -> Value {
    json!({ "sections": reports })
}

/// Summary of validated options
pub fn format_options_summary(options: &DemoOptions) -> Vec<String> {
    vec![
        format!("  Greeting: {}", style(&options.greeting).bold()),
        format!("  Author: {}", style(&options.author).cyan()),
        format!("  Post title: {}", style(&options.post_title).cyan()),
        format!("  Initial counter: {}", style(options.initial_counter).cyan()),
        format!("  Iterator limit: {}", style(options.iterator_limit).cyan()),
        format!("  Export format: {:?}", options.export_format),
    ]
}

/// Closing status line for a run
pub fn format_run_summary(reports: &[SectionReport]) -> String {
    let lines: usize = reports.iter().map(|r| r.lines.len()).sum();
    format!(
        "{} {} sections, {} lines",
        CHECK,
        style(reports.len()).green(),
        style(lines).dim()
    )
}

/// Format a pipeline event for display
pub fn format_pipeline_event(event: &PipelineEvent) -> String {
    match event {
        PipelineEvent::StepStarted { index, name } => {
            format!("{} step {} {}", ROCKET, index, style(name).cyan())
        }
        PipelineEvent::StepCompleted { index, name } => {
            format!("{} step {} {}", CHECK, index, style(name).green())
        }
        PipelineEvent::StepFailed { index, name, error } => format!(
            "{} step {} {}: {}",
            CROSS,
            index,
            style(name).red(),
            style(error).dim()
        ),
    }
}
