//! The demonstration: one section per pattern, printed in a fixed order

pub mod runner;

pub use runner::{run_demonstration, Demonstration};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{self, Write};

/// A section of the demonstration, in output order
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    Options,
    DependencyInjection,
    Repository,
    Specification,
    EventAggregator,
    Mediator,
    #[serde(rename = "result")]
    #[value(name = "result")]
    Outcome,
    NullObject,
    Async,
    Iterator,
    Observable,
    Middleware,
    Pipeline,
    TemplateMethod,
}

impl Section {
    /// Every section, in output order
    pub const ALL: [Section; 14] = [
        Section::Options,
        Section::DependencyInjection,
        Section::Repository,
        Section::Specification,
        Section::EventAggregator,
        Section::Mediator,
        Section::Outcome,
        Section::NullObject,
        Section::Async,
        Section::Iterator,
        Section::Observable,
        Section::Middleware,
        Section::Pipeline,
        Section::TemplateMethod,
    ];

    /// Title shown in the section banner
    pub fn title(&self) -> &'static str {
        match self {
            Section::Options => "Options",
            Section::DependencyInjection => "Dependency Injection",
            Section::Repository => "Repository",
            Section::Specification => "Specification",
            Section::EventAggregator => "Event Aggregator",
            Section::Mediator => "Mediator",
            Section::Outcome => "Result",
            Section::NullObject => "Null Object",
            Section::Async => "Async",
            Section::Iterator => "Iterator",
            Section::Observable => "Observable",
            Section::Middleware => "Middleware",
            Section::Pipeline => "Pipeline",
            Section::TemplateMethod => "Template Method",
        }
    }

    /// Banner line that opens the section
    pub fn banner(&self) -> String {
        format!("---- {} ----", self.title())
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Output produced by one section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionReport {
    pub section: Section,
    pub lines: Vec<String>,
}

impl SectionReport {
    pub fn new(section: Section, lines: Vec<String>) -> Self {
        Self { section, lines }
    }

    /// Banner followed by the section's lines
    pub fn render(&self) -> Vec<String> {
        std::iter::once(self.section.banner())
            .chain(self.lines.iter().cloned())
            .collect()
    }
}

/// Write every report as plain text lines
pub fn write_reports<W: Write>(out: &mut W, reports: &[SectionReport]) -> io::Result<()> {
    for report in reports {
        for line in report.render() {
            writeln!(out, "{}", line)?;
        }
    }
    out.flush()
}
