//! CLI command definitions

use crate::demo::Section;
use clap::Args;

/// Run the demonstration
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Only run these sections (repeatable; default: all)
    #[arg(long, value_enum)]
    pub only: Vec<Section>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// List the demonstration sections
#[derive(Debug, Args, Clone)]
pub struct ListCommand {
    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Validate an options file
#[derive(Debug, Args, Clone)]
pub struct ValidateCommand {
    /// Path to options YAML file
    #[arg(short, long)]
    pub file: String,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}
