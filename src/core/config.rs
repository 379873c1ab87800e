//! Demonstration options loaded from YAML

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use anyhow::{Context, Result};

/// File name looked up under the user's config directory
pub const OPTIONS_FILE_NAME: &str = "options.yaml";

/// Output format for the template method exporter
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
}

/// Options consumed by the demonstration sections
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DemoOptions {
    /// Value echoed by the options section
    pub greeting: String,

    /// Author of the sample post, also the greeted name
    pub author: String,

    /// Title of the sample post
    pub post_title: String,

    /// Counter value the pipeline starts from
    pub initial_counter: i64,

    /// Number of items the iterator yields
    pub iterator_limit: u32,

    /// Format written by the template method exporter
    pub export_format: ExportFormat,
}

impl Default for DemoOptions {
    fn default() -> Self {
        Self {
            greeting: "Hello from options".to_string(),
            author: "Tonio".to_string(),
            post_title: "Design Patterns in Rust".to_string(),
            initial_counter: 1,
            iterator_limit: 3,
            export_format: ExportFormat::Csv,
        }
    }
}

impl DemoOptions {
    /// Load options from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read options file {}", path.display()))?;
        Self::from_yaml(&content)
    }

    /// Parse options from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let options: DemoOptions = serde_yaml::from_str(yaml)?;
        options.validate()?;
        Ok(options)
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if self.author.trim().is_empty() {
            anyhow::bail!("Option 'author' must not be empty");
        }

        if self.post_title.trim().is_empty() {
            anyhow::bail!("Option 'post_title' must not be empty");
        }

        if self.iterator_limit == 0 {
            anyhow::bail!("Option 'iterator_limit' must be at least 1");
        }

        Ok(())
    }

    /// Default location of the options file, if a config dir exists
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("patterns").join(OPTIONS_FILE_NAME))
    }

    /// Resolve options from an explicit path, the default path, or defaults
    ///
    /// An explicit path must exist; the default path is only used if present.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }
}
