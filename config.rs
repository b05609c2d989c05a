//! Extraction settings: where to read the PDF, where to write the text and
//! how blank pages are treated.

use crate::error::{ExtractError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File name used for the output when no destination is configured.
pub const DEFAULT_OUTPUT_FILE_NAME: &str = "extracted_text.txt";

/// What to do with a page that yields no text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum EmptyPagePolicy {
    /// Treat the page as an empty string; it still gets its separator.
    #[default]
    Keep,
    /// Abort the extraction on the first blank page.
    Fail,
}

impl std::fmt::Display for EmptyPagePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmptyPagePolicy::Keep => write!(f, "keep"),
            EmptyPagePolicy::Fail => write!(f, "fail"),
        }
    }
}

/// Configuration for one extraction run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExtractConfig {
    /// PDF input location
    pub source_path: PathBuf,
    /// Text output location; `None` means `extracted_text.txt` next to the source
    pub destination_path: Option<PathBuf>,
    /// Handling of pages without extractable text
    pub empty_pages: EmptyPagePolicy,
    /// Print the extracted text to the console
    pub echo: bool,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            source_path: PathBuf::new(),
            destination_path: None,
            empty_pages: EmptyPagePolicy::default(),
            echo: true,
        }
    }
}

impl ExtractConfig {
    pub fn new<P: Into<PathBuf>>(source_path: P) -> Self {
        Self {
            source_path: source_path.into(),
            ..Default::default()
        }
    }

    pub fn with_destination<P: Into<PathBuf>>(mut self, destination_path: P) -> Self {
        self.destination_path = Some(destination_path.into());
        self
    }

    pub fn with_empty_pages(mut self, policy: EmptyPagePolicy) -> Self {
        self.empty_pages = policy;
        self
    }

    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = fs::read_to_string(path).map_err(|e| {
            ExtractError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;

        let config = Self::from_toml_str(&content).map_err(|e| match e {
            ExtractError::Config(msg) => {
                ExtractError::Config(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })?;

        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| ExtractError::Config(e.message().to_string()))
    }

    /// Resolved output path
    pub fn destination(&self) -> PathBuf {
        match &self.destination_path {
            Some(path) => path.clone(),
            None => self
                .source_path
                .parent()
                .unwrap_or_else(|| Path::new(""))
                .join(DEFAULT_OUTPUT_FILE_NAME),
        }
    }

    /// Check that the configuration describes a runnable extraction
    pub fn validate(&self) -> Result<()> {
        if self.source_path.as_os_str().is_empty() {
            return Err(ExtractError::Config("source_path is not set".to_string()));
        }

        let destination = self.destination();
        if destination.as_os_str().is_empty() {
            return Err(ExtractError::Config("destination_path is empty".to_string()));
        }
        if destination == self.source_path {
            return Err(ExtractError::Config(format!(
                "destination {} would overwrite the source PDF",
                destination.display()
            )));
        }

        debug!(
            "Configuration valid: {} -> {} (empty pages: {})",
            self.source_path.display(),
            destination.display(),
            self.empty_pages
        );
        Ok(())
    }
}
