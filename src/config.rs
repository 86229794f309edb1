//! Run configuration.
//!
//! Everything here is optional: a run with no config file uses comma-separated
//! input without headers, trims fields, and warns about verbatim duplicate
//! rows. A JSON file can override any of it, and CLI flags override the file.
//!
//! ```json
//! {
//!   "poll": { "delimiter": ",", "has_headers": true },
//!   "disease": { "delimiter": "\t" },
//!   "duplicates": "reject"
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// How one delimited input is read
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SourceOptions {
    /// Field delimiter; must be ASCII
    pub delimiter: char,
    /// Skip the first row as a header
    pub has_headers: bool,
    /// Strip surrounding whitespace from every field
    pub trim: bool,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            delimiter: ',',
            has_headers: false,
            trim: true,
        }
    }
}

/// What to do when an input holds verbatim duplicate rows.
///
/// Duplicates are never removed; they only change whether the run proceeds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Say nothing
    Allow,
    /// Log a warning and continue
    #[default]
    Warn,
    /// Abort the run
    Reject,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    pub poll: SourceOptions,
    pub disease: SourceOptions,
    /// Query rows share the poll layout
    pub queries: SourceOptions,
    pub duplicates: DuplicatePolicy,
}

impl RunConfig {
    /// Load configuration from a JSON file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadError` if the file cannot be read, or
    /// `ConfigError::ParseError` if it is not a valid config.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse configuration from a JSON string
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ParseError` on malformed JSON or unknown keys.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Apply a delimiter / header override to every input
    pub fn override_sources(&mut self, delimiter: Option<char>, has_headers: bool) {
        for options in [&mut self.poll, &mut self.disease, &mut self.queries] {
            if let Some(delimiter) = delimiter {
                options.delimiter = delimiter;
            }
            if has_headers {
                options.has_headers = true;
            }
        }
    }
}
