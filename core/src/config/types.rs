//! Resolved settings types
//!
//! Core only accepts fully resolved, validated settings.
//! All discovery, loading, and merging happens in CLI layer.

use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Default prompt shown in live mode
pub const DEFAULT_PROMPT: &str = "> ";

/// How results are written to standard output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Human-readable result panel
    #[default]
    Text,
    /// One JSON document per result
    Json,
}

impl OutputFormat {
    /// Get the format name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(ConfigError::InvalidValue {
                field: "format".to_string(),
                value: other.to_string(),
            }),
        }
    }
}

/// Fully resolved settings ready for use
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Output format for lookups and the table
    pub format: OutputFormat,
    /// Whether to emit ANSI colors
    pub color: bool,
    /// Prompt shown in front of the live input line
    pub prompt: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            color: true,
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }
}

impl Settings {
    /// Set the output format
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Enable or disable colors
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Set the live mode prompt
    pub fn with_prompt(mut self, prompt: String) -> Self {
        self.prompt = prompt;
        self
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        // The prompt shares a single terminal row with the input
        if self.prompt.chars().any(char::is_control) {
            return Err(ConfigError::InvalidValue {
                field: "prompt".to_string(),
                value: self.prompt.escape_debug().to_string(),
            }
            .into());
        }

        Ok(())
    }
}
