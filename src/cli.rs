//! CLI command implementations for Chuckie.

pub(crate) mod check;
pub(crate) mod replay;
pub(crate) mod run;

mod output;

use chuckie::Recording;
use clap::ValueEnum;
use std::error::Error;
use std::fmt;
use std::path::Path;

/// Output format for the `run` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// Machine-readable JSON output.
    Json,
    /// Structured text for LLM consumption.
    Llm,
}

/// Output format for the `replay` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum ReplayFormat {
    /// Plain text output.
    Text,
    /// Structured text for LLM consumption.
    Llm,
}

/// Output format for the `check` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum CheckFormat {
    /// Human-readable text output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// CLI error type.
#[derive(Debug)]
pub(crate) struct CliError {
    message: String,
}

impl CliError {
    /// Create a new CLI error.
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for CliError {}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::new(format!("JSON serialization failed: {e}"))
    }
}

impl From<chuckie::ParseError> for CliError {
    fn from(e: chuckie::ParseError) -> Self {
        Self::new(format!("Invalid board: {e}"))
    }
}

impl From<chuckie::ReplayError> for CliError {
    fn from(e: chuckie::ReplayError) -> Self {
        Self::new(e.to_string())
    }
}

/// Load a recording, naming the file in any error.
fn load_recording(path: &Path) -> Result<Recording, CliError> {
    Recording::load(path)
        .map_err(|e| CliError::new(format!("Failed to load recording {}: {e}", path.display())))
}

/// Display name of a recording: its own name, else the file name.
fn recording_name(recording: &Recording, path: &Path) -> String {
    if recording.name.is_empty() {
        path.file_name()
            .map_or_else(|| "unknown".to_string(), |n| n.to_string_lossy().to_string())
    } else {
        recording.name.clone()
    }
}
