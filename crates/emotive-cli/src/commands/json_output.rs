//! JSON output types for machine-readable CLI output.
//!
//! Every command accepts `--json`, which replaces the colored human output
//! with a single JSON document on stdout.

use emotive_spec::{BackendError, RequestWarning};
use serde::Serialize;

/// Error codes for CLI operations.
///
/// Backend failures pass their own codes through (e.g., "AUDIO_004").
pub mod error_codes {
    /// File could not be read
    pub const FILE_READ: &str = "CLI_001";
    /// File could not be written
    pub const FILE_WRITE: &str = "CLI_002";
    /// Request document could not be parsed
    pub const REQUEST_PARSE: &str = "CLI_003";
    /// Neither text nor a request file was given
    pub const MISSING_INPUT: &str = "CLI_004";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "AUDIO_004")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Source file path (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            file: None,
        }
    }

    /// Sets the file path.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// Converts a backend error, keeping its stable code.
    pub fn from_backend(err: &dyn BackendError) -> Self {
        Self::new(err.code(), err.message())
    }
}

/// A structured warning in JSON output.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct JsonWarning {
    /// Stable warning code (e.g., "W001")
    pub code: String,
    /// Human-readable warning message
    pub message: String,
}

impl From<&RequestWarning> for JsonWarning {
    fn from(warning: &RequestWarning) -> Self {
        Self {
            code: warning.code.code().to_string(),
            message: warning.message.clone(),
        }
    }
}

/// Prints a value as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}
