//! Error and warning types for requests and backends.

use thiserror::Error;

/// Warning codes for request validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WarningCode {
    /// W001: Voice id is not registered; the default voice will be used
    UnknownVoice,
    /// W002: Text is empty or blank; output will be the fallback tone
    EmptyText,
    /// W003: Text contains bracketed tokens that are not emotion markers
    UnrecognizedTag,
}

impl WarningCode {
    /// Returns the warning code string (e.g., "W001").
    pub fn code(&self) -> &'static str {
        match self {
            WarningCode::UnknownVoice => "W001",
            WarningCode::EmptyText => "W002",
            WarningCode::UnrecognizedTag => "W003",
        }
    }
}

impl std::fmt::Display for WarningCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A non-fatal request validation finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestWarning {
    /// The warning code.
    pub code: WarningCode,
    /// Human-readable warning message.
    pub message: String,
}

impl RequestWarning {
    /// Creates a new request warning.
    pub fn new(code: WarningCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for RequestWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

/// Top-level error type for request and report handling.
#[derive(Debug, Error)]
pub enum SpecError {
    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Common trait for backend errors.
///
/// Gives every backend error a stable code and category so the CLI can
/// report failures uniformly in JSON output.
pub trait BackendError: std::error::Error {
    /// Get the error code for reporting (e.g., "AUDIO_001").
    fn code(&self) -> &'static str;

    /// Get a human-readable message describing the error.
    fn message(&self) -> String {
        self.to_string()
    }

    /// Get the error category (e.g., "audio").
    fn category(&self) -> &'static str;
}
