//! Error types for audio backend.

use emotive_spec::BackendError;
use thiserror::Error;

/// Result type for audio operations.
pub type AudioResult<T> = Result<T, AudioError>;

/// Errors that can occur during audio generation.
#[derive(Debug, Error)]
pub enum AudioError {
    /// Input text is not valid UTF-8.
    #[error("invalid input: {message}")]
    InvalidInput {
        /// Error message.
        message: String,
    },

    /// A sample is NaN or infinite and cannot be converted to PCM.
    #[error("non-finite sample at index {index}")]
    NonFiniteSample {
        /// Index of the first offending sample.
        index: usize,
    },

    /// PCM payload does not fit in a RIFF chunk.
    #[error("PCM payload of {bytes} bytes exceeds the WAV size limit")]
    BufferTooLarge {
        /// Payload size in bytes.
        bytes: usize,
    },

    /// Byte buffer is not a readable WAV file.
    #[error("invalid WAV data: {message}")]
    InvalidWav {
        /// Error message.
        message: String,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AudioError {
    /// Creates an invalid input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Creates an invalid WAV error.
    pub fn invalid_wav(message: impl Into<String>) -> Self {
        Self::InvalidWav {
            message: message.into(),
        }
    }
}

impl From<std::str::Utf8Error> for AudioError {
    fn from(err: std::str::Utf8Error) -> Self {
        Self::invalid_input(format!(
            "text is not valid UTF-8 (first bad byte at offset {})",
            err.valid_up_to()
        ))
    }
}

impl BackendError for AudioError {
    fn code(&self) -> &'static str {
        match self {
            AudioError::InvalidInput { .. } => "AUDIO_001",
            AudioError::NonFiniteSample { .. } => "AUDIO_002",
            AudioError::BufferTooLarge { .. } => "AUDIO_003",
            AudioError::InvalidWav { .. } => "AUDIO_004",
            AudioError::Io(_) => "AUDIO_005",
        }
    }

    fn category(&self) -> &'static str {
        "audio"
    }
}
