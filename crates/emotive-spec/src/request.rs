//! Synthesis request document.
//!
//! A request is a small JSON document naming the text to speak, the voice
//! and the RNG seed:
//!
//! ```json
//! { "text": "Hello <laugh> friend", "voice": "tara", "seed": 42 }
//! ```
//!
//! `voice` and `seed` are optional.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{RequestWarning, SpecError, WarningCode};
use crate::segment::unrecognized_tags;
use crate::voice::{self, DEFAULT_VOICE_ID};

/// Seed used when a caller does not supply one.
pub const DEFAULT_SEED: u32 = 42;

fn default_voice() -> String {
    DEFAULT_VOICE_ID.to_string()
}

fn default_seed() -> u32 {
    DEFAULT_SEED
}

/// A complete synthesis request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SynthRequest {
    /// Annotated text to synthesize.
    pub text: String,
    /// Voice profile id.
    #[serde(default = "default_voice")]
    pub voice: String,
    /// Seed for every noise source in the render.
    #[serde(default = "default_seed")]
    pub seed: u32,
}

impl SynthRequest {
    /// Creates a request with the default voice and seed.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            voice: default_voice(),
            seed: DEFAULT_SEED,
        }
    }

    /// Sets the voice id.
    pub fn voice(mut self, voice: impl Into<String>) -> Self {
        self.voice = voice.into();
        self
    }

    /// Sets the seed.
    pub fn seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    /// Parses a request from JSON.
    pub fn from_json(json: &str) -> Result<Self, SpecError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a request file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SpecError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Serializes the request to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, SpecError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks the request for conditions that synthesize but may surprise.
    ///
    /// Requests never fail validation: every finding is a warning.
    pub fn validate(&self) -> Vec<RequestWarning> {
        let mut warnings = Vec::new();

        if !voice::contains(&self.voice) {
            warnings.push(RequestWarning::new(
                WarningCode::UnknownVoice,
                format!(
                    "voice '{}' is not registered, using '{}'",
                    self.voice, DEFAULT_VOICE_ID
                ),
            ));
        }

        if self.text.trim().is_empty() {
            warnings.push(RequestWarning::new(
                WarningCode::EmptyText,
                "text is empty, output will be the fallback tone",
            ));
        }

        for tag in unrecognized_tags(&self.text) {
            warnings.push(RequestWarning::new(
                WarningCode::UnrecognizedTag,
                format!("'{}' is not an emotion marker and will be spoken as text", tag),
            ));
        }

        warnings
    }
}
