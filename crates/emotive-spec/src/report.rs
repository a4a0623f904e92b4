//! Report types describing a finished synthesis.
//!
//! A report records what was rendered (resolved voice, seed, per-segment
//! sample counts) and a BLAKE3 hash of the PCM payload so two renders can be
//! compared without diffing WAV files.

use serde::{Deserialize, Serialize};

/// Report schema version.
pub const REPORT_VERSION: u32 = 1;

/// A complete synthesis report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Report schema version.
    pub report_version: u32,
    /// Voice id as requested.
    pub requested_voice: String,
    /// Voice id actually used after fallback.
    pub voice: String,
    /// Seed used for every noise source.
    pub seed: u32,
    /// Rendered segments in order.
    pub segments: Vec<SegmentReport>,
    /// Output sample rate in Hz.
    pub sample_rate: u32,
    /// Total samples in the output.
    pub num_samples: usize,
    /// Output duration in seconds.
    pub duration_seconds: f64,
    /// Peak absolute sample value after normalization (0.0 to 1.0).
    pub peak: f64,
    /// Whether the fallback tone replaced the rendered audio.
    pub fallback_used: bool,
    /// Hex-encoded BLAKE3 hash of the PCM payload.
    pub pcm_hash: String,
    /// Backend identifier and version (e.g., "emotive-backend-audio v0.1.0").
    pub backend_version: String,
}

impl Report {
    /// Serializes the report to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serializes the report to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parses a report from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Standard report filename for an output stem.
    ///
    /// # Example
    ///
    /// ```
    /// use emotive_spec::report::Report;
    ///
    /// assert_eq!(Report::filename("greeting"), "greeting.report.json");
    /// ```
    pub fn filename(stem: &str) -> String {
        format!("{}.report.json", stem)
    }
}

/// One rendered segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentReport {
    /// Position in the segment list.
    pub index: usize,
    /// "speech" or the emotion name.
    pub kind: String,
    /// Literal text for speech segments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Samples this segment contributed.
    pub num_samples: usize,
}
