//! Segment assembly, normalization and the fallback tone.
//!
//! Rendered segments are joined end to end with no cross-fade, normalized to
//! a fixed peak and encoded as 16-bit PCM WAV. Silent or unencodable output is
//! replaced by a short audible tone so callers always receive playable audio.

mod assembler;
mod processing;

#[cfg(test)]
mod tests_assembler;
#[cfg(test)]
mod tests_normalization;

// Re-export public API
pub use assembler::{
    assemble, assemble_with_report, concatenate, fallback_tone, FALLBACK_AMPLITUDE,
    FALLBACK_FREQUENCY, FALLBACK_SECONDS, TARGET_PEAK,
};
pub use processing::{normalize_peak, peak};
