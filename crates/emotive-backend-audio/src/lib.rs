//! Emotive Audio Backend
//!
//! Turns text annotated with emotion markers into a mono 16-bit WAV file.
//!
//! # Overview
//!
//! Input such as `"Hello <laugh> friend"` is split into segments. Plain text
//! is rendered with a simple formant model tuned by the selected voice, and
//! each marker is rendered with a fixed parametric recipe:
//!
//! - **Speech** - Summed sines at vowel resonances, one slot per word
//! - **Laugh / Chuckle** - Pulsed or rippling tones
//! - **Sigh / Yawn / Groan** - Falling or tapering tones with breath
//! - **Gasp / Cough / Sniffle** - Noise-driven bursts
//!
//! The segments are concatenated, peak-normalized and encoded at 24 kHz.
//!
//! # Determinism
//!
//! Given the same text, voice and seed, the output is byte-identical. All
//! noise comes from PCG32 streams seeded per segment via BLAKE3.
//!
//! # Example
//!
//! ```
//! use emotive_backend_audio::{synthesize, synthesize_with_seed};
//!
//! let wav = synthesize("Hello <laugh> friend", "tara");
//! assert_eq!(&wav[0..4], b"RIFF");
//!
//! let result = synthesize_with_seed("<sigh>", "leo", 7);
//! println!("PCM hash: {}", result.wav.pcm_hash);
//! ```
//!
//! # Crate Structure
//!
//! - [`synthesize()`] - Main entry point
//! - [`buffer`] - Mono sample buffers
//! - [`envelope`] - Amplitude envelopes and ramps
//! - [`filter`] - Moving-average smoothing
//! - [`mixer`] - Segment assembly, normalization and fallback tone
//! - [`rng`] - Deterministic RNG with seed derivation
//! - [`synthesis`] - Speech and emotion renderers
//! - [`wav`] - Deterministic WAV writer and header reader

pub mod buffer;
pub mod envelope;
pub mod error;
pub mod filter;
pub mod generate;
pub mod mixer;
pub mod rng;
pub mod synthesis;
pub mod wav;

// Re-export main types at crate root
pub use buffer::AudioBuffer;
pub use error::{AudioError, AudioResult};
pub use generate::{
    generate, synthesize, synthesize_utf8, synthesize_with_seed, GenerateResult, RenderedSegment,
};
pub use mixer::{assemble, assemble_with_report};
pub use wav::{WavInfo, WavResult};
