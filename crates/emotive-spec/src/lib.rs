//! Emotive Spec Library
//!
//! Domain types shared by the Emotive synthesis backend and CLI.
//!
//! # Overview
//!
//! Emotive turns annotated text such as `"Hello <laugh> friend"` into a mono
//! WAV buffer. This crate owns everything that is not signal processing:
//!
//! - **Voices** - the static registry of named acoustic parameter sets
//! - **Emotions** - the eight recognized inline markers
//! - **Segments** - the annotation parser splitting text into speech and emotion runs
//! - **Requests** - the JSON synthesis request document
//! - **Reports** - the JSON description of a finished synthesis
//!
//! # Example
//!
//! ```
//! use emotive_spec::segment::{parse, Segment};
//! use emotive_spec::EmotionKind;
//!
//! let segments = parse("Hi <laugh> there");
//! assert_eq!(
//!     segments,
//!     vec![
//!         Segment::speech("Hi "),
//!         Segment::emotion(EmotionKind::Laugh),
//!         Segment::speech(" there"),
//!     ]
//! );
//! ```
//!
//! # Modules
//!
//! - [`emotion`]: Emotion marker kinds and tag spelling
//! - [`error`]: Error and warning types
//! - [`report`]: Synthesis report types
//! - [`request`]: Synthesis request document
//! - [`segment`]: Segment type and annotation parser
//! - [`voice`]: Voice profile registry

pub mod emotion;
pub mod error;
pub mod report;
pub mod request;
pub mod segment;
pub mod voice;

// Re-export commonly used types at the crate root
pub use emotion::EmotionKind;
pub use error::{BackendError, RequestWarning, SpecError, WarningCode};
pub use report::{Report, SegmentReport, REPORT_VERSION};
pub use request::{SynthRequest, DEFAULT_SEED};
pub use segment::{parse, Segment};
pub use voice::{VoiceProfile, DEFAULT_VOICE_ID};

/// Output sample rate shared by every stage of the pipeline, in Hz.
pub const SAMPLE_RATE: u32 = 24_000;
