//! Main entry point for synthesis.
//!
//! Text is parsed into segments, each segment is rendered with its own
//! seeded RNG, and the results are assembled into a single WAV file.

#[cfg(test)]
mod tests;

use emotive_spec::{voice, Report, Segment, SegmentReport, SynthRequest, VoiceProfile};
use emotive_spec::{DEFAULT_SEED, REPORT_VERSION};
use tracing::debug;

use crate::buffer::AudioBuffer;
use crate::error::AudioResult;
use crate::mixer::assemble_with_report;
use crate::rng::create_segment_rng;
use crate::synthesis::{EmotionSynth, SegmentSynth, SpeechSynth};
use crate::wav::WavResult;

/// One segment of a finished synthesis.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedSegment {
    /// The parsed segment.
    pub segment: Segment,
    /// Samples it contributed before assembly.
    pub num_samples: usize,
}

/// Result of a synthesis.
#[derive(Debug, Clone)]
pub struct GenerateResult {
    /// WAV file data.
    pub wav: WavResult,
    /// Voice actually used.
    pub voice: &'static VoiceProfile,
    /// Voice id as requested.
    pub requested_voice: String,
    /// Seed every segment stream was derived from.
    pub seed: u32,
    /// Rendered segments in order.
    pub segments: Vec<RenderedSegment>,
}

impl GenerateResult {
    /// Builds a serializable report of this synthesis.
    pub fn report(&self) -> Report {
        Report {
            report_version: REPORT_VERSION,
            requested_voice: self.requested_voice.clone(),
            voice: self.voice.id.to_string(),
            seed: self.seed,
            segments: self
                .segments
                .iter()
                .enumerate()
                .map(|(index, rendered)| SegmentReport {
                    index,
                    kind: rendered.segment.label().to_string(),
                    text: match &rendered.segment {
                        Segment::Speech { text } => Some(text.clone()),
                        Segment::Emotion { .. } => None,
                    },
                    num_samples: rendered.num_samples,
                })
                .collect(),
            sample_rate: self.wav.sample_rate,
            num_samples: self.wav.num_samples,
            duration_seconds: self.wav.duration_seconds(),
            peak: self.wav.peak,
            fallback_used: self.wav.fallback_used,
            pcm_hash: self.wav.pcm_hash.clone(),
            backend_version: backend_version(),
        }
    }
}

/// Backend identifier recorded in reports.
pub fn backend_version() -> String {
    format!("{} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

/// Renders one segment with the stream derived from `seed` and its position.
pub fn render_segment(
    segment: &Segment,
    voice: &VoiceProfile,
    seed: u32,
    index: u32,
) -> AudioBuffer {
    let mut rng = create_segment_rng(seed, index);
    match segment {
        Segment::Speech { text } => SpeechSynth::new(text.as_str()).render(voice, &mut rng),
        Segment::Emotion { kind } => EmotionSynth::new(*kind).render(voice, &mut rng),
    }
}

/// Synthesizes annotated text with the default seed.
///
/// Unknown voices fall back to the default voice; this never fails and
/// always returns a playable WAV file.
///
/// # Arguments
/// * `text` - Text with optional markers such as `<laugh>`
/// * `voice_id` - Voice id, matched case-insensitively
///
/// # Returns
/// Complete WAV file bytes
pub fn synthesize(text: &str, voice_id: &str) -> Vec<u8> {
    synthesize_with_seed(text, voice_id, DEFAULT_SEED).wav.into_bytes()
}

/// Synthesizes annotated text with an explicit seed.
pub fn synthesize_with_seed(text: &str, voice_id: &str, seed: u32) -> GenerateResult {
    let voice = voice::lookup(voice_id);
    let parsed = emotive_spec::parse(text);

    let mut buffers = Vec::with_capacity(parsed.len());
    let mut segments = Vec::with_capacity(parsed.len());
    for (index, segment) in parsed.into_iter().enumerate() {
        let buffer = render_segment(&segment, voice, seed, index as u32);
        debug!(
            index,
            kind = segment.label(),
            num_samples = buffer.len(),
            "rendered segment"
        );
        segments.push(RenderedSegment {
            segment,
            num_samples: buffer.len(),
        });
        buffers.push(buffer);
    }

    GenerateResult {
        wav: assemble_with_report(&buffers),
        voice,
        requested_voice: voice_id.to_string(),
        seed,
        segments,
    }
}

/// Synthesizes text supplied as raw bytes.
///
/// # Errors
/// `InvalidInput` if `raw_text` is not valid UTF-8
pub fn synthesize_utf8(
    raw_text: &[u8],
    voice_id: &str,
    seed: u32,
) -> AudioResult<GenerateResult> {
    let text = std::str::from_utf8(raw_text)?;
    Ok(synthesize_with_seed(text, voice_id, seed))
}

/// Synthesizes a request document.
pub fn generate(request: &SynthRequest) -> GenerateResult {
    synthesize_with_seed(&request.text, &request.voice, request.seed)
}
