//! Joins rendered segments into one WAV file.

use emotive_spec::SAMPLE_RATE;
use tracing::warn;

use crate::buffer::{seconds_to_samples, AudioBuffer};
use crate::error::AudioResult;
use crate::synthesis::{sample_time, sine};
use crate::wav::{
    pcm16_value, samples_to_pcm16, wav_header, write_wav_to_vec, WavFormat, WavResult,
    WAV_HEADER_LEN,
};

use super::processing::{normalize_peak, peak};

/// Peak level of normalized output.
pub const TARGET_PEAK: f64 = 0.8;
/// Fallback tone frequency in Hz.
pub const FALLBACK_FREQUENCY: f64 = 440.0;
/// Fallback tone length in seconds.
pub const FALLBACK_SECONDS: f64 = 0.5;
/// Fallback tone amplitude.
pub const FALLBACK_AMPLITUDE: f64 = 0.1;

/// Concatenates buffers in order with no gap or overlap.
pub fn concatenate(buffers: &[AudioBuffer]) -> AudioBuffer {
    let total: usize = buffers.iter().map(AudioBuffer::len).sum();
    let mut out = AudioBuffer::from_samples(Vec::with_capacity(total));
    for buffer in buffers {
        out.append(buffer);
    }
    out
}

/// The short tone returned in place of silent or unencodable audio.
pub fn fallback_tone() -> AudioBuffer {
    let samples: Vec<f64> = (0..seconds_to_samples(FALLBACK_SECONDS))
        .map(|i| FALLBACK_AMPLITUDE * sine(FALLBACK_FREQUENCY, sample_time(i)))
        .collect();
    AudioBuffer::from_f64(&samples)
}

/// Assembles segments into WAV bytes.
///
/// See [`assemble_with_report`].
pub fn assemble(buffers: &[AudioBuffer]) -> Vec<u8> {
    assemble_with_report(buffers).wav_data
}

/// Assembles segments into WAV bytes and reports what was written.
///
/// Segments are concatenated and peak-normalized to [`TARGET_PEAK`]. An empty
/// or all-zero result, or one that cannot be encoded, is replaced by the
/// [`fallback_tone`]. This never fails.
pub fn assemble_with_report(buffers: &[AudioBuffer]) -> WavResult {
    let mut combined = concatenate(buffers);

    if combined.is_silent() {
        warn!(
            num_samples = combined.len(),
            "assembled audio is silent, using fallback tone"
        );
        return fallback_result();
    }

    normalize_peak(combined.samples_mut(), TARGET_PEAK);

    match encode(combined.samples()) {
        Ok(result) => result,
        Err(e) => {
            warn!(error = %e, "failed to encode assembled audio, using fallback tone");
            fallback_result()
        }
    }
}

fn encode(samples: &[f32]) -> AudioResult<WavResult> {
    let pcm = samples_to_pcm16(samples)?;
    let wav_data = write_wav_to_vec(&WavFormat::mono(SAMPLE_RATE), &pcm)?;
    Ok(WavResult {
        pcm_hash: blake3::hash(&pcm).to_hex().to_string(),
        wav_data,
        sample_rate: SAMPLE_RATE,
        num_samples: samples.len(),
        peak: peak(samples),
        fallback_used: false,
    })
}

fn fallback_result() -> WavResult {
    let tone = fallback_tone();
    match encode(tone.samples()) {
        Ok(result) => WavResult {
            fallback_used: true,
            ..result
        },
        // Unreachable for the fixed tone
        Err(_) => raw_fallback_result(&tone),
    }
}

fn raw_fallback_result(tone: &AudioBuffer) -> WavResult {
    let pcm: Vec<u8> = tone
        .samples()
        .iter()
        .flat_map(|&s| pcm16_value(s).to_le_bytes())
        .collect();
    let format = WavFormat::mono(SAMPLE_RATE);

    let mut wav_data = Vec::with_capacity(WAV_HEADER_LEN + pcm.len());
    wav_data.extend_from_slice(&wav_header(&format, pcm.len() as u32));
    wav_data.extend_from_slice(&pcm);

    WavResult {
        pcm_hash: blake3::hash(&pcm).to_hex().to_string(),
        wav_data,
        sample_rate: SAMPLE_RATE,
        num_samples: tone.len(),
        peak: tone.peak(),
        fallback_used: true,
    }
}
