//! Tests for segment assembly.

use super::*;
use crate::buffer::AudioBuffer;
use crate::wav::{extract_pcm_data, samples_to_pcm16, write_wav_to_vec, WavFormat, WavInfo};

fn pcm_values(wav: &[u8]) -> Vec<i16> {
    extract_pcm_data(wav)
        .unwrap()
        .chunks_exact(2)
        .map(|b| i16::from_le_bytes([b[0], b[1]]))
        .collect()
}

#[test]
fn test_concatenate_preserves_order_and_length() {
    let a = AudioBuffer::from_samples(vec![0.1, 0.2]);
    let b = AudioBuffer::silence(3);
    let c = AudioBuffer::from_samples(vec![-0.3]);

    let joined = concatenate(&[a, b, c]);
    assert_eq!(joined.samples(), &[0.1, 0.2, 0.0, 0.0, 0.0, -0.3]);
    assert!(concatenate(&[]).is_empty());
}

#[test]
fn test_fallback_tone_shape() {
    let tone = fallback_tone();
    assert_eq!(tone.len(), 12000);
    assert!((tone.peak() - FALLBACK_AMPLITUDE).abs() < 1e-3);
    assert_eq!(tone.samples()[0], 0.0);
}

#[test]
fn test_assemble_empty_uses_fallback() {
    let result = assemble_with_report(&[]);
    assert!(result.fallback_used);
    assert_eq!(result.num_samples, 12000);

    let info = WavInfo::parse(&result.wav_data).unwrap();
    assert_eq!(info.num_frames(), 12000);
    assert!(pcm_values(&result.wav_data).iter().any(|&v| v != 0));
}

#[test]
fn test_assemble_silence_uses_fallback() {
    let wav = assemble(&[AudioBuffer::silence(5000), AudioBuffer::silence(10)]);
    let values = pcm_values(&wav);
    assert_eq!(values.len(), 12000);
    // Fallback amplitude 0.1 stays well below the normalized level
    let peak = values.iter().map(|v| v.unsigned_abs()).max().unwrap();
    assert!(peak > 3000 && peak <= 3277, "peak {peak}");
}

#[test]
fn test_assemble_normalizes_to_target() {
    let result = assemble_with_report(&[
        AudioBuffer::from_samples(vec![0.0, 0.1, -0.05]),
        AudioBuffer::from_samples(vec![0.02]),
    ]);

    assert!(!result.fallback_used);
    assert_eq!(result.num_samples, 4);
    assert!((result.peak - TARGET_PEAK).abs() < 1e-6);
    assert_eq!(pcm_values(&result.wav_data), vec![0, 26213, -13106, 5242]);
}

#[test]
fn test_assemble_loud_input_does_not_clip() {
    let wav = assemble(&[AudioBuffer::from_samples(vec![4.0, -8.0, 2.0])]);
    let values = pcm_values(&wav);
    assert!(values.iter().all(|v| v.unsigned_abs() <= 26214));
}

#[test]
fn test_assemble_non_finite_uses_fallback() {
    let result = assemble_with_report(&[AudioBuffer::from_samples(vec![0.2, f32::INFINITY])]);
    assert!(result.fallback_used);
    assert_eq!(result.num_samples, 12000);
}

#[test]
fn test_assemble_is_deterministic() {
    let buffers = [AudioBuffer::from_samples(vec![0.3, -0.1, 0.05])];
    let a = assemble_with_report(&buffers);
    let b = assemble_with_report(&buffers);
    assert_eq!(a, b);
    assert_eq!(a.pcm_hash.len(), 64);
}

#[test]
fn test_fallback_bytes_come_from_encoder() {
    let tone = fallback_tone();
    let pcm = samples_to_pcm16(tone.samples()).unwrap();
    let expected = write_wav_to_vec(&WavFormat::mono(24000), &pcm).unwrap();

    let result = assemble_with_report(&[]);
    assert_eq!(result.wav_data, expected);
    assert_eq!(result.pcm_hash, blake3::hash(&pcm).to_hex().to_string());
    assert_eq!(result.peak, tone.peak());
}
