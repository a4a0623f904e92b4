//! WAV writing and PCM conversion.

use std::io::Write;

use crate::error::{AudioError, AudioResult};

use super::format::WavFormat;

/// Size of the RIFF, `fmt ` and `data` headers written before the payload.
pub const WAV_HEADER_LEN: usize = 44;

/// Largest payload whose RIFF size field still fits in a `u32`.
const MAX_PCM_BYTES: usize = u32::MAX as usize - (WAV_HEADER_LEN - 8);

/// Builds the 44-byte header for a payload of `data_size` bytes.
pub fn wav_header(format: &WavFormat, data_size: u32) -> [u8; WAV_HEADER_LEN] {
    let mut header = [0u8; WAV_HEADER_LEN];
    // RIFF size excludes the 8-byte "RIFF" + size prefix
    let riff_size = data_size.saturating_add((WAV_HEADER_LEN - 8) as u32);

    header[0..4].copy_from_slice(b"RIFF");
    header[4..8].copy_from_slice(&riff_size.to_le_bytes());
    header[8..12].copy_from_slice(b"WAVE");

    header[12..16].copy_from_slice(b"fmt ");
    header[16..20].copy_from_slice(&16u32.to_le_bytes()); // Chunk size (16 for PCM)
    header[20..22].copy_from_slice(&1u16.to_le_bytes()); // Audio format (1 = PCM)
    header[22..24].copy_from_slice(&format.channels.to_le_bytes());
    header[24..28].copy_from_slice(&format.sample_rate.to_le_bytes());
    header[28..32].copy_from_slice(&format.byte_rate().to_le_bytes());
    header[32..34].copy_from_slice(&format.block_align().to_le_bytes());
    header[34..36].copy_from_slice(&format.bits_per_sample.to_le_bytes());

    header[36..40].copy_from_slice(b"data");
    header[40..44].copy_from_slice(&data_size.to_le_bytes());
    header
}

/// Writes a complete WAV file to a writer.
///
/// # Arguments
/// * `writer` - Output writer
/// * `format` - WAV format parameters
/// * `pcm_data` - Raw PCM samples as bytes
pub fn write_wav<W: Write>(writer: &mut W, format: &WavFormat, pcm_data: &[u8]) -> AudioResult<()> {
    let data_size = pcm_size(pcm_data.len())?;
    writer.write_all(&wav_header(format, data_size))?;
    writer.write_all(pcm_data)?;
    Ok(())
}

/// Writes a WAV file to a byte vector.
///
/// # Returns
/// Complete WAV file as bytes, or `BufferTooLarge` if the payload cannot be
/// described by a RIFF header
pub fn write_wav_to_vec(format: &WavFormat, pcm_data: &[u8]) -> AudioResult<Vec<u8>> {
    let mut buffer = Vec::with_capacity(WAV_HEADER_LEN + pcm_data.len());
    write_wav(&mut buffer, format, pcm_data)?;
    Ok(buffer)
}

fn pcm_size(len: usize) -> AudioResult<u32> {
    if len > MAX_PCM_BYTES {
        return Err(AudioError::BufferTooLarge { bytes: len });
    }
    Ok(len as u32)
}

/// Converts one sample to a 16-bit PCM value.
///
/// The sample is scaled by 32767, clamped to the `i16` range and truncated
/// toward zero. NaN maps to 0.
#[inline]
pub fn pcm16_value(sample: f32) -> i16 {
    let scaled = (sample as f64 * 32767.0).clamp(i16::MIN as f64, i16::MAX as f64);
    scaled as i16
}

/// Converts samples to little-endian 16-bit PCM bytes.
///
/// # Errors
/// `NonFiniteSample` for the first NaN or infinite sample, `BufferTooLarge`
/// if the payload would overflow a RIFF chunk
pub fn samples_to_pcm16(samples: &[f32]) -> AudioResult<Vec<u8>> {
    let bytes = samples.len().saturating_mul(2);
    if bytes > MAX_PCM_BYTES {
        return Err(AudioError::BufferTooLarge { bytes });
    }

    let mut pcm = Vec::with_capacity(bytes);
    for (index, &sample) in samples.iter().enumerate() {
        if !sample.is_finite() {
            return Err(AudioError::NonFiniteSample { index });
        }
        pcm.extend_from_slice(&pcm16_value(sample).to_le_bytes());
    }

    Ok(pcm)
}
