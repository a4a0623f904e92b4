//! WAV header decoding.

use crate::error::{AudioError, AudioResult};

use super::pcm::find_chunk;

/// Header fields and payload of a 16-bit PCM WAV file.
#[derive(Debug, Clone, PartialEq)]
pub struct WavInfo<'a> {
    /// Audio format tag (1 = PCM).
    pub audio_format: u16,
    /// Number of channels.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bytes per second.
    pub byte_rate: u32,
    /// Bytes per sample frame.
    pub block_align: u16,
    /// Bits per sample.
    pub bits_per_sample: u16,
    /// Raw `data` payload.
    pub data: &'a [u8],
}

impl<'a> WavInfo<'a> {
    /// Decodes the RIFF header, `fmt ` chunk and `data` chunk.
    ///
    /// # Errors
    /// `InvalidWav` if the container is malformed or the `fmt ` chunk is
    /// shorter than 16 bytes
    pub fn parse(wav_data: &'a [u8]) -> AudioResult<Self> {
        if wav_data.len() < 12 || &wav_data[0..4] != b"RIFF" || &wav_data[8..12] != b"WAVE" {
            return Err(AudioError::invalid_wav("missing RIFF/WAVE header"));
        }

        let fmt = find_chunk(wav_data, b"fmt ")
            .ok_or_else(|| AudioError::invalid_wav("missing fmt chunk"))?;
        if fmt.len() < 16 {
            return Err(AudioError::invalid_wav(format!(
                "fmt chunk is {} bytes, expected at least 16",
                fmt.len()
            )));
        }
        let data = find_chunk(wav_data, b"data")
            .ok_or_else(|| AudioError::invalid_wav("missing or truncated data chunk"))?;

        let u16_at = |pos: usize| u16::from_le_bytes([fmt[pos], fmt[pos + 1]]);
        let u32_at =
            |pos: usize| u32::from_le_bytes([fmt[pos], fmt[pos + 1], fmt[pos + 2], fmt[pos + 3]]);

        Ok(Self {
            audio_format: u16_at(0),
            channels: u16_at(2),
            sample_rate: u32_at(4),
            byte_rate: u32_at(8),
            block_align: u16_at(12),
            bits_per_sample: u16_at(14),
            data,
        })
    }

    /// Number of sample frames in the payload.
    pub fn num_frames(&self) -> usize {
        if self.block_align == 0 {
            return 0;
        }
        self.data.len() / self.block_align as usize
    }

    /// Duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.num_frames() as f64 / self.sample_rate as f64
    }

    /// Decodes 16-bit payload samples to floats in [-1, 1], all channels
    /// interleaved.
    ///
    /// # Errors
    /// `InvalidWav` unless the file is 16-bit PCM
    pub fn samples(&self) -> AudioResult<Vec<f32>> {
        if self.audio_format != 1 || self.bits_per_sample != 16 {
            return Err(AudioError::invalid_wav(format!(
                "unsupported encoding: format {}, {} bits",
                self.audio_format, self.bits_per_sample
            )));
        }
        Ok(self
            .data
            .chunks_exact(2)
            .map(|b| i16::from_le_bytes([b[0], b[1]]) as f32 / 32767.0)
            .collect())
    }

    /// Peak absolute decoded sample value.
    pub fn peak(&self) -> AudioResult<f64> {
        Ok(self
            .samples()?
            .iter()
            .map(|s| (*s as f64).abs())
            .fold(0.0_f64, f64::max))
    }
}
