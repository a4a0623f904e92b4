//! WAV encoding result type.

/// Encoded WAV bytes plus facts about the audio they carry.
#[derive(Debug, Clone, PartialEq)]
pub struct WavResult {
    /// Complete WAV file bytes.
    pub wav_data: Vec<u8>,
    /// BLAKE3 hash of the PCM payload only.
    pub pcm_hash: String,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of samples.
    pub num_samples: usize,
    /// Peak absolute sample value written, before PCM quantization.
    pub peak: f64,
    /// Whether the fallback tone replaced the requested audio.
    pub fallback_used: bool,
}

impl WavResult {
    /// Returns the duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.num_samples as f64 / self.sample_rate as f64
    }

    /// Consumes the result, returning the WAV bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.wav_data
    }
}
