//! Mono sample buffers.

use emotive_spec::SAMPLE_RATE;

use crate::mixer::peak;

/// Converts a duration to a sample count at the output rate, rounding to the
/// nearest sample.
#[inline]
pub fn seconds_to_samples(seconds: f64) -> usize {
    (seconds * SAMPLE_RATE as f64).round().max(0.0) as usize
}

/// A growable buffer of 32-bit float samples at [`SAMPLE_RATE`], mono.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AudioBuffer {
    samples: Vec<f32>,
}

impl AudioBuffer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a buffer of `len` zero samples.
    pub fn silence(len: usize) -> Self {
        Self {
            samples: vec![0.0; len],
        }
    }

    /// Creates a buffer from 32-bit samples.
    pub fn from_samples(samples: Vec<f32>) -> Self {
        Self { samples }
    }

    /// Creates a buffer from 64-bit working samples.
    pub fn from_f64(samples: &[f64]) -> Self {
        Self {
            samples: samples.iter().map(|&s| s as f32).collect(),
        }
    }

    /// Returns the samples.
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Returns the samples mutably.
    pub fn samples_mut(&mut self) -> &mut [f32] {
        &mut self.samples
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns true if the buffer holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.samples.len() as f64 / SAMPLE_RATE as f64
    }

    /// Appends a copy of another buffer's samples.
    pub fn append(&mut self, other: &AudioBuffer) {
        self.samples.extend_from_slice(&other.samples);
    }

    /// Peak absolute sample value. NaN samples are ignored.
    pub fn peak(&self) -> f64 {
        peak(&self.samples)
    }

    /// Root-mean-square level; zero for an empty buffer.
    pub fn rms(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.samples.iter().map(|&s| (s as f64) * (s as f64)).sum();
        (sum / self.samples.len() as f64).sqrt()
    }

    /// Returns true if the buffer is empty or every sample is zero.
    pub fn is_silent(&self) -> bool {
        self.peak() == 0.0
    }
}
