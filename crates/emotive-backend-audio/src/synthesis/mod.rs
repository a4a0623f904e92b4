//! Synthesis modules for each segment type.
//!
//! - `speech` - Formant speech for plain-text segments
//! - `emotion` - Parametric recipes for emotion markers

pub mod emotion;
pub mod speech;

use std::f64::consts::TAU;

use emotive_spec::{VoiceProfile, SAMPLE_RATE};
use rand_pcg::Pcg32;

use crate::buffer::AudioBuffer;

pub use emotion::{EmotionPattern, EmotionRecipe, EmotionSynth};
pub use speech::{SpeechSynth, Vowel};

/// Common trait for segment renderers.
pub trait SegmentSynth {
    /// Renders the segment with the given voice.
    ///
    /// # Arguments
    /// * `voice` - Voice profile supplying the base frequency
    /// * `rng` - Deterministic RNG for any noise
    fn render(&self, voice: &VoiceProfile, rng: &mut Pcg32) -> AudioBuffer;
}

/// Sine of frequency `freq` Hz at time `t` seconds.
#[inline]
pub fn sine(freq: f64, t: f64) -> f64 {
    (TAU * freq * t).sin()
}

/// Time in seconds of sample `index`.
#[inline]
pub fn sample_time(index: usize) -> f64 {
    index as f64 / SAMPLE_RATE as f64
}

/// Linear frequency sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrequencySweep {
    /// Starting frequency in Hz.
    pub start_freq: f64,
    /// Ending frequency in Hz.
    pub end_freq: f64,
}

impl FrequencySweep {
    /// Creates a new sweep.
    pub fn new(start_freq: f64, end_freq: f64) -> Self {
        Self {
            start_freq,
            end_freq,
        }
    }

    /// Frequency at `progress` (0.0 to 1.0).
    pub fn at(&self, progress: f64) -> f64 {
        self.start_freq + (self.end_freq - self.start_freq) * progress
    }

    /// Accumulated phase (radians) per sample for a sweep over `num_samples`.
    ///
    /// Integrating the instantaneous frequency keeps the tone continuous as
    /// the pitch moves.
    pub fn phases(&self, num_samples: usize) -> Vec<f64> {
        let mut phases = Vec::with_capacity(num_samples);
        let mut phase = 0.0_f64;
        let dt = 1.0 / SAMPLE_RATE as f64;
        for i in 0..num_samples {
            phases.push(phase);
            let progress = if num_samples > 1 {
                i as f64 / (num_samples - 1) as f64
            } else {
                0.0
            };
            phase += TAU * self.at(progress) * dt;
        }
        phases
    }
}
