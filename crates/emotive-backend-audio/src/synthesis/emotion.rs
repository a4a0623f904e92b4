//! Emotion vocalization synthesis.
//!
//! Every [`EmotionKind`] has a fixed recipe: a duration, a waveform pattern
//! and a multiplier applied to the voice's base frequency. Durations never
//! depend on the voice, only pitch does.

use emotive_spec::{EmotionKind, VoiceProfile};
use rand_pcg::Pcg32;

use crate::buffer::{seconds_to_samples, AudioBuffer};
use crate::envelope::{exp_decay, linear_taper, ripple};
use crate::rng::centered_noise;

use super::{sample_time, sine, FrequencySweep, SegmentSynth};

/// Waveform shape of a recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmotionPattern {
    /// Rhythmic voiced bursts.
    Laugh,
    /// Single soft tone with ripple.
    Chuckle,
    /// Falling tone over breath noise.
    Sigh,
    /// Noise burst with a high tone.
    Gasp,
    /// Long falling vowel.
    Yawn,
    /// Two noise bursts.
    Cough,
    /// High tone with nasal noise.
    Sniffle,
    /// Low modulated tone.
    Groan,
}

/// Fixed synthesis parameters for one emotion kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmotionRecipe {
    /// Rendered length in seconds.
    pub duration_seconds: f64,
    /// Waveform shape.
    pub pattern: EmotionPattern,
    /// Multiplier applied to the voice base frequency.
    pub frequency_multiplier: f64,
}

impl EmotionRecipe {
    /// Returns the recipe for `kind`.
    pub fn for_kind(kind: EmotionKind) -> &'static EmotionRecipe {
        match kind {
            EmotionKind::Laugh => &LAUGH,
            EmotionKind::Chuckle => &CHUCKLE,
            EmotionKind::Sigh => &SIGH,
            EmotionKind::Gasp => &GASP,
            EmotionKind::Yawn => &YAWN,
            EmotionKind::Cough => &COUGH,
            EmotionKind::Sniffle => &SNIFFLE,
            EmotionKind::Groan => &GROAN,
        }
    }

    /// Rendered length in samples.
    pub fn num_samples(&self) -> usize {
        seconds_to_samples(self.duration_seconds)
    }
}

static LAUGH: EmotionRecipe = EmotionRecipe {
    duration_seconds: 1.5,
    pattern: EmotionPattern::Laugh,
    frequency_multiplier: 1.2,
};
static CHUCKLE: EmotionRecipe = EmotionRecipe {
    duration_seconds: 0.8,
    pattern: EmotionPattern::Chuckle,
    frequency_multiplier: 1.1,
};
static SIGH: EmotionRecipe = EmotionRecipe {
    duration_seconds: 1.0,
    pattern: EmotionPattern::Sigh,
    frequency_multiplier: 0.8,
};
static GASP: EmotionRecipe = EmotionRecipe {
    duration_seconds: 0.5,
    pattern: EmotionPattern::Gasp,
    frequency_multiplier: 1.5,
};
static YAWN: EmotionRecipe = EmotionRecipe {
    duration_seconds: 2.0,
    pattern: EmotionPattern::Yawn,
    frequency_multiplier: 0.7,
};
static COUGH: EmotionRecipe = EmotionRecipe {
    duration_seconds: 0.6,
    pattern: EmotionPattern::Cough,
    frequency_multiplier: 0.5,
};
static SNIFFLE: EmotionRecipe = EmotionRecipe {
    duration_seconds: 0.4,
    pattern: EmotionPattern::Sniffle,
    frequency_multiplier: 1.3,
};
static GROAN: EmotionRecipe = EmotionRecipe {
    duration_seconds: 1.2,
    pattern: EmotionPattern::Groan,
    frequency_multiplier: 0.6,
};

const LAUGH_BURSTS_PER_SECOND: f64 = 4.0;
const LAUGH_BURST_SECONDS: f64 = 0.15;
const COUGH_BURSTS: usize = 2;
/// Fraction of each cough slot that is sounded.
const COUGH_BURST_FILL: f64 = 0.6;
/// Time span the cough envelope covers across one burst, in seconds.
const COUGH_ENVELOPE_SPAN: f64 = 0.1;

/// Renderer for one emotion segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmotionSynth {
    /// Which vocalization.
    pub kind: EmotionKind,
}

impl EmotionSynth {
    /// Creates a renderer for `kind`.
    pub fn new(kind: EmotionKind) -> Self {
        Self { kind }
    }
}

impl SegmentSynth for EmotionSynth {
    fn render(&self, voice: &VoiceProfile, rng: &mut Pcg32) -> AudioBuffer {
        let recipe = EmotionRecipe::for_kind(self.kind);
        let n = recipe.num_samples();
        let d = recipe.duration_seconds;
        let f = voice.base_frequency * recipe.frequency_multiplier;

        let samples = match recipe.pattern {
            EmotionPattern::Laugh => laugh(n, d, f),
            EmotionPattern::Chuckle => (0..n)
                .map(|i| {
                    let t = sample_time(i);
                    let tone = 0.25 * sine(f, t) + 0.15 * sine(f * 3.5, t);
                    tone * exp_decay(3.0, t) * ripple(0.3, 6.0, t) * 0.1
                })
                .collect(),
            EmotionPattern::Sigh => {
                let phases = FrequencySweep::new(f * 1.2, f * 0.6).phases(n);
                phases
                    .iter()
                    .enumerate()
                    .map(|(i, phase)| {
                        let t = sample_time(i);
                        let breath = 0.2 * centered_noise(rng);
                        let envelope = exp_decay(1.5, t) * linear_taper(0.3, t / d);
                        (0.4 * phase.sin() + breath) * envelope * 0.08
                    })
                    .collect()
            }
            EmotionPattern::Gasp => (0..n)
                .map(|i| {
                    let t = sample_time(i);
                    let noise = 0.3 * centered_noise(rng);
                    let tone = 0.2 * sine(f * 2.0, t);
                    (noise + tone) * exp_decay(12.0, t) * 0.12
                })
                .collect(),
            EmotionPattern::Yawn => {
                let phases = FrequencySweep::new(f * 0.9, f * 0.4).phases(n);
                phases
                    .iter()
                    .enumerate()
                    .map(|(i, phase)| {
                        let t = sample_time(i);
                        // Formants track the sweep at fixed ratios
                        let tone = 0.4 * phase.sin()
                            + 0.3 * (phase * 2.5).sin()
                            + 0.1 * (phase * 5.0).sin();
                        tone * linear_taper(0.4, t / d) * exp_decay(0.8, t) * 0.1
                    })
                    .collect()
            }
            EmotionPattern::Cough => cough(n, rng),
            EmotionPattern::Sniffle => (0..n)
                .map(|i| {
                    let t = sample_time(i);
                    let tone = 0.3 * sine(f * 1.5, t);
                    let nasal = 0.2 * centered_noise(rng);
                    (tone + nasal) * exp_decay(8.0, t) * 0.08
                })
                .collect(),
            EmotionPattern::Groan => {
                let low = f * 0.7;
                (0..n)
                    .map(|i| {
                        let t = sample_time(i);
                        let tone = 0.4 * sine(low, t) + 0.2 * sine(low * 2.5, t);
                        tone * linear_taper(0.3, t / d) * ripple(0.2, 3.0, t) * 0.12
                    })
                    .collect()
            }
        };

        AudioBuffer::from_f64(&samples)
    }
}

/// Rhythmic "ha" bursts at four per second.
fn laugh(n: usize, duration: f64, f: f64) -> Vec<f64> {
    let mut out = vec![0.0; n];
    let burst_count = (duration * LAUGH_BURSTS_PER_SECOND) as usize;
    let burst_len = seconds_to_samples(LAUGH_BURST_SECONDS);

    for burst in 0..burst_count {
        let start = burst * n / burst_count;
        let end = (start + burst_len).min(n);
        for (offset, slot) in out[start..end].iter_mut().enumerate() {
            let t = sample_time(offset);
            let tone = 0.3 * sine(f, t) + 0.2 * sine(f * 4.0, t) + 0.1 * sine(f * 7.0, t);
            *slot = tone * exp_decay(8.0, t) * ripple(0.3, 10.0, t) * 0.15;
        }
    }

    out
}

/// Two noise-dominated bursts, each sounding for the first part of its slot.
fn cough(n: usize, rng: &mut Pcg32) -> Vec<f64> {
    let mut out = vec![0.0; n];

    for burst in 0..COUGH_BURSTS {
        let start = burst * n / COUGH_BURSTS;
        let end = (((burst as f64 + COUGH_BURST_FILL) * n as f64 / COUGH_BURSTS as f64) as usize)
            .min(n);
        if end <= start {
            continue;
        }
        let len = end - start;
        let span = (len - 1).max(1) as f64;
        for (offset, slot) in out[start..end].iter_mut().enumerate() {
            let t = COUGH_ENVELOPE_SPAN * offset as f64 / span;
            *slot = 0.4 * centered_noise(rng) * exp_decay(15.0, t) * 0.2;
        }
    }

    out
}
