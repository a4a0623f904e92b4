//! Amplitude envelopes.
//!
//! Short vowel and word envelopes are built from linear ramps; emotion
//! recipes use closed-form exponential and linear decays evaluated at a time
//! in seconds.

/// Generates `len` evenly spaced values from `start` to `end` inclusive.
///
/// A single value is `start`; zero length is empty.
pub fn linspace(start: f64, end: f64, len: usize) -> Vec<f64> {
    match len {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (len - 1) as f64;
            (0..len).map(|i| start + step * i as f64).collect()
        }
    }
}

/// Generates an attack/decay curve for a sound of `len` samples.
///
/// The first `len / attack_divisor` samples ramp from 0 to 1 and the last
/// `len / decay_divisor` samples ramp from 1 to 0; the middle holds at 1.
/// When the two ramps overlap the decay wins.
///
/// # Arguments
/// * `len` - Length of the sound in samples
/// * `attack_divisor` - Attack length is `len / attack_divisor` (10 = 10%)
/// * `decay_divisor` - Decay length is `len / decay_divisor` (5 = 20%)
pub fn attack_decay(len: usize, attack_divisor: usize, decay_divisor: usize) -> Vec<f64> {
    let mut envelope = vec![1.0; len];

    let attack_len = len / attack_divisor.max(1);
    for (slot, value) in envelope.iter_mut().zip(linspace(0.0, 1.0, attack_len)) {
        *slot = value;
    }

    let decay_len = len / decay_divisor.max(1);
    let decay_start = len - decay_len;
    for (slot, value) in envelope[decay_start..]
        .iter_mut()
        .zip(linspace(1.0, 0.0, decay_len))
    {
        *slot = value;
    }

    envelope
}

/// Applies a linear fade-in and fade-out of `fade_len` samples in place.
///
/// The fades multiply, so on very short buffers they compound rather than
/// overwrite each other.
pub fn apply_fade(samples: &mut [f64], fade_len: usize) {
    let fade_len = fade_len.min(samples.len());
    if fade_len == 0 {
        return;
    }

    for (sample, gain) in samples.iter_mut().zip(linspace(0.0, 1.0, fade_len)) {
        *sample *= gain;
    }

    let tail_start = samples.len() - fade_len;
    for (sample, gain) in samples[tail_start..]
        .iter_mut()
        .zip(linspace(1.0, 0.0, fade_len))
    {
        *sample *= gain;
    }
}

/// Exponential decay `exp(-rate * t)`.
#[inline]
pub fn exp_decay(rate: f64, t: f64) -> f64 {
    (-rate * t).exp()
}

/// Linear taper `1 - depth * progress`, with `progress` in [0, 1].
#[inline]
pub fn linear_taper(depth: f64, progress: f64) -> f64 {
    1.0 - depth * progress
}

/// Amplitude ripple `1 + depth * sin(2π * rate * t)`.
#[inline]
pub fn ripple(depth: f64, rate: f64, t: f64) -> f64 {
    1.0 + depth * (std::f64::consts::TAU * rate * t).sin()
}
