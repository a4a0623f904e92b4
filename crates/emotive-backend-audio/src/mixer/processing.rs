//! Peak measurement and normalization.

/// Peak absolute sample value. NaN samples are ignored.
pub fn peak(samples: &[f32]) -> f64 {
    samples
        .iter()
        .map(|s| (*s as f64).abs())
        .fold(0.0_f64, f64::max)
}

/// Scales samples so the peak absolute value equals `target_peak`.
///
/// Silent buffers are left untouched: there is nothing to scale, and a
/// near-zero peak must not be blown up into noise by a divide.
///
/// # Returns
/// The gain applied (1.0 when nothing was done)
pub fn normalize_peak(samples: &mut [f32], target_peak: f64) -> f64 {
    let current_peak = peak(samples);

    if current_peak > 0.0 {
        let gain = target_peak / current_peak;
        for sample in samples.iter_mut() {
            *sample = (*sample as f64 * gain) as f32;
        }
        gain
    } else {
        1.0
    }
}
