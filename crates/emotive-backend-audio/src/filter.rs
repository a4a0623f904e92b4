//! Smoothing filter.
//!
//! A centred moving average used as a light low-pass over rendered speech.

/// Width of the smoothing window applied to speech segments.
pub const SMOOTHING_WIDTH: usize = 5;

/// Applies a centred moving average of `width` taps in place.
///
/// Output has the same length as the input; samples outside the buffer
/// count as zero. Buffers no longer than `width` are left untouched, as are
/// widths below 2.
pub fn moving_average(samples: &mut [f64], width: usize) {
    if width < 2 || samples.len() <= width {
        return;
    }

    let input = samples.to_vec();
    // For even widths the window leans one sample towards the past.
    let before = width / 2;
    let after = width - 1 - before;
    let scale = 1.0 / width as f64;

    for (i, out) in samples.iter_mut().enumerate() {
        let start = i.saturating_sub(before);
        let end = (i + after + 1).min(input.len());
        *out = input[start..end].iter().sum::<f64>() * scale;
    }
}
