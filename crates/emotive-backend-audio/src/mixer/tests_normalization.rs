//! Tests for peak normalization.

use super::*;

#[test]
fn test_normalize_to_target() {
    let mut samples = vec![0.5, -0.3, 0.25, -0.2];
    let gain = normalize_peak(&mut samples, 0.8);

    assert!((gain - 1.6).abs() < 1e-9);
    assert!((peak(&samples) - 0.8).abs() < 1e-6);
}

#[test]
fn test_normalize_scales_down_loud_audio() {
    let mut samples = vec![2.0, -1.5, 3.0, -2.5];
    normalize_peak(&mut samples, 0.8);

    assert!((peak(&samples) - 0.8).abs() < 1e-6);
    // Relative shape preserved
    assert!((samples[0] / samples[2] - 2.0 / 3.0).abs() < 1e-6);
}

#[test]
fn test_normalize_silent_audio() {
    let mut samples = vec![0.0; 4];
    let gain = normalize_peak(&mut samples, 0.8);

    // Silent audio should remain silent (no division by zero)
    assert_eq!(gain, 1.0);
    assert!(samples.iter().all(|&s| s == 0.0));
}

#[test]
fn test_negative_peak_counts() {
    let mut samples = vec![0.1, -0.4];
    normalize_peak(&mut samples, 0.8);
    assert!((samples[1] + 0.8).abs() < 1e-6);
}

#[test]
fn test_peak_ignores_nan() {
    assert_eq!(peak(&[f32::NAN, 0.25, -0.5]), 0.5);
    assert_eq!(peak(&[]), 0.0);
}
