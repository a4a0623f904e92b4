//! Deterministic RNG using PCG32 with BLAKE3 seed derivation.
//!
//! All randomness in the audio backend flows through this module to ensure
//! deterministic output. Each segment gets its own stream derived from the
//! request seed and the segment index, so editing one segment does not
//! change the noise of any other.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Creates a PCG32 RNG from a 32-bit seed.
///
/// The 32-bit seed is expanded to 64 bits by duplicating the value in both
/// halves, as required by PCG32's state initialization.
pub fn create_rng(seed: u32) -> Pcg32 {
    let seed64 = (seed as u64) | ((seed as u64) << 32);
    Pcg32::seed_from_u64(seed64)
}

/// Derives a seed for a specific segment from the request seed.
///
/// Uses BLAKE3 to hash the base seed concatenated with the segment index,
/// producing an independent seed for each segment.
pub fn derive_segment_seed(base_seed: u32, segment_index: u32) -> u32 {
    let mut input = Vec::with_capacity(8);
    input.extend_from_slice(&base_seed.to_le_bytes());
    input.extend_from_slice(&segment_index.to_le_bytes());

    let hash = blake3::hash(&input);

    // Truncate to u32 (first 4 bytes, little-endian)
    let bytes = hash.as_bytes();
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

/// Creates an RNG for a specific segment.
pub fn create_segment_rng(base_seed: u32, segment_index: u32) -> Pcg32 {
    create_rng(derive_segment_seed(base_seed, segment_index))
}

/// Draws one sample of zero-centred uniform noise in [-0.5, 0.5).
#[inline]
pub fn centered_noise(rng: &mut Pcg32) -> f64 {
    rng.gen::<f64>() - 0.5
}
