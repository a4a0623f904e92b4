//! PCM payload extraction and hashing.

/// Walks the RIFF chunks of a WAV buffer and returns the `data` payload.
///
/// # Arguments
/// * `wav_data` - Complete WAV file bytes
///
/// # Returns
/// PCM data if found, or None if the container is malformed
pub fn extract_pcm_data(wav_data: &[u8]) -> Option<&[u8]> {
    find_chunk(wav_data, b"data")
}

/// Computes the BLAKE3 hash of a WAV file's PCM payload.
///
/// # Returns
/// Hex-encoded hash, or None if the container is malformed
pub fn compute_pcm_hash(wav_data: &[u8]) -> Option<String> {
    extract_pcm_data(wav_data).map(|pcm| blake3::hash(pcm).to_hex().to_string())
}

/// Returns the body of the first chunk named `id`.
pub(crate) fn find_chunk<'a>(wav_data: &'a [u8], id: &[u8; 4]) -> Option<&'a [u8]> {
    if wav_data.len() < 12 || &wav_data[0..4] != b"RIFF" || &wav_data[8..12] != b"WAVE" {
        return None;
    }

    let mut pos = 12;
    while pos + 8 <= wav_data.len() {
        let chunk_id = &wav_data[pos..pos + 4];
        let chunk_size = u32::from_le_bytes([
            wav_data[pos + 4],
            wav_data[pos + 5],
            wav_data[pos + 6],
            wav_data[pos + 7],
        ]) as usize;

        let body_start = pos + 8;
        let body_end = body_start.checked_add(chunk_size)?;
        if chunk_id == id {
            return wav_data.get(body_start..body_end);
        }

        // Chunks are padded to an even length
        pos = body_end + (chunk_size & 1);
    }

    None
}
