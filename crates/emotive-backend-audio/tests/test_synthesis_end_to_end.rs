//! End-to-end synthesis integration tests.

use emotive_backend_audio::wav::compute_pcm_hash;
use emotive_backend_audio::{
    generate, synthesize, synthesize_utf8, synthesize_with_seed, AudioError, WavInfo,
};
use emotive_spec::{EmotionKind, SynthRequest, DEFAULT_SEED};
use pretty_assertions::assert_eq;

// ============================================================================
// Duration Tests
// ============================================================================

#[test]
fn test_hello_laugh_friend_duration() {
    let wav = synthesize("Hello <laugh> friend", "tara");
    let info = WavInfo::parse(&wav).unwrap();

    // 0.8 s + 1.5 s + 0.8 s
    assert!((info.duration_seconds() - 3.1).abs() < 0.1);
    assert_eq!(info.num_frames(), 74400);
}

#[test]
fn test_every_emotion_has_recipe_duration() {
    let expected = [
        (EmotionKind::Laugh, 36000),
        (EmotionKind::Chuckle, 19200),
        (EmotionKind::Sigh, 24000),
        (EmotionKind::Gasp, 12000),
        (EmotionKind::Yawn, 48000),
        (EmotionKind::Cough, 14400),
        (EmotionKind::Sniffle, 9600),
        (EmotionKind::Groan, 28800),
    ];
    for (kind, frames) in expected {
        let result = synthesize_with_seed(kind.tag(), "zoe", DEFAULT_SEED);
        assert_eq!(result.wav.num_samples, frames, "{kind}");
        assert!(!result.wav.fallback_used, "{kind}");
    }
}

#[test]
fn test_speech_duration_scales_with_words() {
    let frames = |text: &str| synthesize_with_seed(text, "tara", 1).wav.num_samples;
    assert_eq!(frames("one"), 19200);
    assert_eq!(frames("one two"), 19200);
    assert_eq!(frames("one two three"), 28800);
    assert_eq!(frames("one two three four five six"), 57600);
}

// ============================================================================
// Determinism Tests
// ============================================================================

#[test]
fn test_gasp_is_deterministic() {
    assert_eq!(synthesize("<gasp>", "tara"), synthesize("<gasp>", "tara"));
}

#[test]
fn test_full_text_is_deterministic() {
    let text = "Oh <sigh> fine, <chuckle> let us go <cough>";
    let a = synthesize_with_seed(text, "mia", 1234);
    let b = synthesize_with_seed(text, "mia", 1234);
    assert_eq!(a.wav.wav_data, b.wav.wav_data);
    assert_eq!(a.report(), b.report());
}

#[test]
fn test_pcm_hash_matches_payload() {
    let result = synthesize_with_seed("hash me", "leo", 5);
    assert_eq!(
        compute_pcm_hash(&result.wav.wav_data),
        Some(result.wav.pcm_hash.clone())
    );
}

// ============================================================================
// Input Handling Tests
// ============================================================================

#[test]
fn test_unknown_voice_matches_default() {
    assert_eq!(synthesize("who am I", "robot"), synthesize("who am I", "tara"));
}

#[test]
fn test_unrecognized_tag_is_spoken() {
    let result = synthesize_with_seed("<whisper>", "tara", 1);
    assert_eq!(result.segments.len(), 1);
    assert_eq!(result.segments[0].num_samples, 19200);
}

#[test]
fn test_invalid_utf8_is_rejected() {
    let err = synthesize_utf8(b"caf\xc3", "tara", 1).unwrap_err();
    assert!(matches!(err, AudioError::InvalidInput { .. }));
}

#[test]
fn test_request_round_trip() {
    let request =
        SynthRequest::from_json(r#"{"text": "Hi <laugh>", "voice": "zac", "seed": 3}"#).unwrap();
    let result = generate(&request);
    assert_eq!(result.voice.id, "zac");
    assert_eq!(result.seed, 3);
    assert_eq!(result.wav.num_samples, 19200 + 36000);
}
