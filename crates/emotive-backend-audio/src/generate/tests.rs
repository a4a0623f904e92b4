//! Tests for the synthesis entry points.

use emotive_spec::{EmotionKind, Segment, SynthRequest};

use super::*;
use crate::error::AudioError;
use crate::wav::WavInfo;

#[test]
fn test_segment_sample_counts() {
    let result = synthesize_with_seed("Hello <laugh> friend", "tara", 7);
    let counts: Vec<usize> = result.segments.iter().map(|s| s.num_samples).collect();

    assert_eq!(counts, vec![19200, 36000, 19200]);
    assert_eq!(result.wav.num_samples, 74400);
    assert!(!result.wav.fallback_used);
}

#[test]
fn test_segments_follow_parse_order() {
    let result = synthesize_with_seed("<sigh>ok<gasp>", "leo", 1);
    let segments: Vec<&Segment> = result.segments.iter().map(|s| &s.segment).collect();
    assert_eq!(
        segments,
        vec![
            &Segment::emotion(EmotionKind::Sigh),
            &Segment::speech("ok"),
            &Segment::emotion(EmotionKind::Gasp),
        ]
    );
}

#[test]
fn test_unknown_voice_uses_default() {
    let result = synthesize_with_seed("hello", "nobody", 3);
    assert_eq!(result.voice.id, "tara");
    assert_eq!(result.requested_voice, "nobody");
    assert_eq!(
        synthesize("hello", "nobody"),
        synthesize("hello", "tara")
    );
}

#[test]
fn test_voice_lookup_ignores_case() {
    assert_eq!(synthesize("<groan>", "LEO"), synthesize("<groan>", "leo"));
}

#[test]
fn test_seed_changes_noise() {
    let a = synthesize_with_seed("<sniffle>", "zoe", 1);
    let b = synthesize_with_seed("<sniffle>", "zoe", 2);
    assert_ne!(a.wav.pcm_hash, b.wav.pcm_hash);
}

#[test]
fn test_segment_streams_are_positional() {
    let seed = 11;
    let voice = voice::lookup("mia");
    let cough = Segment::emotion(EmotionKind::Cough);

    // The same segment at the same index renders identically
    assert_eq!(
        render_segment(&cough, voice, seed, 1),
        render_segment(&cough, voice, seed, 1)
    );
    assert_ne!(
        render_segment(&cough, voice, seed, 0),
        render_segment(&cough, voice, seed, 1)
    );
}

#[test]
fn test_empty_text_is_fallback_tone() {
    let result = synthesize_with_seed("", "tara", DEFAULT_SEED);
    assert!(result.segments.is_empty());
    assert!(result.wav.fallback_used);
    assert_eq!(result.wav.num_samples, 12000);
}

#[test]
fn test_whitespace_text_is_fallback_tone() {
    let result = synthesize_with_seed("   ", "tara", DEFAULT_SEED);
    assert_eq!(result.segments.len(), 1);
    assert_eq!(result.segments[0].num_samples, 1000);
    assert!(result.wav.fallback_used);
}

#[test]
fn test_synthesize_utf8() {
    let ok = synthesize_utf8("hi <cough>".as_bytes(), "dan", 5).unwrap();
    assert_eq!(ok.segments.len(), 2);

    let err = synthesize_utf8(&[b'h', 0xff, b'i'], "dan", 5).unwrap_err();
    assert!(matches!(err, AudioError::InvalidInput { .. }));
    assert!(err.to_string().contains("offset 1"));
}

#[test]
fn test_generate_request_matches_direct_call() {
    let request = SynthRequest::new("Well <chuckle>").voice("jess").seed(99);
    let from_request = generate(&request);
    let direct = synthesize_with_seed("Well <chuckle>", "jess", 99);
    assert_eq!(from_request.wav, direct.wav);
}

#[test]
fn test_output_header() {
    let wav = synthesize("testing", "zac");
    let info = WavInfo::parse(&wav).unwrap();
    assert_eq!(info.channels, 1);
    assert_eq!(info.sample_rate, 24000);
    assert_eq!(info.bits_per_sample, 16);
    assert_eq!(info.num_frames(), 19200);
}

#[test]
fn test_report_contents() {
    let result = synthesize_with_seed("Hi <yawn>", "Leah", 8);
    let report = result.report();

    assert_eq!(report.voice, "leah");
    assert_eq!(report.requested_voice, "Leah");
    assert_eq!(report.seed, 8);
    assert_eq!(report.segments.len(), 2);
    assert_eq!(report.segments[0].kind, "speech");
    assert_eq!(report.segments[0].text.as_deref(), Some("Hi "));
    assert_eq!(report.segments[1].kind, "yawn");
    assert_eq!(report.segments[1].text, None);
    assert_eq!(report.num_samples, 19200 + 48000);
    assert!((report.duration_seconds - 2.8).abs() < 1e-9);
    assert_eq!(report.pcm_hash, result.wav.pcm_hash);
    assert!(report.backend_version.starts_with("emotive-backend-audio v"));
}
