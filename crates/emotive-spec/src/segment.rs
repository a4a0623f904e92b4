//! Segment type and annotation parser.
//!
//! The parser splits raw annotated text into an ordered list of segments.
//! Recognized emotion markers become their own segment; everything else,
//! including unrecognized bracketed tokens, accumulates as literal speech.
//! Whitespace around a marker stays in the neighbouring speech segments.

use serde::{Deserialize, Serialize};

use crate::emotion::EmotionKind;

/// A contiguous span of input text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Segment {
    /// A run of plain words.
    Speech {
        /// The literal text, whitespace preserved.
        text: String,
    },
    /// A single non-speech vocalization.
    Emotion {
        /// Which vocalization.
        kind: EmotionKind,
    },
}

impl Segment {
    /// Creates a speech segment.
    pub fn speech(text: impl Into<String>) -> Self {
        Segment::Speech { text: text.into() }
    }

    /// Creates an emotion segment.
    pub fn emotion(kind: EmotionKind) -> Self {
        Segment::Emotion { kind }
    }

    /// Short label for reports ("speech" or the emotion name).
    pub fn label(&self) -> &'static str {
        match self {
            Segment::Speech { .. } => "speech",
            Segment::Emotion { kind } => kind.as_str(),
        }
    }
}

/// Parses annotated text into segments.
///
/// Never fails. Empty input yields an empty list; input without markers
/// yields a single speech segment equal to the input.
pub fn parse(raw_text: &str) -> Vec<Segment> {
    let bytes = raw_text.as_bytes();
    let mut segments = Vec::new();
    let mut speech_start = 0;
    let mut pos = 0;

    while pos < bytes.len() {
        // '<' is ASCII, so `pos` is always a char boundary when it matches.
        if bytes[pos] == b'<' {
            if let Some(kind) = EmotionKind::match_prefix(&raw_text[pos..]) {
                if speech_start < pos {
                    segments.push(Segment::speech(&raw_text[speech_start..pos]));
                }
                segments.push(Segment::emotion(kind));
                pos += kind.tag().len();
                speech_start = pos;
                continue;
            }
        }
        pos += 1;
    }

    if speech_start < raw_text.len() {
        segments.push(Segment::speech(&raw_text[speech_start..]));
    }

    segments
}

/// Returns the text with every recognized marker removed.
///
/// Unrecognized bracketed tokens are kept, matching [`parse`].
pub fn strip_tags(raw_text: &str) -> String {
    parse(raw_text)
        .into_iter()
        .filter_map(|segment| match segment {
            Segment::Speech { text } => Some(text),
            Segment::Emotion { .. } => None,
        })
        .collect()
}

/// Lists bracketed tokens (`<word>`) that are not emotion markers.
///
/// These are kept as literal text by [`parse`]; callers use this to warn.
pub fn unrecognized_tags(raw_text: &str) -> Vec<String> {
    let mut found = Vec::new();
    for segment in parse(raw_text) {
        let Segment::Speech { text } = segment else {
            continue;
        };
        let mut rest = text.as_str();
        while let Some(open) = rest.find('<') {
            let after = &rest[open + 1..];
            match after.find('>') {
                Some(close)
                    if close > 0
                        && after[..close]
                            .chars()
                            .all(|c| c.is_alphanumeric() || c == '_' || c == '-') =>
                {
                    found.push(rest[open..open + close + 2].to_string());
                    rest = &after[close + 1..];
                }
                _ => rest = after,
            }
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plain_text_is_single_segment() {
        let text = "Just some words, nothing else.";
        assert_eq!(parse(text), vec![Segment::speech(text)]);
    }

    #[test]
    fn test_tag_boundaries_exact() {
        assert_eq!(
            parse("Hi <laugh> there"),
            vec![
                Segment::speech("Hi "),
                Segment::emotion(EmotionKind::Laugh),
                Segment::speech(" there"),
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(parse("").is_empty());
    }

    #[test]
    fn test_leading_and_trailing_tags() {
        assert_eq!(
            parse("<gasp>Oh no<sigh>"),
            vec![
                Segment::emotion(EmotionKind::Gasp),
                Segment::speech("Oh no"),
                Segment::emotion(EmotionKind::Sigh),
            ]
        );
    }

    #[test]
    fn test_adjacent_tags() {
        assert_eq!(
            parse("<cough><cough>"),
            vec![
                Segment::emotion(EmotionKind::Cough),
                Segment::emotion(EmotionKind::Cough),
            ]
        );
    }

    #[test]
    fn test_unrecognized_tag_is_literal() {
        assert_eq!(
            parse("I am <happy> today <yawn>"),
            vec![
                Segment::speech("I am <happy> today "),
                Segment::emotion(EmotionKind::Yawn),
            ]
        );
    }

    #[test]
    fn test_case_variant_is_literal() {
        assert_eq!(parse("<LAUGH>"), vec![Segment::speech("<LAUGH>")]);
    }

    #[test]
    fn test_unterminated_bracket() {
        assert_eq!(
            parse("a < b <laugh"),
            vec![Segment::speech("a < b <laugh")]
        );
    }

    #[test]
    fn test_multibyte_text_preserved() {
        assert_eq!(
            parse("café <chuckle> naïve"),
            vec![
                Segment::speech("café "),
                Segment::emotion(EmotionKind::Chuckle),
                Segment::speech(" naïve"),
            ]
        );
    }

    #[test]
    fn test_no_character_loss() {
        let text = " one <groan>two<sniffle> <odd> three ";
        let rebuilt: String = parse(text)
            .iter()
            .map(|segment| match segment {
                Segment::Speech { text } => text.clone(),
                Segment::Emotion { kind } => kind.tag().to_string(),
            })
            .collect();
        assert_eq!(rebuilt, text);
    }

    #[test]
    fn test_strip_tags() {
        assert_eq!(strip_tags("Hi <laugh> there <odd>"), "Hi  there <odd>");
    }

    #[test]
    fn test_unrecognized_tags() {
        assert_eq!(
            unrecognized_tags("<happy> hi <laugh> <Sigh> a < b > c <>"),
            vec!["<happy>".to_string(), "<Sigh>".to_string()]
        );
        assert!(unrecognized_tags("plain <gasp>").is_empty());
    }

    #[test]
    fn test_segment_serde_shape() {
        let json = serde_json::to_value(Segment::emotion(EmotionKind::Laugh)).unwrap();
        assert_eq!(json, serde_json::json!({"type": "emotion", "kind": "laugh"}));
        let json = serde_json::to_value(Segment::speech("hi")).unwrap();
        assert_eq!(json, serde_json::json!({"type": "speech", "text": "hi"}));
    }
}
