//! Emotion marker kinds.
//!
//! Each kind is spelled in text as an exact, lower-case bracketed marker such
//! as `<laugh>`. Any other bracketed token is not an emotion marker.

use serde::{Deserialize, Serialize};

/// One of the eight non-speech vocalizations that can be embedded in text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionKind {
    /// Rhythmic "ha-ha" bursts.
    Laugh,
    /// Soft, single-tone laugh.
    Chuckle,
    /// Falling breathy exhale.
    Sigh,
    /// Short sharp intake.
    Gasp,
    /// Long descending vowel.
    Yawn,
    /// Two noisy bursts.
    Cough,
    /// Brief nasal noise.
    Sniffle,
    /// Low sustained tone.
    Groan,
}

impl EmotionKind {
    /// Every kind, in declaration order.
    pub const ALL: [EmotionKind; 8] = [
        EmotionKind::Laugh,
        EmotionKind::Chuckle,
        EmotionKind::Sigh,
        EmotionKind::Gasp,
        EmotionKind::Yawn,
        EmotionKind::Cough,
        EmotionKind::Sniffle,
        EmotionKind::Groan,
    ];

    /// Returns the bare name (e.g., "laugh").
    pub fn as_str(&self) -> &'static str {
        match self {
            EmotionKind::Laugh => "laugh",
            EmotionKind::Chuckle => "chuckle",
            EmotionKind::Sigh => "sigh",
            EmotionKind::Gasp => "gasp",
            EmotionKind::Yawn => "yawn",
            EmotionKind::Cough => "cough",
            EmotionKind::Sniffle => "sniffle",
            EmotionKind::Groan => "groan",
        }
    }

    /// Returns the marker as written in text (e.g., "<laugh>").
    pub fn tag(&self) -> &'static str {
        match self {
            EmotionKind::Laugh => "<laugh>",
            EmotionKind::Chuckle => "<chuckle>",
            EmotionKind::Sigh => "<sigh>",
            EmotionKind::Gasp => "<gasp>",
            EmotionKind::Yawn => "<yawn>",
            EmotionKind::Cough => "<cough>",
            EmotionKind::Sniffle => "<sniffle>",
            EmotionKind::Groan => "<groan>",
        }
    }

    /// Looks up a kind from its exact marker spelling.
    ///
    /// Matching is case-sensitive: `<Laugh>` is not a marker.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.tag() == tag)
    }

    /// Returns the kind whose marker starts `text`, if any.
    pub fn match_prefix(text: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| text.starts_with(kind.tag()))
    }
}

impl std::fmt::Display for EmotionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
