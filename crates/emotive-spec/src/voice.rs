//! Voice profile registry.
//!
//! A fixed table of named acoustic parameter sets. The table is plain static
//! data, so concurrent lookups need no synchronization.

use serde::Serialize;

/// Identifier of the profile used when a lookup misses.
pub const DEFAULT_VOICE_ID: &str = "tara";

/// A named set of acoustic parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VoiceProfile {
    /// Lookup key (lower-case).
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Short description of the voice character.
    pub character: &'static str,
    /// Fundamental pitch in Hz.
    pub base_frequency: f64,
    /// First formant in Hz.
    pub formant1: f64,
    /// Second formant in Hz.
    pub formant2: f64,
    /// Third formant in Hz.
    pub formant3: f64,
    /// Breath noise amount (0.0 to 1.0).
    pub breathiness: Option<f64>,
    /// Low-frequency warmth amount (0.0 to 1.0).
    pub warmth: Option<f64>,
}

static VOICES: [VoiceProfile; 8] = [
    VoiceProfile {
        id: "tara",
        name: "Tara",
        character: "feminine, warm",
        base_frequency: 220.0,
        formant1: 850.0,
        formant2: 1220.0,
        formant3: 2890.0,
        breathiness: Some(0.08),
        warmth: Some(0.15),
    },
    VoiceProfile {
        id: "jess",
        name: "Jessica",
        character: "youthful, energetic",
        base_frequency: 240.0,
        formant1: 900.0,
        formant2: 1350.0,
        formant3: 3100.0,
        breathiness: Some(0.10),
        warmth: Some(0.12),
    },
    VoiceProfile {
        id: "leo",
        name: "Leo",
        character: "masculine, confident",
        base_frequency: 140.0,
        formant1: 700.0,
        formant2: 1080.0,
        formant3: 2450.0,
        breathiness: Some(0.05),
        warmth: Some(0.22),
    },
    VoiceProfile {
        id: "dan",
        name: "Daniel",
        character: "masculine, casual",
        base_frequency: 120.0,
        formant1: 680.0,
        formant2: 1040.0,
        formant3: 2400.0,
        breathiness: Some(0.06),
        warmth: Some(0.25),
    },
    VoiceProfile {
        id: "mia",
        name: "Mia",
        character: "artistic, dynamic",
        base_frequency: 200.0,
        formant1: 870.0,
        formant2: 1280.0,
        formant3: 2950.0,
        breathiness: Some(0.09),
        warmth: Some(0.14),
    },
    VoiceProfile {
        id: "leah",
        name: "Leah",
        character: "gentle, nurturing",
        base_frequency: 180.0,
        formant1: 820.0,
        formant2: 1200.0,
        formant3: 2800.0,
        breathiness: Some(0.12),
        warmth: Some(0.18),
    },
    VoiceProfile {
        id: "zac",
        name: "Zachary",
        character: "youthful, tech-savvy",
        base_frequency: 160.0,
        formant1: 730.0,
        formant2: 1090.0,
        formant3: 2440.0,
        breathiness: Some(0.05),
        warmth: Some(0.20),
    },
    VoiceProfile {
        id: "zoe",
        name: "Zoe",
        character: "sophisticated, intelligent",
        base_frequency: 210.0,
        formant1: 880.0,
        formant2: 1300.0,
        formant3: 3000.0,
        breathiness: Some(0.07),
        warmth: Some(0.13),
    },
];

/// Returns every registered profile.
pub fn all() -> &'static [VoiceProfile] {
    &VOICES
}

/// Finds a profile by id without falling back.
///
/// Ids are matched case-insensitively after trimming surrounding whitespace.
pub fn find(voice_id: &str) -> Option<&'static VoiceProfile> {
    let key = voice_id.trim();
    VOICES.iter().find(|voice| voice.id.eq_ignore_ascii_case(key))
}

/// Returns true if `voice_id` names a registered profile.
pub fn contains(voice_id: &str) -> bool {
    find(voice_id).is_some()
}

/// Returns the default profile.
pub fn default_voice() -> &'static VoiceProfile {
    &VOICES[0]
}

/// Resolves a voice id, falling back to [`DEFAULT_VOICE_ID`] when unknown.
pub fn lookup(voice_id: &str) -> &'static VoiceProfile {
    find(voice_id).unwrap_or_else(default_voice)
}
