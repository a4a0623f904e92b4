//! Voices command implementation
//!
//! Lists the voice registry.

use anyhow::Result;
use colored::Colorize;
use emotive_spec::voice::{self, DEFAULT_VOICE_ID};
use emotive_spec::VoiceProfile;
use serde::Serialize;
use std::process::ExitCode;

use super::json_output::print_json;

/// One registry entry in the command output.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct VoiceEntry {
    /// The voice profile
    #[serde(flatten)]
    pub profile: VoiceProfile,
    /// Whether unknown voice ids resolve to this voice
    pub default: bool,
}

/// Lists every registered voice in registry order.
pub fn voice_entries() -> Vec<VoiceEntry> {
    voice::all()
        .iter()
        .map(|profile| VoiceEntry {
            profile: *profile,
            default: profile.id == DEFAULT_VOICE_ID,
        })
        .collect()
}

/// Run the voices command
pub fn run(json_output: bool) -> Result<ExitCode> {
    let voices = voice_entries();

    if json_output {
        print_json(&voices)?;
        return Ok(ExitCode::SUCCESS);
    }

    println!("{}", "Voices:".cyan().bold());
    for entry in &voices {
        let marker = if entry.default {
            " (default)".dimmed().to_string()
        } else {
            String::new()
        };
        println!(
            "  {:<6} {:>5.0} Hz  {}{}",
            entry.profile.id.bold(),
            entry.profile.base_frequency,
            entry.profile.character,
            marker
        );
    }

    Ok(ExitCode::SUCCESS)
}
