//! Inspect command implementation
//!
//! Decodes a WAV file's header and reports its format, duration and peak.

use anyhow::{Context, Result};
use colored::Colorize;
use emotive_backend_audio::wav::compute_pcm_hash;
use emotive_backend_audio::{AudioError, WavInfo};
use serde::Serialize;
use std::fs;
use std::process::ExitCode;

use super::json_output::{error_codes, print_json, JsonError};

/// Decoded facts about a WAV file.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct InspectResult {
    /// Audio format tag (1 = PCM)
    pub audio_format: u16,
    /// Number of channels
    pub channels: u16,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Bytes per second
    pub byte_rate: u32,
    /// Bytes per sample frame
    pub block_align: u16,
    /// Bits per sample
    pub bits_per_sample: u16,
    /// Number of sample frames
    pub num_frames: usize,
    /// Duration in seconds
    pub duration_seconds: f64,
    /// Peak absolute sample value (16-bit PCM only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peak: Option<f64>,
    /// BLAKE3 hash of the PCM payload
    pub pcm_hash: String,
}

/// JSON output for the inspect command.
#[derive(Debug, Serialize)]
pub struct InspectOutput {
    /// Whether the file decoded
    pub success: bool,
    /// Decoded header, if successful
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<InspectResult>,
    /// Errors
    pub errors: Vec<JsonError>,
}

/// Decodes WAV bytes.
pub fn inspect_bytes(wav_data: &[u8]) -> Result<InspectResult, AudioError> {
    let info = WavInfo::parse(wav_data)?;
    Ok(InspectResult {
        audio_format: info.audio_format,
        channels: info.channels,
        sample_rate: info.sample_rate,
        byte_rate: info.byte_rate,
        block_align: info.block_align,
        bits_per_sample: info.bits_per_sample,
        num_frames: info.num_frames(),
        duration_seconds: info.duration_seconds(),
        peak: info.peak().ok(),
        pcm_hash: compute_pcm_hash(wav_data).unwrap_or_default(),
    })
}

/// Run the inspect command
///
/// # Arguments
/// * `input` - Path to the WAV file
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 success, 1 if the file is not a readable WAV
pub fn run(input: &str, json_output: bool) -> Result<ExitCode> {
    if json_output {
        return run_json(input);
    }

    let data = fs::read(input).with_context(|| format!("Failed to read file: {}", input))?;
    let result =
        inspect_bytes(&data).with_context(|| format!("Failed to decode WAV file: {}", input))?;

    println!("{} {}", "Inspecting:".cyan().bold(), input);
    let format = if result.audio_format == 1 {
        "PCM".to_string()
    } else {
        format!("format {}", result.audio_format)
    };
    println!(
        "  {} {}, {} ch, {} Hz, {} bit",
        "Format:".dimmed(),
        format,
        result.channels,
        result.sample_rate,
        result.bits_per_sample
    );
    println!(
        "  {} {} bytes/s, block align {}",
        "Rate:".dimmed(),
        result.byte_rate,
        result.block_align
    );
    println!(
        "  {} {:.3}s ({} frames)",
        "Duration:".dimmed(),
        result.duration_seconds,
        result.num_frames
    );
    match result.peak {
        Some(peak) => println!("  {} {:.3}", "Peak:".dimmed(), peak),
        None => println!("  {} {}", "Peak:".dimmed(), "n/a".dimmed()),
    }
    println!("  {} {}", "PCM hash:".dimmed(), result.pcm_hash);

    Ok(ExitCode::SUCCESS)
}

fn run_json(input: &str) -> Result<ExitCode> {
    let output = match fs::read(input) {
        Err(e) => InspectOutput {
            success: false,
            result: None,
            errors: vec![JsonError::new(error_codes::FILE_READ, e.to_string()).with_file(input)],
        },
        Ok(data) => match inspect_bytes(&data) {
            Ok(result) => InspectOutput {
                success: true,
                result: Some(result),
                errors: Vec::new(),
            },
            Err(e) => InspectOutput {
                success: false,
                result: None,
                errors: vec![JsonError::from_backend(&e).with_file(input)],
            },
        },
    };

    print_json(&output)?;
    Ok(if output.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use emotive_backend_audio::synthesize;
    use emotive_spec::BackendError;

    #[test]
    fn test_inspect_synthesized_output() {
        let result = inspect_bytes(&synthesize("<gasp>", "tara")).unwrap();

        assert_eq!(result.audio_format, 1);
        assert_eq!(result.channels, 1);
        assert_eq!(result.sample_rate, 24000);
        assert_eq!(result.byte_rate, 48000);
        assert_eq!(result.block_align, 2);
        assert_eq!(result.bits_per_sample, 16);
        assert_eq!(result.num_frames, 12000);
        assert!((result.duration_seconds - 0.5).abs() < 1e-9);
        assert!(result.peak.unwrap() > 0.75);
        assert_eq!(result.pcm_hash.len(), 64);
    }

    #[test]
    fn test_inspect_rejects_garbage() {
        let err = inspect_bytes(b"definitely not a wav").unwrap_err();
        assert_eq!(err.code(), "AUDIO_004");
    }

    #[test]
    fn test_run_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("voice.wav");
        fs::write(&path, synthesize("hi", "zoe")).unwrap();

        assert!(run(path.to_str().unwrap(), false).is_ok());
        assert!(run(dir.path().join("missing.wav").to_str().unwrap(), false).is_err());
    }
}
