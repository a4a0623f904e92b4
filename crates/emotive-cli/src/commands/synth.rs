//! Synth command implementation
//!
//! Synthesizes annotated text to a WAV file, optionally writing a JSON report
//! next to it.

use anyhow::{bail, Context, Result};
use colored::Colorize;
use emotive_backend_audio::{generate, AudioError, GenerateResult};
use emotive_spec::{Report, RequestWarning, SpecError, SynthRequest};
use serde::Serialize;
use std::fs;
use std::process::ExitCode;
use tracing::debug;

use super::json_output::{error_codes, print_json, JsonError, JsonWarning};

/// Arguments for the synth command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SynthArgs {
    /// Annotated text; overrides the request file's text
    pub text: Option<String>,
    /// Path to a JSON request document
    pub request: Option<String>,
    /// Voice id; overrides the request file's voice
    pub voice: Option<String>,
    /// Seed; overrides the request file's seed
    pub seed: Option<u32>,
    /// Output WAV path
    pub output: String,
    /// Optional report path
    pub report: Option<String>,
}

/// What a successful synth run produced.
#[derive(Debug)]
pub struct SynthOutcome {
    /// The request that was synthesized.
    pub request: SynthRequest,
    /// Validation warnings for the request.
    pub warnings: Vec<RequestWarning>,
    /// Synthesis result.
    pub result: GenerateResult,
}

/// JSON output for the synth command.
#[derive(Debug, Serialize)]
pub struct SynthOutput {
    /// Whether synthesis succeeded
    pub success: bool,
    /// Output WAV path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    /// Report path, if one was written
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_path: Option<String>,
    /// Synthesis report
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<Report>,
    /// Errors
    pub errors: Vec<JsonError>,
    /// Warnings
    pub warnings: Vec<JsonWarning>,
}

/// Reads a request file.
///
/// The file must be UTF-8; other bytes fail as `InvalidInput` rather than
/// being synthesized.
pub fn load_request(path: &str) -> Result<SynthRequest> {
    let bytes = fs::read(path)
        .map_err(SpecError::from)
        .with_context(|| format!("Failed to read request file: {}", path))?;
    let json = std::str::from_utf8(&bytes)
        .map_err(AudioError::from)
        .with_context(|| format!("Failed to decode request file: {}", path))?;
    SynthRequest::from_json(json)
        .with_context(|| format!("Failed to parse request file: {}", path))
}

/// Builds the request from a request file and flag overrides.
pub fn resolve_request(args: &SynthArgs) -> Result<SynthRequest> {
    let mut request = match (&args.request, &args.text) {
        (Some(path), _) => load_request(path)?,
        (None, Some(text)) => SynthRequest::new(text.as_str()),
        (None, None) => bail!("either --text or --request is required"),
    };

    if let (Some(_), Some(text)) = (&args.request, &args.text) {
        request.text = text.clone();
    }
    if let Some(voice) = &args.voice {
        request.voice = voice.clone();
    }
    if let Some(seed) = args.seed {
        request.seed = seed;
    }
    Ok(request)
}

/// Synthesizes the request and writes the WAV file (and report, if asked).
pub fn synthesize_to_file(args: &SynthArgs) -> Result<SynthOutcome> {
    let request = resolve_request(args)?;
    let warnings = request.validate();
    debug!(
        voice = %request.voice,
        seed = request.seed,
        warnings = warnings.len(),
        "resolved request"
    );
    let result = generate(&request);

    fs::write(&args.output, &result.wav.wav_data)
        .with_context(|| format!("Failed to write WAV file: {}", args.output))?;

    if let Some(report_path) = &args.report {
        let json = result
            .report()
            .to_json_pretty()
            .context("Failed to serialize report")?;
        fs::write(report_path, json)
            .with_context(|| format!("Failed to write report: {}", report_path))?;
    }

    Ok(SynthOutcome {
        request,
        warnings,
        result,
    })
}

/// Run the synth command
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(args: &SynthArgs, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(args)
    } else {
        run_human(args)
    }
}

fn run_human(args: &SynthArgs) -> Result<ExitCode> {
    let outcome = synthesize_to_file(args)?;
    let result = &outcome.result;

    println!("{} {:?}", "Synthesizing:".cyan().bold(), outcome.request.text);
    for warning in &outcome.warnings {
        println!("  {} {}", "!".yellow(), warning);
    }
    println!(
        "{} {} ({}), seed {}",
        "Voice:".dimmed(),
        result.voice.id,
        result.voice.character,
        result.seed
    );

    for (index, rendered) in result.segments.iter().enumerate() {
        println!(
            "  {} {:<8} {:>7} samples",
            format!("{:>2}", index).dimmed(),
            rendered.segment.label(),
            rendered.num_samples
        );
    }

    if result.wav.fallback_used {
        println!(
            "  {} output was silent, wrote fallback tone",
            "!".yellow()
        );
    }

    println!(
        "{} {} ({:.2}s, {} samples, peak {:.2})",
        "SUCCESS".green().bold(),
        args.output,
        result.wav.duration_seconds(),
        result.wav.num_samples,
        result.wav.peak
    );
    if let Some(report_path) = &args.report {
        println!("{} {}", "Report:".dimmed(), report_path);
    }
    println!("{} {}", "PCM hash:".dimmed(), result.wav.pcm_hash);

    Ok(ExitCode::SUCCESS)
}

fn run_json(args: &SynthArgs) -> Result<ExitCode> {
    let output = match synthesize_to_file(args) {
        Ok(outcome) => SynthOutput {
            success: true,
            output: Some(args.output.clone()),
            report_path: args.report.clone(),
            report: Some(outcome.result.report()),
            errors: Vec::new(),
            warnings: outcome.warnings.iter().map(JsonWarning::from).collect(),
        },
        Err(e) => SynthOutput {
            success: false,
            output: None,
            report_path: None,
            report: None,
            errors: vec![error_to_json(&e, args)],
            warnings: Vec::new(),
        },
    };

    print_json(&output)?;
    Ok(if output.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

fn error_to_json(err: &anyhow::Error, args: &SynthArgs) -> JsonError {
    let message = format!("{:#}", err);
    if let Some(audio_error) = err
        .chain()
        .find_map(|cause| cause.downcast_ref::<AudioError>())
    {
        let json = JsonError::from_backend(audio_error);
        return match &args.request {
            Some(path) => json.with_file(path.as_str()),
            None => json,
        };
    }

    let spec_error = err
        .chain()
        .find_map(|cause| cause.downcast_ref::<SpecError>());

    match (spec_error, &args.request) {
        (Some(SpecError::JsonParse(_)), Some(path)) => {
            JsonError::new(error_codes::REQUEST_PARSE, message).with_file(path.as_str())
        }
        (Some(SpecError::Io(_)), Some(path)) => {
            JsonError::new(error_codes::FILE_READ, message).with_file(path.as_str())
        }
        _ if args.request.is_none() && args.text.is_none() => {
            JsonError::new(error_codes::MISSING_INPUT, message)
        }
        _ => JsonError::new(error_codes::FILE_WRITE, message).with_file(args.output.as_str()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use emotive_backend_audio::WavInfo;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn args_in(dir: &std::path::Path) -> SynthArgs {
        SynthArgs {
            output: dir.join("out.wav").to_string_lossy().into_owned(),
            ..Default::default()
        }
    }

    #[test]
    fn test_resolve_requires_input() {
        let err = resolve_request(&SynthArgs::default()).unwrap_err();
        assert!(err.to_string().contains("--text or --request"));
    }

    #[test]
    fn test_resolve_text_with_defaults() {
        let args = SynthArgs {
            text: Some("hi".to_string()),
            ..Default::default()
        };
        assert_eq!(resolve_request(&args).unwrap(), SynthRequest::new("hi"));
    }

    #[test]
    fn test_flags_override_request_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("req.json");
        fs::write(&path, r#"{"text": "from file", "voice": "leo", "seed": 5}"#).unwrap();

        let mut args = args_in(dir.path());
        args.request = Some(path.to_string_lossy().into_owned());
        assert_eq!(
            resolve_request(&args).unwrap(),
            SynthRequest::new("from file").voice("leo").seed(5)
        );

        args.voice = Some("zoe".to_string());
        args.seed = Some(9);
        args.text = Some("from flag".to_string());
        assert_eq!(
            resolve_request(&args).unwrap(),
            SynthRequest::new("from flag").voice("zoe").seed(9)
        );
    }

    #[test]
    fn test_bad_request_file_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("req.json");
        fs::write(&path, r#"{"text": "x", "speed": 2}"#).unwrap();

        let mut args = args_in(dir.path());
        args.request = Some(path.to_string_lossy().into_owned());
        let err = synthesize_to_file(&args).unwrap_err();

        let json = error_to_json(&err, &args);
        assert_eq!(json.code, error_codes::REQUEST_PARSE);
        assert_eq!(json.file, args.request);

        args.request = Some(dir.path().join("missing.json").to_string_lossy().into_owned());
        let err = synthesize_to_file(&args).unwrap_err();
        assert_eq!(error_to_json(&err, &args).code, error_codes::FILE_READ);
    }

    #[test]
    fn test_request_file_must_be_utf8() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("req.json");
        fs::write(&path, b"{\"text\": \"caf\xc3\"}").unwrap();

        let mut args = args_in(dir.path());
        args.request = Some(path.to_string_lossy().into_owned());
        let err = synthesize_to_file(&args).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AudioError>(),
            Some(AudioError::InvalidInput { .. })
        ));

        let json = error_to_json(&err, &args);
        assert_eq!(json.code, "AUDIO_001");
        assert_eq!(json.file, args.request);
        assert!(!dir.path().join("out.wav").exists());
    }

    #[test]
    fn test_writes_wav_and_report() {
        let dir = tempdir().unwrap();
        let mut args = args_in(dir.path());
        args.text = Some("Hello <laugh> friend".to_string());
        args.report = Some(
            dir.path()
                .join(Report::filename("out"))
                .to_string_lossy()
                .into_owned(),
        );

        let outcome = synthesize_to_file(&args).unwrap();
        assert!(outcome.warnings.is_empty());

        let wav = fs::read(&args.output).unwrap();
        assert_eq!(WavInfo::parse(&wav).unwrap().num_frames(), 74400);

        let report_json = fs::read_to_string(args.report.as_ref().unwrap()).unwrap();
        let report = Report::from_json(&report_json).unwrap();
        assert_eq!(report, outcome.result.report());
        assert_eq!(report.segments.len(), 3);
    }

    #[test]
    fn test_unknown_voice_warns_but_succeeds() {
        let dir = tempdir().unwrap();
        let mut args = args_in(dir.path());
        args.text = Some("hello".to_string());
        args.voice = Some("robot".to_string());

        let outcome = synthesize_to_file(&args).unwrap();
        assert_eq!(outcome.warnings.len(), 1);
        assert_eq!(outcome.result.voice.id, "tara");
    }
}
