//! Emotive CLI - Command-line interface for expressive speech synthesis
//!
//! This binary synthesizes WAV files from text annotated with emotion markers
//! and provides helpers for previewing segmentation, listing voices and
//! inspecting output.

use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

// Use modules from the library crate
use emotive_cli::commands;
use emotive_cli::commands::synth::SynthArgs;

/// Emotive - Expressive Speech Synthesis
#[derive(Parser)]
#[command(name = "emotive")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Log synthesis details to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Synthesize annotated text to a WAV file
    Synth {
        /// Text with optional markers such as <laugh> or <sigh>
        #[arg(short, long)]
        text: Option<String>,

        /// Path to a JSON request file ({"text", "voice", "seed"})
        #[arg(short, long)]
        request: Option<String>,

        /// Voice id (default: tara)
        #[arg(long)]
        voice: Option<String>,

        /// Seed for breath and noise (default: 42)
        #[arg(long)]
        seed: Option<u32>,

        /// Output WAV file path
        #[arg(short, long)]
        output: String,

        /// Write a JSON synthesis report to this path
        #[arg(long)]
        report: Option<String>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Show how text splits into speech and emotion segments
    Parse {
        /// Text with optional markers
        #[arg(short, long)]
        text: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// List available voices
    Voices {
        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Print the header, duration and peak of a WAV file
    Inspect {
        /// Path to the WAV file
        #[arg(short, long)]
        input: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}

/// Installs a stderr subscriber: `debug` with `--verbose`, `warn` otherwise.
fn setup_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // Ignore failure: a subscriber may already be installed
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Synth {
            text,
            request,
            voice,
            seed,
            output,
            report,
            json,
        } => commands::synth::run(
            &SynthArgs {
                text,
                request,
                voice,
                seed,
                output,
                report,
            },
            json,
        ),
        Commands::Parse { text, json } => commands::parse::run(&text, json),
        Commands::Voices { json } => commands::voices::run(json),
        Commands::Inspect { input, json } => commands::inspect::run(&input, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_synth_text() {
        let cli = Cli::try_parse_from([
            "emotive",
            "synth",
            "--text",
            "Hello <laugh>",
            "--voice",
            "leo",
            "--seed",
            "7",
            "-o",
            "out.wav",
        ])
        .unwrap();
        assert!(!cli.verbose);
        match cli.command {
            Commands::Synth {
                text,
                request,
                voice,
                seed,
                output,
                report,
                json,
            } => {
                assert_eq!(text.as_deref(), Some("Hello <laugh>"));
                assert_eq!(request, None);
                assert_eq!(voice.as_deref(), Some("leo"));
                assert_eq!(seed, Some(7));
                assert_eq!(output, "out.wav");
                assert_eq!(report, None);
                assert!(!json);
            }
            _ => panic!("expected synth command"),
        }
    }

    #[test]
    fn test_cli_parses_synth_request_with_report() {
        let cli = Cli::try_parse_from([
            "emotive",
            "synth",
            "--request",
            "req.json",
            "--output",
            "out.wav",
            "--report",
            "out.report.json",
            "--json",
        ])
        .unwrap();
        match cli.command {
            Commands::Synth {
                text,
                request,
                report,
                json,
                ..
            } => {
                assert_eq!(text, None);
                assert_eq!(request.as_deref(), Some("req.json"));
                assert_eq!(report.as_deref(), Some("out.report.json"));
                assert!(json);
            }
            _ => panic!("expected synth command"),
        }
    }

    #[test]
    fn test_cli_synth_requires_output() {
        assert!(Cli::try_parse_from(["emotive", "synth", "--text", "hi"]).is_err());
    }

    #[test]
    fn test_cli_rejects_bad_seed() {
        assert!(Cli::try_parse_from([
            "emotive", "synth", "--text", "hi", "--seed", "-1", "-o", "x.wav"
        ])
        .is_err());
    }

    #[test]
    fn test_cli_parses_parse() {
        let cli = Cli::try_parse_from(["emotive", "parse", "-t", "<sigh> ok", "--json"]).unwrap();
        match cli.command {
            Commands::Parse { text, json } => {
                assert_eq!(text, "<sigh> ok");
                assert!(json);
            }
            _ => panic!("expected parse command"),
        }
    }

    #[test]
    fn test_cli_parses_voices_with_global_verbose() {
        let cli = Cli::try_parse_from(["emotive", "voices", "--verbose"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Voices { json: false }));
    }

    #[test]
    fn test_cli_parses_inspect() {
        let cli = Cli::try_parse_from(["emotive", "-v", "inspect", "-i", "out.wav"]).unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Inspect { input, json } => {
                assert_eq!(input, "out.wav");
                assert!(!json);
            }
            _ => panic!("expected inspect command"),
        }
    }
}
