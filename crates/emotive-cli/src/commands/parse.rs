//! Parse command implementation
//!
//! Shows how annotated text splits into speech and emotion segments without
//! synthesizing anything.

use anyhow::Result;
use colored::Colorize;
use emotive_spec::segment::{strip_tags, unrecognized_tags};
use emotive_spec::{parse, Segment};
use serde::Serialize;
use std::process::ExitCode;

use super::json_output::print_json;

/// JSON output for the parse command.
#[derive(Debug, Serialize, PartialEq)]
pub struct ParseOutput {
    /// Segments in order
    pub segments: Vec<Segment>,
    /// Text with every recognized marker removed
    pub plain_text: String,
    /// Bracketed tokens that will be spoken as text
    pub unrecognized_tags: Vec<String>,
}

/// Parses `text` into the command's output document.
pub fn parse_text(text: &str) -> ParseOutput {
    ParseOutput {
        segments: parse(text),
        plain_text: strip_tags(text),
        unrecognized_tags: unrecognized_tags(text),
    }
}

/// Run the parse command
///
/// # Arguments
/// * `text` - Annotated text
/// * `json_output` - Whether to output machine-readable JSON
pub fn run(text: &str, json_output: bool) -> Result<ExitCode> {
    let output = parse_text(text);

    if json_output {
        print_json(&output)?;
        return Ok(ExitCode::SUCCESS);
    }

    if output.segments.is_empty() {
        println!("{}", "No segments (empty input)".dimmed());
    }
    for (index, segment) in output.segments.iter().enumerate() {
        let index = format!("{:>2}", index).dimmed();
        match segment {
            Segment::Speech { text } => println!("{} {} {:?}", index, "speech".cyan(), text),
            Segment::Emotion { kind } => println!("{} {}", index, kind.as_str().magenta().bold()),
        }
    }
    println!("{} {:?}", "Spoken:".dimmed(), output.plain_text);
    for tag in &output.unrecognized_tags {
        println!("  {} {} is not an emotion marker", "!".yellow(), tag);
    }

    Ok(ExitCode::SUCCESS)
}
