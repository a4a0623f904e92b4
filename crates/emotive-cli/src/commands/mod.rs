//! CLI command implementations

pub mod inspect;
pub mod parse;
pub mod synth;
pub mod voices;

mod json_output;
