//! Emotive CLI library.
//!
//! Command implementations for the `emotive` binary: synthesizing WAV files
//! from annotated text, previewing how text is segmented, listing voices and
//! inspecting generated files.

pub mod commands;
