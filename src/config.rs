//! Run configuration.
//!
//! Primer reads no configuration files and no environment variables of its
//! own; everything comes from command-line flags and is resolved here once.

use clap::ValueEnum;

/// When verdict lines are coloured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorMode {
    /// Colour only when stdout is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

/// Shape of the `run` report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One `id: VERDICT` line per snippet, then a summary line.
    #[default]
    Text,
    /// A single JSON document with every result and the summary.
    Json,
}

/// Resolved settings for reporting a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub use_colors: bool,
    pub show_diff: bool,
    pub format: OutputFormat,
}

impl RunConfig {
    pub fn new(color: ColorMode, show_diff: bool, format: OutputFormat) -> Self {
        let use_colors = match color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => atty::is(atty::Stream::Stdout),
        };
        Self {
            use_colors,
            show_diff,
            format,
        }
    }

    /// Plain text, no colour, no diffs. What tests and pipes want.
    pub fn plain() -> Self {
        Self::new(ColorMode::Never, false, OutputFormat::Text)
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::new(ColorMode::Auto, false, OutputFormat::Text)
    }
}
