//! Defines the command-line arguments and subcommands for the Primer CLI.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure.

use clap::{Parser, Subcommand};

use crate::config::{ColorMode, OutputFormat};

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "primer",
    version,
    about = "Run the labeled teaching snippets and check their console output."
)]
pub struct PrimerArgs {
    /// When to colour verdicts.
    #[arg(long, value_enum, default_value_t = ColorMode::Auto, global = true)]
    pub color: ColorMode,

    #[command(subcommand)]
    pub command: Command,
}

/// An enumeration of all available CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Execute snippets and compare their output with the expected text.
    Run {
        /// Run only the snippet with this identifier.
        #[arg(long, conflicts_with = "filter")]
        id: Option<String>,
        /// Run only snippets whose identifier contains this substring.
        #[arg(long)]
        filter: Option<String>,
        /// Print a line diff under each failure and the fault under each error.
        #[arg(long)]
        diff: bool,
        /// Report format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// List registered snippet identifiers in registration order.
    List {
        /// Also print each snippet's summary.
        #[arg(long)]
        long: bool,
    },
    /// Show a snippet's summary and expected output.
    Show {
        /// The snippet identifier.
        #[arg(required = true)]
        id: String,
        /// Also execute the snippet and print what it produced.
        #[arg(long)]
        exec: bool,
    },
}
