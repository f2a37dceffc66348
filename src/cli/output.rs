//! Handles all user-facing output for the CLI.
//!
//! Stream construction, error rendering and the listing/show layouts live
//! here so every command prints the same way.

use std::io::Write;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::errors::PrimerError;
use crate::executor::ExecutionResult;
use crate::snippet::Snippet;

/// Opens stdout with colour enabled or disabled.
pub fn stdout(use_colors: bool) -> StandardStream {
    let choice = if use_colors {
        ColorChoice::Always
    } else {
        ColorChoice::Never
    };
    StandardStream::stdout(choice)
}

/// Renders a fatal error as a miette diagnostic on stderr.
pub fn print_error(error: PrimerError) {
    let report = miette::Report::new(error);
    eprintln!("{report:?}");
}

/// One id per line, or `id  summary` columns when `long` is set.
pub fn write_listing<'a, W, I>(out: &mut W, snippets: I, long: bool) -> std::io::Result<()>
where
    W: Write + ?Sized,
    I: IntoIterator<Item = &'a Snippet>,
{
    if !long {
        for snippet in snippets {
            writeln!(out, "{}", snippet.id())?;
        }
        return Ok(());
    }

    let snippets: Vec<&Snippet> = snippets.into_iter().collect();
    let width = snippets.iter().map(|s| s.id().len()).max().unwrap_or(0);
    for snippet in snippets {
        let summary = snippet.summary().unwrap_or("");
        let line = format!("{:width$}  {}", snippet.id(), summary, width = width);
        writeln!(out, "{}", line.trim_end())?;
    }
    Ok(())
}

/// Prints a snippet's description and expected lines.
pub fn write_snippet<W: WriteColor + ?Sized>(
    out: &mut W,
    snippet: &Snippet,
) -> std::io::Result<()> {
    writeln!(out, "id: {}", snippet.id())?;
    if let Some(summary) = snippet.summary() {
        writeln!(out, "summary: {}", summary)?;
    }
    write_block(out, "expected", snippet.expected())
}

/// Prints what an execution captured and its verdict.
pub fn write_execution<W: WriteColor + ?Sized>(
    out: &mut W,
    result: &ExecutionResult<'_>,
) -> std::io::Result<()> {
    write_block(out, "actual", &result.actual)?;
    write!(out, "verdict: ")?;
    let color = if result.passed() { Color::Green } else { Color::Red };
    out.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
    write!(out, "{}", result.verdict().label())?;
    out.reset()?;
    writeln!(out)
}

fn write_block<W: Write + ?Sized>(
    out: &mut W,
    title: &str,
    lines: &[String],
) -> std::io::Result<()> {
    writeln!(out, "{}:", title)?;
    for line in lines {
        writeln!(out, "  {}", line)?;
    }
    Ok(())
}
