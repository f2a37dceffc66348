//! The Primer Command-Line Interface.
//!
//! This module is the main entry point for all CLI commands and orchestrates
//! the core library functions. [`execute`] holds the command logic and writes
//! to any colour-capable stream, so tests can drive it against custom
//! registries without spawning a process.

use std::process::ExitCode;

use clap::Parser;
use termcolor::WriteColor;
use tracing::{debug, warn};

use crate::{
    catalog,
    config::{OutputFormat, RunConfig},
    errors::PrimerError,
    executor::{self, Executor},
    registry::SnippetRegistry,
    report::{run_and_report, ConsoleReporter, JsonReporter},
    snippet::Snippet,
};

pub mod args;
pub mod output;

pub use args::{Command, PrimerArgs};

// ============================================================================
// EXIT STATUS
// ============================================================================

/// Process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// Everything that ran passed.
    Success = 0,
    /// At least one snippet failed or errored.
    Failures = 1,
    /// A lookup, startup or output error stopped the command.
    Error = 2,
}

impl From<Exit> for ExitCode {
    fn from(exit: Exit) -> Self {
        ExitCode::from(exit as u8)
    }
}

// ============================================================================
// MAIN ENTRY POINT
// ============================================================================

/// The main entry point for the CLI.
pub fn run() -> ExitCode {
    let args = PrimerArgs::parse();
    install_panic_hook();

    let config = config_for(&args);
    let mut stdout = output::stdout(config.use_colors);
    dispatch(
        args.command,
        catalog::build_default_registry,
        &config,
        &mut stdout,
    )
    .into()
}

/// Builds the registry with `build` and runs `command` against it.
///
/// Any [`PrimerError`], from startup or from the command, is rendered on
/// stderr and mapped to [`Exit::Error`].
pub fn dispatch<B, W>(command: Command, build: B, config: &RunConfig, out: &mut W) -> Exit
where
    B: FnOnce() -> Result<SnippetRegistry, PrimerError>,
    W: WriteColor,
{
    let result = build().and_then(|registry| execute(command, &registry, config, out));
    match result {
        Ok(exit) => exit,
        Err(e) => {
            output::print_error(e);
            Exit::Error
        }
    }
}

/// Runs one command against `registry`, writing its output to `out`.
///
/// # Errors
/// [`PrimerError::NotFound`] for an unknown `--id` or `show` target, before
/// anything executes; I/O and JSON errors from writing the report.
pub fn execute<W>(
    command: Command,
    registry: &SnippetRegistry,
    config: &RunConfig,
    out: &mut W,
) -> Result<Exit, PrimerError>
where
    W: WriteColor,
{
    match command {
        Command::Run { id, filter, .. } => {
            let selected = select(registry, id.as_deref(), filter.as_deref())?;
            run_selected(selected, config, out)
        }
        Command::List { long } => {
            output::write_listing(out, registry, long)?;
            Ok(Exit::Success)
        }
        Command::Show { id, exec } => {
            let snippet = registry.get(&id)?;
            output::write_snippet(out, snippet)?;
            if !exec {
                return Ok(Exit::Success);
            }
            let result = Executor::new().run(snippet);
            output::write_execution(out, &result)?;
            Ok(if result.passed() {
                Exit::Success
            } else {
                Exit::Failures
            })
        }
    }
}

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

fn config_for(args: &PrimerArgs) -> RunConfig {
    match &args.command {
        Command::Run { diff, format, .. } => RunConfig::new(args.color, *diff, *format),
        _ => RunConfig::new(args.color, false, OutputFormat::Text),
    }
}

/// Resolves the snippets a `run` covers. An unknown id fails before anything runs.
fn select<'a>(
    registry: &'a SnippetRegistry,
    id: Option<&str>,
    filter: Option<&str>,
) -> Result<Vec<&'a Snippet>, PrimerError> {
    if let Some(id) = id {
        return Ok(vec![registry.get(id)?]);
    }
    let selected: Vec<&Snippet> = match filter {
        Some(filter) => registry.all().filter(|s| s.id().contains(filter)).collect(),
        None => registry.all().collect(),
    };
    if selected.is_empty() {
        warn!(filter, "no snippets selected");
    }
    Ok(selected)
}

fn run_selected<W: WriteColor>(
    selected: Vec<&Snippet>,
    config: &RunConfig,
    out: &mut W,
) -> Result<Exit, PrimerError> {
    debug!(count = selected.len(), format = ?config.format, "running snippets");
    let mut executor = Executor::new();
    let summary = match config.format {
        OutputFormat::Text => {
            let mut reporter = ConsoleReporter::new(&mut *out).with_diff(config.show_diff);
            run_and_report(&mut executor, selected, &mut reporter)?
        }
        OutputFormat::Json => {
            let mut reporter = JsonReporter::new(&mut *out);
            run_and_report(&mut executor, selected, &mut reporter)?
        }
    };
    Ok(if summary.all_passed() {
        Exit::Success
    } else {
        Exit::Failures
    })
}

/// Panics inside snippet actions are caught and reported as ERROR verdicts,
/// so only those are kept off stderr. Any other panic goes to the previous
/// hook.
fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        if executor::in_snippet() {
            debug!(%info, "snippet action panicked");
        } else {
            previous(info);
        }
    }));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ActionResult;
    use crate::sink::OutputSink;
    use termcolor::Buffer;

    fn scenario_registry() -> SnippetRegistry {
        let mut reg = SnippetRegistry::new();
        reg.register(
            "hello",
            |out: &mut dyn OutputSink| {
                out.emit("Hello, World!");
                Ok(())
            },
            ["Hello, World!"],
        )
        .unwrap();
        reg.register(
            "sum",
            |out: &mut dyn OutputSink| {
                crate::emitln!(out, "The sum of", 5, "and", 10, "is", 16);
                Ok(())
            },
            ["The sum of 5 and 10 is 15"],
        )
        .unwrap();
        reg
    }

    fn run_command(
        registry: &SnippetRegistry,
        command: Command,
    ) -> (Result<Exit, PrimerError>, String) {
        let mut out = Buffer::no_color();
        let result = execute(command, registry, &RunConfig::plain(), &mut out);
        (result, String::from_utf8(out.into_inner()).unwrap())
    }

    fn run_cmd(id: Option<&str>, filter: Option<&str>) -> Command {
        Command::Run {
            id: id.map(str::to_string),
            filter: filter.map(str::to_string),
            diff: false,
            format: OutputFormat::Text,
        }
    }

    #[test]
    fn passing_snippet_exits_zero() {
        let reg = scenario_registry();
        let (result, out) = run_command(&reg, run_cmd(Some("hello"), None));
        assert_eq!(result.unwrap(), Exit::Success);
        assert_eq!(out, "hello: PASS\nsummary: 1/1 passed\n");
    }

    #[test]
    fn failing_snippet_exits_one() {
        let reg = scenario_registry();
        let (result, out) = run_command(&reg, run_cmd(None, None));
        assert_eq!(result.unwrap(), Exit::Failures);
        assert_eq!(out, "hello: PASS\nsum: FAIL\nsummary: 1/2 passed\n");
    }

    #[test]
    fn unknown_id_runs_nothing() {
        let reg = scenario_registry();
        let (result, out) = run_command(&reg, run_cmd(Some("missing"), None));
        let err = result.unwrap_err();
        assert_eq!(err.to_string(), "NotFoundError: missing");
        assert!(out.is_empty());
    }

    #[test]
    fn filter_selects_by_substring() {
        let reg = scenario_registry();
        let (result, out) = run_command(&reg, run_cmd(None, Some("ell")));
        assert_eq!(result.unwrap(), Exit::Success);
        assert_eq!(out, "hello: PASS\nsummary: 1/1 passed\n");
    }

    #[test]
    fn list_follows_registration_order_after_runs() {
        let reg = scenario_registry();
        let _ = run_command(&reg, run_cmd(Some("sum"), None));
        let (result, out) = run_command(&reg, Command::List { long: false });
        assert_eq!(result.unwrap(), Exit::Success);
        assert_eq!(out, "hello\nsum\n");
    }

    #[test]
    fn show_exec_reports_verdict() {
        let reg = scenario_registry();
        let (result, out) = run_command(
            &reg,
            Command::Show {
                id: "sum".into(),
                exec: true,
            },
        );
        assert_eq!(result.unwrap(), Exit::Failures);
        assert!(out.contains("expected:\n  The sum of 5 and 10 is 15\n"));
        assert!(out.contains("actual:\n  The sum of 5 and 10 is 16\nverdict: FAIL\n"));
    }

    #[test]
    fn faulting_snippet_does_not_stop_the_run() {
        let mut reg = scenario_registry();
        reg.register(
            "boom",
            |_: &mut dyn OutputSink| -> ActionResult { panic!("runtime error") },
            ["never"],
        )
        .unwrap();
        reg.register(
            "after",
            |out: &mut dyn OutputSink| {
                out.emit("still here");
                Ok(())
            },
            ["still here"],
        )
        .unwrap();

        let (result, out) = run_command(&reg, run_cmd(None, None));
        assert_eq!(result.unwrap(), Exit::Failures);
        assert_eq!(
            out,
            "hello: PASS\nsum: FAIL\nboom: ERROR\nafter: PASS\nsummary: 2/4 passed\n"
        );
    }

    #[test]
    fn duplicate_id_at_startup_exits_two() {
        let build = || -> Result<SnippetRegistry, PrimerError> {
            let mut reg = scenario_registry();
            reg.register("hello", |_: &mut dyn OutputSink| Ok(()), ["again"])?;
            Ok(reg)
        };
        let mut out = Buffer::no_color();
        let exit = dispatch(run_cmd(None, None), build, &RunConfig::plain(), &mut out);
        assert_eq!(exit, Exit::Error);
        assert!(out.into_inner().is_empty());
    }

    #[test]
    fn dispatch_maps_command_errors_and_results() {
        let mut out = Buffer::no_color();
        let exit = dispatch(
            run_cmd(Some("missing"), None),
            || Ok(scenario_registry()),
            &RunConfig::plain(),
            &mut out,
        );
        assert_eq!(exit, Exit::Error);

        let exit = dispatch(
            run_cmd(Some("hello"), None),
            || Ok(scenario_registry()),
            &RunConfig::plain(),
            &mut out,
        );
        assert_eq!(exit, Exit::Success);
        assert_eq!(
            String::from_utf8(out.into_inner()).unwrap(),
            "hello: PASS\nsummary: 1/1 passed\n"
        );
    }

    #[test]
    fn exit_codes_match_contract() {
        assert_eq!(Exit::Success as u8, 0);
        assert_eq!(Exit::Failures as u8, 1);
        assert_eq!(Exit::Error as u8, 2);
    }
}
