//! Run reporting: verdict lines, summaries and the JSON report.
//!
//! Reporters are pure consumers of [`ExecutionResult`]s. They never mutate a
//! result, and results are dropped as soon as the reporter has seen them.
//!
//! # Text format
//! ```text
//! hello: PASS
//! sum: FAIL
//! summary: 1/2 passed
//! ```

use std::io::Write;

use serde::Serialize;
use termcolor::{Color, ColorSpec, WriteColor};
use tracing::info;

use crate::compare::{line_diff, DiffLine, Mismatch};
use crate::errors::PrimerError;
use crate::executor::{ExecutionResult, Executor, Outcome, Verdict};
use crate::snippet::Snippet;

// =============================================================================
// SUMMARY
// =============================================================================

/// Aggregate counts for one invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub errored: usize,
}

impl RunSummary {
    pub fn record(&mut self, result: &ExecutionResult<'_>) {
        self.total += 1;
        match result.verdict() {
            Verdict::Passed => self.passed += 1,
            Verdict::Failed => self.failed += 1,
            Verdict::Errored => self.errored += 1,
        }
    }

    pub fn all_passed(&self) -> bool {
        self.passed == self.total
    }

    pub fn not_passed(&self) -> usize {
        self.total - self.passed
    }
}

// =============================================================================
// REPORTER TRAIT
// =============================================================================

/// Receives results as the run progresses.
pub trait Reporter {
    /// Called once per snippet, in execution order.
    fn on_result(&mut self, result: &ExecutionResult<'_>) -> Result<(), PrimerError>;

    /// Called once after the last result.
    fn on_complete(&mut self, summary: &RunSummary) -> Result<(), PrimerError>;
}

/// Feed already collected results to `reporter` and return the summary.
pub fn report<R>(
    reporter: &mut R,
    results: &[ExecutionResult<'_>],
) -> Result<RunSummary, PrimerError>
where
    R: Reporter + ?Sized,
{
    let mut summary = RunSummary::default();
    for result in results {
        summary.record(result);
        reporter.on_result(result)?;
    }
    reporter.on_complete(&summary)?;
    Ok(summary)
}

/// Run `snippets` one by one, handing each result to `reporter` immediately.
pub fn run_and_report<'a, I, R>(
    executor: &mut Executor,
    snippets: I,
    reporter: &mut R,
) -> Result<RunSummary, PrimerError>
where
    I: IntoIterator<Item = &'a Snippet>,
    R: Reporter + ?Sized,
{
    let mut summary = RunSummary::default();
    for snippet in snippets {
        let result = executor.run(snippet);
        summary.record(&result);
        reporter.on_result(&result)?;
    }
    reporter.on_complete(&summary)?;
    info!(
        total = summary.total,
        passed = summary.passed,
        failed = summary.failed,
        errored = summary.errored,
        "run complete"
    );
    Ok(summary)
}

// =============================================================================
// CONSOLE REPORTER
// =============================================================================

/// Prints `id: PASS|FAIL|ERROR` lines and a `summary: passed/total` line.
pub struct ConsoleReporter<W> {
    out: W,
    show_diff: bool,
}

impl<W: WriteColor> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            show_diff: false,
        }
    }

    /// Also print a line diff under every FAIL and the fault under every ERROR.
    pub fn with_diff(mut self, show_diff: bool) -> Self {
        self.show_diff = show_diff;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_colored(&mut self, text: &str, color: Color) -> std::io::Result<()> {
        self.out
            .set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
        write!(self.out, "{}", text)?;
        self.out.reset()
    }

    fn write_diff(&mut self, result: &ExecutionResult<'_>) -> std::io::Result<()> {
        for line in line_diff(result.snippet.expected(), &result.actual) {
            match line {
                DiffLine::Same(text) => writeln!(self.out, "    {}", text)?,
                DiffLine::Expected(text) => {
                    self.out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
                    writeln!(self.out, "  - {}", text)?;
                    self.out.reset()?;
                }
                DiffLine::Actual(text) => {
                    self.out.set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
                    writeln!(self.out, "  + {}", text)?;
                    self.out.reset()?;
                }
            }
        }
        Ok(())
    }
}

fn verdict_color(verdict: Verdict) -> Color {
    match verdict {
        Verdict::Passed => Color::Green,
        Verdict::Failed => Color::Red,
        Verdict::Errored => Color::Yellow,
    }
}

impl<W: WriteColor> Reporter for ConsoleReporter<W> {
    fn on_result(&mut self, result: &ExecutionResult<'_>) -> Result<(), PrimerError> {
        let verdict = result.verdict();
        write!(self.out, "{}: ", result.id())?;
        self.write_colored(verdict.label(), verdict_color(verdict))?;
        writeln!(self.out)?;

        if self.show_diff {
            match &result.outcome {
                Outcome::Passed => {}
                Outcome::Failed(_) => self.write_diff(result)?,
                Outcome::Errored(fault) => writeln!(self.out, "  fault: {}", fault)?,
            }
        }
        Ok(())
    }

    fn on_complete(&mut self, summary: &RunSummary) -> Result<(), PrimerError> {
        writeln!(
            self.out,
            "summary: {}/{} passed",
            summary.passed, summary.total
        )?;
        self.out.flush()?;
        Ok(())
    }
}

// =============================================================================
// JSON REPORTER
// =============================================================================

#[derive(Debug, Serialize)]
struct JsonResult {
    id: String,
    verdict: Verdict,
    expected: Vec<String>,
    actual: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    mismatch: Option<Mismatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fault: Option<String>,
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    results: &'a [JsonResult],
    summary: &'a RunSummary,
}

/// Buffers results and writes one JSON document when the run completes.
pub struct JsonReporter<W> {
    out: W,
    results: Vec<JsonResult>,
}

impl<W: Write> JsonReporter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            results: Vec::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for JsonReporter<W> {
    fn on_result(&mut self, result: &ExecutionResult<'_>) -> Result<(), PrimerError> {
        let (mismatch, fault) = match &result.outcome {
            Outcome::Passed => (None, None),
            Outcome::Failed(mismatch) => (Some(*mismatch), None),
            Outcome::Errored(fault) => (None, Some(fault.message.clone())),
        };
        self.results.push(JsonResult {
            id: result.id().to_string(),
            verdict: result.verdict(),
            expected: result.snippet.expected().to_vec(),
            actual: result.actual.clone(),
            mismatch,
            fault,
        });
        Ok(())
    }

    fn on_complete(&mut self, summary: &RunSummary) -> Result<(), PrimerError> {
        let document = JsonReport {
            results: &self.results,
            summary,
        };
        serde_json::to_writer_pretty(&mut self.out, &document)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}
