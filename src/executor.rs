//! Snippet execution with output capture and fault isolation.
//!
//! Each snippet moves through `Pending → Running → {Passed, Failed, Errored}`
//! exactly once. Execution is strictly sequential: every action prints into
//! the same capture sink, which is reset before the next snippet starts.
//!
//! A fault (an `Err` returned by the action, or a panic) never escapes
//! [`Executor::run`]. It becomes an [`Outcome::Errored`] result whose last
//! captured line is `fault: <message>`.

use std::any::Any;
use std::cell::Cell;
use std::panic::{self, AssertUnwindSafe};
use std::ptr;

use serde::Serialize;
use tracing::{debug, debug_span, trace};

use crate::compare::{compare, Comparison, Mismatch};
use crate::errors::SnippetFault;
use crate::sink::{OutputBuffer, OutputSink};
use crate::snippet::Snippet;

/// Prefix of the captured line recording a fault.
pub const FAULT_PREFIX: &str = "fault: ";

thread_local! {
    static IN_SNIPPET: Cell<bool> = const { Cell::new(false) };
}

/// True while the current thread is inside a snippet action.
///
/// Panic hooks use this to stay quiet about panics the executor is about
/// to catch and report as an `ERROR` verdict.
pub fn in_snippet() -> bool {
    IN_SNIPPET.with(Cell::get)
}

/// Marks the current thread as running a snippet until dropped.
struct SnippetScope {
    previous: bool,
}

impl SnippetScope {
    fn enter() -> Self {
        Self {
            previous: IN_SNIPPET.with(|flag| flag.replace(true)),
        }
    }
}

impl Drop for SnippetScope {
    fn drop(&mut self) {
        IN_SNIPPET.with(|flag| flag.set(self.previous));
    }
}

// =============================================================================
// CORE TYPES
// =============================================================================

/// Terminal classification of a snippet run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Passed,
    Failed,
    Errored,
}

impl Verdict {
    /// The label printed in verdict lines.
    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Passed => "PASS",
            Verdict::Failed => "FAIL",
            Verdict::Errored => "ERROR",
        }
    }
}

/// Verdict plus the detail that explains it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Passed,
    Failed(Mismatch),
    Errored(SnippetFault),
}

impl Outcome {
    pub fn verdict(&self) -> Verdict {
        match self {
            Outcome::Passed => Verdict::Passed,
            Outcome::Failed(_) => Verdict::Failed,
            Outcome::Errored(_) => Verdict::Errored,
        }
    }
}

/// The result of running one snippet.
#[derive(Debug, Clone)]
pub struct ExecutionResult<'a> {
    pub snippet: &'a Snippet,
    pub actual: Vec<String>,
    pub outcome: Outcome,
}

impl ExecutionResult<'_> {
    pub fn id(&self) -> &str {
        self.snippet.id()
    }

    pub fn verdict(&self) -> Verdict {
        self.outcome.verdict()
    }

    pub fn passed(&self) -> bool {
        self.outcome == Outcome::Passed
    }
}

impl PartialEq for ExecutionResult<'_> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.snippet, other.snippet)
            && self.actual == other.actual
            && self.outcome == other.outcome
    }
}

impl Eq for ExecutionResult<'_> {}

// =============================================================================
// EXECUTOR
// =============================================================================

/// Runs snippets one at a time against a reusable capture sink.
#[derive(Debug, Default)]
pub struct Executor {
    sink: OutputBuffer,
}

impl Executor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run a single snippet and classify its output.
    pub fn run<'a>(&mut self, snippet: &'a Snippet) -> ExecutionResult<'a> {
        let span = debug_span!("snippet", id = snippet.id());
        let _guard = span.enter();

        self.sink.reset();
        trace!(state = "running");
        let fault = Self::invoke_isolated(snippet, &mut self.sink).err();

        let outcome = match fault {
            Some(fault) => {
                self.sink.emit(&format!("{FAULT_PREFIX}{}", fault.message));
                Outcome::Errored(fault)
            }
            None => match compare(self.sink.lines(), snippet.expected()) {
                Comparison::Match => Outcome::Passed,
                Comparison::Mismatch(mismatch) => Outcome::Failed(mismatch),
            },
        };
        debug!(verdict = outcome.verdict().label(), "snippet finished");

        ExecutionResult {
            snippet,
            actual: self.sink.take_lines(),
            outcome,
        }
    }

    /// Run every snippet yielded by `snippets`, in order.
    pub fn run_all<'a, I>(&mut self, snippets: I) -> Vec<ExecutionResult<'a>>
    where
        I: IntoIterator<Item = &'a Snippet>,
    {
        snippets.into_iter().map(|snippet| self.run(snippet)).collect()
    }

    fn invoke_isolated(snippet: &Snippet, sink: &mut dyn OutputSink) -> Result<(), SnippetFault> {
        let scope = SnippetScope::enter();
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| snippet.invoke(sink)));
        drop(scope);
        match outcome {
            Ok(result) => result,
            Err(payload) => Err(SnippetFault::new(panic_message(payload.as_ref()))),
        }
    }
}

/// Extracts the message carried by a panic payload.
fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "panic with non-string payload".to_string()
    }
}
