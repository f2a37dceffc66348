//! The snippet: a labeled example fragment paired with its expected output.

use std::fmt;

use crate::errors::ActionResult;
use crate::sink::OutputSink;

/// A snippet's action: prints into the sink it is handed, or faults.
pub type Action = Box<dyn Fn(&mut dyn OutputSink) -> ActionResult>;

/// A labeled, self-contained example fragment.
///
/// The expected output is fixed at construction and only ever handed out
/// as a shared slice.
pub struct Snippet {
    id: String,
    summary: Option<String>,
    action: Action,
    expected: Vec<String>,
}

impl Snippet {
    pub fn new<F, I, S>(id: impl Into<String>, action: F, expected: I) -> Self
    where
        F: Fn(&mut dyn OutputSink) -> ActionResult + 'static,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            summary: None,
            action: Box::new(action),
            expected: expected.into_iter().map(Into::into).collect(),
        }
    }

    /// Attach the one-line description shown by `list --long` and `show`.
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    pub fn expected(&self) -> &[String] {
        &self.expected
    }

    /// Invoke the action against `out`. Callers that need fault isolation
    /// go through the executor instead.
    pub fn invoke(&self, out: &mut dyn OutputSink) -> ActionResult {
        (self.action)(out)
    }
}

impl fmt::Debug for Snippet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Snippet")
            .field("id", &self.id)
            .field("summary", &self.summary)
            .field("expected", &self.expected)
            .finish_non_exhaustive()
    }
}
