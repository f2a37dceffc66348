//! Primer Error Handling
//!
//! Two families of failure live here:
//!
//! - [`PrimerError`]: failures of the tool itself (an inconsistent registry,
//!   an unknown snippet id, a broken output stream). These abort the current
//!   command and are rendered as miette diagnostics.
//! - [`SnippetFault`]: a runtime fault raised by a snippet's action. Faults
//!   never escape the executor; they are downgraded into an `Errored` verdict
//!   so the rest of the run can continue.

use miette::Diagnostic;
use thiserror::Error;

// ============================================================================
// TOOL ERRORS
// ============================================================================

/// Every error the registry, reporter and CLI can surface.
#[derive(Error, Diagnostic, Debug)]
pub enum PrimerError {
    /// A second registration reused an identifier. Fatal at startup.
    #[error("DuplicateIdError: {id}")]
    #[diagnostic(
        code(primer::registry::duplicate_id),
        help("snippet identifiers must be unique; rename one of the `{id}` snippets")
    )]
    DuplicateId { id: String },

    /// A lookup targeted an identifier the registry does not hold.
    #[error("NotFoundError: {id}")]
    #[diagnostic(
        code(primer::registry::not_found),
        help("run `primer list` to see the registered snippet identifiers")
    )]
    NotFound { id: String },

    #[error("I/O error: {0}")]
    #[diagnostic(code(primer::io))]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    #[diagnostic(code(primer::json))]
    Json(#[from] serde_json::Error),
}

impl PrimerError {
    pub fn duplicate_id(id: impl Into<String>) -> Self {
        Self::DuplicateId { id: id.into() }
    }

    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    /// Stable classification used by callers that only care about the kind.
    pub fn error_type(&self) -> ErrorType {
        match self {
            PrimerError::DuplicateId { .. } => ErrorType::DuplicateId,
            PrimerError::NotFound { .. } => ErrorType::NotFound,
            PrimerError::Io(_) | PrimerError::Json(_) => ErrorType::Output,
        }
    }
}

/// Type-safe error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorType {
    DuplicateId,
    NotFound,
    Output,
}

// ============================================================================
// SNIPPET FAULTS
// ============================================================================

/// A runtime fault raised while a snippet's action was running.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct SnippetFault {
    pub message: String,
}

impl SnippetFault {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<String> for SnippetFault {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<&str> for SnippetFault {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

/// What every snippet action returns.
pub type ActionResult = Result<(), SnippetFault>;

/// Builds a [`SnippetFault`] with `format!` syntax.
///
/// ```rust
/// use primer::fault;
/// let index = 7;
/// let f = fault!("index out of range [{}] with length 5", index);
/// assert_eq!(f.message, "index out of range [7] with length 5");
/// ```
#[macro_export]
macro_rules! fault {
    ($($arg:tt)*) => {
        $crate::errors::SnippetFault::new(format!($($arg)*))
    };
}
