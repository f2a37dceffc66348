//! Snippet registry: ordered storage and lookup of snippet definitions.
//!
//! # Invariants
//! - Identifiers are unique. A second registration under an existing id is
//!   rejected with [`PrimerError::DuplicateId`] and leaves the registry
//!   exactly as it was.
//! - Iteration order is registration order.
//! - Expected output is never mutated after registration; snippets are only
//!   handed out by shared reference.
//!
//! # Summary Table
//! | Method     | Error on Duplicate | Error on Missing | Notes                      |
//! |------------|--------------------|------------------|----------------------------|
//! | register   | Yes                | N/A              | Builds the snippet         |
//! | insert     | Yes                | N/A              | Takes a prebuilt snippet   |
//! | get        | N/A                | Yes              | Case-sensitive lookup      |
//! | all / ids  | N/A                | N/A              | Registration order         |
//!
//! # Thread Safety
//! The registry is populated once at startup and read-only afterwards. Actions
//! are not `Send`, so the registry stays on the thread that built it.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::errors::{ActionResult, PrimerError};
use crate::sink::OutputSink;
use crate::snippet::Snippet;

/// Ordered collection of snippets keyed by identifier.
#[derive(Debug, Default)]
pub struct SnippetRegistry {
    snippets: Vec<Snippet>,
    index: HashMap<String, usize>,
}

impl SnippetRegistry {
    /// Creates a new, empty registry.
    ///
    /// # Example
    /// ```rust
    /// use primer::registry::SnippetRegistry;
    /// let registry = SnippetRegistry::new();
    /// assert!(registry.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a snippet built from an id, an action and its expected lines.
    ///
    /// # Errors
    /// Returns [`PrimerError::DuplicateId`] if `id` is already registered; the
    /// earlier registration is kept.
    ///
    /// # Example
    /// ```rust
    /// use primer::registry::SnippetRegistry;
    /// use primer::sink::OutputSink;
    /// let mut reg = SnippetRegistry::new();
    /// reg.register("hello", |out: &mut dyn OutputSink| {
    ///     out.emit("Hello, World!");
    ///     Ok(())
    /// }, ["Hello, World!"]).unwrap();
    /// assert!(reg.register("hello", |_: &mut dyn OutputSink| Ok(()), ["other"]).is_err());
    /// assert_eq!(reg.len(), 1);
    /// ```
    pub fn register<F, I, S>(
        &mut self,
        id: impl Into<String>,
        action: F,
        expected: I,
    ) -> Result<&Snippet, PrimerError>
    where
        F: Fn(&mut dyn OutputSink) -> ActionResult + 'static,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert(Snippet::new(id, action, expected))
    }

    /// Registers a prebuilt snippet, e.g. one carrying a summary.
    ///
    /// # Errors
    /// Returns [`PrimerError::DuplicateId`] if the snippet's id is taken.
    pub fn insert(&mut self, snippet: Snippet) -> Result<&Snippet, PrimerError> {
        if self.index.contains_key(snippet.id()) {
            warn!(id = snippet.id(), "rejected duplicate snippet registration");
            return Err(PrimerError::duplicate_id(snippet.id()));
        }
        let position = self.snippets.len();
        debug!(id = snippet.id(), position, "registered snippet");
        self.index.insert(snippet.id().to_string(), position);
        self.snippets.push(snippet);
        Ok(&self.snippets[position])
    }

    /// Looks up a snippet by id.
    ///
    /// # Errors
    /// Returns [`PrimerError::NotFound`] for an unknown id.
    pub fn get(&self, id: &str) -> Result<&Snippet, PrimerError> {
        self.index
            .get(id)
            .map(|&position| &self.snippets[position])
            .ok_or_else(|| PrimerError::not_found(id))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Returns a fresh iterator over all snippets in registration order.
    /// Call again to restart.
    pub fn all(&self) -> std::slice::Iter<'_, Snippet> {
        self.snippets.iter()
    }

    /// Returns an iterator over snippet ids in registration order.
    ///
    /// # Example
    /// ```rust
    /// use primer::registry::SnippetRegistry;
    /// use primer::sink::OutputSink;
    /// let mut reg = SnippetRegistry::new();
    /// reg.register("b", |_: &mut dyn OutputSink| Ok(()), Vec::<String>::new()).unwrap();
    /// reg.register("a", |_: &mut dyn OutputSink| Ok(()), Vec::<String>::new()).unwrap();
    /// assert_eq!(reg.ids().collect::<Vec<_>>(), ["b", "a"]);
    /// ```
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.snippets.iter().map(Snippet::id)
    }

    pub fn len(&self) -> usize {
        self.snippets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snippets.is_empty()
    }
}

impl<'a> IntoIterator for &'a SnippetRegistry {
    type Item = &'a Snippet;
    type IntoIter = std::slice::Iter<'a, Snippet>;

    fn into_iter(self) -> Self::IntoIter {
        self.all()
    }
}
