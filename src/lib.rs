//! Primer: a runnable snippet sampler.
//!
//! Labeled example fragments are registered with the text they are expected
//! to print. The executor runs each one against an in-memory capture sink,
//! the comparator checks the captured lines exactly, and a reporter prints
//! one verdict per snippet plus a summary.
//!
//! ```rust
//! use primer::{Executor, SnippetRegistry, Verdict};
//! use primer::sink::OutputSink;
//!
//! let mut registry = SnippetRegistry::new();
//! registry
//!     .register("hello", |out: &mut dyn OutputSink| {
//!         out.emit("Hello, World!");
//!         Ok(())
//!     }, ["Hello, World!"])
//!     .unwrap();
//!
//! let results = Executor::new().run_all(&registry);
//! assert_eq!(results[0].verdict(), Verdict::Passed);
//! ```

pub use crate::errors::{ActionResult, PrimerError, SnippetFault};
pub use crate::executor::{ExecutionResult, Executor, Outcome, Verdict};
pub use crate::registry::SnippetRegistry;
pub use crate::report::RunSummary;
pub use crate::snippet::Snippet;

pub mod catalog;
pub mod cli;
pub mod compare;
pub mod config;
pub mod errors;
pub mod executor;
pub mod registry;
pub mod report;
pub mod sink;
pub mod snippet;
