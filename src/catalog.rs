//! The built-in snippet catalog.
//!
//! Each section transcribes one part of the introductory material: the
//! action prints what the example in the notes prints, and the expected lines
//! are the text a reader of the notes would see on their console.
//!
//! ## Sections
//!
//! - **Declarations**: printing, variables, short declarations, constants
//! - **Control flow**: `for` loops, `if` with init statements, `switch`
//! - **Collections**: arrays, slices with length/capacity, maps, 2D arrays

use std::fmt::Display;

use crate::errors::PrimerError;
use crate::registry::SnippetRegistry;

pub mod collections;
pub mod control_flow;
pub mod declarations;

/// Builds the registry holding every built-in snippet.
///
/// # Errors
/// Fails with [`PrimerError::DuplicateId`] if two sections reuse an id.
pub fn build_default_registry() -> Result<SnippetRegistry, PrimerError> {
    let mut registry = SnippetRegistry::new();
    register_all(&mut registry)?;
    Ok(registry)
}

/// Registers every section, in reading order.
pub fn register_all(registry: &mut SnippetRegistry) -> Result<(), PrimerError> {
    declarations::register(registry)?;
    control_flow::register(registry)?;
    collections::register(registry)?;
    Ok(())
}

/// Renders a sequence the way the material prints lists: `[a b c]`.
pub(crate) fn bracketed<T: Display>(items: &[T]) -> String {
    let fields: Vec<String> = items.iter().map(ToString::to_string).collect();
    format!("[{}]", fields.join(" "))
}
