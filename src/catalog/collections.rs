//! Arrays, slices, maps and nested arrays.

use std::collections::BTreeMap;
use std::fmt::Display;

use super::bracketed;
use crate::emitln;
use crate::errors::{ActionResult, PrimerError, SnippetFault};
use crate::fault;
use crate::registry::SnippetRegistry;
use crate::sink::OutputSink;
use crate::snippet::Snippet;

pub fn register(registry: &mut SnippetRegistry) -> Result<(), PrimerError> {
    registry.insert(
        Snippet::new("zero-array", zero_array, ["[0 20 0 0 0]"])
            .with_summary("zero-valued array with one element assigned"),
    )?;
    registry.insert(
        Snippet::new("array-literal", array_literal, ["Array: [1 2 3 4 5]"])
            .with_summary("array initialized from a literal"),
    )?;
    registry.insert(
        Snippet::new(
            "slice-make",
            slice_make,
            ["Slice: [10 20 30] Length: 3 Capacity: 4"],
        )
        .with_summary("slice made with explicit length and capacity"),
    )?;
    registry.insert(
        Snippet::new(
            "slice-append",
            slice_append,
            ["Slice after appending: [10 20 30 40 50] Length: 5 Capacity: 8"],
        )
        .with_summary("appending past capacity grows the backing array"),
    )?;
    registry.insert(
        Snippet::new("slice-literal", slice_literal, ["Slice: [Go Python Java]"])
            .with_summary("slice of strings from a literal"),
    )?;
    registry.insert(
        Snippet::new("map-literal", map_literal, ["Map: map[Alice:30 Bob:25]"])
            .with_summary("map literal, printed in key order"),
    )?;
    registry.insert(
        Snippet::new(
            "two-d-array",
            two_d_array,
            ["Two-dimensional array: [[1 2 3] [4 5 6]]"],
        )
        .with_summary("array of arrays"),
    )?;
    Ok(())
}

// ============================================================================
// SLICE MODEL
// ============================================================================

/// A growable sequence that tracks capacity the way the material's slices do:
/// appending to a full slice doubles its capacity (below 256 elements).
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Slice<T> {
    items: Vec<T>,
    cap: usize,
}

impl<T: Clone + Default + Display> Slice<T> {
    pub(crate) fn make(len: usize, cap: usize) -> Self {
        Self {
            items: vec![T::default(); len],
            cap: cap.max(len),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    pub(crate) fn cap(&self) -> usize {
        self.cap
    }

    /// Assigns `items[index]`, faulting like an out-of-range index expression.
    pub(crate) fn set(&mut self, index: usize, value: T) -> ActionResult {
        let len = self.items.len();
        let slot = self
            .items
            .get_mut(index)
            .ok_or_else(|| fault!("index out of range [{}] with length {}", index, len))?;
        *slot = value;
        Ok(())
    }

    pub(crate) fn append(mut self, value: T) -> Self {
        if self.items.len() == self.cap {
            self.cap = match self.cap {
                0 => 1,
                cap if cap < 256 => cap * 2,
                cap => cap + cap / 4,
            };
        }
        self.items.push(value);
        self
    }

    pub(crate) fn render(&self) -> String {
        bracketed(&self.items)
    }
}

/// Renders a map as `map[k:v ...]`, keys in sorted order.
fn render_map<K: Display, V: Display>(map: &BTreeMap<K, V>) -> String {
    let pairs: Vec<String> = map.iter().map(|(k, v)| format!("{k}:{v}")).collect();
    format!("map[{}]", pairs.join(" "))
}

// ============================================================================
// ACTIONS
// ============================================================================

fn zero_array(out: &mut dyn OutputSink) -> ActionResult {
    let mut nums = [0i64; 5];
    nums[1] = 20;
    out.emit(&bracketed(&nums));
    Ok(())
}

fn array_literal(out: &mut dyn OutputSink) -> ActionResult {
    let arr: [i64; 5] = [1, 2, 3, 4, 5];
    emitln!(out, "Array:", bracketed(&arr));
    Ok(())
}

fn filled_slice() -> Result<Slice<i64>, SnippetFault> {
    let mut s = Slice::make(3, 4);
    s.set(0, 10)?;
    s.set(1, 20)?;
    s.set(2, 30)?;
    Ok(s)
}

fn slice_make(out: &mut dyn OutputSink) -> ActionResult {
    let s = filled_slice()?;
    emitln!(out, "Slice:", s.render(), "Length:", s.len(), "Capacity:", s.cap());
    Ok(())
}

fn slice_append(out: &mut dyn OutputSink) -> ActionResult {
    let s = filled_slice()?.append(40).append(50);
    emitln!(
        out,
        "Slice after appending:",
        s.render(),
        "Length:",
        s.len(),
        "Capacity:",
        s.cap()
    );
    Ok(())
}

fn slice_literal(out: &mut dyn OutputSink) -> ActionResult {
    let slice = ["Go", "Python", "Java"];
    emitln!(out, "Slice:", bracketed(&slice));
    Ok(())
}

fn map_literal(out: &mut dyn OutputSink) -> ActionResult {
    let mapping = BTreeMap::from([("Alice", 30), ("Bob", 25)]);
    emitln!(out, "Map:", render_map(&mapping));
    Ok(())
}

fn two_d_array(out: &mut dyn OutputSink) -> ActionResult {
    let grid: [[i64; 3]; 2] = [[1, 2, 3], [4, 5, 6]];
    let rows: Vec<String> = grid.iter().map(|row| bracketed(row)).collect();
    emitln!(out, "Two-dimensional array:", bracketed(&rows));
    Ok(())
}
