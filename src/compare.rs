//! Exact line-by-line comparison of captured output against expectations.
//!
//! No normalization happens here: case, leading and trailing whitespace and
//! line count all matter.

use difference::{Changeset, Difference};
use serde::Serialize;

/// Outcome of comparing captured lines with expected lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Match,
    Mismatch(Mismatch),
}

impl Comparison {
    pub fn is_match(&self) -> bool {
        matches!(self, Comparison::Match)
    }
}

/// Where two outputs first diverge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Mismatch {
    /// Zero-based index of the first line that differs, or the length of the
    /// shorter side when one output is a strict prefix of the other.
    pub line: usize,
    pub expected_lines: usize,
    pub actual_lines: usize,
}

/// Compares `actual` with `expected`.
///
/// # Example
/// ```rust
/// use primer::compare::{compare, Comparison};
/// let lines = vec!["Hello, World!".to_string()];
/// assert_eq!(compare(&lines, &lines), Comparison::Match);
/// ```
pub fn compare(actual: &[String], expected: &[String]) -> Comparison {
    let first_difference = actual
        .iter()
        .zip(expected)
        .position(|(a, e)| a != e)
        .or_else(|| {
            (actual.len() != expected.len()).then(|| actual.len().min(expected.len()))
        });

    match first_difference {
        None => Comparison::Match,
        Some(line) => Comparison::Mismatch(Mismatch {
            line,
            expected_lines: expected.len(),
            actual_lines: actual.len(),
        }),
    }
}

// ============================================================================
// LINE DIFF
// ============================================================================

/// One line of a rendered diff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffLine {
    Same(String),
    /// Present in the expectation, missing from the actual output.
    Expected(String),
    /// Present in the actual output, not expected.
    Actual(String),
}

/// Line diff between expected and actual output, expected side first.
///
/// Joining with `"\n"` cannot tell an empty side from a single empty line,
/// so those cases, and any changeset that finds no change while the slices
/// differ, are rendered as a full expected/actual listing.
pub fn line_diff(expected: &[String], actual: &[String]) -> Vec<DiffLine> {
    if expected.is_empty() || actual.is_empty() {
        return full_listing(expected, actual);
    }

    let changeset = Changeset::new(&expected.join("\n"), &actual.join("\n"), "\n");
    let mut lines = Vec::new();
    for diff in changeset.diffs {
        match diff {
            Difference::Same(ref x) => {
                lines.extend(x.split('\n').map(|l| DiffLine::Same(l.to_owned())))
            }
            Difference::Rem(ref x) => {
                lines.extend(x.split('\n').map(|l| DiffLine::Expected(l.to_owned())))
            }
            Difference::Add(ref x) => {
                lines.extend(x.split('\n').map(|l| DiffLine::Actual(l.to_owned())))
            }
        }
    }

    let changed = lines.iter().any(|l| !matches!(l, DiffLine::Same(_)));
    if !changed && expected != actual {
        return full_listing(expected, actual);
    }
    lines
}

fn full_listing(expected: &[String], actual: &[String]) -> Vec<DiffLine> {
    expected
        .iter()
        .cloned()
        .map(DiffLine::Expected)
        .chain(actual.iter().cloned().map(DiffLine::Actual))
        .collect()
}
