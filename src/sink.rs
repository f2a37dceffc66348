//! Output sinks that snippet actions print into.
//!
//! Actions never write to the process stdout directly. They receive a
//! `&mut dyn OutputSink` and emit lines into it, which lets the executor
//! redirect everything into an [`OutputBuffer`] and compare the captured
//! lines mechanically.

// ============================================================================
// SINK TRAIT
// ============================================================================

/// Destination for the text a snippet would otherwise print.
pub trait OutputSink {
    /// Emit one printed line. Embedded `\n` characters split it into
    /// several lines.
    fn emit(&mut self, text: &str);
}

// ============================================================================
// SINK IMPLEMENTATIONS
// ============================================================================

/// OutputBuffer: collects emitted lines in memory for capture and comparison.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct OutputBuffer {
    lines: Vec<String>,
}

impl OutputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Drops everything captured so far, keeping the allocation.
    pub fn reset(&mut self) {
        self.lines.clear();
    }

    /// Moves the captured lines out, leaving the buffer empty.
    pub fn take_lines(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }
}

impl OutputSink for OutputBuffer {
    fn emit(&mut self, text: &str) {
        self.lines.extend(text.split('\n').map(str::to_owned));
    }
}

// ============================================================================
// EMIT MACRO
// ============================================================================

/// Emits its operands as one line, separated by single spaces.
///
/// ```rust
/// use primer::{emitln, sink::OutputBuffer};
/// let mut out = OutputBuffer::new();
/// let (a, b) = (5, 10);
/// emitln!(out, "The sum of", a, "and", b, "is", a + b);
/// assert_eq!(out.lines(), ["The sum of 5 and 10 is 15"]);
/// ```
#[macro_export]
macro_rules! emitln {
    ($out:expr, $($field:expr),+ $(,)?) => {{
        #[allow(unused_imports)]
        use $crate::sink::OutputSink as _;
        $out.emit(&[$(::std::string::ToString::to_string(&$field)),+].join(" "))
    }};
}
