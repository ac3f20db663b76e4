//! Recoverable problems reported alongside expanded text
//!
//! The engine never prints; hosts decide how to surface these.

use std::fmt;
use std::ops::Range;

/// A per-citation problem that left the text unchanged
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Diagnostic {
    /// The book is known but the chapter or verse is not in the translation
    UnresolvableReference {
        /// Canonical form of the reference
        reference: String,
        /// Source text of the segment that produced it
        citation: String,
        /// Byte offset of the segment in the input
        start: usize,
        /// Byte offset one past the segment
        end: usize,
    },
}

impl Diagnostic {
    /// Byte range in the input the diagnostic refers to
    pub fn span(&self) -> Range<usize> {
        match self {
            Diagnostic::UnresolvableReference { start, end, .. } => *start..*end,
        }
    }

    /// Move offsets by `delta`, used when a line is expanded on its own
    pub(crate) fn shifted(mut self, delta: usize) -> Self {
        match &mut self {
            Diagnostic::UnresolvableReference { start, end, .. } => {
                *start += delta;
                *end += delta;
            }
        }
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnresolvableReference {
                reference, start, ..
            } => write!(
                f,
                "Could not process reference '{reference}' at byte {start}"
            ),
        }
    }
}
