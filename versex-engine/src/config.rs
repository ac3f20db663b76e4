//! Expansion options

use crate::error::{EngineError, Result};
use std::num::NonZeroUsize;

/// Ceiling on the number of verses a reference may expand to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VerseLimit {
    /// Expand references of any size
    #[default]
    Unlimited,
    /// Leave references with more verses than this untouched
    AtMost(NonZeroUsize),
}

impl VerseLimit {
    /// `None` means unlimited; `Some(0)` is rejected
    pub fn from_count(count: Option<usize>) -> Result<Self> {
        match count {
            None => Ok(VerseLimit::Unlimited),
            Some(n) => NonZeroUsize::new(n)
                .map(VerseLimit::AtMost)
                .ok_or_else(|| EngineError::ConfigError("verse limit must be at least 1".into())),
        }
    }

    /// True when `count` verses exceed the limit
    pub fn exceeded_by(&self, count: usize) -> bool {
        match self {
            VerseLimit::Unlimited => false,
            VerseLimit::AtMost(max) => count > max.get(),
        }
    }
}

/// Where verse text is placed relative to its citation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum InsertionMode {
    /// Right after the citation on the same line
    #[default]
    Inline,
    /// On its own line after the next line break
    AfterLine,
}

/// How much text one scan covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ScanScope {
    /// Scan the whole document at once
    #[default]
    Document,
    /// Expand every line independently, in parallel when available
    ///
    /// Citations never span a line break, so both scopes find the same
    /// citations; duplicate suppression is per line here.
    Lines,
}

/// Options for one expansion run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandOptions {
    /// Verse-count ceiling
    pub limit: VerseLimit,
    /// Placement of inserted text
    pub mode: InsertionMode,
    /// Wrapped around inserted verse text on both sides
    pub delimiter: String,
    /// Prefix inserted text with the canonical citation
    pub echo_citation: bool,
    /// Number every verse after the first
    pub verse_numbers: bool,
    /// Document or per-line scanning
    pub scope: ScanScope,
}

impl Default for ExpandOptions {
    fn default() -> Self {
        Self {
            limit: VerseLimit::Unlimited,
            mode: InsertionMode::Inline,
            delimiter: "`".to_string(),
            echo_citation: false,
            verse_numbers: false,
            scope: ScanScope::Document,
        }
    }
}

impl ExpandOptions {
    /// Create a builder
    pub fn builder() -> ExpandOptionsBuilder {
        ExpandOptionsBuilder::default()
    }
}

/// Builder for [`ExpandOptions`]
#[derive(Debug, Default)]
pub struct ExpandOptionsBuilder {
    options: ExpandOptions,
    limit: Option<usize>,
}

impl ExpandOptionsBuilder {
    /// Set the verse limit; `None` means unlimited
    pub fn limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    /// Set the insertion mode
    pub fn mode(mut self, mode: InsertionMode) -> Self {
        self.options.mode = mode;
        self
    }

    /// Set the delimiter wrapped around inserted text
    pub fn delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.options.delimiter = delimiter.into();
        self
    }

    /// Echo the canonical citation before inserted text
    pub fn echo_citation(mut self, echo: bool) -> Self {
        self.options.echo_citation = echo;
        self
    }

    /// Number every verse after the first
    pub fn verse_numbers(mut self, numbered: bool) -> Self {
        self.options.verse_numbers = numbered;
        self
    }

    /// Set the scan scope
    pub fn scope(mut self, scope: ScanScope) -> Self {
        self.options.scope = scope;
        self
    }

    /// Validate and build the options
    pub fn build(self) -> Result<ExpandOptions> {
        let mut options = self.options;
        options.limit = VerseLimit::from_count(self.limit)?;
        Ok(options)
    }
}
