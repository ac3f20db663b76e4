//! Scan, parse, resolve and splice verse text back into a document

use crate::config::{ExpandOptions, InsertionMode, ScanScope};
use crate::diagnostics::Diagnostic;
use crate::edits::EditList;
use crate::error::Result;
use crate::lines;
use std::collections::{BTreeMap, HashSet};
use std::ops::AddAssign;
use versex_core::{
    format_citation, BookNameIndex, ReferenceParser, ReferenceScanner, ResolvedSpan, Translation,
    VerseResolver,
};

/// Counters for one expansion run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExpansionStats {
    /// Citations the scanner accepted
    pub citations: usize,
    /// References the parser produced from them
    pub references: usize,
    /// References whose text was inserted
    pub expanded: usize,
    /// References repeated earlier in the same scan
    pub duplicates: usize,
    /// References skipped for exceeding the verse limit
    pub over_limit: usize,
    /// References with no verse text in the translation
    pub unresolved: usize,
}

impl AddAssign for ExpansionStats {
    fn add_assign(&mut self, other: Self) {
        self.citations += other.citations;
        self.references += other.references;
        self.expanded += other.expanded;
        self.duplicates += other.duplicates;
        self.over_limit += other.over_limit;
        self.unresolved += other.unresolved;
    }
}

/// Output of [`TextExpander::expand`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expansion {
    /// The document with verse text inserted
    pub text: String,
    /// Unresolvable references, in source order
    pub diagnostics: Vec<Diagnostic>,
    /// Run counters
    pub stats: ExpansionStats,
}

impl Expansion {
    /// An expansion that leaves `text` as it is
    pub fn unchanged(text: &str) -> Self {
        Self {
            text: text.to_string(),
            diagnostics: Vec::new(),
            stats: ExpansionStats::default(),
        }
    }
}

/// Expands citations in text using one alias index and one translation
///
/// The expander only borrows its data, so one index and translation can
/// serve many expanders on many threads.
#[derive(Debug, Clone)]
pub struct TextExpander<'a> {
    index: &'a BookNameIndex,
    translation: &'a Translation,
    options: ExpandOptions,
}

impl<'a> TextExpander<'a> {
    /// Create an expander
    pub fn new(index: &'a BookNameIndex, translation: &'a Translation, options: ExpandOptions) -> Self {
        Self {
            index,
            translation,
            options,
        }
    }

    /// Options in effect
    pub fn options(&self) -> &ExpandOptions {
        &self.options
    }

    /// Expand every citation in `text`
    ///
    /// Characters outside citation segments are copied through unchanged;
    /// insertions only ever add text.
    pub fn expand(&self, text: &str) -> Result<Expansion> {
        match self.options.scope {
            ScanScope::Document => self.expand_document(text),
            ScanScope::Lines => lines::expand_lines(self, text),
        }
    }

    /// Expand `text` as one unit, ignoring the configured scope
    pub(crate) fn expand_document(&self, text: &str) -> Result<Expansion> {
        let scanner = ReferenceScanner::new(self.index);
        let parser = ReferenceParser::new(self.index);
        let resolver = VerseResolver::new(self.translation);

        let mut stats = ExpansionStats::default();
        let mut diagnostics = Vec::new();
        let mut seen = HashSet::new();
        let mut edits = EditList::new();
        let mut blocks: BTreeMap<usize, Vec<String>> = BTreeMap::new();

        for citation in scanner.scan(text) {
            stats.citations += 1;

            for segment in parser.expand_citation(&citation) {
                stats.references += 1;
                let reference = &segment.reference;
                let key = format_citation(reference);

                if seen.contains(&key) {
                    log::debug!("skipping repeated reference {key}");
                    stats.duplicates += 1;
                    continue;
                }
                seen.insert(key.clone());

                if reference.is_chapter_only() {
                    log::debug!("skipping chapter-only reference {key}");
                    continue;
                }

                let count = resolver.count_verses(reference);
                if self.options.limit.exceeded_by(count) {
                    log::debug!("skipping {key}: {count} verses is over the limit");
                    stats.over_limit += 1;
                    continue;
                }

                let span = resolver.resolve(reference);
                // count_verses is zero for ranges with chapter gaps, but the
                // resolved span may still be long.
                if self.options.limit.exceeded_by(span.len()) {
                    log::debug!("skipping {key}: {} verses is over the limit", span.len());
                    stats.over_limit += 1;
                    continue;
                }

                let start = citation.start + segment.span.start;
                let end = citation.start + segment.span.end;
                if span.is_empty() {
                    stats.unresolved += 1;
                    diagnostics.push(Diagnostic::UnresolvableReference {
                        reference: key,
                        citation: text[start..end].to_string(),
                        start,
                        end,
                    });
                    continue;
                }

                stats.expanded += 1;
                let entry = self.render(&key, &span);
                match self.options.mode {
                    InsertionMode::Inline => edits.insert(end, pad_inline(text, end, entry)),
                    InsertionMode::AfterLine => blocks
                        .entry(line_break_after(text, citation.end))
                        .or_default()
                        .push(entry),
                }
            }
        }

        for (target, entries) in blocks {
            edits.insert(target, frame_block(text, target, &entries));
        }

        log::debug!(
            "{} citations, {} references, {} expanded",
            stats.citations,
            stats.references,
            stats.expanded
        );

        Ok(Expansion {
            text: edits.apply(text)?,
            diagnostics,
            stats,
        })
    }

    /// Delimited verse text, optionally preceded by the citation
    fn render(&self, citation: &str, span: &ResolvedSpan<'_>) -> String {
        let delimiter = &self.options.delimiter;
        let body = span.joined_text(self.options.verse_numbers);
        if self.options.echo_citation {
            format!("{citation} {delimiter}{body}{delimiter}")
        } else {
            format!("{delimiter}{body}{delimiter}")
        }
    }
}

/// Space the entry off from neighbouring non-whitespace characters
fn pad_inline(text: &str, offset: usize, entry: String) -> String {
    let before = text[..offset]
        .chars()
        .next_back()
        .is_some_and(|c| !c.is_whitespace());
    let after = text[offset..]
        .chars()
        .next()
        .is_some_and(|c| !c.is_whitespace());

    let mut padded = String::with_capacity(entry.len() + 2);
    if before {
        padded.push(' ');
    }
    padded.push_str(&entry);
    if after {
        padded.push(' ');
    }
    padded
}

/// Offset just past the first `\n` at or after `anchor`, or the end of text
fn line_break_after(text: &str, anchor: usize) -> usize {
    text[anchor..]
        .find('\n')
        .map_or(text.len(), |i| anchor + i + 1)
}

/// One entry per line, set off from the following paragraph by a blank line
fn frame_block(text: &str, target: usize, entries: &[String]) -> String {
    let mut block = String::new();
    if target == text.len() && !text.is_empty() && !text.ends_with('\n') {
        block.push('\n');
    }
    for entry in entries {
        block.push_str(entry);
        block.push('\n');
    }
    if target < text.len() && !text[target..].starts_with('\n') {
        block.push('\n');
    }
    block
}

/// Expand `text` with the built-in alias table
pub fn expand(text: &str, translation: &Translation, options: ExpandOptions) -> Result<Expansion> {
    let index = BookNameIndex::builtin()?;
    TextExpander::new(&index, translation, options).expand(text)
}
