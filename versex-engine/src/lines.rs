//! Per-line expansion
//!
//! A citation never contains a line break, so every line can be expanded on
//! its own and the results joined back in order. Blank lines are copied
//! through untouched.

use crate::error::Result;
use crate::expander::{Expansion, ExpansionStats, TextExpander};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A line and its byte offset in the document
#[derive(Debug, Clone, Copy)]
struct Line<'t> {
    start: usize,
    text: &'t str,
}

fn split_lines(text: &str) -> Vec<Line<'_>> {
    let mut start = 0;
    text.split('\n')
        .map(|line| {
            let item = Line { start, text: line };
            start += line.len() + 1;
            item
        })
        .collect()
}

fn expand_line(expander: &TextExpander<'_>, line: &Line<'_>) -> Result<Expansion> {
    if line.text.trim().is_empty() {
        return Ok(Expansion::unchanged(line.text));
    }
    expander.expand_document(line.text)
}

pub(crate) fn expand_lines(expander: &TextExpander<'_>, text: &str) -> Result<Expansion> {
    let lines = split_lines(text);
    log::debug!("expanding {} lines", lines.len());

    #[cfg(feature = "parallel")]
    let expanded: Vec<Expansion> = lines
        .par_iter()
        .map(|line| expand_line(expander, line))
        .collect::<Result<Vec<_>>>()?;

    #[cfg(not(feature = "parallel"))]
    let expanded: Vec<Expansion> = lines
        .iter()
        .map(|line| expand_line(expander, line))
        .collect::<Result<Vec<_>>>()?;

    Ok(assemble(&lines, expanded))
}

/// Join line results, moving diagnostics to document offsets
fn assemble(lines: &[Line<'_>], expanded: Vec<Expansion>) -> Expansion {
    let mut text = String::new();
    let mut diagnostics = Vec::new();
    let mut stats = ExpansionStats::default();

    for (i, (line, expansion)) in lines.iter().zip(expanded).enumerate() {
        if i > 0 {
            text.push('\n');
        }
        text.push_str(&expansion.text);
        diagnostics.extend(
            expansion
                .diagnostics
                .into_iter()
                .map(|diagnostic| diagnostic.shifted(line.start)),
        );
        stats += expansion.stats;
    }

    Expansion {
        text,
        diagnostics,
        stats,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_lines_offsets() {
        let lines = split_lines("ab\n\ncd\n");
        let found: Vec<(usize, &str)> = lines.iter().map(|l| (l.start, l.text)).collect();
        assert_eq!(found, vec![(0, "ab"), (3, ""), (4, "cd"), (7, "")]);
    }

    #[test]
    fn test_assemble_rejoins_lines() {
        let lines = split_lines("one\ntwo");
        let expanded = vec![Expansion::unchanged("ONE"), Expansion::unchanged("two")];
        assert_eq!(assemble(&lines, expanded).text, "ONE\ntwo");
    }
}
