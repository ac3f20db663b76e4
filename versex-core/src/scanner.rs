//! Citation scanner
//!
//! Finds substrings that look like scripture citations. The lexical match is
//! deliberately permissive; a candidate is kept only when its leading book
//! token is a known alias. Rejected candidates are still consumed, so
//! "May 3:30" yields nothing rather than a later partial match.

use crate::books::BookNameIndex;
use crate::lexer;
use crate::types::Citation;

/// Scans text for citations whose book validates against an alias index
#[derive(Debug, Clone, Copy)]
pub struct ReferenceScanner<'a> {
    index: &'a BookNameIndex,
}

impl<'a> ReferenceScanner<'a> {
    /// Create a scanner backed by `index`
    pub fn new(index: &'a BookNameIndex) -> Self {
        Self { index }
    }

    /// All citations in `text`, left to right, non-overlapping
    pub fn scan(&self, text: &str) -> Vec<Citation> {
        let bytes = text.as_bytes();
        let mut citations = Vec::new();
        let mut pos = 0;

        while pos < bytes.len() {
            if !is_candidate_start(text, pos) {
                pos += 1;
                continue;
            }

            let Some(candidate) = lexer::match_at(bytes, pos) else {
                pos += 1;
                continue;
            };

            let book_token = &text[candidate.start..candidate.book_end];
            if let Some(book) = self.index.canonicalize(book_token) {
                citations.push(Citation {
                    text: text[candidate.start..candidate.end].to_string(),
                    start: candidate.start,
                    end: candidate.end,
                    book: book.clone(),
                });
            }

            pos = candidate.end;
        }

        citations
    }
}

/// A match may start on an ASCII letter or ordinal digit that does not
/// continue a preceding word
fn is_candidate_start(text: &str, pos: usize) -> bool {
    let byte = text.as_bytes()[pos];
    if !(byte.is_ascii_alphabetic() || matches!(byte, b'1'..=b'3')) {
        return false;
    }

    // `pos` sits on an ASCII byte, so it is a char boundary.
    text[..pos]
        .chars()
        .next_back()
        .map_or(true, |prev| !prev.is_alphanumeric())
}
