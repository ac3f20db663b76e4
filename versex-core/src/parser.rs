//! Citation parser
//!
//! Expands one citation into normalized references. A citation body is a
//! comma-separated list of segments; each segment is `C:V`, `C:V-V`,
//! `C:V-C:V`, or a bare `V`/`V-V` that reuses the most recent chapter.
//! Chapter state is local to one citation.
//!
//! Segments that fail to parse (bad numbers, no chapter yet, inverted
//! ranges) are dropped without error.

use crate::books::BookNameIndex;
use crate::lexer;
use crate::types::{CanonicalBook, Citation, NormalizedReference, ParsedSegment};
use smallvec::SmallVec;

/// References parsed from one citation, in source order
pub type Segments = SmallVec<[ParsedSegment; 4]>;

/// Turns citation text into normalized references
#[derive(Debug, Clone, Copy)]
pub struct ReferenceParser<'a> {
    index: &'a BookNameIndex,
}

impl<'a> ReferenceParser<'a> {
    /// Create a parser backed by `index`
    pub fn new(index: &'a BookNameIndex) -> Self {
        Self { index }
    }

    /// Parse free-standing citation text such as `"1 Cor 13:4-7"`
    ///
    /// Returns `None` when the book token is not a known alias.
    pub fn parse(&self, text: &str) -> Option<(CanonicalBook, Segments)> {
        let text = text.trim();
        let body = lexer::body_start(text)?;
        let book = self.index.canonicalize(&text[..body])?.clone();
        let segments = self.expand(text, &book);
        Some((book, segments))
    }

    /// Parse a citation produced by the scanner
    pub fn expand_citation(&self, citation: &Citation) -> Segments {
        self.expand(&citation.text, &citation.book)
    }

    /// Expand citation text whose book has already been canonicalized
    ///
    /// Spans in the result are relative to `citation_text`.
    pub fn expand(&self, citation_text: &str, book: &CanonicalBook) -> Segments {
        let mut segments = Segments::new();
        let Some(body_start) = lexer::body_start(citation_text) else {
            return segments;
        };

        let mut current_chapter = None;
        let mut offset = body_start;

        for raw in citation_text[body_start..].split(',') {
            let leading = raw.len() - raw.trim_start().len();
            let segment = raw.trim();
            let start = offset + leading;
            offset += raw.len() + 1;

            if let Some(reference) = parse_segment(segment, book, &mut current_chapter) {
                segments.push(ParsedSegment {
                    reference,
                    span: start..start + segment.len(),
                });
            }
        }

        segments
    }
}

fn parse_segment(
    segment: &str,
    book: &CanonicalBook,
    current_chapter: &mut Option<u32>,
) -> Option<NormalizedReference> {
    let (chapter, verses) = match segment.split_once(':') {
        Some((chapter, verses)) => {
            let chapter = parse_number(chapter)?;
            *current_chapter = Some(chapter);
            (chapter, verses)
        }
        None => ((*current_chapter)?, segment),
    };

    match verses.split_once('-') {
        Some((from, to)) => {
            let start_verse = parse_number(from)?;
            let (end_chapter, end_verse) = match to.split_once(':') {
                Some((end_chapter, end_verse)) => {
                    (parse_number(end_chapter)?, parse_number(end_verse)?)
                }
                None => (chapter, parse_number(to)?),
            };
            NormalizedReference::range(book.clone(), chapter, start_verse, end_chapter, end_verse)
        }
        None => NormalizedReference::verse(book.clone(), chapter, parse_number(verses)?),
    }
}

/// Base-10 unsigned number made only of ASCII digits
fn parse_number(token: &str) -> Option<u32> {
    let token = token.trim();
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}
