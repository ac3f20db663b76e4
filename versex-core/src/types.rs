//! Shared value types for the reference pipeline

use std::fmt;
use std::ops::Range;
use std::sync::Arc;

/// Normalized name of a scripture book, independent of how it was spelled
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CanonicalBook(Arc<str>);

impl CanonicalBook {
    /// Wrap a canonical name
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self(name.into())
    }

    /// The canonical name
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CanonicalBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CanonicalBook {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A located substring believed to name a scripture passage
///
/// Offsets are byte offsets into the text that was scanned, half-open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Citation {
    /// The matched substring
    pub text: String,
    /// Byte offset of the first character
    pub start: usize,
    /// Byte offset one past the last character
    pub end: usize,
    /// Book the leading token canonicalized to
    pub book: CanonicalBook,
}

impl Citation {
    /// Byte range of the citation in the scanned text
    pub fn span(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// A fully parsed (book, chapter, verse) range used for dataset lookup
///
/// Constructors enforce ordering: the end never precedes the start.
/// `start_verse == None` marks a chapter-only reference, which resolves to
/// nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedReference {
    /// Canonical book
    pub book: CanonicalBook,
    /// First chapter of the range
    pub start_chapter: u32,
    /// First verse, absent for chapter-only references
    pub start_verse: Option<u32>,
    /// Last chapter of the range
    pub end_chapter: u32,
    /// Last verse, absent for chapter-only references
    pub end_verse: Option<u32>,
}

impl NormalizedReference {
    /// A single verse
    pub fn verse(book: CanonicalBook, chapter: u32, verse: u32) -> Option<Self> {
        Self::range(book, chapter, verse, chapter, verse)
    }

    /// A verse range, possibly crossing chapters
    ///
    /// Returns `None` for zero chapter or verse numbers and for ranges whose
    /// end precedes their start.
    pub fn range(
        book: CanonicalBook,
        start_chapter: u32,
        start_verse: u32,
        end_chapter: u32,
        end_verse: u32,
    ) -> Option<Self> {
        if start_chapter == 0 || start_verse == 0 || end_chapter == 0 || end_verse == 0 {
            return None;
        }
        if (end_chapter, end_verse) < (start_chapter, start_verse) {
            return None;
        }

        Some(Self {
            book,
            start_chapter,
            start_verse: Some(start_verse),
            end_chapter,
            end_verse: Some(end_verse),
        })
    }

    /// A whole chapter with no verse given
    pub fn chapter(book: CanonicalBook, chapter: u32) -> Option<Self> {
        if chapter == 0 {
            return None;
        }

        Some(Self {
            book,
            start_chapter: chapter,
            start_verse: None,
            end_chapter: chapter,
            end_verse: None,
        })
    }

    /// True when no verse was given
    pub fn is_chapter_only(&self) -> bool {
        self.start_verse.is_none()
    }

    /// True when the range crosses a chapter boundary
    pub fn spans_chapters(&self) -> bool {
        self.end_chapter != self.start_chapter
    }
}

impl fmt::Display for NormalizedReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.book, self.start_chapter)?;

        let (Some(start_verse), Some(end_verse)) = (self.start_verse, self.end_verse) else {
            return Ok(());
        };
        write!(f, ":{start_verse}")?;

        if self.spans_chapters() {
            write!(f, "-{}:{}", self.end_chapter, end_verse)
        } else if end_verse != start_verse {
            write!(f, "-{end_verse}")
        } else {
            Ok(())
        }
    }
}

/// One reference produced by the parser, with the byte range of the
/// comma-separated segment it came from
///
/// `span` is relative to the citation text, not to the scanned document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSegment {
    /// The parsed reference
    pub reference: NormalizedReference,
    /// Segment bounds inside the citation text
    pub span: Range<usize>,
}
