//! Verse-range resolution against a translation
//!
//! Walks `[start_chapter, end_chapter]`. The first chapter starts at
//! `start_verse`, the last ends at `end_verse`, and chapters in between are
//! taken whole. Chapters and verses are looked up by number.

use crate::dataset::{Book, Chapter, Translation};
use crate::types::NormalizedReference;

/// One verse of a resolved span
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedVerse<'a> {
    /// Chapter number
    pub chapter: u32,
    /// Verse number
    pub verse: u32,
    /// Stored verse text
    pub text: &'a str,
}

/// Ordered verses covering a reference, empty when nothing was found
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedSpan<'a> {
    verses: Vec<ResolvedVerse<'a>>,
}

impl<'a> ResolvedSpan<'a> {
    /// Verses in increasing (chapter, verse) order
    pub fn verses(&self) -> &[ResolvedVerse<'a>] {
        &self.verses
    }

    /// Number of verses
    pub fn len(&self) -> usize {
        self.verses.len()
    }

    /// True when no verse was found
    pub fn is_empty(&self) -> bool {
        self.verses.is_empty()
    }

    /// Verse texts joined with single spaces
    ///
    /// With `numbered`, every verse after the first is prefixed with its
    /// number. A run of ASCII digits at the very start of the result is a
    /// verse number leaked into the stored text and is stripped.
    pub fn joined_text(&self, numbered: bool) -> String {
        let mut joined = String::new();
        for (i, verse) in self.verses.iter().enumerate() {
            if i > 0 {
                joined.push(' ');
                if numbered {
                    joined.push_str(&verse.verse.to_string());
                    joined.push(' ');
                }
            }
            joined.push_str(verse.text);
        }

        joined
            .trim_start_matches(|c: char| c.is_ascii_digit())
            .trim()
            .to_string()
    }
}

/// Looks references up in one translation
#[derive(Debug, Clone, Copy)]
pub struct VerseResolver<'a> {
    translation: &'a Translation,
}

impl<'a> VerseResolver<'a> {
    /// Create a resolver over `translation`
    pub fn new(translation: &'a Translation) -> Self {
        Self { translation }
    }

    /// Number of verses the reference covers
    ///
    /// Zero for chapter-only references, unknown books, and ranges that
    /// touch a chapter missing from the translation.
    pub fn count_verses(&self, reference: &NormalizedReference) -> usize {
        let Some((book, start_verse)) = self.locate(reference) else {
            return 0;
        };
        if reference.end_chapter > book.last_chapter().unwrap_or(0) {
            return 0;
        }

        let mut count = 0;
        for number in chapter_numbers(book, reference) {
            let Some(chapter) = book.chapter(number) else {
                return 0;
            };
            let (from, to) = verse_bounds(chapter, reference, start_verse);
            count += chapter
                .verses
                .iter()
                .filter(|v| from <= v.verse && v.verse <= to)
                .count();
        }
        count
    }

    /// Verses covered by the reference
    ///
    /// Missing chapters inside the range are skipped; an unknown book or a
    /// chapter-only reference gives an empty span.
    pub fn resolve(&self, reference: &NormalizedReference) -> ResolvedSpan<'a> {
        let mut span = ResolvedSpan::default();
        let Some((book, start_verse)) = self.locate(reference) else {
            return span;
        };

        for number in chapter_numbers(book, reference) {
            let Some(chapter) = book.chapter(number) else {
                continue;
            };
            let (from, to) = verse_bounds(chapter, reference, start_verse);
            let to = to.min(chapter.last_verse().unwrap_or(0));

            for verse_number in from..=to {
                if let Some(verse) = chapter.verse(verse_number) {
                    span.verses.push(ResolvedVerse {
                        chapter: number,
                        verse: verse_number,
                        text: &verse.text,
                    });
                }
            }
        }

        span
    }

    fn locate(&self, reference: &NormalizedReference) -> Option<(&'a Book, u32)> {
        let start_verse = reference.start_verse?;
        let book = self.translation.book(reference.book.as_str())?;
        Some((book, start_verse))
    }
}

/// Canonical display form of a reference
///
/// `Book C:V`, `Book C:V-E`, or `Book C:V-EC:EV`.
pub fn format_citation(reference: &NormalizedReference) -> String {
    reference.to_string()
}

/// Chapter numbers to visit, capped at the book's last chapter so absurd
/// end chapters cost nothing
fn chapter_numbers(book: &Book, reference: &NormalizedReference) -> std::ops::RangeInclusive<u32> {
    let last = book.last_chapter().unwrap_or(0);
    reference.start_chapter..=reference.end_chapter.min(last.max(reference.start_chapter))
}

fn verse_bounds(chapter: &Chapter, reference: &NormalizedReference, start_verse: u32) -> (u32, u32) {
    let from = if chapter.chapter == reference.start_chapter {
        start_verse
    } else {
        1
    };
    let to = if chapter.chapter == reference.end_chapter {
        reference.end_verse.unwrap_or(start_verse)
    } else {
        chapter.last_verse().unwrap_or(0)
    };
    (from, to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{Chapter, Verse};
    use crate::types::CanonicalBook;

    fn chapter(number: u32, verses: &[(u32, &str)]) -> Chapter {
        Chapter {
            chapter: number,
            verses: verses
                .iter()
                .map(|(verse, text)| Verse {
                    verse: *verse,
                    text: text.to_string(),
                })
                .collect(),
        }
    }

    fn translation() -> Translation {
        Translation {
            books: vec![Book {
                book: "John".to_string(),
                chapters: vec![
                    chapter(2, &[(1, "j2v1"), (2, "j2v2"), (3, "j2v3")]),
                    chapter(1, &[(1, "j1v1"), (2, "j1v2"), (3, "j1v3"), (4, "j1v4")]),
                    chapter(3, &[(16, "For God so loved the world"), (17, "j3v17")]),
                    chapter(5, &[(1, "j5v1")]),
                ],
            }],
        }
    }

    fn range(sc: u32, sv: u32, ec: u32, ev: u32) -> NormalizedReference {
        NormalizedReference::range(CanonicalBook::new("John"), sc, sv, ec, ev).unwrap()
    }

    #[test]
    fn test_count_single_verse() {
        let translation = translation();
        let resolver = VerseResolver::new(&translation);
        assert_eq!(resolver.count_verses(&range(3, 16, 3, 16)), 1);
    }

    #[test]
    fn test_count_crossing_chapters() {
        let translation = translation();
        let resolver = VerseResolver::new(&translation);
        // 1:3, 1:4, 2:1, 2:2
        assert_eq!(resolver.count_verses(&range(1, 3, 2, 2)), 4);
    }

    #[test]
    fn test_count_is_zero_when_a_chapter_is_missing() {
        let translation = translation();
        let resolver = VerseResolver::new(&translation);
        assert_eq!(resolver.count_verses(&range(3, 16, 5, 1)), 0);
        assert_eq!(resolver.count_verses(&range(9, 1, 9, 1)), 0);
    }

    #[test]
    fn test_chapter_only_resolves_to_nothing() {
        let translation = translation();
        let resolver = VerseResolver::new(&translation);
        let chapter = NormalizedReference::chapter(CanonicalBook::new("John"), 3).unwrap();
        assert_eq!(resolver.count_verses(&chapter), 0);
        assert!(resolver.resolve(&chapter).is_empty());
    }

    #[test]
    fn test_resolve_orders_by_chapter_then_verse() {
        let translation = translation();
        let resolver = VerseResolver::new(&translation);
        let span = resolver.resolve(&range(1, 4, 2, 2));

        let positions: Vec<(u32, u32)> =
            span.verses().iter().map(|v| (v.chapter, v.verse)).collect();
        assert_eq!(positions, vec![(1, 4), (2, 1), (2, 2)]);
        assert_eq!(span.joined_text(false), "j1v4 j2v1 j2v2");
        assert_eq!(span.joined_text(true), "j1v4 1 j2v1 2 j2v2");
    }

    #[test]
    fn test_resolve_skips_missing_chapters() {
        let translation = translation();
        let resolver = VerseResolver::new(&translation);
        let span = resolver.resolve(&range(3, 17, 5, 1));
        let texts: Vec<&str> = span.verses().iter().map(|v| v.text).collect();
        assert_eq!(texts, vec!["j3v17", "j5v1"]);
    }

    #[test]
    fn test_resolve_unknown_book() {
        let translation = translation();
        let resolver = VerseResolver::new(&translation);
        let reference = NormalizedReference::verse(CanonicalBook::new("Jude"), 1, 1).unwrap();
        assert!(resolver.resolve(&reference).is_empty());
        assert_eq!(resolver.count_verses(&reference), 0);
    }

    #[test]
    fn test_huge_ranges_are_capped() {
        let translation = translation();
        let resolver = VerseResolver::new(&translation);
        let span = resolver.resolve(&range(1, 1, u32::MAX, u32::MAX));
        assert_eq!(span.len(), 4 + 3 + 2 + 1);
    }

    #[test]
    fn test_leading_digits_are_stripped() {
        let translation = Translation {
            books: vec![Book {
                book: "John".to_string(),
                chapters: vec![chapter(3, &[(16, "16 For God so loved the world")])],
            }],
        };
        let resolver = VerseResolver::new(&translation);
        let span = resolver.resolve(&range(3, 16, 3, 16));
        assert_eq!(span.joined_text(false), "For God so loved the world");
    }

    #[test]
    fn test_format_citation() {
        assert_eq!(format_citation(&range(3, 16, 3, 16)), "John 3:16");
        assert_eq!(format_citation(&range(1, 1, 1, 5)), "John 1:1-5");
        assert_eq!(format_citation(&range(1, 1, 2, 3)), "John 1:1-2:3");
    }
}
