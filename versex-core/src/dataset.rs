//! Translation dataset model
//!
//! A translation is `books → chapters → verses`, read-only once loaded.
//! Chapters and verses are located by their number, never by position, so
//! unsorted or gapped data still resolves correctly.

use crate::error::{DataError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A complete translation
///
/// Unknown top-level fields (name, citation, ...) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    /// Books in dataset order
    pub books: Vec<Book>,
}

/// One book of a translation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Canonical book name
    pub book: String,
    /// Chapters, not necessarily sorted
    pub chapters: Vec<Chapter>,
}

/// One chapter of a book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    /// Chapter number, starting at 1
    pub chapter: u32,
    /// Verses of the chapter
    pub verses: Vec<Verse>,
}

/// One verse
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verse {
    /// Verse number, starting at 1
    pub verse: u32,
    /// Verse text
    pub text: String,
}

impl Translation {
    /// Decode and validate a translation from JSON
    pub fn from_json_str(json: &str) -> Result<Self> {
        let translation: Translation =
            serde_json::from_str(json).map_err(|e| DataError::json("translation", e))?;
        translation.validate()?;
        Ok(translation)
    }

    /// Decode and validate a translation from a reader
    pub fn from_reader<R: std::io::Read>(reader: R) -> Result<Self> {
        let translation: Translation =
            serde_json::from_reader(reader).map_err(|e| DataError::json("translation", e))?;
        translation.validate()?;
        Ok(translation)
    }

    /// Check the shape rules a resolver relies on
    ///
    /// Book names must be non-blank, unpadded and unique, chapter numbers unique per
    /// book, verse numbers unique per chapter, and no number may be zero.
    pub fn validate(&self) -> Result<()> {
        let mut seen_books = HashSet::new();

        for book in &self.books {
            let name = book.book.trim();
            if name.is_empty() {
                return Err(DataError::Translation("book with an empty name".to_string()));
            }
            if name != book.book {
                return Err(DataError::Translation(format!(
                    "book '{}' has surrounding whitespace",
                    book.book
                )));
            }
            if !seen_books.insert(name) {
                return Err(DataError::Translation(format!(
                    "book '{name}' appears more than once"
                )));
            }

            let mut seen_chapters = HashSet::new();
            for chapter in &book.chapters {
                if chapter.chapter == 0 {
                    return Err(DataError::Translation(format!(
                        "{name}: chapter number 0"
                    )));
                }
                if !seen_chapters.insert(chapter.chapter) {
                    return Err(DataError::Translation(format!(
                        "{name}: chapter {} appears more than once",
                        chapter.chapter
                    )));
                }

                let mut seen_verses = HashSet::new();
                for verse in &chapter.verses {
                    if verse.verse == 0 {
                        return Err(DataError::Translation(format!(
                            "{name} {}: verse number 0",
                            chapter.chapter
                        )));
                    }
                    if !seen_verses.insert(verse.verse) {
                        return Err(DataError::Translation(format!(
                            "{name} {}:{} appears more than once",
                            chapter.chapter, verse.verse
                        )));
                    }
                }
            }
        }

        Ok(())
    }

    /// Look up a book by canonical name
    pub fn book(&self, name: &str) -> Option<&Book> {
        self.books.iter().find(|b| b.book == name)
    }

    /// Total number of verses
    pub fn verse_count(&self) -> usize {
        self.books
            .iter()
            .flat_map(|b| &b.chapters)
            .map(|c| c.verses.len())
            .sum()
    }
}

impl Book {
    /// Look up a chapter by number
    pub fn chapter(&self, number: u32) -> Option<&Chapter> {
        self.chapters.iter().find(|c| c.chapter == number)
    }

    /// Highest chapter number present
    pub fn last_chapter(&self) -> Option<u32> {
        self.chapters.iter().map(|c| c.chapter).max()
    }
}

impl Chapter {
    /// Look up a verse by number
    pub fn verse(&self, number: u32) -> Option<&Verse> {
        self.verses.iter().find(|v| v.verse == number)
    }

    /// Highest verse number present
    pub fn last_verse(&self) -> Option<u32> {
        self.verses.iter().map(|v| v.verse).max()
    }
}
