//! Scripture reference detection and verse resolution
//!
//! This crate is the pure domain layer of versex. It finds citations such as
//! `John 3:16` or `Romans 3:23, 6:23, 8:1-3` in free-form text, normalizes
//! them into (book, chapter, verse) ranges, and resolves those ranges against
//! a translation dataset.
//!
//! # Pipeline
//!
//! - [`BookNameIndex`]: case-insensitive alias → canonical book lookup
//! - [`ReferenceScanner`]: locates citation substrings and their byte offsets
//! - [`ReferenceParser`]: expands a citation into [`NormalizedReference`]s
//! - [`VerseResolver`]: counts and collects the verses of a reference
//!
//! Nothing here performs I/O or keeps mutable state; a [`Translation`] and an
//! index can be shared freely across threads.
//!
//! # Example
//!
//! ```rust
//! use versex_core::{BookNameIndex, ReferenceParser, ReferenceScanner, Translation, VerseResolver};
//!
//! let index = BookNameIndex::builtin().unwrap();
//! let translation = Translation::from_json_str(r#"{"books": [{"book": "John", "chapters": [
//!     {"chapter": 3, "verses": [{"verse": 16, "text": "For God so loved the world"}]}
//! ]}]}"#).unwrap();
//!
//! let citations = ReferenceScanner::new(&index).scan("Remember Jn 3:16.");
//! assert_eq!(citations[0].text, "Jn 3:16");
//!
//! let segments = ReferenceParser::new(&index).expand_citation(&citations[0]);
//! let reference = &segments[0].reference;
//! assert_eq!(reference.to_string(), "John 3:16");
//!
//! let span = VerseResolver::new(&translation).resolve(reference);
//! assert_eq!(span.joined_text(false), "For God so loved the world");
//! ```

#![warn(missing_docs)]

pub mod books;
pub mod dataset;
pub mod error;
mod lexer;
pub mod parser;
pub mod resolver;
pub mod scanner;
pub mod types;

pub use books::{BookNameIndex, BookRecord};
pub use dataset::{Book, Chapter, Translation, Verse};
pub use error::{DataError, Result};
pub use parser::{ReferenceParser, Segments};
pub use resolver::{format_citation, ResolvedSpan, ResolvedVerse, VerseResolver};
pub use scanner::ReferenceScanner;
pub use types::{CanonicalBook, Citation, NormalizedReference, ParsedSegment};
