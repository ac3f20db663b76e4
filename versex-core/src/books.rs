//! Book-name alias index
//!
//! Maps every known spelling of a book (case-insensitive) to its canonical
//! name. The built-in table is embedded at compile time and parsed once per
//! process; callers can build their own index from alias records instead.

use crate::error::{DataError, Result};
use crate::types::CanonicalBook;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

/// Embedded alias table
static BUILTIN: OnceLock<Arc<BookNameIndex>> = OnceLock::new();

const BUILTIN_BOOKS: &str = include_str!("../data/books.json");

/// One record of the alias table: a canonical name and its spellings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRecord {
    /// Canonical book name
    pub book: String,
    /// Alternative spellings; the canonical name is always added as well
    pub names: Vec<String>,
}

/// Case-insensitive alias lookup for canonical book names
#[derive(Debug, Clone)]
pub struct BookNameIndex {
    aliases: HashMap<String, CanonicalBook>,
    books: Vec<CanonicalBook>,
}

impl BookNameIndex {
    /// The index built from the embedded alias table
    ///
    /// Only a successful build is cached, so a failure keeps its own
    /// `DataError` variant.
    pub fn builtin() -> Result<Arc<BookNameIndex>> {
        if let Some(index) = BUILTIN.get() {
            return Ok(Arc::clone(index));
        }
        let index = Arc::new(Self::from_json_str(BUILTIN_BOOKS)?);
        Ok(Arc::clone(BUILTIN.get_or_init(|| index)))
    }

    /// Build an index from a JSON array of `{ "book": ..., "names": [...] }`
    pub fn from_json_str(json: &str) -> Result<Self> {
        let records: Vec<BookRecord> =
            serde_json::from_str(json).map_err(|e| DataError::json("book-alias table", e))?;
        Self::from_records(&records)
    }

    /// Build an index from alias records
    ///
    /// Fails on an empty table, a blank canonical name or alias, or an alias
    /// claimed by two different books.
    pub fn from_records(records: &[BookRecord]) -> Result<Self> {
        if records.is_empty() {
            return Err(DataError::AliasTable("no books defined".to_string()));
        }

        let mut aliases: HashMap<String, CanonicalBook> = HashMap::new();
        let mut books = Vec::with_capacity(records.len());

        for (position, record) in records.iter().enumerate() {
            let name = record.book.trim();
            if name.is_empty() {
                return Err(DataError::AliasTable(format!(
                    "record {position} has an empty book name"
                )));
            }

            let canonical = CanonicalBook::new(name);
            if books.contains(&canonical) {
                return Err(DataError::AliasTable(format!(
                    "book '{name}' is defined more than once"
                )));
            }

            for alias in std::iter::once(name).chain(record.names.iter().map(String::as_str)) {
                let key = normalize(alias);
                if key.is_empty() {
                    return Err(DataError::AliasTable(format!(
                        "book '{name}' has a blank alias"
                    )));
                }

                match aliases.get(&key) {
                    Some(existing) if *existing != canonical => {
                        return Err(DataError::ConflictingAlias {
                            alias: alias.trim().to_string(),
                            first: existing.to_string(),
                            second: name.to_string(),
                        });
                    }
                    Some(_) => {}
                    None => {
                        aliases.insert(key, canonical.clone());
                    }
                }
            }

            books.push(canonical);
        }

        Ok(Self { aliases, books })
    }

    /// Canonical book for an alias, ignoring case and surrounding whitespace
    pub fn canonicalize(&self, alias: &str) -> Option<&CanonicalBook> {
        self.aliases.get(&normalize(alias))
    }

    /// Canonical books in table order
    pub fn books(&self) -> &[CanonicalBook] {
        &self.books
    }

    /// Number of distinct aliases
    pub fn alias_count(&self) -> usize {
        self.aliases.len()
    }

    /// Number of canonical books
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// True when no book is defined
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

fn normalize(alias: &str) -> String {
    alias.trim().to_lowercase()
}
