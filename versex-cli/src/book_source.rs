//! Book-alias source management for CLI

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use versex_core::BookNameIndex;

/// Source of the book-alias table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookSource {
    /// The table compiled into the binary
    BuiltIn,
    /// A JSON file of `{ book, names }` records
    External(PathBuf),
}

impl BookSource {
    /// External when a path is given, built-in otherwise
    pub fn from_path(path: Option<PathBuf>) -> Self {
        path.map_or(BookSource::BuiltIn, BookSource::External)
    }

    /// Get the display name for the source
    pub fn display_name(&self) -> String {
        match self {
            BookSource::BuiltIn => "Built-in".to_string(),
            BookSource::External(path) => format!("External: {}", path.display()),
        }
    }

    /// Build the alias index
    pub fn load(&self) -> Result<Arc<BookNameIndex>> {
        match self {
            BookSource::BuiltIn => Ok(BookNameIndex::builtin()?),
            BookSource::External(path) => {
                let json = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read book file: {}", path.display()))?;
                let index = BookNameIndex::from_json_str(&json)
                    .with_context(|| format!("Invalid book file: {}", path.display()))?;
                Ok(Arc::new(index))
            }
        }
    }
}
