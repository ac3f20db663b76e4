//! Data error types
//!
//! Every error here is fatal to a run: it is raised while the alias table or a
//! translation is being built, before any text is processed. Problems with
//! individual citations are never errors.

use thiserror::Error;

/// Errors raised while building the alias index or validating a translation
#[derive(Debug, Error)]
pub enum DataError {
    /// JSON could not be decoded into the expected shape
    #[error("malformed {what}: {source}")]
    Json {
        /// Which dataset failed to decode
        what: &'static str,
        /// Underlying decoder error
        #[source]
        source: serde_json::Error,
    },

    /// Book-alias table is structurally invalid
    #[error("invalid book-alias table: {0}")]
    AliasTable(String),

    /// The same alias points at two different canonical books
    #[error("alias '{alias}' maps to both '{first}' and '{second}'")]
    ConflictingAlias {
        /// The alias as written in the table
        alias: String,
        /// Canonical book seen first
        first: String,
        /// Canonical book seen second
        second: String,
    },

    /// Translation dataset is structurally invalid
    #[error("invalid translation: {0}")]
    Translation(String),
}

impl DataError {
    pub(crate) fn json(what: &'static str, source: serde_json::Error) -> Self {
        DataError::Json { what, source }
    }
}

/// Result type for data operations
pub type Result<T> = std::result::Result<T, DataError>;
