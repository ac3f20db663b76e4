//! Engine error types

use thiserror::Error;
use versex_core::DataError;

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Alias table or translation failed to load
    #[error("data error: {0}")]
    Data(#[from] DataError),

    /// Invalid expansion options
    #[error("invalid configuration: {0}")]
    ConfigError(String),

    /// An edit pointed outside the text or inside a character
    #[error("invalid edit offset {offset}")]
    InvalidEditOffset {
        /// The byte offset that could not be applied
        offset: usize,
    },
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
