//! Expansion engine for scripture citations
//!
//! This crate drives the `versex-core` pipeline over whole documents:
//! it finds citations, drops repeats and over-limit ranges, resolves verse
//! text, and splices it back through an offset-stable edit list.
//!
//! # Example
//!
//! ```
//! use versex_core::Translation;
//! use versex_engine::{expand, ExpandOptions};
//!
//! let translation = Translation::from_json_str(
//!     r#"{"books":[{"book":"John","chapters":[{"chapter":3,"verses":[
//!         {"verse":16,"text":"For God so loved the world"}]}]}]}"#,
//! )
//! .unwrap();
//!
//! let expansion = expand("See John 3:16.", &translation, ExpandOptions::default()).unwrap();
//! assert_eq!(expansion.text, "See John 3:16 `For God so loved the world` .");
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod diagnostics;
pub mod edits;
pub mod error;
pub mod expander;
mod lines;

pub use config::{ExpandOptions, ExpandOptionsBuilder, InsertionMode, ScanScope, VerseLimit};
pub use diagnostics::Diagnostic;
pub use edits::EditList;
pub use error::{EngineError, Result};
pub use expander::{expand, Expansion, ExpansionStats, TextExpander};

// Re-export from core for convenience
pub use versex_core::{BookNameIndex, DataError, Translation};
