//! versex CLI library
//!
//! This library provides the command-line interface for expanding
//! scripture citations with verse text.

pub mod book_source;
pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod translations;

pub use error::{CliError, CliResult};
