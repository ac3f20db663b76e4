//! Input handling module

pub mod file_reader;

pub use file_reader::FileReader;

use anyhow::Result;
use std::path::Path;

/// Read the whole input from a file, or from stdin when no path is given
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => FileReader::read_text(path),
        None => FileReader::read_stdin(),
    }
}
