//! File reading utilities

use crate::error::CliError;
use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let bytes =
            fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;
        Self::decode(bytes, &path.display().to_string())
    }

    /// Read stdin to the end as UTF-8 text
    pub fn read_stdin() -> Result<String> {
        let mut bytes = Vec::new();
        io::stdin()
            .lock()
            .read_to_end(&mut bytes)
            .context("Failed to read stdin")?;
        Self::decode(bytes, "stdin")
    }

    fn decode(bytes: Vec<u8>, source: &str) -> Result<String> {
        String::from_utf8(bytes).map_err(|e| {
            CliError::InvalidInput(format!(
                "{source} is not valid UTF-8 (byte {})",
                e.utf8_error().valid_up_to()
            ))
            .into()
        })
    }
}
