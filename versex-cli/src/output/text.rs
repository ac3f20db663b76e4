//! Text output formatter

use super::OutputFormatter;
use anyhow::{Context, Result};
use std::io::Write;
use versex_engine::Expansion;

/// Text formatter - writes the expanded document as is
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn write_expansion(&mut self, expansion: &Expansion) -> Result<()> {
        self.writer
            .write_all(expansion.text.as_bytes())
            .context("Failed to write output")
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush().context("Failed to write output")
    }
}
