//! JSON output formatter

use super::OutputFormatter;
use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;
use versex_engine::{Diagnostic, Expansion, ExpansionStats};

/// JSON formatter - outputs the expansion as one object
pub struct JsonFormatter<W: Write> {
    writer: W,
}

/// Data structure for JSON output
#[derive(Debug, Serialize)]
pub struct ExpansionData<'a> {
    /// The expanded document
    pub text: &'a str,
    /// Unresolvable references
    pub diagnostics: &'a [Diagnostic],
    /// Run counters
    pub stats: ExpansionStats,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn write_expansion(&mut self, expansion: &Expansion) -> Result<()> {
        let data = ExpansionData {
            text: &expansion.text,
            diagnostics: &expansion.diagnostics,
            stats: expansion.stats,
        };
        let rendered = serde_json::to_string_pretty(&data)?;
        writeln!(self.writer, "{rendered}").context("Failed to write output")
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush().context("Failed to write output")
    }
}
