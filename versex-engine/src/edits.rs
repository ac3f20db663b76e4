//! Offset-stable edit list
//!
//! Insertions are keyed by byte offsets into the input text and applied
//! in one left-to-right pass, so no insertion shifts another one. Several
//! insertions at the same offset keep the order they were added in.

use crate::error::{EngineError, Result};
use std::collections::BTreeMap;

/// Pending insertions into one text
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EditList {
    inserts: BTreeMap<usize, Vec<String>>,
    inserted_len: usize,
}

impl EditList {
    /// Create an empty edit list
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `text` for insertion at `offset`
    pub fn insert(&mut self, offset: usize, text: impl Into<String>) {
        let text = text.into();
        self.inserted_len += text.len();
        self.inserts.entry(offset).or_default().push(text);
    }

    /// Number of queued insertions
    pub fn len(&self) -> usize {
        self.inserts.values().map(Vec::len).sum()
    }

    /// True when nothing is queued
    pub fn is_empty(&self) -> bool {
        self.inserts.is_empty()
    }

    /// Build the edited text
    ///
    /// Fails if an offset is past the end of `text` or not on a character
    /// boundary.
    pub fn apply(&self, text: &str) -> Result<String> {
        let mut result = String::with_capacity(text.len() + self.inserted_len);
        let mut last = 0;

        for (&offset, inserts) in &self.inserts {
            let chunk = text
                .get(last..offset)
                .ok_or(EngineError::InvalidEditOffset { offset })?;
            result.push_str(chunk);
            for insert in inserts {
                log::trace!("inserting {} bytes at {}", insert.len(), offset);
                result.push_str(insert);
            }
            last = offset;
        }

        result.push_str(&text[last..]);
        Ok(result)
    }
}
