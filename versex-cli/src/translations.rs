//! Translation files on disk
//!
//! Each version lives in `<dir>/bible_<version>.json` with a lower-case
//! version name.

use crate::error::CliError;
use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};
use versex_core::Translation;

const PREFIX: &str = "bible_";
const EXTENSION: &str = "json";

/// Directory of translation files
#[derive(Debug, Clone)]
pub struct TranslationStore {
    dir: PathBuf,
}

impl TranslationStore {
    /// Use translations from `dir`
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory searched
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File that holds `version`
    pub fn path_for(&self, version: &str) -> PathBuf {
        self.dir
            .join(format!("{PREFIX}{}.{EXTENSION}", version.to_lowercase()))
    }

    /// Load and validate a version
    pub fn load(&self, version: &str) -> Result<Translation> {
        let path = self.path_for(version);
        if !path.is_file() {
            return Err(CliError::TranslationNotFound(version.to_string()).into());
        }
        log::info!("Loading translation from {}", path.display());
        load_translation(&path)
    }

    /// Available versions, upper-cased and sorted
    pub fn versions(&self) -> Result<Vec<String>> {
        let entries = fs::read_dir(&self.dir).with_context(|| {
            format!("Failed to read translations directory: {}", self.dir.display())
        })?;

        let mut versions = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(EXTENSION) {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            if let Some(version) = stem.strip_prefix(PREFIX) {
                if !version.is_empty() {
                    versions.push(version.to_uppercase());
                }
            }
        }

        versions.sort();
        Ok(versions)
    }
}

/// Load and validate one translation file
pub fn load_translation(path: &Path) -> Result<Translation> {
    let file =
        File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    Translation::from_reader(BufReader::new(file))
        .with_context(|| format!("Invalid translation file: {}", path.display()))
}
