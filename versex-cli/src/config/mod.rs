//! Configuration module
//!
//! An optional TOML file supplies defaults for the `expand` flags. It is
//! read from `--config`, or from `versex.toml` in the working directory when
//! that file exists.

use crate::error::CliError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use versex_engine::InsertionMode;

/// File looked up in the working directory when no `--config` is given
pub const DEFAULT_CONFIG_FILE: &str = "versex.toml";

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Expansion defaults
    #[serde(default)]
    pub expansion: ExpansionConfig,

    /// Data file locations
    #[serde(default)]
    pub data: DataConfig,
}

/// Expansion-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ExpansionConfig {
    /// Verse limit, unlimited when absent
    pub limit: Option<usize>,

    /// `inline` or `after-line`
    pub mode: InsertionMode,

    /// Text wrapped around inserted verses
    pub delimiter: String,

    /// Echo the citation; follows the mode when absent
    pub echo_citation: Option<bool>,

    /// Number each verse after the first
    pub verse_numbers: bool,

    /// Expand each line on its own
    pub per_line: bool,
}

impl Default for ExpansionConfig {
    fn default() -> Self {
        Self {
            limit: None,
            mode: InsertionMode::Inline,
            delimiter: "`".to_string(),
            echo_citation: None,
            verse_numbers: false,
            per_line: false,
        }
    }
}

/// Data-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct DataConfig {
    /// Directory holding `bible_<version>.json` files
    pub translations_dir: PathBuf,

    /// Custom book-alias table, built-in table when absent
    pub books_file: Option<PathBuf>,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            translations_dir: PathBuf::from("translations"),
            books_file: None,
        }
    }
}

impl CliConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()).into())
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Load the explicit file, else `versex.toml` if present, else defaults
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let fallback = Path::new(DEFAULT_CONFIG_FILE);
        if fallback.is_file() {
            log::debug!("Using {}", fallback.display());
            return Self::load(fallback);
        }

        Ok(Self::default())
    }
}
