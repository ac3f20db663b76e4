//! List-versions command implementation

use crate::config::CliConfig;
use crate::translations::TranslationStore;
use anyhow::Result;
use clap::Args;
use std::io::Write;
use std::path::PathBuf;

/// Arguments for the list-versions command
#[derive(Debug, Args)]
pub struct ListVersionsArgs {
    /// Directory containing bible_<version>.json files
    #[arg(long, value_name = "DIR", env = "VERSEX_TRANSLATIONS_DIR")]
    pub translations_dir: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl ListVersionsArgs {
    /// Execute the list-versions command
    pub fn execute(&self) -> Result<()> {
        let config = CliConfig::discover(self.config.as_deref())?;
        let dir = self
            .translations_dir
            .clone()
            .unwrap_or(config.data.translations_dir);

        let versions = TranslationStore::new(dir).versions()?;
        write_versions(&mut std::io::stdout().lock(), &versions)
    }
}

fn write_versions(out: &mut impl Write, versions: &[String]) -> Result<()> {
    writeln!(out, "Available Bible versions:")?;
    for version in versions {
        writeln!(out, " - {version}")?;
    }
    Ok(())
}
