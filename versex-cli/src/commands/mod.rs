//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod expand;
pub mod generate_config;
pub mod list_versions;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Expand scripture citations in text with verse text
    Expand(expand::ExpandArgs),

    /// List available Bible versions
    ListVersions(list_versions::ListVersionsArgs),

    /// Check translation and book-alias files
    Validate(validate::ValidateArgs),

    /// Write a configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Expand(args) => args.execute(),
            Commands::ListVersions(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}
