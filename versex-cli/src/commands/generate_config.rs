//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", default_value = "versex.toml")]
    pub output: PathBuf,

    /// Replace an existing file
    #[arg(long)]
    pub force: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        if self.output.exists() && !self.force {
            anyhow::bail!(
                "{} already exists (use --force to overwrite)",
                self.output.display()
            );
        }

        fs::write(&self.output, Self::generate_template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template written to {}", self.output.display());
        println!();
        println!("Next steps:");
        println!("1. Edit the file to set your defaults");
        println!("2. Use it for expansion:");
        println!(
            "   versex expand KJV -f input.txt --config {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template configuration content
    fn generate_template() -> String {
        r#"# versex configuration
#
# Command-line flags override every value here.

[expansion]
# Leave references covering more verses than this untouched.
# Remove the line for no limit.
# limit = 10

# "inline" places verse text right after each citation,
# "after-line" places it on its own line after the next line break.
mode = "inline"

# Text wrapped around inserted verses
delimiter = "`"

# Prefix inserted verses with the citation.
# When unset, this is on for "after-line" and off for "inline".
# echo_citation = false

# Number each verse after the first
verse_numbers = false

# Expand each line independently (uses all cores)
per_line = false

[data]
# Directory containing bible_<version>.json files
translations_dir = "translations"

# Custom book-alias table; the built-in table is used when unset
# books_file = "books.json"
"#
        .to_string()
    }
}
