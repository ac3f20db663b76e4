//! Validate command implementation

use crate::book_source::BookSource;
use crate::translations::load_translation;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
#[command(group = clap::ArgGroup::new("target").required(true).multiple(true))]
pub struct ValidateArgs {
    /// Translation JSON file to validate
    #[arg(short, long, value_name = "FILE", group = "target")]
    pub translation: Option<PathBuf>,

    /// Book-alias JSON file to validate
    #[arg(short, long, value_name = "FILE", group = "target")]
    pub books: Option<PathBuf>,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        if let Some(path) = &self.translation {
            println!("Validating translation: {}", path.display());
            match load_translation(path) {
                Ok(translation) => {
                    println!("✓ Translation is valid!");
                    println!("  Books: {}", translation.books.len());
                    println!("  Verses: {}", translation.verse_count());
                }
                Err(e) => {
                    println!("✗ Translation is invalid!");
                    println!("  Error: {e:#}");
                    return Err(anyhow::anyhow!("Validation failed: {e:#}"));
                }
            }
        }

        if let Some(path) = &self.books {
            println!("Validating book aliases: {}", path.display());
            match BookSource::External(path.clone()).load() {
                Ok(index) => {
                    println!("✓ Book aliases are valid!");
                    println!("  Books: {}", index.len());
                    println!("  Aliases: {}", index.alias_count());
                }
                Err(e) => {
                    println!("✗ Book aliases are invalid!");
                    println!("  Error: {e:#}");
                    return Err(anyhow::anyhow!("Validation failed: {e:#}"));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_validate_args_debug() {
        let args = ValidateArgs {
            translation: Some(PathBuf::from("bible_kjv.json")),
            books: None,
        };

        let debug_str = format!("{:?}", args);
        assert!(debug_str.contains("ValidateArgs"));
        assert!(debug_str.contains("bible_kjv.json"));
    }

    #[test]
    fn test_validate_valid_files() {
        let translation = temp_file(
            r#"{"books":[{"book":"John","chapters":[{"chapter":3,"verses":[{"verse":16,"text":"For God so loved the world"}]}]}]}"#,
        );
        let books = temp_file(r#"[{"book":"John","names":["Jn"]}]"#);

        let args = ValidateArgs {
            translation: Some(translation.path().to_path_buf()),
            books: Some(books.path().to_path_buf()),
        };
        assert!(args.execute().is_ok());
    }

    #[test]
    fn test_validate_duplicate_verse() {
        let translation = temp_file(
            r#"{"books":[{"book":"John","chapters":[{"chapter":3,"verses":[
                {"verse":16,"text":"a"},{"verse":16,"text":"b"}]}]}]}"#,
        );

        let args = ValidateArgs {
            translation: Some(translation.path().to_path_buf()),
            books: None,
        };
        let error = args.execute().unwrap_err();
        assert!(error.to_string().contains("Validation failed"));
    }

    #[test]
    fn test_validate_malformed_books() {
        let books = temp_file(r#"{"book":"John"}"#);

        let args = ValidateArgs {
            translation: None,
            books: Some(books.path().to_path_buf()),
        };
        assert!(args.execute().is_err());
    }
}
