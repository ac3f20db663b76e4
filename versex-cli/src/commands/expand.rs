//! Expand command implementation

use crate::book_source::BookSource;
use crate::config::{CliConfig, ExpansionConfig};
use crate::error::CliError;
use crate::input::read_input;
use crate::output::{open_output, JsonFormatter, OutputFormatter, TextFormatter};
use crate::translations::TranslationStore;
use anyhow::Result;
use clap::Args;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use versex_engine::{ExpandOptions, InsertionMode, ScanScope, TextExpander};

/// Arguments for the expand command
#[derive(Debug, Args)]
pub struct ExpandArgs {
    /// Bible version to use (e.g. KJV, WEB)
    #[arg(value_name = "VERSION")]
    pub version: String,

    /// Input file (default: stdin)
    #[arg(short = 'f', long = "file", value_name = "INFILE")]
    pub input: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short = 'o', long = "out", value_name = "OUTFILE")]
    pub output: Option<PathBuf>,

    /// Ignore references covering more than N verses
    #[arg(short, long, value_name = "N", visible_alias = "limit-verses")]
    pub limit: Option<NonZeroUsize>,

    /// Place verse text after the next line break
    #[arg(short = 'p', long)]
    pub after_paragraph: bool,

    /// Text to surround verse text with (default: `)
    #[arg(short = 's', long, value_name = "TEXT")]
    pub surround_char: Option<String>,

    /// Prefix verse text with the citation
    #[arg(long, overrides_with = "no_echo_citation")]
    pub echo_citation: bool,

    /// Never prefix verse text with the citation
    #[arg(long, overrides_with = "echo_citation")]
    pub no_echo_citation: bool,

    /// Number each verse after the first
    #[arg(long)]
    pub verse_numbers: bool,

    /// Expand each line independently
    #[arg(long)]
    pub per_line: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Directory containing bible_<version>.json files
    #[arg(long, value_name = "DIR", env = "VERSEX_TRANSLATIONS_DIR")]
    pub translations_dir: Option<PathBuf>,

    /// Book-alias JSON file (default: built-in table)
    #[arg(long, value_name = "FILE")]
    pub books: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress warnings
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// The expanded document
    Text,
    /// Expanded document with diagnostics and counters
    Json,
}

impl ExpandArgs {
    /// Execute the expand command
    pub fn execute(&self) -> Result<()> {
        // Initialize logging based on verbosity
        self.init_logging()?;

        log::debug!("Arguments: {:?}", self);

        let config = CliConfig::discover(self.config.as_deref())?;
        let options = self.expand_options(&config.expansion)?;

        let books = BookSource::from_path(self.books.clone().or(config.data.books_file));
        log::info!("Book aliases: {}", books.display_name());
        let index = books.load()?;

        let dir = self
            .translations_dir
            .clone()
            .unwrap_or(config.data.translations_dir);
        let translation = TranslationStore::new(dir).load(&self.version)?;

        let text = read_input(self.input.as_deref())?;
        if text.trim().is_empty() {
            log::info!("Input is empty, nothing to do");
            return Ok(());
        }

        let expansion = TextExpander::new(&index, &translation, options).expand(&text)?;
        for diagnostic in &expansion.diagnostics {
            log::warn!("{diagnostic}");
        }
        log::info!(
            "Expanded {} of {} references",
            expansion.stats.expanded,
            expansion.stats.references
        );

        let writer = open_output(self.output.as_deref())?;
        let mut formatter: Box<dyn OutputFormatter> = match self.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
        };
        formatter.write_expansion(&expansion)?;
        formatter.finish()
    }

    /// Merge flags over file configuration
    fn expand_options(&self, config: &ExpansionConfig) -> Result<ExpandOptions> {
        let mode = if self.after_paragraph {
            InsertionMode::AfterLine
        } else {
            config.mode
        };

        let echo = if self.echo_citation {
            true
        } else if self.no_echo_citation {
            false
        } else {
            config
                .echo_citation
                .unwrap_or(mode == InsertionMode::AfterLine)
        };

        let scope = if self.per_line || config.per_line {
            ScanScope::Lines
        } else {
            ScanScope::Document
        };

        let delimiter = self
            .surround_char
            .clone()
            .unwrap_or_else(|| config.delimiter.clone());

        ExpandOptions::builder()
            .limit(self.limit.map(NonZeroUsize::get).or(config.limit))
            .mode(mode)
            .delimiter(delimiter)
            .echo_citation(echo)
            .verse_numbers(self.verse_numbers || config.verse_numbers)
            .scope(scope)
            .build()
            .map_err(|e| CliError::ConfigError(e.to_string()).into())
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .init();
        }

        Ok(())
    }
}
