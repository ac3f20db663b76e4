//! versex command-line entry point

use clap::Parser;
use std::process::ExitCode;
use versex_cli::commands::Commands;
use versex_cli::error::is_broken_pipe;

/// Expand scripture citations in text with the verses they name
#[derive(Debug, Parser)]
#[command(name = "versex", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        // The reader went away (e.g. `| head`); nothing left to report.
        Err(e) if is_broken_pipe(&e) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
