//! modlint CLI
//!
//! The command-line interface for the monorepo-consistency linter.

mod cli;
mod commands;
mod error;
mod report;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::Result;

/// Exit codes: 0 all checks passed, 1 at least one check failed,
/// 2 configuration or I/O error.
const EXIT_FAILURES: i32 = 1;
const EXIT_ERROR: i32 = 2;

fn main() {
    match run() {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            std::process::exit(EXIT_ERROR);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    match cli.command {
        Some(Commands::Check {
            dir,
            config,
            format,
            quiet,
        }) => {
            let has_failures = commands::run_check(&dir, config.as_deref(), format, quiet)?;
            Ok(if has_failures { EXIT_FAILURES } else { 0 })
        }
        Some(Commands::Modules { dir, config }) => {
            commands::run_modules(&dir, config.as_deref())?;
            Ok(0)
        }
        None => {
            // No command provided - show help hint
            println!("{} monorepo-consistency linter", "modlint".green().bold());
            println!();
            println!("Run {} for available commands.", "modlint --help".cyan());
            Ok(0)
        }
    }
}
