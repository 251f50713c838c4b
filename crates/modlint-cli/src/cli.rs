//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// modlint - Lint structural and content conventions across monorepo modules
#[derive(Parser, Debug)]
#[command(name = "modlint")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Run all configured rules over the monorepo
    ///
    /// Examples:
    ///   modlint check                  # Lint the current directory
    ///   modlint check path/to/repo     # Lint another base directory
    ///   modlint check --format json    # Machine-readable report
    Check {
        /// Base directory of the monorepo
        #[arg(default_value = ".")]
        dir: PathBuf,

        /// Explicit manifest path (default: modlint.{json,toml,yaml} in DIR)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Report format
        #[arg(long, value_enum, default_value = "text")]
        format: Format,

        /// Only print failing checks
        #[arg(short, long)]
        quiet: bool,
    },

    /// List the modules discovery would lint
    Modules {
        /// Base directory of the monorepo
        #[arg(default_value = ".")]
        dir: PathBuf,

        /// Explicit manifest path (default: modlint.{json,toml,yaml} in DIR)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

/// Report output format
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Human-readable, colored
    Text,
    /// Machine-readable JSON
    Json,
}
