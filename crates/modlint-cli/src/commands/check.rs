//! Check command implementation

use std::path::Path;

use colored::Colorize;

use modlint_core::Engine;

use crate::cli::Format;
use crate::error::Result;
use crate::report;

/// Run the check command.
///
/// Returns whether any check failed so the caller can map it to the
/// process exit code.
pub fn run_check(
    dir: &Path,
    config: Option<&Path>,
    format: Format,
    quiet: bool,
) -> Result<bool> {
    let base_dir = dunce::canonicalize(dir)?;
    let engine = match config {
        Some(manifest_path) => Engine::with_manifest_path(&base_dir, manifest_path)?,
        None => Engine::new(&base_dir)?,
    };

    if format == Format::Text && !quiet {
        println!(
            "{} Checking modules in {}...",
            "=>".blue().bold(),
            base_dir.display()
        );
    }

    let lint = engine.run()?;

    match format {
        Format::Text => report::print_text(&lint, quiet),
        Format::Json => report::print_json(&lint)?,
    }

    Ok(lint.has_failures())
}
