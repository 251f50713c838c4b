//! Modules command implementation

use std::path::Path;

use colored::Colorize;

use modlint_core::Engine;

use crate::error::Result;

/// List the modules discovery would lint.
pub fn run_modules(dir: &Path, config: Option<&Path>) -> Result<()> {
    let base_dir = dunce::canonicalize(dir)?;
    let engine = match config {
        Some(manifest_path) => Engine::with_manifest_path(&base_dir, manifest_path)?,
        None => Engine::new(&base_dir)?,
    };

    let modules = engine.modules()?;
    if modules.is_empty() {
        println!("No modules found under {}.", base_dir.display());
        return Ok(());
    }

    for module in &modules {
        println!("{}  {}", module.name().green().bold(), module.rel_path().as_str().dimmed());
    }
    println!();
    println!("{} module(s)", modules.len());
    Ok(())
}
