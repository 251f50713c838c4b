//! Lint engine
//!
//! Owns one linter run: load the manifest, discover modules, run the
//! enabled rules in canonical order, and aggregate the ordered report.

use std::path::{Path, PathBuf};

use modlint_fs::NormalizedPath;
use modlint_meta::{Manifest, ManifestStore};

use crate::module::{Module, discover_modules};
use crate::result::LintReport;
use crate::rules::RuleKind;
use crate::Result;

/// One configured linter run over a base directory.
#[derive(Debug)]
pub struct Engine {
    base_dir: PathBuf,
    manifest: Manifest,
}

impl Engine {
    /// Create an engine, locating the manifest in `base_dir`.
    pub fn new(base_dir: &Path) -> Result<Self> {
        let manifest = modlint_meta::load_manifest(base_dir)?;
        Ok(Self {
            base_dir: base_dir.to_path_buf(),
            manifest,
        })
    }

    /// Create an engine with an explicit manifest path.
    pub fn with_manifest_path(base_dir: &Path, manifest_path: &Path) -> Result<Self> {
        let manifest = ManifestStore::new().load(&NormalizedPath::new(manifest_path))?;
        Ok(Self {
            base_dir: base_dir.to_path_buf(),
            manifest,
        })
    }

    /// Create an engine from an already-parsed manifest.
    pub fn with_manifest(base_dir: &Path, manifest: Manifest) -> Self {
        Self {
            base_dir: base_dir.to_path_buf(),
            manifest,
        }
    }

    /// The manifest driving this run.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// The base directory being linted.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Discover the modules this run would lint.
    pub fn modules(&self) -> Result<Vec<Module>> {
        discover_modules(&self.base_dir, &self.manifest)
    }

    /// Run all enabled rules and aggregate their ordered results.
    pub fn run(&self) -> Result<LintReport> {
        let rules = RuleKind::from_config(&self.manifest.rules)?;
        let modules = self.modules()?;
        tracing::debug!(
            modules = modules.len(),
            rules = rules.len(),
            base_dir = %self.base_dir.display(),
            "starting lint run"
        );

        let mut results = Vec::new();
        for rule in &rules {
            let mut rule_results = rule.check_modules(&modules, &self.base_dir)?;
            tracing::debug!(rule = rule.id(), results = rule_results.len(), "rule finished");
            results.append(&mut rule_results);
        }
        Ok(LintReport::new(results, modules.len()))
    }
}
