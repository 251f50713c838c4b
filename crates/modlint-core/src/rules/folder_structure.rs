//! Required-folder-structure validation
//!
//! Every module must contain each configured folder pattern. In strict mode
//! a second pass flags directories not covered by the required list;
//! ancestors of a matched folder are exempt, they exist solely to permit
//! descent.

use std::collections::BTreeSet;
use std::path::Path;

use modlint_meta::FolderStructureConfig;

use crate::module::Module;
use crate::pattern::Pattern;
use crate::result::ValidationResult;
use crate::rules::MODULE_FOLDER_STRUCTURE;
use crate::Result;

const FOUND: &str = "Required folder found";
const NOT_FOUND: &str = "Required folder not found";
const NOT_ALLOWED: &str = "Folder outside the required list not allowed (strict mode)";

/// The `module-folder-structure` rule.
#[derive(Debug, Clone)]
pub struct FolderStructureRule {
    strict: bool,
    patterns: Vec<Pattern>,
}

impl FolderStructureRule {
    /// Build the rule, parsing the configured patterns.
    pub fn new(config: &FolderStructureConfig) -> Result<Self> {
        let patterns = config
            .required_folders
            .iter()
            .map(|p| Pattern::parse(p))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            strict: config.strict,
            patterns,
        })
    }

    /// Check every module, iterating modules in their given order and
    /// patterns in their configured order.
    pub fn check_modules(
        &self,
        modules: &[Module],
        _base_dir: &Path,
    ) -> Result<Vec<ValidationResult>> {
        let mut results = Vec::new();
        for module in modules {
            self.check_module(module, &mut results);
        }
        Ok(results)
    }

    fn check_module(&self, module: &Module, results: &mut Vec<ValidationResult>) {
        let mut matched: BTreeSet<String> = BTreeSet::new();

        for pattern in &self.patterns {
            let found = pattern.expand_dirs(module.tree());
            if found.is_empty() {
                results.push(ValidationResult::failed(
                    module.name(),
                    MODULE_FOLDER_STRUCTURE,
                    pattern.as_str(),
                    NOT_FOUND,
                ));
                continue;
            }
            for dir in found {
                // Overlapping patterns may rediscover a folder; one result
                // per (module, resource).
                if matched.insert(dir.clone()) {
                    results.push(ValidationResult::passed(
                        module.name(),
                        MODULE_FOLDER_STRUCTURE,
                        dir,
                        FOUND,
                    ));
                }
            }
        }

        if self.strict {
            self.strict_pass(module, &matched, results);
        }
    }

    /// Flag directories outside the allow-list.
    ///
    /// Only depths implied by the configured patterns are enumerated: a
    /// pattern without `**` implies exactly its segment count, a pattern
    /// with `**` implies every depth.
    fn strict_pass(
        &self,
        module: &Module,
        matched: &BTreeSet<String>,
        results: &mut Vec<ValidationResult>,
    ) {
        let unbounded = self.patterns.iter().any(|p| p.implied_depth().is_none());
        let depths: BTreeSet<usize> = self
            .patterns
            .iter()
            .filter_map(Pattern::implied_depth)
            .collect();

        for dir in module.tree().dirs() {
            if !unbounded && !depths.contains(&dir.depth()) {
                continue;
            }
            let rel = dir.as_str();
            if matched.contains(rel) {
                continue;
            }
            if matched.iter().any(|m| is_ancestor(rel, m)) {
                continue;
            }
            results.push(ValidationResult::failed(
                module.name(),
                MODULE_FOLDER_STRUCTURE,
                rel,
                NOT_ALLOWED,
            ));
        }
    }
}

/// Whether `ancestor` is a strict path-prefix of `descendant`.
fn is_ancestor(ancestor: &str, descendant: &str) -> bool {
    descendant.len() > ancestor.len()
        && descendant.starts_with(ancestor)
        && descendant.as_bytes()[ancestor.len()] == b'/'
}
