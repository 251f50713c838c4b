//! Cross-module content consistency
//!
//! Elects a reference module by consensus scoring, then compares every
//! other module's tracked files byte-for-byte against the reference copies.
//! Digest equality drives the election; the per-file verdict always comes
//! from comparing the raw bytes, with no normalization of line endings,
//! whitespace, or encoding.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::Path;

use modlint_fs::checksum;
use modlint_meta::SameContentsConfig;

use crate::module::Module;
use crate::pattern::Pattern;
use crate::result::ValidationResult;
use crate::rules::MODULE_SAME_CONTENTS;
use crate::Result;

const REFERENCE: &str = "Reference file for module content comparison";
const MATCHES: &str = "Matches reference";
const NOT_FOUND_ANYWHERE: &str = "Tracked file not found in any module";

/// The `module-same-contents` rule.
#[derive(Debug, Clone)]
pub struct SameContentsRule {
    tracked: Option<Vec<Pattern>>,
}

impl SameContentsRule {
    /// Build the rule, parsing configured tracked-file patterns.
    ///
    /// With no configured patterns the rule compares every file path that
    /// exists, identically named, in at least two modules.
    pub fn new(config: &SameContentsConfig) -> Result<Self> {
        let tracked = config
            .tracked_files
            .as_ref()
            .map(|files| files.iter().map(|f| Pattern::parse(f)).collect::<Result<Vec<_>>>())
            .transpose()?;
        Ok(Self { tracked })
    }

    /// Check every module against the elected reference.
    ///
    /// Output order: pattern-level results for configured files found
    /// nowhere, then the reference's own files in tracked order, then the
    /// remaining modules in their given order, each in tracked order.
    pub fn check_modules(
        &self,
        modules: &[Module],
        _base_dir: &Path,
    ) -> Result<Vec<ValidationResult>> {
        let mut results = Vec::new();

        let tracked = self.resolve_tracked(modules, &mut results);
        let digests = digest_table(modules, &tracked)?;

        let Some(ref_idx) = elect_reference(modules, &digests) else {
            // No module possesses any tracked resource.
            return Ok(results);
        };
        let reference = &modules[ref_idx];
        tracing::debug!(reference = reference.name(), "elected reference module");

        for rel in &tracked {
            if digests[ref_idx].contains_key(rel) {
                results.push(ValidationResult::passed(
                    reference.name(),
                    MODULE_SAME_CONTENTS,
                    format!("{}/{}", reference.name(), rel),
                    REFERENCE,
                ));
            }
        }

        let mut reference_bytes: HashMap<&str, Vec<u8>> = HashMap::new();
        for (idx, module) in modules.iter().enumerate() {
            if idx == ref_idx {
                continue;
            }
            for rel in &tracked {
                if !digests[idx].contains_key(rel) {
                    continue;
                }
                if !digests[ref_idx].contains_key(rel) {
                    // Absent from the reference: nothing to compare against.
                    continue;
                }

                if !reference_bytes.contains_key(rel.as_str()) {
                    let Some(bytes) = reference.tree().read(rel)? else {
                        continue;
                    };
                    reference_bytes.insert(rel.as_str(), bytes);
                }
                let Some(bytes) = module.tree().read(rel)? else {
                    continue;
                };

                let resource = format!("{}/{}", module.name(), rel);
                if bytes == reference_bytes[rel.as_str()] {
                    results.push(ValidationResult::passed(
                        module.name(),
                        MODULE_SAME_CONTENTS,
                        resource,
                        MATCHES,
                    ));
                } else {
                    results.push(ValidationResult::failed(
                        module.name(),
                        MODULE_SAME_CONTENTS,
                        resource,
                        format!(
                            "Content differs from reference file {}/{}",
                            reference.name(),
                            rel
                        ),
                    ));
                }
            }
        }

        Ok(results)
    }

    /// The concrete relative paths to compare, in output order.
    ///
    /// Configured patterns keep their configured order (a glob contributes
    /// its matches sorted); inferred tracking is lexicographic. A configured
    /// pattern possessed by no module at all yields one pattern-level
    /// failure so dead config entries stay visible.
    fn resolve_tracked(
        &self,
        modules: &[Module],
        results: &mut Vec<ValidationResult>,
    ) -> Vec<String> {
        match &self.tracked {
            Some(patterns) => {
                let mut order: Vec<String> = Vec::new();
                for pattern in patterns {
                    let mut found = BTreeSet::new();
                    for module in modules {
                        found.extend(pattern.expand_files(module.tree()));
                    }
                    if found.is_empty() {
                        results.push(ValidationResult::pattern_level(
                            MODULE_SAME_CONTENTS,
                            pattern.as_str(),
                            NOT_FOUND_ANYWHERE,
                        ));
                        continue;
                    }
                    for rel in found {
                        if !order.contains(&rel) {
                            order.push(rel);
                        }
                    }
                }
                order
            }
            None => {
                let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
                for module in modules {
                    for file in module.tree().files() {
                        *counts.entry(file.as_str()).or_default() += 1;
                    }
                }
                counts
                    .into_iter()
                    .filter(|(_, count)| *count >= 2)
                    .map(|(rel, _)| rel.to_string())
                    .collect()
            }
        }
    }
}

/// Per-module digest of every tracked file the module possesses.
fn digest_table(modules: &[Module], tracked: &[String]) -> Result<Vec<BTreeMap<String, String>>> {
    modules
        .iter()
        .map(|module| {
            let mut digests = BTreeMap::new();
            for rel in tracked {
                if let Some(bytes) = module.tree().read(rel)? {
                    digests.insert(rel.clone(), checksum::digest_bytes(&bytes));
                }
            }
            Ok(digests)
        })
        .collect()
}

/// Consensus election of the reference module.
///
/// Primary score: total count of cross-module content agreements the module
/// participates in. Ties break on tracked-resource possession count, then
/// on lexicographically smallest module name, so the winner is unique and
/// re-election on unchanged contents is stable.
fn elect_reference(modules: &[Module], digests: &[BTreeMap<String, String>]) -> Option<usize> {
    let mut best: Option<(usize, usize, usize)> = None;
    for (idx, module) in modules.iter().enumerate() {
        let possessed = digests[idx].len();
        if possessed == 0 {
            continue;
        }
        let mut agreements = 0;
        for (rel, digest) in &digests[idx] {
            agreements += digests
                .iter()
                .enumerate()
                .filter(|(other, table)| *other != idx && table.get(rel) == Some(digest))
                .count();
        }
        let better = match best {
            None => true,
            Some((best_agreements, best_possessed, best_idx)) => {
                agreements > best_agreements
                    || (agreements == best_agreements && possessed > best_possessed)
                    || (agreements == best_agreements
                        && possessed == best_possessed
                        && module.name() < modules[best_idx].name())
            }
        };
        if better {
            best = Some((agreements, possessed, idx));
        }
    }
    best.map(|(_, _, idx)| idx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use modlint_fs::{ModuleTree, NormalizedPath};
    use std::fs;
    use tempfile::TempDir;

    fn module(temp: &TempDir, name: &str, files: &[(&str, &str)]) -> Module {
        let root = temp.path().join(name);
        fs::create_dir_all(&root).unwrap();
        for (rel, content) in files {
            fs::write(root.join(rel), content).unwrap();
        }
        let tree = ModuleTree::scan(&root, &[]).unwrap();
        Module::new(name, NormalizedPath::new(name), tree)
    }

    fn tracked(paths: &[&str]) -> Vec<String> {
        paths.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn majority_agreement_wins_election() {
        let temp = TempDir::new().unwrap();
        let modules = vec![
            module(&temp, "mod-a", &[("shared.json", "{}")]),
            module(&temp, "mod-b", &[("shared.json", "{}")]),
            module(&temp, "mod-c", &[("shared.json", "DIFFERENT")]),
        ];
        let digests = digest_table(&modules, &tracked(&["shared.json"])).unwrap();

        let winner = elect_reference(&modules, &digests).unwrap();
        // mod-a and mod-b tie on agreements and possession; smallest name wins.
        assert_eq!(modules[winner].name(), "mod-a");
    }

    #[test]
    fn possession_breaks_agreement_ties() {
        let temp = TempDir::new().unwrap();
        let modules = vec![
            module(&temp, "mod-a", &[("x.json", "{}")]),
            module(&temp, "mod-b", &[("x.json", "{}"), ("only-here.json", "{}")]),
        ];
        let digests = digest_table(&modules, &tracked(&["x.json", "only-here.json"])).unwrap();

        let winner = elect_reference(&modules, &digests).unwrap();
        assert_eq!(modules[winner].name(), "mod-b");
    }

    #[test]
    fn no_possessions_elects_nobody() {
        let temp = TempDir::new().unwrap();
        let modules = vec![
            module(&temp, "mod-a", &[]),
            module(&temp, "mod-b", &[]),
        ];
        let digests = digest_table(&modules, &tracked(&["x.json"])).unwrap();
        assert_eq!(elect_reference(&modules, &digests), None);
    }

    #[test]
    fn election_is_stable_across_runs() {
        let temp = TempDir::new().unwrap();
        let modules = vec![
            module(&temp, "mod-a", &[("a.json", "1"), ("b.json", "2")]),
            module(&temp, "mod-b", &[("a.json", "1")]),
            module(&temp, "mod-c", &[("b.json", "2"), ("c.json", "3")]),
        ];
        let paths = tracked(&["a.json", "b.json", "c.json"]);

        let first = elect_reference(&modules, &digest_table(&modules, &paths).unwrap());
        let second = elect_reference(&modules, &digest_table(&modules, &paths).unwrap());
        assert_eq!(first, second);
        assert_eq!(modules[first.unwrap()].name(), "mod-a");
    }
}
