//! Module model and discovery
//!
//! A module is one sibling project folder under the linted monorepo,
//! identified by the presence of a marker file. Each module carries an
//! immutable [`ModuleTree`] snapshot built once at discovery time; rules
//! never re-scan the filesystem mid-evaluation.

use std::fs;
use std::path::{Path, PathBuf};

use modlint_fs::{ModuleTree, NormalizedPath};
use modlint_meta::Manifest;

use crate::Result;

/// One discovered module.
#[derive(Debug, Clone)]
pub struct Module {
    name: String,
    rel_path: NormalizedPath,
    tree: ModuleTree,
}

impl Module {
    /// Create a module from an already-built snapshot.
    pub fn new(name: impl Into<String>, rel_path: NormalizedPath, tree: ModuleTree) -> Self {
        Self {
            name: name.into(),
            rel_path,
            tree,
        }
    }

    /// Module name, unique within one run.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Location of the module relative to the base directory.
    pub fn rel_path(&self) -> &NormalizedPath {
        &self.rel_path
    }

    /// The module's directory snapshot.
    pub fn tree(&self) -> &ModuleTree {
        &self.tree
    }
}

/// Discover all modules under `base_dir`.
///
/// A directory that directly contains one of the manifest's marker files is
/// a module; discovery does not descend into it looking for nested modules.
/// Directory names in the manifest's ignore list are never entered, and the
/// base directory itself is never a module. The result is sorted by module
/// name so rule input order is deterministic.
pub fn discover_modules(base_dir: &Path, manifest: &Manifest) -> Result<Vec<Module>> {
    let mut roots: Vec<NormalizedPath> = Vec::new();
    collect_roots(base_dir, &NormalizedPath::new(""), manifest, &mut roots)?;

    let mut modules = Vec::with_capacity(roots.len());
    for rel in &roots {
        let name = module_name(rel, &roots);
        let tree = ModuleTree::scan(&base_dir.join(rel.to_native()), &manifest.ignore)?;
        tracing::debug!(module = %name, path = %rel, "discovered module");
        modules.push(Module::new(name, rel.clone(), tree));
    }
    modules.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(modules)
}

/// Directory name of the module, falling back to its relative path when two
/// modules in different parents share a name.
fn module_name(rel: &NormalizedPath, all: &[NormalizedPath]) -> String {
    let name = rel.file_name().unwrap_or(rel.as_str());
    let collisions = all
        .iter()
        .filter(|other| other.file_name().unwrap_or(other.as_str()) == name)
        .count();
    if collisions > 1 {
        rel.as_str().to_string()
    } else {
        name.to_string()
    }
}

fn collect_roots(
    base_dir: &Path,
    prefix: &NormalizedPath,
    manifest: &Manifest,
    roots: &mut Vec<NormalizedPath>,
) -> Result<()> {
    let native: PathBuf = if prefix.as_str().is_empty() {
        base_dir.to_path_buf()
    } else {
        base_dir.join(prefix.to_native())
    };

    let entries = fs::read_dir(&native).map_err(|e| modlint_fs::Error::io(&native, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| modlint_fs::Error::io(&native, e))?;
        let file_type = entry
            .file_type()
            .map_err(|e| modlint_fs::Error::io(entry.path(), e))?;
        if !file_type.is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if manifest.ignore.iter().any(|i| i == &name) {
            continue;
        }
        let rel = prefix.join(&name);
        if has_marker(&entry.path(), &manifest.module_markers) {
            roots.push(rel);
        } else {
            collect_roots(base_dir, &rel, manifest, roots)?;
        }
    }
    Ok(())
}

fn has_marker(dir: &Path, markers: &[String]) -> bool {
    markers.iter().any(|marker| dir.join(marker).is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn manifest() -> Manifest {
        Manifest::default()
    }

    fn make_module(base: &Path, rel: &str) {
        let dir = base.join(rel);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("package.json"), "{}").unwrap();
    }

    #[test]
    fn discovery_is_sorted_by_name() {
        let temp = TempDir::new().unwrap();
        make_module(temp.path(), "zeta");
        make_module(temp.path(), "alpha");
        make_module(temp.path(), "packages/beta");

        let modules = discover_modules(temp.path(), &manifest()).unwrap();
        let names: Vec<&str> = modules.iter().map(Module::name).collect();
        assert_eq!(names, ["alpha", "beta", "zeta"]);
        assert_eq!(modules[1].rel_path().as_str(), "packages/beta");
    }

    #[test]
    fn discovery_skips_ignored_directories() {
        let temp = TempDir::new().unwrap();
        make_module(temp.path(), "app");
        make_module(temp.path(), "node_modules/dep");

        let modules = discover_modules(temp.path(), &manifest()).unwrap();
        assert_eq!(modules.len(), 1);
        assert_eq!(modules[0].name(), "app");
    }

    #[test]
    fn discovery_does_not_nest_into_modules() {
        let temp = TempDir::new().unwrap();
        make_module(temp.path(), "app");
        make_module(temp.path(), "app/sub");

        let modules = discover_modules(temp.path(), &manifest()).unwrap();
        let names: Vec<&str> = modules.iter().map(Module::name).collect();
        assert_eq!(names, ["app"]);
    }

    #[test]
    fn colliding_names_fall_back_to_relative_paths() {
        let temp = TempDir::new().unwrap();
        make_module(temp.path(), "apps/web");
        make_module(temp.path(), "legacy/web");

        let modules = discover_modules(temp.path(), &manifest()).unwrap();
        let names: Vec<&str> = modules.iter().map(Module::name).collect();
        assert_eq!(names, ["apps/web", "legacy/web"]);
    }
}
