//! [`TestMonorepo`] builder for modlint test scenarios.
//!
//! Builds throwaway monorepo trees: a temp base directory, a manifest, and
//! module folders marked with `package.json`.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// A temporary monorepo directory with helper methods for test setup.
///
/// # Example
///
/// ```rust,no_run
/// use modlint_test_utils::TestMonorepo;
///
/// let repo = TestMonorepo::new();
/// repo.manifest(r#"{"rules": {"module-folder-structure": {"requiredFolders": ["src"]}}}"#);
/// repo.module("mod-a");
/// repo.dir("mod-a", "src");
/// ```
pub struct TestMonorepo {
    temp_dir: TempDir,
}

impl Default for TestMonorepo {
    fn default() -> Self {
        Self::new()
    }
}

impl TestMonorepo {
    /// Create an empty temporary base directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the base directory path.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write `modlint.json` at the base directory.
    pub fn manifest(&self, content: &str) {
        fs::write(self.root().join("modlint.json"), content).unwrap();
    }

    /// Create a module folder marked with an empty `package.json`.
    pub fn module(&self, name: &str) {
        let dir = self.root().join(name);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("package.json"), "{}\n").unwrap();
    }

    /// Create a directory inside a module.
    pub fn dir(&self, module: &str, rel: &str) {
        fs::create_dir_all(self.root().join(module).join(rel)).unwrap();
    }

    /// Write a file inside a module, creating parent directories.
    pub fn file(&self, module: &str, rel: &str, content: &str) {
        let path = self.root().join(module).join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }
}
