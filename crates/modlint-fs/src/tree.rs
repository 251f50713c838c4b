//! Immutable module directory snapshots
//!
//! A [`ModuleTree`] is built once, up front, by a recursive walk of a module
//! root. Rules only ever observe the snapshot, so two rules running over the
//! same module always see a single consistent view of the tree. File bytes
//! are read on demand, not cached.

use std::fs;
use std::path::{Path, PathBuf};

use crate::{Error, NormalizedPath, Result};

/// Snapshot of one module's directory tree.
///
/// Directory and file entries are stored as module-relative
/// [`NormalizedPath`]s, sorted lexicographically so enumeration order is
/// deterministic regardless of filesystem order.
#[derive(Debug, Clone)]
pub struct ModuleTree {
    root: PathBuf,
    dirs: Vec<NormalizedPath>,
    files: Vec<NormalizedPath>,
}

impl ModuleTree {
    /// Build a snapshot of the tree rooted at `root`.
    ///
    /// Directory names listed in `ignore` are not entered. Fails with a
    /// structured I/O error if `root` is not a readable directory or any
    /// subdirectory cannot be enumerated.
    pub fn scan(root: &Path, ignore: &[String]) -> Result<Self> {
        if !root.is_dir() {
            return Err(Error::NotADirectory {
                path: root.to_path_buf(),
            });
        }

        let mut dirs = Vec::new();
        let mut files = Vec::new();
        walk(root, &NormalizedPath::new(""), ignore, &mut dirs, &mut files)?;
        dirs.sort();
        files.sort();

        tracing::debug!(
            root = %root.display(),
            dirs = dirs.len(),
            files = files.len(),
            "scanned module tree"
        );

        Ok(Self {
            root: root.to_path_buf(),
            dirs,
            files,
        })
    }

    /// The absolute root this snapshot was taken from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// All directories, module-relative, sorted.
    pub fn dirs(&self) -> &[NormalizedPath] {
        &self.dirs
    }

    /// All files, module-relative, sorted.
    pub fn files(&self) -> &[NormalizedPath] {
        &self.files
    }

    /// Whether the snapshot contains the given relative directory.
    pub fn has_dir(&self, rel: &str) -> bool {
        self.dirs.binary_search_by(|d| d.as_str().cmp(rel)).is_ok()
    }

    /// Whether the snapshot contains the given relative file.
    pub fn has_file(&self, rel: &str) -> bool {
        self.files.binary_search_by(|f| f.as_str().cmp(rel)).is_ok()
    }

    /// Read the full byte content of a tracked file.
    ///
    /// Returns `None` for paths not present in the snapshot; propagates an
    /// I/O error if a tracked file has become unreadable since the scan.
    pub fn read(&self, rel: &str) -> Result<Option<Vec<u8>>> {
        if !self.has_file(rel) {
            return Ok(None);
        }
        let native = self.root.join(NormalizedPath::new(rel).to_native());
        fs::read(&native).map(Some).map_err(|e| Error::io(native, e))
    }
}

fn walk(
    root: &Path,
    prefix: &NormalizedPath,
    ignore: &[String],
    dirs: &mut Vec<NormalizedPath>,
    files: &mut Vec<NormalizedPath>,
) -> Result<()> {
    let native = if prefix.as_str().is_empty() {
        root.to_path_buf()
    } else {
        root.join(prefix.to_native())
    };

    let entries = fs::read_dir(&native).map_err(|e| Error::io(&native, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| Error::io(&native, e))?;
        let name = entry.file_name().to_string_lossy().into_owned();
        let file_type = entry.file_type().map_err(|e| Error::io(entry.path(), e))?;
        let rel = prefix.join(&name);

        if file_type.is_dir() {
            if ignore.iter().any(|i| i == &name) {
                continue;
            }
            dirs.push(rel.clone());
            walk(root, &rel, ignore, dirs, files)?;
        } else if file_type.is_file() {
            files.push(rel);
        }
        // Symlinks and other entry kinds are left out of the snapshot.
    }
    Ok(())
}
