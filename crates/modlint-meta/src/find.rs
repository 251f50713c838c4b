//! Manifest discovery at the base directory

use std::path::Path;

use modlint_fs::NormalizedPath;

use crate::{Error, Manifest, ManifestStore, Result};

/// File names probed for, in precedence order.
const CANDIDATES: [&str; 3] = ["modlint.json", "modlint.toml", "modlint.yaml"];

/// Locate the manifest file in `base_dir`, first candidate wins.
pub fn find_manifest(base_dir: &Path) -> Result<NormalizedPath> {
    for candidate in CANDIDATES {
        let path = NormalizedPath::new(base_dir.join(candidate));
        if path.is_file() {
            tracing::debug!(manifest = %path, "found manifest");
            return Ok(path);
        }
    }
    Err(Error::ManifestNotFound {
        dir: base_dir.to_path_buf(),
    })
}

/// Locate and load the manifest for `base_dir`.
pub fn load_manifest(base_dir: &Path) -> Result<Manifest> {
    let path = find_manifest(base_dir)?;
    ManifestStore::new().load(&path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn json_takes_precedence_over_toml() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("modlint.json"), "{}").unwrap();
        fs::write(temp.path().join("modlint.toml"), "").unwrap();

        let found = find_manifest(temp.path()).unwrap();
        assert!(found.as_str().ends_with("modlint.json"));
    }

    #[test]
    fn missing_manifest_is_an_error() {
        let temp = TempDir::new().unwrap();
        let result = find_manifest(temp.path());
        assert!(matches!(result, Err(Error::ManifestNotFound { .. })));
    }
}
