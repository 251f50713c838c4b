//! Format-agnostic manifest loading
//!
//! The linter never writes configuration, so the store is load-only.

use std::fs;

use modlint_fs::NormalizedPath;
use serde::de::DeserializeOwned;

use crate::{Error, Result};

/// Format-agnostic manifest store.
///
/// Detects the format from the file extension and deserializes
/// transparently.
#[derive(Debug, Default)]
pub struct ManifestStore;

impl ManifestStore {
    /// Create a new ManifestStore.
    pub fn new() -> Self {
        Self
    }

    /// Load a manifest-shaped value from a file.
    ///
    /// Format is detected from the file extension:
    /// - `.json` -> JSON
    /// - `.toml` -> TOML
    /// - `.yaml`, `.yml` -> YAML
    pub fn load<T: DeserializeOwned>(&self, path: &NormalizedPath) -> Result<T> {
        let native = path.to_native();
        let content =
            fs::read_to_string(&native).map_err(|e| modlint_fs::Error::io(&native, e))?;
        let extension = path.extension().unwrap_or("");

        match extension.to_lowercase().as_str() {
            "json" => serde_json::from_str(&content).map_err(|e| Error::ManifestParse {
                path: native,
                format: "JSON".into(),
                message: e.to_string(),
            }),
            "toml" => toml::from_str(&content).map_err(|e| Error::ManifestParse {
                path: native,
                format: "TOML".into(),
                message: e.to_string(),
            }),
            "yaml" | "yml" => serde_yaml::from_str(&content).map_err(|e| Error::ManifestParse {
                path: native,
                format: "YAML".into(),
                message: e.to_string(),
            }),
            _ => Err(Error::UnsupportedFormat {
                extension: extension.to_string(),
            }),
        }
    }
}
