//! Error types for modlint-meta

use std::path::PathBuf;

/// Result type for modlint-meta operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while locating or parsing the manifest
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("No manifest found in {dir} (expected modlint.json, modlint.toml, or modlint.yaml)")]
    ManifestNotFound { dir: PathBuf },

    #[error("Failed to parse {format} manifest at {path}: {message}")]
    ManifestParse {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("Unsupported manifest format: {extension}")]
    UnsupportedFormat { extension: String },

    #[error(transparent)]
    Fs(#[from] modlint_fs::Error),
}
