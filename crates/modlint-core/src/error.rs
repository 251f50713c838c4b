//! Error types for modlint-core

/// Result type for modlint-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring or running rules.
///
/// Invalid checks are ordinary `valid = false` results, never errors; this
/// enum covers malformed configuration and filesystem access failures only.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Malformed folder or file pattern in the rule configuration
    #[error("Invalid pattern '{pattern}': {reason}")]
    Pattern { pattern: String, reason: String },

    /// Filesystem error from modlint-fs
    #[error(transparent)]
    Fs(#[from] modlint_fs::Error),

    /// Manifest error from modlint-meta
    #[error(transparent)]
    Meta(#[from] modlint_meta::Error),
}

impl Error {
    pub fn pattern(pattern: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Pattern {
            pattern: pattern.into(),
            reason: reason.into(),
        }
    }
}
