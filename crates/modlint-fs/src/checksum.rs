//! SHA-256 content digests
//!
//! One canonical digest format (`sha256:<hex>`) used for cross-module
//! content-agreement scoring. Digest equality is how agreement is counted;
//! the final verdict on a pair of files still compares raw bytes.

use sha2::{Digest, Sha256};
use std::path::Path;

/// Prefix for all digests produced by this module
const PREFIX: &str = "sha256:";

/// Compute the SHA-256 digest of a byte slice.
///
/// Returns a string in the canonical format `"sha256:<hex>"`.
pub fn digest_bytes(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    format!("{}{:x}", PREFIX, hasher.finalize())
}

/// Compute the SHA-256 digest of a file's contents.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn digest_file(path: &Path) -> std::io::Result<String> {
    let content = std::fs::read(path)?;
    Ok(digest_bytes(&content))
}
