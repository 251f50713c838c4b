//! Normalized relative path handling for cross-platform pattern matching
//!
//! Module resources and folder patterns are always expressed with forward
//! slashes, regardless of platform. Conversion to the platform-native form
//! happens only at I/O boundaries.

use std::path::{Path, PathBuf};

/// A path normalized to use forward slashes internally.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NormalizedPath {
    inner: String,
}

impl NormalizedPath {
    /// Create a new NormalizedPath from any path-like input.
    ///
    /// Converts backslashes to forward slashes and strips any trailing slash.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path_str = path.as_ref().to_string_lossy();
        let mut normalized = path_str.replace('\\', "/");
        while normalized.len() > 1 && normalized.ends_with('/') {
            normalized.pop();
        }
        Self { inner: normalized }
    }

    /// Get the internal normalized string representation.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Convert to a platform-native PathBuf for I/O operations.
    pub fn to_native(&self) -> PathBuf {
        PathBuf::from(&self.inner)
    }

    /// Join this path with a relative segment.
    pub fn join(&self, segment: &str) -> Self {
        let segment = segment.replace('\\', "/");
        if self.inner.is_empty() {
            return Self::new(segment);
        }
        Self::new(format!("{}/{}", self.inner, segment))
    }

    /// The `/`-separated components of this path.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.inner.split('/').filter(|s| !s.is_empty())
    }

    /// Number of components, i.e. the nesting depth of a relative path.
    pub fn depth(&self) -> usize {
        self.segments().count()
    }

    /// Get the parent directory, if any.
    pub fn parent(&self) -> Option<Self> {
        let idx = self.inner.rfind('/')?;
        if idx == 0 {
            return None;
        }
        Some(Self {
            inner: self.inner[..idx].to_string(),
        })
    }

    /// Get the final component.
    pub fn file_name(&self) -> Option<&str> {
        self.inner.rsplit('/').next().filter(|s| !s.is_empty())
    }

    /// Get the extension of the final component, if present.
    pub fn extension(&self) -> Option<&str> {
        self.file_name().and_then(|name| {
            let idx = name.rfind('.')?;
            if idx == 0 { None } else { Some(&name[idx + 1..]) }
        })
    }

    /// Whether `other` is a strict ancestor of this path (`src` of `src/api`).
    pub fn has_ancestor(&self, other: &str) -> bool {
        self.inner.len() > other.len()
            && self.inner.starts_with(other)
            && self.inner.as_bytes()[other.len()] == b'/'
    }

    /// Check if this path exists on the filesystem.
    pub fn exists(&self) -> bool {
        self.to_native().exists()
    }

    /// Check if this is a directory.
    pub fn is_dir(&self) -> bool {
        self.to_native().is_dir()
    }

    /// Check if this is a file.
    pub fn is_file(&self) -> bool {
        self.to_native().is_file()
    }
}

impl AsRef<Path> for NormalizedPath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.inner)
    }
}

impl std::fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl From<&str> for NormalizedPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for NormalizedPath {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<PathBuf> for NormalizedPath {
    fn from(p: PathBuf) -> Self {
        Self::new(p)
    }
}

impl From<&Path> for NormalizedPath {
    fn from(p: &Path) -> Self {
        Self::new(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backslashes_are_normalized() {
        let path = NormalizedPath::new("src\\api\\utils");
        assert_eq!(path.as_str(), "src/api/utils");
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let path = NormalizedPath::new("src/api/");
        assert_eq!(path.as_str(), "src/api");
    }

    #[test]
    fn segments_and_depth() {
        let path = NormalizedPath::new("src/api/utils");
        assert_eq!(path.segments().collect::<Vec<_>>(), ["src", "api", "utils"]);
        assert_eq!(path.depth(), 3);
    }

    #[test]
    fn parent_of_nested_path() {
        let path = NormalizedPath::new("src/api/utils");
        assert_eq!(path.parent().unwrap().as_str(), "src/api");
        assert_eq!(NormalizedPath::new("src").parent(), None);
    }

    #[test]
    fn ancestor_requires_segment_boundary() {
        let path = NormalizedPath::new("src/api");
        assert!(path.has_ancestor("src"));
        assert!(!path.has_ancestor("sr"));
        assert!(!path.has_ancestor("src/api"));
    }

    #[test]
    fn join_produces_normalized_path() {
        let base = NormalizedPath::new("mod-a");
        assert_eq!(base.join("src/utils").as_str(), "mod-a/src/utils");
    }

    #[test]
    fn extension_of_dotfile_is_none() {
        assert_eq!(NormalizedPath::new(".prettierrc").extension(), None);
        assert_eq!(NormalizedPath::new("jest.config.js").extension(), Some("js"));
    }
}
