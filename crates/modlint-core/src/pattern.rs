//! Generalized path-segment glob matching
//!
//! Patterns are `/`-separated segment sequences: a segment `*` matches
//! exactly one arbitrary segment, `**` matches zero or more segments, and
//! any other segment is a case-sensitive literal. Matching recurses over
//! segment arrays and is independent of any OS-level glob facility, so
//! behavior is identical on every platform.

use modlint_fs::ModuleTree;

use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Any,
    Recursive,
}

/// A parsed folder or file pattern.
#[derive(Debug, Clone)]
pub struct Pattern {
    raw: String,
    segments: Vec<Segment>,
}

impl Pattern {
    /// Parse a pattern, rejecting malformed wildcard usage.
    ///
    /// A wildcard must span a whole segment: `src/*/utils` is valid,
    /// `src/ut*ls` and `src/***` are not.
    pub fn parse(raw: &str) -> Result<Self> {
        let raw = raw.replace('\\', "/");
        if raw.is_empty() {
            return Err(Error::pattern(raw, "pattern is empty"));
        }
        if raw.starts_with('/') {
            return Err(Error::pattern(raw, "pattern must be relative"));
        }

        let mut segments = Vec::new();
        for part in raw.split('/') {
            let segment = match part {
                "" => return Err(Error::pattern(raw.as_str(), "empty path segment")),
                "*" => Segment::Any,
                "**" => Segment::Recursive,
                literal if literal.contains('*') => {
                    return Err(Error::pattern(
                        raw.as_str(),
                        "wildcard must span a whole segment",
                    ));
                }
                literal => Segment::Literal(literal.to_string()),
            };
            segments.push(segment);
        }

        Ok(Self { raw, segments })
    }

    /// The raw pattern text.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// A pattern without wildcard segments names exactly one path.
    pub fn is_literal(&self) -> bool {
        self.segments
            .iter()
            .all(|s| matches!(s, Segment::Literal(_)))
    }

    /// Depth of every path this pattern can match, or `None` when a `**`
    /// segment makes the depth unbounded.
    pub fn implied_depth(&self) -> Option<usize> {
        if self.segments.iter().any(|s| matches!(s, Segment::Recursive)) {
            None
        } else {
            Some(self.segments.len())
        }
    }

    /// Whether a `/`-separated relative path satisfies this pattern.
    pub fn matches(&self, path: &str) -> bool {
        let parts: Vec<&str> = path.split('/').filter(|p| !p.is_empty()).collect();
        matches_segments(&self.segments, &parts)
    }

    /// Concrete directories present in `tree` that satisfy this pattern,
    /// in the snapshot's sorted discovery order.
    ///
    /// A literal pattern expands to itself or nothing; no walk is needed
    /// beyond the existence check.
    pub fn expand_dirs(&self, tree: &ModuleTree) -> Vec<String> {
        if self.is_literal() {
            return if tree.has_dir(&self.raw) {
                vec![self.raw.clone()]
            } else {
                Vec::new()
            };
        }
        tree.dirs()
            .iter()
            .filter(|d| self.matches(d.as_str()))
            .map(|d| d.as_str().to_string())
            .collect()
    }

    /// Concrete files present in `tree` that satisfy this pattern.
    pub fn expand_files(&self, tree: &ModuleTree) -> Vec<String> {
        if self.is_literal() {
            return if tree.has_file(&self.raw) {
                vec![self.raw.clone()]
            } else {
                Vec::new()
            };
        }
        tree.files()
            .iter()
            .filter(|f| self.matches(f.as_str()))
            .map(|f| f.as_str().to_string())
            .collect()
    }
}

fn matches_segments(pattern: &[Segment], path: &[&str]) -> bool {
    match pattern.split_first() {
        None => path.is_empty(),
        Some((Segment::Literal(literal), rest)) => match path.split_first() {
            Some((head, tail)) => *head == literal.as_str() && matches_segments(rest, tail),
            None => false,
        },
        Some((Segment::Any, rest)) => match path.split_first() {
            Some((_, tail)) => matches_segments(rest, tail),
            None => false,
        },
        Some((Segment::Recursive, rest)) => {
            // `**` consumes zero segments, or one and stays in play.
            matches_segments(rest, path)
                || path
                    .split_first()
                    .is_some_and(|(_, tail)| matches_segments(pattern, tail))
        }
    }
}
