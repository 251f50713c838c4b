//! Filesystem layer for modlint
//!
//! Provides normalized path handling, immutable module tree snapshots,
//! and content digest helpers.

pub mod checksum;
pub mod error;
pub mod path;
pub mod tree;

pub use error::{Error, Result};
pub use path::NormalizedPath;
pub use tree::ModuleTree;
