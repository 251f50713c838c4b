//! Manifest schema and configuration loading for modlint
//!
//! The linter is configured by a single manifest file at the base directory
//! (`modlint.json`, `modlint.toml`, or `modlint.yaml`). This crate owns the
//! schema, the format-agnostic loading, and the defaults.

pub mod error;
pub mod find;
pub mod manifest;
pub mod store;

pub use error::{Error, Result};
pub use find::{find_manifest, load_manifest};
pub use manifest::{
    FolderStructureConfig, Manifest, RuleToggle, RulesConfig, SameContentsConfig,
};
pub use store::ManifestStore;
