//! Rule evaluation engine for modlint
//!
//! This crate implements the linter core:
//!
//! - **Module model**: immutable snapshots of sibling project folders,
//!   discovered by marker files
//! - **Path matcher**: segment-wise glob matching (`*`, `**`, literals)
//! - **Rules**: required-folder-structure validation and cross-module
//!   content consistency with consensus reference election
//! - **Engine**: runs the enabled rules in canonical order and aggregates
//!   an ordered report
//!
//! # Architecture
//!
//! `modlint-core` sits between the configuration layer and the CLI:
//!
//! ```text
//!        CLI
//!         |
//!    modlint-core
//!       |     |
//! modlint-fs modlint-meta
//! ```
//!
//! Evaluation is a single synchronous pass over immutable inputs; output
//! order is deterministic and part of the contract.

pub mod engine;
pub mod error;
pub mod module;
pub mod pattern;
pub mod result;
pub mod rules;

pub use engine::Engine;
pub use error::{Error, Result};
pub use module::{Module, discover_modules};
pub use pattern::Pattern;
pub use result::{LintReport, Summary, ValidationResult};
pub use rules::{FolderStructureRule, RuleKind, SameContentsRule};
