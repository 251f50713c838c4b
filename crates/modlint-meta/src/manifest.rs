//! Manifest schema
//!
//! The manifest names the module markers, the directories to skip during
//! discovery, and the per-rule configuration. The rule set is closed: the
//! schema lists every known rule explicitly, so an unknown rule identifier
//! fails at parse time instead of being silently ignored.

use serde::{Deserialize, Serialize};

/// Top-level manifest for a linter run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// File names that mark a directory as a module
    #[serde(rename = "module-markers", default = "default_markers")]
    pub module_markers: Vec<String>,

    /// Directory names never entered during discovery or module scans
    #[serde(default = "default_ignore")]
    pub ignore: Vec<String>,

    /// Per-rule configuration
    #[serde(default)]
    pub rules: RulesConfig,
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            module_markers: default_markers(),
            ignore: default_ignore(),
            rules: RulesConfig::default(),
        }
    }
}

fn default_markers() -> Vec<String> {
    vec!["package.json".to_string()]
}

fn default_ignore() -> Vec<String> {
    vec![
        "node_modules".to_string(),
        ".git".to_string(),
        "target".to_string(),
    ]
}

/// The closed set of configurable rules.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RulesConfig {
    /// `module-folder-structure`: required-folder validation
    #[serde(rename = "module-folder-structure", default)]
    pub folder_structure: Option<RuleToggle<FolderStructureConfig>>,

    /// `module-same-contents`: cross-module content consistency
    #[serde(rename = "module-same-contents", default)]
    pub same_contents: Option<RuleToggle<SameContentsConfig>>,
}

/// A rule entry: a bare boolean switch, or a full config object.
///
/// `true` enables the rule with its default configuration, `false` disables
/// it; an object enables it with explicit settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleToggle<T> {
    Switch(bool),
    Config(T),
}

impl<T: Clone + Default> RuleToggle<T> {
    /// Resolve the toggle to a concrete config, or `None` when disabled.
    pub fn resolve(&self) -> Option<T> {
        match self {
            Self::Switch(false) => None,
            Self::Switch(true) => Some(T::default()),
            Self::Config(config) => Some(config.clone()),
        }
    }
}

/// Configuration for the `module-folder-structure` rule.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FolderStructureConfig {
    /// When true, folders outside the required list are violations
    #[serde(default)]
    pub strict: bool,

    /// Folder patterns each module must contain, in check order
    #[serde(default)]
    pub required_folders: Vec<String>,
}

/// Configuration for the `module-same-contents` rule.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SameContentsConfig {
    /// File patterns to compare across modules.
    ///
    /// When absent, the rule compares every file path that exists,
    /// identically named, in at least two modules.
    #[serde(default)]
    pub tracked_files: Option<Vec<String>>,
}
