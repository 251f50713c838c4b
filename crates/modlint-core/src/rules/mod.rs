//! Rule implementations and the closed registry
//!
//! The rule set is a closed tagged-variant type: one [`RuleKind`] variant
//! per known rule, dispatched by exhaustive match. Adding a rule means
//! adding a variant here and a field to the manifest's `RulesConfig`; there
//! is no dynamic plugin surface.

pub mod folder_structure;
pub mod same_contents;

use std::path::Path;

pub use folder_structure::FolderStructureRule;
pub use same_contents::SameContentsRule;

use crate::module::Module;
use crate::result::ValidationResult;
use crate::Result;
use modlint_meta::RulesConfig;

/// Identifier of the folder-structure rule
pub const MODULE_FOLDER_STRUCTURE: &str = "module-folder-structure";

/// Identifier of the same-contents rule
pub const MODULE_SAME_CONTENTS: &str = "module-same-contents";

/// A configured rule instance.
#[derive(Debug, Clone)]
pub enum RuleKind {
    FolderStructure(FolderStructureRule),
    SameContents(SameContentsRule),
}

impl RuleKind {
    /// The rule identifier, as used in the manifest and in results.
    pub fn id(&self) -> &'static str {
        match self {
            Self::FolderStructure(_) => MODULE_FOLDER_STRUCTURE,
            Self::SameContents(_) => MODULE_SAME_CONTENTS,
        }
    }

    /// Run the rule over the module list.
    ///
    /// `base_dir` is used for display only; all checks operate on the
    /// modules' snapshots.
    pub fn check_modules(
        &self,
        modules: &[Module],
        base_dir: &Path,
    ) -> Result<Vec<ValidationResult>> {
        match self {
            Self::FolderStructure(rule) => rule.check_modules(modules, base_dir),
            Self::SameContents(rule) => rule.check_modules(modules, base_dir),
        }
    }

    /// Build the enabled rules from the manifest, in canonical run order.
    pub fn from_config(rules: &RulesConfig) -> Result<Vec<RuleKind>> {
        let mut enabled = Vec::new();
        if let Some(config) = rules.folder_structure.as_ref().and_then(|t| t.resolve()) {
            enabled.push(Self::FolderStructure(FolderStructureRule::new(&config)?));
        }
        if let Some(config) = rules.same_contents.as_ref().and_then(|t| t.resolve()) {
            enabled.push(Self::SameContents(SameContentsRule::new(&config)?));
        }
        Ok(enabled)
    }
}
