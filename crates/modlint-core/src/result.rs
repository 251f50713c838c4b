//! Validation results and the aggregated lint report

use serde::Serialize;

/// Outcome of one check.
///
/// `module` is the name of the module the check ran against; it is absent
/// only for pattern-level results that belong to no single module (a
/// configured tracked file found nowhere). `resource` and `message` are
/// always non-empty, and the `(module, rule, resource)` tuple is unique
/// within one rule's output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,
    pub rule: String,
    pub resource: String,
    pub valid: bool,
    pub message: String,
}

impl ValidationResult {
    /// A passing check against a module.
    pub fn passed(
        module: impl Into<String>,
        rule: impl Into<String>,
        resource: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            module: Some(module.into()),
            rule: rule.into(),
            resource: resource.into(),
            valid: true,
            message: message.into(),
        }
    }

    /// A failing check against a module.
    pub fn failed(
        module: impl Into<String>,
        rule: impl Into<String>,
        resource: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            module: Some(module.into()),
            rule: rule.into(),
            resource: resource.into(),
            valid: false,
            message: message.into(),
        }
    }

    /// A failing pattern-level check that belongs to no module.
    pub fn pattern_level(
        rule: impl Into<String>,
        resource: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            module: None,
            rule: rule.into(),
            resource: resource.into(),
            valid: false,
            message: message.into(),
        }
    }
}

/// Counts for one lint run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub checks: usize,
    pub failures: usize,
    pub modules: usize,
}

/// Ordered results of one lint run, plus a summary.
#[derive(Debug, Clone, Serialize)]
pub struct LintReport {
    pub results: Vec<ValidationResult>,
    pub summary: Summary,
}

impl LintReport {
    /// Build a report from ordered results.
    pub fn new(results: Vec<ValidationResult>, modules: usize) -> Self {
        let failures = results.iter().filter(|r| !r.valid).count();
        let summary = Summary {
            checks: results.len(),
            failures,
            modules,
        };
        Self { results, summary }
    }

    /// Whether any check failed; drives the process exit code upstream.
    pub fn has_failures(&self) -> bool {
        self.summary.failures > 0
    }
}
