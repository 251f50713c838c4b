//! End-to-end integration test for the full linter flow
//!
//! Exercises the complete pipeline: manifest loading -> module discovery ->
//! rule evaluation -> aggregated report.

use modlint_core::Engine;
use modlint_meta::load_manifest;
use modlint_test_utils::TestMonorepo;
use pretty_assertions::assert_eq;

const PRETTIER: &str = "module.exports = { singleQuote: true };\n";

/// Set up a monorepo with both rules enabled and a known amount of drift.
fn setup_monorepo() -> TestMonorepo {
    let repo = TestMonorepo::new();
    repo.manifest(
        r#"{
            "module-markers": ["package.json"],
            "ignore": ["node_modules", ".git", "target"],
            "rules": {
                "module-folder-structure": {
                    "strict": true,
                    "requiredFolders": ["src", "docs"]
                },
                "module-same-contents": {
                    "trackedFiles": [".prettierrc.js"]
                }
            }
        }"#,
    );

    repo.module("mod-complete");
    repo.dir("mod-complete", "src");
    repo.dir("mod-complete", "docs");
    repo.file("mod-complete", ".prettierrc.js", PRETTIER);

    repo.module("mod-conforming");
    repo.dir("mod-conforming", "src");
    repo.dir("mod-conforming", "docs");
    repo.file("mod-conforming", ".prettierrc.js", PRETTIER);

    repo.module("mod-drifted");
    repo.dir("mod-drifted", "src");
    repo.dir("mod-drifted", "unexpected");
    repo.file("mod-drifted", ".prettierrc.js", "module.exports = {};\n");

    repo
}

#[test]
fn manifest_discovery_and_rules_compose() {
    let repo = setup_monorepo();

    let manifest = load_manifest(repo.root()).unwrap();
    assert_eq!(manifest.module_markers, ["package.json"]);

    let engine = Engine::new(repo.root()).unwrap();
    let modules = engine.modules().unwrap();
    let names: Vec<&str> = modules.iter().map(|m| m.name()).collect();
    assert_eq!(names, ["mod-complete", "mod-conforming", "mod-drifted"]);

    let report = engine.run().unwrap();

    // Folder structure: 3 modules x 2 patterns, plus mod-drifted's missing
    // docs replaced by a failure, plus one strict violation.
    let structure_failures: Vec<&str> = report
        .results
        .iter()
        .filter(|r| r.rule == "module-folder-structure" && !r.valid)
        .map(|r| r.resource.as_str())
        .collect();
    assert_eq!(structure_failures, ["docs", "unexpected"]);

    // Same contents: mod-complete and mod-conforming agree, so one of them
    // is the reference (smallest name wins the tie) and mod-drifted fails.
    let contents: Vec<(&str, bool)> = report
        .results
        .iter()
        .filter(|r| r.rule == "module-same-contents")
        .map(|r| (r.resource.as_str(), r.valid))
        .collect();
    assert_eq!(
        contents,
        [
            ("mod-complete/.prettierrc.js", true),
            ("mod-conforming/.prettierrc.js", true),
            ("mod-drifted/.prettierrc.js", false),
        ]
    );

    let drifted = report
        .results
        .iter()
        .find(|r| r.resource == "mod-drifted/.prettierrc.js")
        .unwrap();
    assert!(drifted.message.contains("mod-complete/.prettierrc.js"));

    assert!(report.has_failures());
    assert_eq!(report.summary.modules, 3);
    assert_eq!(report.summary.failures, 3);
}

#[test]
fn report_is_byte_identical_across_runs() {
    let repo = setup_monorepo();
    let engine = Engine::new(repo.root()).unwrap();

    let first = serde_json::to_string(&engine.run().unwrap()).unwrap();
    let second = serde_json::to_string(&engine.run().unwrap()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn cli_reports_the_same_failures_as_the_engine() {
    let repo = setup_monorepo();

    let output = assert_cmd::Command::cargo_bin("modlint")
        .unwrap()
        .arg("check")
        .arg(repo.root())
        .arg("--format")
        .arg("json")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["summary"]["failures"], 3);
    assert_eq!(report["summary"]["modules"], 3);
}
