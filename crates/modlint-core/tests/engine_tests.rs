//! End-to-end engine tests: manifest -> discovery -> rules -> report

use modlint_core::rules::{MODULE_FOLDER_STRUCTURE, MODULE_SAME_CONTENTS};
use modlint_core::Engine;
use modlint_test_utils::TestMonorepo;
use pretty_assertions::assert_eq;

const MANIFEST: &str = r#"{
    "rules": {
        "module-folder-structure": {
            "requiredFolders": ["src"]
        },
        "module-same-contents": {
            "trackedFiles": ["tsconfig.json"]
        }
    }
}"#;

fn fixture() -> TestMonorepo {
    let repo = TestMonorepo::new();
    repo.manifest(MANIFEST);
    repo.module("mod-a");
    repo.dir("mod-a", "src");
    repo.file("mod-a", "tsconfig.json", "{ \"strict\": true }\n");
    repo.module("mod-b");
    repo.file("mod-b", "tsconfig.json", "{ \"strict\": false }\n");
    repo
}

#[test]
fn run_concatenates_rules_in_canonical_order() {
    let repo = fixture();
    let report = Engine::new(repo.root()).unwrap().run().unwrap();

    let rules: Vec<&str> = report.results.iter().map(|r| r.rule.as_str()).collect();
    let first_same_contents = rules
        .iter()
        .position(|r| *r == MODULE_SAME_CONTENTS)
        .unwrap();
    assert!(
        rules[..first_same_contents]
            .iter()
            .all(|r| *r == MODULE_FOLDER_STRUCTURE)
    );
}

#[test]
fn report_summarizes_checks_and_failures() {
    let repo = fixture();
    let report = Engine::new(repo.root()).unwrap().run().unwrap();

    // mod-a: src found, tsconfig reference; mod-b: src missing, tsconfig
    // differs from the reference copy.
    assert_eq!(report.summary.modules, 2);
    assert_eq!(report.summary.checks, 4);
    assert_eq!(report.summary.failures, 2);
    assert!(report.has_failures());
}

#[test]
fn run_is_deterministic() {
    let repo = fixture();
    let engine = Engine::new(repo.root()).unwrap();
    let first = engine.run().unwrap();
    let second = engine.run().unwrap();
    assert_eq!(first.results, second.results);
}

#[test]
fn missing_manifest_is_a_config_error() {
    let repo = TestMonorepo::new();
    assert!(Engine::new(repo.root()).is_err());
}

#[test]
fn unknown_rule_in_manifest_is_a_config_error() {
    let repo = TestMonorepo::new();
    repo.manifest(r#"{"rules": {"module-unknown": true}}"#);
    assert!(Engine::new(repo.root()).is_err());
}

#[test]
fn disabled_rules_produce_no_results() {
    let repo = TestMonorepo::new();
    repo.manifest(r#"{"rules": {"module-folder-structure": false}}"#);
    repo.module("mod-a");

    let report = Engine::new(repo.root()).unwrap().run().unwrap();
    assert!(report.results.is_empty());
    assert!(!report.has_failures());
}
