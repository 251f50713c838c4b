//! Report rendering for the check command
//!
//! Two formats: human-readable text grouped per module, and JSON for
//! scripting. Result order inside a group follows the engine's ordered
//! output, which is part of the rule contract.

use colored::Colorize;

use modlint_core::{LintReport, ValidationResult};

use crate::error::Result;

/// Print the human-readable report.
pub fn print_text(report: &LintReport, quiet: bool) {
    let mut current_group: Option<&str> = None;

    for result in &report.results {
        if quiet && result.valid {
            continue;
        }
        let group = result.module.as_deref().unwrap_or("(no module)");
        if current_group != Some(group) {
            println!();
            println!("{}", group.bold());
            current_group = Some(group);
        }
        print_result(result);
    }

    println!();
    let summary = format!(
        "{} check(s), {} failure(s), {} module(s)",
        report.summary.checks, report.summary.failures, report.summary.modules
    );
    if report.has_failures() {
        println!("{} {}", "FAIL".red().bold(), summary);
    } else {
        println!("{} {}", "OK".green().bold(), summary);
    }
}

fn print_result(result: &ValidationResult) {
    let marker = if result.valid {
        "+".green()
    } else {
        "!".red()
    };
    println!(
        "   {} {} {} {}",
        marker,
        result.resource.cyan(),
        format!("[{}]", result.rule).dimmed(),
        result.message
    );
}

/// Print the JSON report.
pub fn print_json(report: &LintReport) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}
