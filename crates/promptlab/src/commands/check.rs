//! Check command - template health check

use anyhow::{Context, Result, bail};
use colored::Colorize;
use promptlab_core::{coverage, parse};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Check command JSON output schema
#[derive(Debug, Serialize, Deserialize)]
struct CheckOutput {
    file: String,
    checks: Vec<Check>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Check {
    id: String,
    name: String,
    status: CheckStatus,
    message: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
enum CheckStatus {
    Ok,
    Warning,
    Error,
}

/// Run template health checks
///
/// # Arguments
///
/// * `file` - Template document to check
/// * `json` - Output in JSON format if true
/// * `verbose` - Enable verbose output if true
///
/// # Exit Code
///
/// A template that fails to parse exits 1 after the report is printed.
/// Coverage findings are warnings and exit 0.
pub fn run(file: PathBuf, json: bool, verbose: bool) -> Result<()> {
    if verbose {
        println!("{} Checking {}", "→".cyan(), file.display());
    }

    let text = fs::read_to_string(&file)
        .with_context(|| format!("Failed to read '{}'", file.display()))?;

    let mut checks = Vec::new();

    // Check 1: Front matter structure
    let doc = match parse(&text) {
        Ok(doc) => {
            checks.push(Check {
                id: "front_matter".to_string(),
                name: "Front matter".to_string(),
                status: CheckStatus::Ok,
                message: format!("parsed {} field(s)", doc.metadata.fields.len()),
            });
            Some(doc)
        }
        Err(e) => {
            checks.push(Check {
                id: "front_matter".to_string(),
                name: "Front matter".to_string(),
                status: CheckStatus::Error,
                message: e.to_string(),
            });
            None
        }
    };

    // Checks 2 and 3: Placeholder coverage (only on a parsed document)
    if let Some(doc) = &doc {
        let report = coverage(&doc.metadata, &doc.body);

        checks.push(coverage_check(
            "placeholders_declared",
            "Placeholder coverage",
            &report.undeclared,
            "every placeholder has a declared field",
            "body references undeclared names",
        ));
        checks.push(coverage_check(
            "fields_referenced",
            "Field usage",
            &report.unreferenced,
            "every declared field is referenced",
            "declared fields are never referenced",
        ));
    }

    let output = CheckOutput {
        file: file.display().to_string(),
        checks,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_human_readable(&output);
    }

    if output.checks.iter().any(|c| c.status == CheckStatus::Error) {
        bail!("template '{}' has structural errors", file.display());
    }

    Ok(())
}

/// Build a coverage check from a list of offending names
fn coverage_check(
    id: &str,
    name: &str,
    offending: &[String],
    ok_message: &str,
    warning_prefix: &str,
) -> Check {
    let (status, message) = if offending.is_empty() {
        (CheckStatus::Ok, ok_message.to_string())
    } else {
        (
            CheckStatus::Warning,
            format!("{}: {}", warning_prefix, offending.join(", ")),
        )
    };

    Check {
        id: id.to_string(),
        name: name.to_string(),
        status,
        message,
    }
}

/// Print human-readable output
fn print_human_readable(output: &CheckOutput) {
    println!("{}", "Template Check".bold());
    println!();

    println!("File: {}", output.file);
    println!();

    println!("{}", "Checks:".bold());
    for check in &output.checks {
        let status_str = match check.status {
            CheckStatus::Ok => "✓".green(),
            CheckStatus::Warning => "⚠".yellow(),
            CheckStatus::Error => "✗".red(),
        };

        println!("  {} {}: {}", status_str, check.name.bold(), check.message);
    }

    println!();
    print_summary(&output.checks);
}

/// Print the overall summary line
fn print_summary(checks: &[Check]) {
    let error_count = checks
        .iter()
        .filter(|c| c.status == CheckStatus::Error)
        .count();
    let warning_count = checks
        .iter()
        .filter(|c| c.status == CheckStatus::Warning)
        .count();

    if error_count > 0 {
        println!(
            "{} {} error(s), {} warning(s)",
            "✗".red().bold(),
            error_count,
            warning_count
        );
    } else if warning_count > 0 {
        println!("{} {} warning(s)", "⚠".yellow().bold(), warning_count);
    } else {
        println!("{} All checks passed", "✓".green().bold());
    }
}
