//! Fields command - list the declared fields of a template

use anyhow::{Context, Result};
use colored::Colorize;
use promptlab_core::{TemplateField, parse};
use std::fs;
use std::path::PathBuf;

/// List the declared fields of a template document
///
/// # Arguments
///
/// * `file` - Template document to read
/// * `json` - Output as JSON if true
/// * `verbose` - Enable verbose output if true
pub fn run(file: PathBuf, json: bool, verbose: bool) -> Result<()> {
    let text = fs::read_to_string(&file)
        .with_context(|| format!("Failed to read '{}'", file.display()))?;
    let doc = parse(&text)?;

    if json {
        output_fields_json(&doc.metadata.fields)?;
    } else {
        output_fields_human(&doc.metadata.title, &doc.metadata.fields, verbose);
    }

    Ok(())
}

/// Output fields in JSON format
fn output_fields_json(fields: &[TemplateField]) -> Result<()> {
    use serde_json::json;

    let output = json!({
        "fields": fields,
        "count": fields.len(),
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Output fields in human-readable format
fn output_fields_human(title: &str, fields: &[TemplateField], verbose: bool) {
    if fields.is_empty() {
        println!("{} No fields declared", "!".yellow());
        println!("\n{} Declare fields:", "→".cyan());
        println!("  add a 'fields:' list to the front matter");
        return;
    }

    println!("{} Fields in '{}':", "→".cyan(), title);
    println!();

    for field in fields {
        println!("  {} {}", "•".cyan(), field.name);
        println!("    Label: {}", field.label);
        println!("    Type: {}", field.kind);
        println!("    Required: {}", field.is_required());

        if let Some(options) = &field.options {
            println!("    Options: {}", options.join(", "));
        }

        if let Some(default) = &field.default {
            println!("    Default: {}", default);
        }

        if verbose {
            println!("    Placeholder: {{{{{}}}}}", field.name);
        }

        println!();
    }

    println!("{} Total: {} field(s)", "→".cyan(), fields.len());
}
