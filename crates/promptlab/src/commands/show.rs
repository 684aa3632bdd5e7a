//! Show command - print a template's metadata and body

use anyhow::{Context, Result};
use colored::Colorize;
use promptlab_core::{parse, placeholders};
use std::fs;
use std::path::PathBuf;

/// Show a template document
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
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    println!("{} {}", "→".cyan(), doc.metadata.title.bold());
    if let Some(description) = &doc.metadata.description {
        println!("  {}", description);
    }
    println!();

    if doc.metadata.fields.is_empty() {
        println!("{} No fields declared", "!".yellow());
    } else {
        println!("{}", "Fields:".bold());
        for field in &doc.metadata.fields {
            println!("  {} {} ({})", "•".cyan(), field.name, field.kind);
        }
    }

    if verbose {
        let names = placeholders(&doc.body);
        if names.is_empty() {
            println!("\n{} Body has no placeholders", "→".cyan());
        } else {
            println!("\n{} Placeholders: {}", "→".cyan(), names.join(", "));
        }
    }

    println!();
    println!("{}", "Body:".bold());
    println!("{}", doc.body);

    Ok(())
}

#[cfg(test)]
mod tests {
    // Integration tests will be in tests/ directory
}
