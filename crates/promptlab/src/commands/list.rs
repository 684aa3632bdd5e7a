//! List command - scan a directory for template documents

use anyhow::{Context, Result, bail};
use colored::Colorize;
use promptlab_core::parse;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// One scanned template in the listing
#[derive(Debug, Serialize)]
struct TemplateEntry {
    path: String,
    title: String,
    fields: usize,
    valid: bool,
}

/// List template documents under a directory
///
/// Files whose front matter does not parse are still listed, titled
/// from the file stem and marked invalid.
///
/// # Arguments
///
/// * `dir` - Directory to scan (defaults to the current directory)
/// * `json` - Output as JSON if true
/// * `verbose` - Enable verbose output if true
pub fn run(dir: Option<PathBuf>, json: bool, verbose: bool) -> Result<()> {
    let dir = dir.unwrap_or_else(|| PathBuf::from("."));

    if !dir.is_dir() {
        bail!("'{}' is not a directory", dir.display());
    }

    let mut templates = Vec::new();

    for entry in WalkDir::new(&dir).sort_by_file_name().follow_links(false) {
        let entry = entry?;

        if !entry.file_type().is_file() {
            continue;
        }
        if entry.path().extension().and_then(|e| e.to_str()) != Some("md") {
            continue;
        }

        templates.push(read_entry(entry.path())?);
    }

    if json {
        output_templates_json(&templates)?;
    } else {
        output_templates_human(&dir, &templates, verbose);
    }

    Ok(())
}

/// Read one template entry, falling back to a stem title when the
/// document does not parse
fn read_entry(path: &Path) -> Result<TemplateEntry> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read '{}'", path.display()))?;

    let entry = match parse(&text) {
        Ok(doc) => TemplateEntry {
            path: path.display().to_string(),
            title: doc.metadata.title,
            fields: doc.metadata.fields.len(),
            valid: true,
        },
        Err(_) => TemplateEntry {
            path: path.display().to_string(),
            title: stem_title(path),
            fields: 0,
            valid: false,
        },
    };

    Ok(entry)
}

/// Title used for files whose front matter does not parse
fn stem_title(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "Untitled".to_string())
}

/// Output templates in JSON format
fn output_templates_json(templates: &[TemplateEntry]) -> Result<()> {
    use serde_json::json;

    let output = json!({
        "templates": templates,
        "count": templates.len(),
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Output templates in human-readable format
fn output_templates_human(dir: &Path, templates: &[TemplateEntry], verbose: bool) {
    if templates.is_empty() {
        println!(
            "{} No template documents found in {}",
            "!".yellow(),
            dir.display()
        );
        println!("\n{} Create one:", "→".cyan());
        println!("  promptlab new <file>.md");
    } else {
        println!("{} Templates in {}:", "→".cyan(), dir.display());
        println!();

        for template in templates {
            if template.valid {
                println!("  {} {}", "•".cyan(), template.title);
                println!("    Fields: {}", template.fields);
            } else {
                println!("  {} {}", "⚠".yellow(), template.title);
                println!("    (front matter did not parse)");
            }

            if verbose {
                println!("    Path: {}", template.path);
            }

            println!();
        }

        println!("{} Total: {} template(s)", "→".cyan(), templates.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stem_title() {
        assert_eq!(stem_title(Path::new("docs/blog-post.md")), "blog-post");
        assert_eq!(stem_title(Path::new("note.md")), "note");
    }
}
