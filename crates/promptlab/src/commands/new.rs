//! New command - create a starter template document

use anyhow::{Result, bail};
use colored::Colorize;
use promptlab_core::{TemplateField, TemplateMetadata, serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Create a new template document with one example field
///
/// # Arguments
///
/// * `file` - Path of the document to create
/// * `title` - Template title (defaults to the file stem)
/// * `description` - Optional template description
/// * `force` - Overwrite an existing file if true
/// * `verbose` - Enable verbose output if true
pub fn run(
    file: PathBuf,
    title: Option<String>,
    description: Option<String>,
    force: bool,
    verbose: bool,
) -> Result<()> {
    if verbose {
        println!("{} Creating template at {}", "→".cyan(), file.display());
    }

    if file.exists() && !force {
        bail!(
            "File '{}' already exists (use --force to overwrite)",
            file.display()
        );
    }

    let title = title.unwrap_or_else(|| default_title(&file));

    let mut metadata = TemplateMetadata::new(title);
    metadata.description = description;
    metadata.fields.push(starter_field());

    let content = serialize(&metadata, starter_body())?;

    if let Some(parent) = file.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(&file, content)?;

    println!(
        "{} Created template '{}' at {}",
        "✓".green().bold(),
        metadata.title,
        file.display()
    );

    print_starter_contents(verbose);
    print_next_steps(&file);

    Ok(())
}

/// Derive a title from the file stem
fn default_title(file: &Path) -> String {
    file.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "Untitled".to_string())
}

/// Example field included in every scaffold
fn starter_field() -> TemplateField {
    let mut field = TemplateField::new("topic");
    field.label = "Topic".to_string();
    field
}

/// Example body included in every scaffold
fn starter_body() -> &'static str {
    "Write a short note about {{topic}}."
}

/// Print scaffold contents in verbose mode
fn print_starter_contents(verbose: bool) {
    if verbose {
        println!("\n{} Starter contents:", "→".cyan());
        println!("  - front matter with one 'topic' field");
        println!("  - body referencing {{{{topic}}}}");
    }
}

/// Print next steps after template creation
fn print_next_steps(file: &Path) {
    println!("\n{} Next steps:", "→".cyan());
    println!("  1. Edit {} to declare your fields", file.display());
    println!(
        "  2. promptlab render {} --set topic=<value>",
        file.display()
    );
}
