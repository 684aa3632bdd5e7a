//! Render command - fill a template's placeholders and print the result

use anyhow::{Context, Result, bail};
use colored::Colorize;
use promptlab_core::{Values, parse, substitute};
use std::fs;
use std::path::{Path, PathBuf};

/// Render a template document
///
/// Values are resolved in three layers: field defaults from the front
/// matter, then an optional values file, then repeatable `--set` pairs.
/// Later layers win. Placeholders with no resolved value are left as
/// written.
///
/// # Arguments
///
/// * `file` - Template document to render
/// * `values_file` - Optional `.json` or `.toml` file mapping names to values
/// * `set` - Repeatable NAME=VALUE overrides
/// * `output` - Write the result here instead of stdout
/// * `verbose` - Enable verbose output if true
pub fn run(
    file: PathBuf,
    values_file: Option<PathBuf>,
    set: Vec<String>,
    output: Option<PathBuf>,
    verbose: bool,
) -> Result<()> {
    let text = fs::read_to_string(&file)
        .with_context(|| format!("Failed to read '{}'", file.display()))?;
    let doc = parse(&text)?;

    let mut resolved = doc.metadata.initial_values();

    if let Some(path) = &values_file {
        merge_values_file(&mut resolved, path)?;
    }

    for pair in &set {
        let (name, value) = split_pair(pair)?;
        resolved.insert(name.to_string(), value.to_string());
    }

    if verbose {
        println!(
            "{} Rendering '{}' with {} value(s)",
            "→".cyan(),
            doc.metadata.title,
            resolved.len()
        );
    }

    let rendered = format!("{}\n", substitute(&doc.body, &resolved));

    match output {
        Some(path) => {
            fs::write(&path, &rendered)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
            println!(
                "{} Rendered '{}' to {}",
                "✓".green().bold(),
                doc.metadata.title,
                path.display()
            );
        }
        None => print!("{}", rendered),
    }

    Ok(())
}

/// Merge a values file into the resolved map
///
/// Supports `.json` objects and `.toml` tables. Scalar entries are
/// stringified, null entries are ignored, and nested collections are
/// rejected.
fn merge_values_file(resolved: &mut Values, path: &Path) -> Result<()> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read '{}'", path.display()))?;

    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => merge_json(resolved, &text, path),
        Some("toml") => merge_toml(resolved, &text, path),
        _ => bail!(
            "Unsupported values file '{}': expected a .json or .toml file",
            path.display()
        ),
    }
}

/// Merge a JSON object of scalar values
fn merge_json(resolved: &mut Values, text: &str, path: &Path) -> Result<()> {
    let parsed: serde_json::Value = serde_json::from_str(text)
        .with_context(|| format!("Failed to parse '{}'", path.display()))?;

    let serde_json::Value::Object(entries) = parsed else {
        bail!(
            "Values file '{}' must contain an object at the top level",
            path.display()
        );
    };

    for (name, value) in entries {
        let value = match value {
            serde_json::Value::String(s) => s,
            serde_json::Value::Number(n) => n.to_string(),
            serde_json::Value::Bool(b) => b.to_string(),
            serde_json::Value::Null => continue,
            _ => bail!(
                "Value for '{}' in '{}' must be a scalar",
                name,
                path.display()
            ),
        };

        resolved.insert(name, value);
    }

    Ok(())
}

/// Merge a TOML table of scalar values
fn merge_toml(resolved: &mut Values, text: &str, path: &Path) -> Result<()> {
    let parsed: toml::Table = toml::from_str(text)
        .with_context(|| format!("Failed to parse '{}'", path.display()))?;

    for (name, value) in parsed {
        let value = match value {
            toml::Value::String(s) => s,
            toml::Value::Integer(i) => i.to_string(),
            toml::Value::Float(f) => f.to_string(),
            toml::Value::Boolean(b) => b.to_string(),
            toml::Value::Datetime(d) => d.to_string(),
            _ => bail!(
                "Value for '{}' in '{}' must be a scalar",
                name,
                path.display()
            ),
        };

        resolved.insert(name, value);
    }

    Ok(())
}

/// Split a NAME=VALUE pair from `--set`
fn split_pair(pair: &str) -> Result<(&str, &str)> {
    match pair.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name, value)),
        _ => bail!("Invalid --set '{}': expected NAME=VALUE", pair),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_pair() {
        assert_eq!(split_pair("topic=cats").unwrap(), ("topic", "cats"));
        assert_eq!(split_pair("topic=a=b").unwrap(), ("topic", "a=b"));
        assert_eq!(split_pair("topic=").unwrap(), ("topic", ""));
    }

    #[test]
    fn test_split_pair_rejects_malformed() {
        assert!(split_pair("topic").is_err());
        assert!(split_pair("=cats").is_err());
    }

    #[test]
    fn test_merge_json_stringifies_scalars() {
        let mut resolved = Values::new();
        let path = Path::new("values.json");
        merge_json(
            &mut resolved,
            r#"{"a": "x", "b": 3, "c": true, "d": null}"#,
            path,
        )
        .unwrap();

        assert_eq!(resolved.get("a").map(String::as_str), Some("x"));
        assert_eq!(resolved.get("b").map(String::as_str), Some("3"));
        assert_eq!(resolved.get("c").map(String::as_str), Some("true"));
        assert!(!resolved.contains_key("d"));
    }

    #[test]
    fn test_merge_json_rejects_collections() {
        let mut resolved = Values::new();
        let path = Path::new("values.json");
        let err = merge_json(&mut resolved, r#"{"a": [1, 2]}"#, path).unwrap_err();

        assert!(err.to_string().contains("'a'"), "got: {}", err);
    }

    #[test]
    fn test_merge_toml_stringifies_scalars() {
        let mut resolved = Values::new();
        let path = Path::new("values.toml");
        merge_toml(&mut resolved, "a = \"x\"\nb = 3\nc = false\n", path).unwrap();

        assert_eq!(resolved.get("a").map(String::as_str), Some("x"));
        assert_eq!(resolved.get("b").map(String::as_str), Some("3"));
        assert_eq!(resolved.get("c").map(String::as_str), Some("false"));
    }

    #[test]
    fn test_merge_toml_rejects_tables() {
        let mut resolved = Values::new();
        let path = Path::new("values.toml");
        let err = merge_toml(&mut resolved, "[a]\nx = 1\n", path).unwrap_err();

        assert!(err.to_string().contains("'a'"), "got: {}", err);
    }
}
