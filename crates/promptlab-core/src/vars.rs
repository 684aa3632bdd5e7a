//! Variable substitution over template bodies
//!
//! Bodies carry placeholders of the form `{{name}}` where `name` is one or
//! more ASCII word characters (letters, digits, underscore). Matching is
//! case-sensitive with no whitespace tolerance inside the braces, scanning
//! left to right without overlap.
//!
//! ## Semantics
//!
//! - A placeholder whose name is a key in the value map is replaced by the
//!   mapped value, even when that value is the empty string.
//! - A placeholder whose name is absent from the map passes through
//!   literally.
//! - Replacement values are inserted verbatim and never rescanned, so
//!   substitution cannot recurse.
//! - There is no escape syntax; brace runs that do not form a complete
//!   placeholder are ordinary text.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::document::TemplateMetadata;

/// Variable name to replacement value mapping
///
/// Ordered so that iteration (and anything rendered from it) is
/// deterministic.
pub type Values = BTreeMap<String, String>;

/// Replace `{{name}}` placeholders in `body` with mapped values
///
/// Pure function: repeated calls with the same inputs yield identical
/// output.
///
/// # Examples
///
/// ```
/// use promptlab_core::{substitute, Values};
///
/// let mut values = Values::new();
/// values.insert("topic".to_string(), "cats".to_string());
///
/// let out = substitute("Write about {{topic}}. {{missing}} stays.", &values);
/// assert_eq!(out, "Write about cats. {{missing}} stays.");
/// ```
pub fn substitute(body: &str, values: &Values) -> String {
    let mut output = String::with_capacity(body.len());
    let mut pos = 0;

    while let Some((start, name)) = next_placeholder(body, pos) {
        output.push_str(&body[pos..start]);
        let end = start + name.len() + 4;
        match values.get(name) {
            Some(value) => output.push_str(value),
            // Key absent: the token stays literal
            None => output.push_str(&body[start..end]),
        }
        pos = end;
    }

    output.push_str(&body[pos..]);
    output
}

/// Distinct placeholder names in `body`, in first-appearance order
pub fn placeholders(body: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    let mut pos = 0;

    while let Some((start, name)) = next_placeholder(body, pos) {
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
        pos = start + name.len() + 4;
    }

    names
}

/// Agreement report between declared fields and body placeholders
///
/// Advisory only. Neither list is an error anywhere in this crate: an
/// undeclared placeholder simply never receives a seeded value, and an
/// unreferenced field is never substituted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Coverage {
    /// Placeholder names with no declared field
    pub undeclared: Vec<String>,
    /// Declared field names the body never references
    pub unreferenced: Vec<String>,
}

impl Coverage {
    /// Whether fields and placeholders agree exactly
    pub fn is_clean(&self) -> bool {
        self.undeclared.is_empty() && self.unreferenced.is_empty()
    }
}

/// Compare a template's declared fields against its body placeholders
pub fn coverage(metadata: &TemplateMetadata, body: &str) -> Coverage {
    let referenced = placeholders(body);

    let undeclared = referenced
        .iter()
        .filter(|name| metadata.field(name).is_none())
        .cloned()
        .collect();

    let unreferenced = metadata
        .fields
        .iter()
        .filter(|field| !referenced.iter().any(|name| *name == field.name))
        .map(|field| field.name.clone())
        .collect();

    Coverage {
        undeclared,
        unreferenced,
    }
}

/// Find the next complete placeholder at or after `pos`
///
/// Returns the byte offset of its `{{` and the identifier between the
/// braces. A `{{` that does not open a complete placeholder is skipped by
/// a single byte, so overlapping brace runs resolve exactly like a
/// left-to-right regex scan.
fn next_placeholder(body: &str, mut pos: usize) -> Option<(usize, &str)> {
    while pos < body.len() {
        let start = body[pos..].find("{{")? + pos;
        match placeholder_name(body, start) {
            Some(name) => return Some((start, name)),
            None => pos = start + 1,
        }
    }
    None
}

/// Identifier of the placeholder opening at `open`, if it is complete
fn placeholder_name(body: &str, open: usize) -> Option<&str> {
    let after = &body[open + 2..];
    let len = after.bytes().take_while(|b| is_word_byte(*b)).count();
    if len == 0 {
        return None;
    }
    if after[len..].starts_with("}}") {
        Some(&after[..len])
    } else {
        None
    }
}

fn is_word_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}
