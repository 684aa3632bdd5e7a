//! Canonical template document text emission

use super::error::SerializeError;
use super::model::TemplateMetadata;

/// Serializes metadata and body into canonical document text
///
/// Produces the inverse of [`parse`](super::parse::parse):
///
/// ```text
/// ---
/// title: <title>
/// description: <description>   (omitted when None)
/// fields:
/// - name: ...
///   label: ...
///   type: ...
///   required: ...              (omitted when never set)
///   options: [...]             (omitted when None)
///   default: ...               (omitted when None)
/// ---
/// <body>
/// ```
///
/// Key order is fixed by the model's struct layout, `fields:` is always
/// present (as `[]` when empty), and the emitter never wraps long values,
/// so output is stable enough for snapshot comparison. The body is written
/// verbatim followed by a single trailing newline; parsing trims it back.
///
/// # Errors
///
/// Returns [`SerializeError::Yaml`] if YAML serialization fails
///
/// # Examples
///
/// ```
/// use promptlab_core::{serialize, TemplateMetadata};
///
/// let metadata = TemplateMetadata::new("Blog Post");
/// let text = serialize(&metadata, "Write something.").unwrap();
/// assert!(text.starts_with("---\ntitle: Blog Post\n"));
/// assert!(text.ends_with("---\nWrite something.\n"));
/// ```
pub fn serialize(metadata: &TemplateMetadata, body: &str) -> Result<String, SerializeError> {
    let header =
        serde_yaml::to_string(metadata).map_err(|e| SerializeError::Yaml(e.to_string()))?;

    Ok(format!("---\n{}---\n{}\n", header, body))
}
