//! Typed template document model
//!
//! The serde layout of these structs is the wire contract: struct field
//! order gives the emitted key order and `skip_serializing_if` gives the
//! omission rules, so the serializer needs no hand-written YAML assembly.

use std::fmt;

use serde::Serialize;

use crate::vars::Values;

/// Title used when a parsed header carries none
pub const DEFAULT_TITLE: &str = "Untitled";

/// Input widget kind for a template field
///
/// Unknown kinds never survive parsing; [`FieldKind::from_raw`] folds them
/// into [`FieldKind::Text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Textarea,
    Select,
}

impl FieldKind {
    /// Map a raw header value onto the closed kind set
    ///
    /// Comparison is exact and case-sensitive; anything outside
    /// `text`/`textarea`/`select` normalizes to `Text`.
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "textarea" => FieldKind::Textarea,
            "select" => FieldKind::Select,
            _ => FieldKind::Text,
        }
    }

    /// Wire name of this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Textarea => "textarea",
            FieldKind::Select => "select",
        }
    }
}

impl Default for FieldKind {
    fn default() -> Self {
        FieldKind::Text
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One declared input variable of a template
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateField {
    /// Identifier matching the `{{name}}` token in the body
    pub name: String,
    /// Display name; falls back to `name` during parsing when absent
    pub label: String,
    /// Input widget kind, serialized under the `type` key
    #[serde(rename = "type")]
    pub kind: FieldKind,
    /// `None` means never explicitly set; the key is then omitted on output
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    /// Choice list; meaningful for `select` but preserved on any kind
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    /// Pre-filled value offered at render time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

impl TemplateField {
    /// Create a text field whose label mirrors its name
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            label: name.clone(),
            name,
            kind: FieldKind::default(),
            required: None,
            options: None,
            default: None,
        }
    }

    /// Whether this field was marked required
    ///
    /// An unset flag counts as not required; the flag is preserved but never
    /// enforced by this crate.
    pub fn is_required(&self) -> bool {
        self.required.unwrap_or(false)
    }
}

/// Structured header of a template document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateMetadata {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Declared fields in display order; order survives round-trips
    pub fields: Vec<TemplateField>,
}

impl TemplateMetadata {
    /// Create metadata with a title and no fields
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            fields: Vec::new(),
        }
    }

    /// Metadata for a document whose header declared nothing
    pub fn untitled() -> Self {
        Self::new(DEFAULT_TITLE)
    }

    /// Look up a declared field by name
    pub fn field(&self, name: &str) -> Option<&TemplateField> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Seed render-time values for every declared field
    ///
    /// Each field maps to its `default`, or to the empty string when it has
    /// none. This is the starting state a renderer presents before user
    /// input.
    pub fn initial_values(&self) -> Values {
        self.fields
            .iter()
            .map(|f| (f.name.clone(), f.default.clone().unwrap_or_default()))
            .collect()
    }
}

/// The parse/serialize unit: metadata plus Markdown body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateDocument {
    pub metadata: TemplateMetadata,
    pub body: String,
}
