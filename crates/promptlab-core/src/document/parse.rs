//! Raw document text to typed metadata plus body

use serde_yaml::{Mapping, Value};

use super::error::ParseError;
use super::model::{DEFAULT_TITLE, FieldKind, TemplateDocument, TemplateField, TemplateMetadata};

/// Parses raw template document text
///
/// Splits the text into a YAML front matter header and a Markdown body,
/// then normalizes the header into [`TemplateMetadata`]. The body is
/// returned with leading and trailing whitespace trimmed. A UTF-8 BOM and
/// CRLF line endings are tolerated.
///
/// Normalization is lenient: wrong-shaped header values (a number where a
/// string belongs, `options` that is not a sequence, a field entry that is
/// not a mapping) fall back to defaults instead of failing, and unknown
/// keys are dropped. Only broken document structure is an error, so callers
/// can distinguish "malformed file" from "sparse header" and choose their
/// own fallback.
///
/// # Errors
///
/// - [`ParseError::MissingDelimiter`] if the text does not begin with a
///   `---` line
/// - [`ParseError::UnterminatedHeader`] if no closing `---` line follows
/// - [`ParseError::InvalidHeader`] if the header is not parseable YAML
///
/// # Examples
///
/// ```
/// use promptlab_core::parse;
///
/// let doc = parse("---\ntitle: Blog Post\nfields:\n- name: topic\n---\nWrite about {{topic}}.\n").unwrap();
/// assert_eq!(doc.metadata.title, "Blog Post");
/// assert_eq!(doc.metadata.fields[0].label, "topic");
/// assert_eq!(doc.body, "Write about {{topic}}.");
/// ```
pub fn parse(text: &str) -> Result<TemplateDocument, ParseError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let (header, body) = split_front_matter(text)?;

    let metadata = if header.trim().is_empty() {
        TemplateMetadata::untitled()
    } else {
        let value: Value =
            serde_yaml::from_str(header).map_err(|e| ParseError::InvalidHeader(e.to_string()))?;
        normalize_metadata(&value)
    };

    Ok(TemplateDocument {
        metadata,
        body: body.trim().to_string(),
    })
}

/// Split text into (header, body) around the `---` delimiter lines
///
/// The opening delimiter must be the very first line; the closing delimiter
/// is the next line consisting solely of `---`. A body line that merely
/// starts with dashes does not close the header.
fn split_front_matter(text: &str) -> Result<(&str, &str), ParseError> {
    let rest = text.strip_prefix("---").ok_or(ParseError::MissingDelimiter)?;
    let rest = if rest.is_empty() {
        rest
    } else {
        rest.strip_prefix("\r\n")
            .or_else(|| rest.strip_prefix('\n'))
            .ok_or(ParseError::MissingDelimiter)?
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end_matches(['\n', '\r']) == "---" {
            let header = &rest[..offset];
            let body = &rest[offset + line.len()..];
            return Ok((header, body));
        }
        offset += line.len();
    }

    Err(ParseError::UnterminatedHeader)
}

/// Normalize a decoded header value into metadata
///
/// A header that is valid YAML but not a mapping (a bare scalar, a
/// sequence) declares nothing and yields untitled empty metadata.
fn normalize_metadata(value: &Value) -> TemplateMetadata {
    let map = match value {
        Value::Mapping(map) => map,
        _ => return TemplateMetadata::untitled(),
    };

    let title = map
        .get("title")
        .and_then(scalar_to_string)
        .unwrap_or_else(|| DEFAULT_TITLE.to_string());

    let description = map
        .get("description")
        .and_then(scalar_to_string)
        .filter(|s| !s.is_empty());

    let fields = match map.get("fields") {
        Some(Value::Sequence(entries)) => entries.iter().map(normalize_field).collect(),
        _ => Vec::new(),
    };

    TemplateMetadata {
        title,
        description,
        fields,
    }
}

/// Normalize one raw `fields` entry into a typed field
///
/// Never fails: every wrong-shaped value resolves to its default. A
/// non-mapping entry normalizes to an all-defaults field and is kept so
/// field count and order survive.
fn normalize_field(entry: &Value) -> TemplateField {
    let map: &Mapping = match entry {
        Value::Mapping(map) => map,
        _ => {
            return TemplateField {
                name: String::new(),
                label: String::new(),
                kind: FieldKind::default(),
                required: Some(false),
                options: None,
                default: None,
            }
        }
    };

    let name = map
        .get("name")
        .and_then(scalar_to_string)
        .unwrap_or_default();

    // Only an absent label falls back to the name; an explicitly empty
    // label stays empty.
    let label = map
        .get("label")
        .and_then(scalar_to_string)
        .unwrap_or_else(|| name.clone());

    let kind = map
        .get("type")
        .and_then(scalar_to_string)
        .map(|s| FieldKind::from_raw(&s))
        .unwrap_or_default();

    // Coerced to a concrete flag on parse; `None` only ever describes
    // hand-built metadata that never set it.
    let required = match map.get("required") {
        Some(Value::Bool(b)) => Some(*b),
        _ => Some(false),
    };

    let options = match map.get("options") {
        Some(Value::Sequence(items)) => Some(items.iter().filter_map(scalar_to_string).collect()),
        _ => None,
    };

    let default = map.get("default").and_then(scalar_to_string);

    TemplateField {
        name,
        label,
        kind,
        required,
        options,
        default,
    }
}

/// Stringify a YAML scalar; null and containers count as absent
fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_complete_document() {
        let text = r#"---
title: Blog Post
description: Draft a short post
fields:
- name: topic
  label: Topic
  type: text
  required: true
- name: tone
  type: select
  options:
  - friendly
  - formal
  default: friendly
---
Write about {{topic}} in a {{tone}} tone.
"#;

        let doc = parse(text).unwrap();

        assert_eq!(doc.metadata.title, "Blog Post");
        assert_eq!(
            doc.metadata.description.as_deref(),
            Some("Draft a short post")
        );
        assert_eq!(doc.metadata.fields.len(), 2);

        let topic = &doc.metadata.fields[0];
        assert_eq!(topic.name, "topic");
        assert_eq!(topic.label, "Topic");
        assert_eq!(topic.kind, FieldKind::Text);
        assert_eq!(topic.required, Some(true));

        let tone = &doc.metadata.fields[1];
        assert_eq!(tone.label, "tone", "Absent label should fall back to name");
        assert_eq!(tone.kind, FieldKind::Select);
        assert_eq!(
            tone.options.as_deref(),
            Some(&["friendly".to_string(), "formal".to_string()][..])
        );
        assert_eq!(tone.default.as_deref(), Some("friendly"));

        assert_eq!(doc.body, "Write about {{topic}} in a {{tone}} tone.");
    }

    #[test]
    fn test_missing_title_defaults_to_untitled() {
        let doc = parse("---\nfields: []\n---\nBody\n").unwrap();
        assert_eq!(doc.metadata.title, "Untitled");
    }

    #[test]
    fn test_explicitly_empty_title_is_kept() {
        let doc = parse("---\ntitle: \"\"\n---\nBody\n").unwrap();
        assert_eq!(doc.metadata.title, "");
    }

    #[test]
    fn test_null_title_defaults_to_untitled() {
        let doc = parse("---\ntitle: null\n---\nBody\n").unwrap();
        assert_eq!(doc.metadata.title, "Untitled");
    }

    #[test]
    fn test_numeric_title_is_stringified() {
        let doc = parse("---\ntitle: 42\n---\nBody\n").unwrap();
        assert_eq!(doc.metadata.title, "42");
    }

    #[test]
    fn test_empty_description_is_dropped() {
        let doc = parse("---\ntitle: T\ndescription: \"\"\n---\nBody\n").unwrap();
        assert!(doc.metadata.description.is_none());
    }

    #[test]
    fn test_fields_missing_or_non_sequence_yield_empty() {
        let absent = parse("---\ntitle: T\n---\nBody\n").unwrap();
        assert!(absent.metadata.fields.is_empty());

        let wrong_shape = parse("---\ntitle: T\nfields: not-a-list\n---\nBody\n").unwrap();
        assert!(wrong_shape.metadata.fields.is_empty());
    }

    #[test]
    fn test_non_mapping_field_entry_kept_as_defaults() {
        let doc = parse("---\nfields:\n- just a string\n- name: real\n---\nBody\n").unwrap();

        assert_eq!(doc.metadata.fields.len(), 2, "Entry count should survive");
        let blank = &doc.metadata.fields[0];
        assert_eq!(blank.name, "");
        assert_eq!(blank.label, "");
        assert_eq!(blank.kind, FieldKind::Text);
        assert_eq!(blank.required, Some(false));
        assert_eq!(doc.metadata.fields[1].name, "real");
    }

    #[test]
    fn test_explicitly_empty_label_is_kept() {
        let doc = parse("---\nfields:\n- name: topic\n  label: \"\"\n---\nBody\n").unwrap();
        assert_eq!(doc.metadata.fields[0].label, "");
    }

    #[test]
    fn test_unknown_type_normalizes_to_text() {
        let doc = parse("---\nfields:\n- name: x\n  type: bogus\n---\nBody\n").unwrap();
        assert_eq!(doc.metadata.fields[0].kind, FieldKind::Text);
    }

    #[test]
    fn test_required_accepts_booleans_only() {
        let doc = parse(
            "---\nfields:\n- name: a\n  required: true\n- name: b\n- name: c\n  required: sure\n---\nBody\n",
        )
        .unwrap();

        assert_eq!(doc.metadata.fields[0].required, Some(true));
        assert_eq!(doc.metadata.fields[1].required, Some(false));
        assert_eq!(
            doc.metadata.fields[2].required,
            Some(false),
            "Non-boolean required should normalize to false"
        );
    }

    #[test]
    fn test_options_require_a_sequence() {
        let doc = parse(
            "---\nfields:\n- name: a\n  options: nope\n- name: b\n  options:\n  - 1\n  - two\n  - [nested]\n---\nBody\n",
        )
        .unwrap();

        assert!(doc.metadata.fields[0].options.is_none());
        assert_eq!(
            doc.metadata.fields[1].options.as_deref(),
            Some(&["1".to_string(), "two".to_string()][..]),
            "Scalar elements stringify, non-scalar elements drop"
        );
    }

    #[test]
    fn test_default_is_stringified_scalar() {
        let doc = parse("---\nfields:\n- name: a\n  default: 3\n- name: b\n  default: null\n---\nBody\n")
            .unwrap();

        assert_eq!(doc.metadata.fields[0].default.as_deref(), Some("3"));
        assert!(doc.metadata.fields[1].default.is_none());
    }

    #[test]
    fn test_unknown_keys_are_dropped() {
        let doc = parse(
            "---\ntitle: T\nauthor: nobody\nfields:\n- name: x\n  placeholder_hint: ignored\n---\nBody\n",
        )
        .unwrap();

        assert_eq!(doc.metadata.title, "T");
        assert_eq!(doc.metadata.fields[0].name, "x");
    }

    #[test]
    fn test_body_is_trimmed() {
        let doc = parse("---\ntitle: T\n---\n\n  Body text  \n\n").unwrap();
        assert_eq!(doc.body, "Body text");
    }

    #[test]
    fn test_empty_header_yields_untitled_metadata() {
        let doc = parse("---\n---\nBody\n").unwrap();
        assert_eq!(doc.metadata.title, "Untitled");
        assert!(doc.metadata.fields.is_empty());
        assert_eq!(doc.body, "Body");
    }

    #[test]
    fn test_scalar_header_yields_untitled_metadata() {
        let doc = parse("---\njust a scalar\n---\nBody\n").unwrap();
        assert_eq!(doc.metadata.title, "Untitled");
        assert!(doc.metadata.fields.is_empty());
    }

    #[test]
    fn test_crlf_document() {
        let doc = parse("---\r\ntitle: T\r\n---\r\nBody\r\n").unwrap();
        assert_eq!(doc.metadata.title, "T");
        assert_eq!(doc.body, "Body");
    }

    #[test]
    fn test_bom_is_ignored() {
        let doc = parse("\u{feff}---\ntitle: T\n---\nBody\n").unwrap();
        assert_eq!(doc.metadata.title, "T");
    }

    #[test]
    fn test_closing_delimiter_at_end_of_input() {
        let doc = parse("---\ntitle: T\n---").unwrap();
        assert_eq!(doc.metadata.title, "T");
        assert_eq!(doc.body, "");
    }

    #[test]
    fn test_body_dashes_do_not_close_the_header_early() {
        let doc = parse("---\ntitle: T\n---\nintro\n---\noutro\n").unwrap();
        assert_eq!(doc.body, "intro\n---\noutro");
    }

    #[test]
    fn test_missing_opening_delimiter_is_an_error() {
        assert_eq!(
            parse("title: T\n---\nBody\n"),
            Err(ParseError::MissingDelimiter)
        );
        assert_eq!(parse(""), Err(ParseError::MissingDelimiter));
        assert_eq!(parse("--- title\nBody\n"), Err(ParseError::MissingDelimiter));
    }

    #[test]
    fn test_unterminated_header_is_an_error() {
        assert_eq!(
            parse("---\ntitle: T\nBody without closing\n"),
            Err(ParseError::UnterminatedHeader)
        );
        assert_eq!(parse("---\n"), Err(ParseError::UnterminatedHeader));
        assert_eq!(parse("---"), Err(ParseError::UnterminatedHeader));
    }

    #[test]
    fn test_invalid_yaml_header_is_an_error() {
        let result = parse("---\ntitle: [unclosed\n---\nBody\n");
        assert!(matches!(result, Err(ParseError::InvalidHeader(_))));
    }
}
