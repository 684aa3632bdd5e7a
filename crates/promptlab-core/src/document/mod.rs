//! Template document parsing and serialization
//!
//! A template document is a Markdown file with a YAML front matter header:
//!
//! ```text
//! ---
//! title: Blog Post
//! description: Draft a short post
//! fields:
//! - name: topic
//!   label: Topic
//!   type: text
//! ---
//! Write about {{topic}} in a friendly tone.
//! ```
//!
//! The header declares the template's metadata and its typed input fields;
//! the body is free Markdown carrying `{{name}}` placeholders. [`parse`]
//! splits and normalizes raw text into a [`TemplateDocument`]; [`serialize`]
//! emits the canonical text form back. Header normalization is deliberately
//! lenient (wrong-shaped field values fall back to defaults) while missing
//! or broken header structure is a hard [`ParseError`] so callers can decide
//! how to degrade.

pub mod error;
pub mod model;
pub mod parse;
pub mod serialize;

pub use error::{ParseError, SerializeError};
pub use model::{FieldKind, TemplateDocument, TemplateField, TemplateMetadata};
pub use parse::parse;
pub use serialize::serialize;
