// Core modules
pub mod document;
pub mod vars;

// Re-export commonly used types
pub use document::{
    parse, serialize, FieldKind, ParseError, SerializeError, TemplateDocument, TemplateField,
    TemplateMetadata,
};
pub use vars::{coverage, placeholders, substitute, Coverage, Values};
