//! Template document error types

use thiserror::Error;

/// Structural parse errors
///
/// These cover broken document structure only. Wrong-shaped values inside a
/// well-formed header never error; they are normalized away (see
/// [`parse`](super::parse::parse)).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Document does not begin with an opening front matter delimiter
    #[error("missing front matter: document must start with a '---' line")]
    MissingDelimiter,

    /// No closing delimiter line was found after the opening one
    #[error("unterminated front matter: no closing '---' line")]
    UnterminatedHeader,

    /// The header block is not parseable YAML
    #[error("invalid front matter YAML: {0}")]
    InvalidHeader(String),
}

/// Serialization errors
#[derive(Debug, Error)]
pub enum SerializeError {
    /// YAML serialization error
    #[error("YAML serialization error: {0}")]
    Yaml(String),
}
