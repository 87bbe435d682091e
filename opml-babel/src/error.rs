//! Error types for OPML conversion

use std::fmt;

/// Errors that can abort a document conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// The input text is not well-formed OPML. This is the only user-facing
    /// error; empty input is not a parse failure and converts to empty output.
    Parse(String),
    /// A required outline attribute was absent. Well-formed exports always
    /// carry it, so hitting this indicates an unexpected document shape; the
    /// whole conversion is aborted rather than emitting a half-converted tree.
    MissingField { attribute: &'static str },
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::Parse(detail) => {
                write!(f, "input cannot be recognized as OPML: {detail}")
            }
            ConvertError::MissingField { attribute } => {
                write!(
                    f,
                    "outline element is missing the required '{attribute}' attribute"
                )
            }
        }
    }
}

impl std::error::Error for ConvertError {}
