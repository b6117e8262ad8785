//! Error type shared by every decode/encode path.

use thiserror::Error;

/// Errors raised while translating between the object model and wire records.
///
/// Decoding is fail-fast: the first error aborts the whole decode and no
/// partially built value is handed back.
#[derive(Debug, Error)]
pub enum CodecError {
    /// A required key was absent from a wire record
    #[error("missing field `{field}`")]
    MissingField { field: String },

    /// A discriminator (`primitiveType`, `polygonMode`, a type tag, an enum
    /// value) did not match any known variant
    #[error("unknown value `{value}` for `{field}`")]
    UnknownTag { field: String, value: String },

    /// The field exists but holds the wrong kind of value
    #[error("field `{field}` has wrong type, expected {expected}")]
    TypeMismatch { field: String, expected: &'static str },

    /// The operation exists in the API but has no implementation yet
    #[error("operation not implemented: {0}")]
    Unimplemented(&'static str),

    /// The requested entry is not present
    #[error("not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CodecError {
    pub fn missing(field: impl Into<String>) -> Self {
        CodecError::MissingField {
            field: field.into(),
        }
    }

    pub fn unknown_tag(field: impl Into<String>, value: impl Into<String>) -> Self {
        CodecError::UnknownTag {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn mismatch(field: impl Into<String>, expected: &'static str) -> Self {
        CodecError::TypeMismatch {
            field: field.into(),
            expected,
        }
    }
}

pub type Result<T> = std::result::Result<T, CodecError>;
