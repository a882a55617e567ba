use thiserror::Error;

/// Failure while reading a wire value sequence.
///
/// Decode errors are scoped to a single event: the caller drops the event and
/// keeps going with the rest of the block.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("Cursor {cursor} out of bounds for sequence of length {len}")]
    OutOfBounds { cursor: usize, len: usize },

    #[error("Invalid wire scalar '{value}' at position {cursor}")]
    InvalidScalar { cursor: usize, value: String },

    #[error("Value {value} at position {cursor} does not fit in {width}")]
    OutOfRange {
        cursor: usize,
        value: String,
        width: &'static str,
    },

    #[error("Invalid boolean value {value} at position {cursor}")]
    InvalidBoolean { cursor: usize, value: String },

    #[error("Array length {len} at position {cursor} exceeds the {remaining} remaining scalars")]
    InvalidLength {
        cursor: usize,
        len: String,
        remaining: usize,
    },

    #[error("Missing field: {0}")]
    MissingField(String),

    #[error("Field '{field}' is not a {expected}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
    },

    #[error("Payload shape does not match event {0}")]
    PayloadMismatch(&'static str),
}

impl DecodeError {
    pub(crate) fn type_mismatch(field: &str, expected: &'static str) -> Self {
        Self::TypeMismatch {
            field: field.to_string(),
            expected,
        }
    }
}
