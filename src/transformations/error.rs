//! Transformation error types.

use thiserror::Error;

use crate::db::DbError;
use crate::decoding::DecodeError;

#[derive(Debug, Error)]
pub enum TransformationError {
    #[error("Handler '{handler_name}' failed: {message}")]
    HandlerError {
        handler_name: String,
        message: String,
    },

    #[error("Decode error: {0}")]
    DecodeError(#[from] DecodeError),

    #[error("Database error: {0}")]
    DatabaseError(#[from] DbError),

    #[error("Missing required data: {0}")]
    MissingData(String),
}

impl TransformationError {
    /// Create a handler error with context.
    pub fn handler(name: &str, message: impl Into<String>) -> Self {
        Self::HandlerError {
            handler_name: name.to_string(),
            message: message.into(),
        }
    }
}
