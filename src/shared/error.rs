//! Shared Error Types
//!
//! Errors raised while decoding or validating client payloads. They are
//! independent of the HTTP layer so the payload types in this module tree can
//! validate themselves without pulling in axum.
//!
//! # Error Categories
//!
//! - `SerializationError` - the body is not the JSON shape we expect
//! - `ValidationError` - the body decoded but a field breaks a constraint
//!
//! # Usage
//!
//! ```rust
//! use areacheck::shared::error::SharedError;
//!
//! let error = SharedError::validation("username", "Username must be at least 5 characters long");
//! ```
use thiserror::Error;

/// Payload errors shared by every request type
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SharedError {
    /// The body could not be decoded
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Human-readable error message
        message: String,
    },

    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::SerializationError {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Message suitable for a client response
    ///
    /// Validation errors surface only their message; the field name is already
    /// part of it.
    pub fn client_message(&self) -> String {
        match self {
            Self::SerializationError { message } => message.clone(),
            Self::ValidationError { message, .. } => message.clone(),
        }
    }
}
