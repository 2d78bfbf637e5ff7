/**
 * Backend Error Types
 *
 * Every failure a request can end in. Each variant maps to exactly one HTTP
 * status; internal variants carry their cause for logging only.
 *
 * # Status Mapping
 *
 * - `Validation` - 422 Unprocessable Entity
 * - `AlreadyExists` - 400 Bad Request
 * - `NotFound` - 404 Not Found
 * - `InvalidCredentials` - 401 Unauthorized
 * - `Unauthorized` - 401 Unauthorized
 * - `Database`, `Hashing`, `Token`, `Random`, `Corrupt` - 500 Internal Server Error
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::shared::SharedError;

/// Request-level error
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed body or a field constraint violation
    #[error(transparent)]
    Validation(#[from] SharedError),

    /// Signup with a username that is already registered
    #[error("User already exists")]
    AlreadyExists,

    /// No account with the given username
    #[error("User not found")]
    NotFound,

    /// Signin password does not match
    #[error("Invalid password")]
    InvalidCredentials,

    /// Missing, malformed or badly signed bearer token
    #[error("Unauthorized")]
    Unauthorized,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Password hashing error: {0}")]
    Hashing(#[from] bcrypt::BcryptError),

    #[error("Token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    #[error("Random generator error: {0}")]
    Random(#[from] getrandom::Error),

    /// A stored row does not have the shape we wrote
    #[error("Corrupt record: {0}")]
    Corrupt(String),
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::AlreadyExists => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::InvalidCredentials | Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Database(_)
            | Self::Hashing(_)
            | Self::Token(_)
            | Self::Random(_)
            | Self::Corrupt(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the message returned to the client
    ///
    /// Internal errors collapse to a generic message so no implementation
    /// detail leaks into responses.
    pub fn message(&self) -> String {
        match self {
            Self::Validation(err) => err.client_message(),
            Self::AlreadyExists | Self::NotFound | Self::InvalidCredentials | Self::Unauthorized => {
                self.to_string()
            }
            _ => "Internal server error".to_string(),
        }
    }

    pub fn is_internal(&self) -> bool {
        self.status_code().is_server_error()
    }
}
