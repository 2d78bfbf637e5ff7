//! Credential payload shared by signup and signin

use serde::{Deserialize, Serialize};

use crate::shared::error::SharedError;

/// Minimum username length, in characters
pub const USERNAME_MIN_LEN: usize = 5;

/// Minimum password length, in characters
pub const PASSWORD_MIN_LEN: usize = 6;

/// Maximum password length, in bytes (bcrypt's input limit)
pub const PASSWORD_MAX_BYTES: usize = 72;

/// Username and password as submitted by a client
#[derive(Deserialize, Serialize, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Check the field constraints
    ///
    /// Both fields must be non-blank; the username needs at least
    /// [`USERNAME_MIN_LEN`] characters and the password at least
    /// [`PASSWORD_MIN_LEN`] and at most [`PASSWORD_MAX_BYTES`] bytes. The
    /// username is checked first.
    pub fn validate(&self) -> Result<(), SharedError> {
        if self.username.trim().is_empty() {
            return Err(SharedError::validation("username", "Username is required."));
        }
        if self.username.chars().count() < USERNAME_MIN_LEN {
            return Err(SharedError::validation(
                "username",
                format!("Username must be at least {USERNAME_MIN_LEN} characters long"),
            ));
        }
        if self.password.trim().is_empty() {
            return Err(SharedError::validation("password", "Password is required."));
        }
        if self.password.chars().count() < PASSWORD_MIN_LEN {
            return Err(SharedError::validation(
                "password",
                format!("Password must be at least {PASSWORD_MIN_LEN} characters long"),
            ));
        }
        if self.password.len() > PASSWORD_MAX_BYTES {
            return Err(SharedError::validation(
                "password",
                format!("Password must be at most {PASSWORD_MAX_BYTES} bytes long"),
            ));
        }
        Ok(())
    }
}

// Keep the password out of logs and panic messages.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
