/**
 * Authentication Service
 *
 * Signup and signin on top of the account repository, the password hasher
 * and the token service.
 *
 * # Registration Process
 *
 * 1. Reject the username if it is already registered
 * 2. Draw a salt and hash the password with it
 * 3. Insert the account (a concurrent signup that wins the race surfaces as
 *    a unique violation and is reported the same way as step 1)
 * 4. Issue a token
 *
 * # Signin Process
 *
 * 1. Look up the account (unknown username is `NotFound`)
 * 2. Verify the password against the stored salt and digest
 * 3. Issue a token
 */

use crate::backend::auth::passwords::{PasswordHasher, Salt};
use crate::backend::auth::sessions::TokenService;
use crate::backend::auth::users::{Account, UserRepository};
use crate::backend::error::ApiError;
use crate::shared::Credentials;

#[derive(Clone)]
pub struct AuthService {
    users: UserRepository,
    hasher: PasswordHasher,
    tokens: TokenService,
}

impl AuthService {
    pub fn new(users: UserRepository, hasher: PasswordHasher, tokens: TokenService) -> Self {
        Self { users, hasher, tokens }
    }

    /// Register a new account and return a token for it
    pub async fn sign_up(&self, credentials: &Credentials) -> Result<String, ApiError> {
        credentials.validate()?;

        if self.users.exists_by_username(&credentials.username).await? {
            tracing::warn!("Username already exists: {}", credentials.username);
            return Err(ApiError::AlreadyExists);
        }

        let salt = self.hasher.generate_salt()?;
        let password_hash = self.hasher.hash(&credentials.password, &salt)?;

        let account = self
            .users
            .insert(&credentials.username, &password_hash, salt.as_bytes())
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                    tracing::warn!("Username taken concurrently: {}", credentials.username);
                    ApiError::AlreadyExists
                }
                other => ApiError::Database(other),
            })?;

        let token = self.tokens.issue(&account.username)?;
        tracing::info!("User created successfully: {} ({})", account.username, account.id);

        Ok(token)
    }

    /// Check credentials and return a fresh token
    pub async fn sign_in(&self, credentials: &Credentials) -> Result<String, ApiError> {
        credentials.validate()?;

        let account = self
            .users
            .find_by_username(&credentials.username)
            .await?
            .ok_or_else(|| {
                tracing::warn!("User not found: {}", credentials.username);
                ApiError::NotFound
            })?;

        let salt = stored_salt(&account)?;
        if !self.hasher.verify(&credentials.password, &salt, &account.password_hash)? {
            tracing::warn!("Invalid password for user: {}", credentials.username);
            return Err(ApiError::InvalidCredentials);
        }

        let token = self.tokens.issue(&account.username)?;
        tracing::info!("User signed in successfully: {}", account.username);

        Ok(token)
    }
}

fn stored_salt(account: &Account) -> Result<Salt, ApiError> {
    Salt::try_from(account.salt.as_slice()).map_err(|len| {
        ApiError::Corrupt(format!("salt of account {} has {} bytes", account.id, len))
    })
}
