/**
 * Authentication Extractor
 *
 * Protected handlers take an `AuthUser` argument. Extracting it walks the
 * request through the gateway states:
 *
 * 1. Read `Authorization: Bearer <token>` (missing or malformed -> 401)
 * 2. Verify the token signature (invalid -> 401)
 * 3. Check the account still exists (absent -> 404)
 *
 * On success the handler receives the identity as a value; the request
 * itself is left untouched.
 */

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};

use crate::backend::error::ApiError;
use crate::backend::server::state::AppState;

/// Identity established for a request
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub username: String,
}

/// Axum extractor for the authenticated user
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

/// Extract the token from an `Authorization: Bearer <token>` header
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, ApiError> {
    let auth_header = headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            ApiError::Unauthorized
        })?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| {
            tracing::warn!("Invalid Authorization header format");
            ApiError::Unauthorized
        })?;

    Ok(token)
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers)?;

        let username = state.tokens.verify(token).map_err(|e| {
            tracing::warn!("Invalid token: {:?}", e.kind());
            ApiError::Unauthorized
        })?;

        if !state.users.exists_by_username(&username).await? {
            tracing::warn!("Token for unknown user: {}", username);
            return Err(ApiError::NotFound);
        }

        Ok(AuthUser(AuthenticatedUser { username }))
    }
}
