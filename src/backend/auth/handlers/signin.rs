/**
 * Signin Handler
 *
 * `POST /auth/signin`
 *
 * # Errors
 *
 * * `422 Unprocessable Entity` - malformed body or field constraint violation
 * * `404 Not Found` - no account with this username
 * * `401 Unauthorized` - wrong password
 * * `500 Internal Server Error` - database, hashing or token failure
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};

use crate::backend::auth::handlers::types::{Credentials, TokenResponse};
use crate::backend::auth::service::AuthService;
use crate::backend::error::ApiError;

pub async fn signin(
    State(auth): State<AuthService>,
    payload: Result<Json<Credentials>, JsonRejection>,
) -> Result<Json<TokenResponse>, ApiError> {
    let Json(credentials) = payload?;
    tracing::info!("Signin request for: {}", credentials.username);

    let token = auth.sign_in(&credentials).await?;
    Ok(Json(TokenResponse { token }))
}
