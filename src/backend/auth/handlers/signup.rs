/**
 * Signup Handler
 *
 * `POST /auth/signup`
 *
 * # Errors
 *
 * * `422 Unprocessable Entity` - malformed body, username under 5 or password
 *   under 6 characters
 * * `400 Bad Request` - username already registered
 * * `500 Internal Server Error` - database, hashing or token failure
 *
 * # Example Request
 *
 * ```http
 * POST /auth/signup HTTP/1.1
 * Content-Type: application/json
 *
 * {"username": "alice12", "password": "secret1"}
 * ```
 *
 * # Example Response
 *
 * ```json
 * {"token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..."}
 * ```
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};

use crate::backend::auth::handlers::types::{Credentials, TokenResponse};
use crate::backend::auth::service::AuthService;
use crate::backend::error::ApiError;

pub async fn signup(
    State(auth): State<AuthService>,
    payload: Result<Json<Credentials>, JsonRejection>,
) -> Result<Json<TokenResponse>, ApiError> {
    let Json(credentials) = payload?;
    tracing::info!("Signup request for username: {}", credentials.username);

    let token = auth.sign_up(&credentials).await?;
    Ok(Json(TokenResponse { token }))
}
