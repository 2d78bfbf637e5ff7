//! Authentication test helpers

use areacheck::backend::auth::TokenService;
use axum::http::{Method, StatusCode};
use serde_json::json;

use super::database::TEST_SECRET;
use super::server::TestApp;

/// Create authorization header value
pub fn auth_header(token: &str) -> String {
    format!("Bearer {}", token)
}

/// Sign a token with the test secret without creating an account
pub fn token_for(username: &str) -> String {
    TokenService::new(TEST_SECRET.as_bytes())
        .issue(username)
        .expect("Failed to generate test token")
}

/// Register a user through the API and return its token
pub async fn sign_up(app: &TestApp, username: &str, password: &str) -> String {
    let response = app
        .request(
            Method::POST,
            "/auth/signup",
            Some(json!({ "username": username, "password": password })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "signup failed: {}", response.body);

    response.body["token"]
        .as_str()
        .expect("signup response has a token")
        .to_string()
}
