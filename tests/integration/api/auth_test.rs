//! Authentication API integration tests

use axum::http::{Method, StatusCode};
use serde_json::json;

use crate::common::*;
use crate::{assert_error, assert_status};

#[tokio::test]
async fn test_signup_returns_token() {
    let app = TestApp::new().await;

    let response = app
        .request(
            Method::POST,
            "/auth/signup",
            Some(json!({ "username": "alice12", "password": "secret1" })),
            None,
        )
        .await;

    assert_status!(response, StatusCode::OK);
    let token = response.body["token"].as_str().unwrap();
    assert!(!token.is_empty());
    assert_eq!(app.db.count("accounts").await, 1);
}

#[tokio::test]
async fn test_signup_duplicate_username() {
    let app = TestApp::new().await;
    sign_up(&app, "alice12", "secret1").await;

    let response = app
        .request(
            Method::POST,
            "/auth/signup",
            Some(json!({ "username": "alice12", "password": "another1" })),
            None,
        )
        .await;

    assert_error!(response, StatusCode::BAD_REQUEST, "User already exists");
    assert_eq!(app.db.count("accounts").await, 1);
}

#[tokio::test]
async fn test_signup_validation_errors() {
    let app = TestApp::new().await;

    let cases = [
        (json!({ "username": "abc", "password": "secret1" }), "Username must be at least 5 characters long"),
        (json!({ "username": "alice12", "password": "12345" }), "Password must be at least 6 characters long"),
        (json!({ "username": "   ", "password": "secret1" }), "Username is required."),
        (json!({ "username": "alice12", "password": "" }), "Password is required."),
    ];

    for (body, message) in cases {
        let response = app.request(Method::POST, "/auth/signup", Some(body), None).await;
        assert_error!(response, StatusCode::UNPROCESSABLE_ENTITY, message);
    }

    assert_eq!(app.db.count("accounts").await, 0);
}

#[tokio::test]
async fn test_password_over_72_bytes() {
    let app = TestApp::new().await;
    let long_password = format!("{}X", "a".repeat(79));

    let signup = app
        .request(
            Method::POST,
            "/auth/signup",
            Some(json!({ "username": "alice12", "password": long_password })),
            None,
        )
        .await;
    assert_error!(signup, StatusCode::UNPROCESSABLE_ENTITY, "Password must be at most 72 bytes long");
    assert_eq!(app.db.count("accounts").await, 0);

    let prefix = "a".repeat(72);
    sign_up(&app, "alice12", &prefix).await;

    let signin = app
        .request(
            Method::POST,
            "/auth/signin",
            Some(json!({ "username": "alice12", "password": format!("{prefix}Y") })),
            None,
        )
        .await;
    assert_status!(signin, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_signup_malformed_body() {
    let app = TestApp::new().await;

    let response = app
        .request(Method::POST, "/auth/signup", Some(json!({ "username": "alice12" })), None)
        .await;

    assert_status!(response, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.body["status"], 422);
}

#[tokio::test]
async fn test_signin_after_signup() {
    let app = TestApp::new().await;
    sign_up(&app, "alice12", "secret1").await;

    let response = app
        .request(
            Method::POST,
            "/auth/signin",
            Some(json!({ "username": "alice12", "password": "secret1" })),
            None,
        )
        .await;

    assert_status!(response, StatusCode::OK);
    assert!(response.body["token"].as_str().is_some());
}

#[tokio::test]
async fn test_signin_unknown_user() {
    let app = TestApp::new().await;

    let response = app
        .request(
            Method::POST,
            "/auth/signin",
            Some(json!({ "username": "nobody1", "password": "secret1" })),
            None,
        )
        .await;

    assert_error!(response, StatusCode::NOT_FOUND, "User not found");
}

#[tokio::test]
async fn test_signin_wrong_password() {
    let app = TestApp::new().await;
    sign_up(&app, "alice12", "secret1").await;

    let response = app
        .request(
            Method::POST,
            "/auth/signin",
            Some(json!({ "username": "alice12", "password": "secret2" })),
            None,
        )
        .await;

    assert_error!(response, StatusCode::UNAUTHORIZED, "Invalid password");
}

#[tokio::test]
async fn test_signin_validates_credentials() {
    let app = TestApp::new().await;

    let response = app
        .request(
            Method::POST,
            "/auth/signin",
            Some(json!({ "username": "abc", "password": "secret1" })),
            None,
        )
        .await;

    assert_status!(response, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_signup_token_opens_protected_routes() {
    let app = TestApp::new().await;
    let token = sign_up(&app, "alice12", "secret1").await;

    let response = app.request(Method::GET, "/points", None, Some(&token)).await;

    assert_status!(response, StatusCode::OK);
    assert_eq!(response.body, json!([]));
}
