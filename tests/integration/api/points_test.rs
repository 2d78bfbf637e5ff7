//! Points API integration tests

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::assert_status;
use crate::common::*;

#[tokio::test]
async fn test_check_then_list() {
    let app = TestApp::new().await;
    let token = sign_up(&app, "alice12", "secret1").await;

    let checked = app
        .request(
            Method::POST,
            "/points/check",
            Some(json!({ "x": 0.0, "y": 0.0, "r": 5.0 })),
            Some(&token),
        )
        .await;

    assert_status!(checked, StatusCode::OK);
    assert_eq!(checked.body["x"], 0.0);
    assert_eq!(checked.body["y"], 0.0);
    assert_eq!(checked.body["r"], 5.0);
    assert_eq!(checked.body["result"], true);
    assert!(checked.body["timestamp"].is_string());

    let listed = app.request(Method::GET, "/points", None, Some(&token)).await;
    assert_status!(listed, StatusCode::OK);
    assert_eq!(listed.body, json!([checked.body]));
}

#[tokio::test]
async fn test_results_per_region() {
    let app = TestApp::new().await;
    let token = sign_up(&app, "alice12", "secret1").await;

    let cases = [
        (json!({ "x": 1.0, "y": 1.0, "r": 4.0 }), true),
        (json!({ "x": 2.0, "y": 0.0, "r": 4.0 }), true),
        (json!({ "x": 2.0, "y": 2.0, "r": 4.0 }), false),
        (json!({ "x": -4.0, "y": 2.0, "r": 4.0 }), true),
        (json!({ "x": -1.0, "y": 3.0, "r": 4.0 }), false),
        (json!({ "x": -2.0, "y": -2.0, "r": 4.0 }), true),
        (json!({ "x": -3.0, "y": -3.0, "r": 4.0 }), false),
        (json!({ "x": 1.0, "y": -1.0, "r": 4.0 }), false),
    ];

    for (point, expected) in cases {
        let response = app
            .request(Method::POST, "/points/check", Some(point.clone()), Some(&token))
            .await;
        assert_status!(response, StatusCode::OK);
        assert_eq!(response.body["result"], expected, "point {}", point);
    }

    let listed = app.request(Method::GET, "/points", None, Some(&token)).await;
    let results: Vec<bool> = listed
        .body
        .as_array()
        .unwrap()
        .iter()
        .map(|sample| sample["result"].as_bool().unwrap())
        .collect();
    assert_eq!(results, vec![true, true, false, true, false, true, false, false]);
}

#[tokio::test]
async fn test_histories_are_private() {
    let app = TestApp::new().await;
    let alice = sign_up(&app, "alice12", "secret1").await;
    let bob = sign_up(&app, "bobby12", "secret1").await;

    app.request(
        Method::POST,
        "/points/check",
        Some(json!({ "x": 0.5, "y": 0.5, "r": 2.0 })),
        Some(&alice),
    )
    .await;

    let bob_history = app.request(Method::GET, "/points", None, Some(&bob)).await;
    assert_eq!(bob_history.body, json!([]));

    let alice_history = app.request(Method::GET, "/points", None, Some(&alice)).await;
    assert_eq!(alice_history.body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_check_requires_token() {
    let app = TestApp::new().await;

    let response = app
        .request(Method::POST, "/points/check", Some(json!({ "x": 0.0, "y": 0.0, "r": 1.0 })), None)
        .await;

    assert_status!(response, StatusCode::UNAUTHORIZED);
    assert_eq!(app.db.count("samples").await, 0);
}

#[tokio::test]
async fn test_check_malformed_body() {
    let app = TestApp::new().await;
    let token = sign_up(&app, "alice12", "secret1").await;

    let missing_field = app
        .request(Method::POST, "/points/check", Some(json!({ "x": 1.0, "y": 1.0 })), Some(&token))
        .await;
    assert_status!(missing_field, StatusCode::UNPROCESSABLE_ENTITY);

    let not_json = app
        .send(
            Request::builder()
                .method(Method::POST)
                .uri("/points/check")
                .header(header::CONTENT_TYPE, "application/json")
                .header(header::AUTHORIZATION, auth_header(&token))
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await;
    assert_status!(not_json, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(app.db.count("samples").await, 0);
}

#[tokio::test]
async fn test_token_still_valid_after_signin() {
    let app = TestApp::new().await;
    let first = sign_up(&app, "alice12", "secret1").await;

    let signin = app
        .request(
            Method::POST,
            "/auth/signin",
            Some(json!({ "username": "alice12", "password": "secret1" })),
            None,
        )
        .await;
    let second = signin.body["token"].as_str().unwrap().to_string();

    for token in [&first, &second] {
        let response = app.request(Method::GET, "/points", None, Some(token)).await;
        assert_status!(response, StatusCode::OK);
    }
}
