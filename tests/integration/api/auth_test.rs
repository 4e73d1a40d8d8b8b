//! Authentication API integration tests
//!
//! Signup, login and the token gate on protected routes.

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use pretty_assertions::assert_eq;
use serde_json::json;
use storefront::shared::{ErrorResponse, TokenResponse};

use crate::common::{auth_header, create_test_user, TestApp};

#[tokio::test]
async fn test_home() {
    let app = TestApp::new().await;

    let response = app.server.get("/").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.text(), "Welcome to the Storefront API!");
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::new().await;

    let response = app.server.get("/health").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<serde_json::Value>(), json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_signup_success() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/signup")
        .json(&json!({ "name": "Ada", "username": "ada", "password": "password123" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "User created successfully");
    assert!(body["id"].as_i64().is_some());
}

#[tokio::test]
async fn test_signup_stores_hash_not_password() {
    let app = TestApp::new().await;
    create_test_user(&app, "ada", "password123").await;

    let stored: String = sqlx::query_scalar("SELECT password_hash FROM users WHERE username = 'ada'")
        .fetch_one(&app.pool)
        .await
        .unwrap();

    assert_ne!(stored, "password123");
    assert!(stored.starts_with("$2b$"));
}

#[tokio::test]
async fn test_signup_missing_field() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/signup")
        .json(&json!({ "name": "Ada", "password": "password123" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<ErrorResponse>().error, "Missing required field: username");
    assert_eq!(app.count("users").await, 0);
}

#[tokio::test]
async fn test_signup_malformed_body() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/signup")
        .content_type("application/json")
        .bytes("{ not json".into())
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert!(!response.json::<ErrorResponse>().error.is_empty());
}

#[tokio::test]
async fn test_signup_duplicate_username() {
    let app = TestApp::new().await;
    create_test_user(&app, "ada", "password123").await;

    let response = app
        .server
        .post("/signup")
        .json(&json!({ "name": "Other Ada", "username": "ada", "password": "different" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<ErrorResponse>().error, "Username already exists");
    assert_eq!(app.count("users").await, 1);
}

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::new().await;
    let user = create_test_user(&app, "ada", "password123").await;

    let response = app
        .server
        .post("/login")
        .json(&json!({ "username": "ada", "password": "password123" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let token = response.json::<TokenResponse>().token;
    assert_eq!(app.state.sessions.verify_token(&token), Ok(user.id));
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = TestApp::new().await;
    create_test_user(&app, "ada", "password123").await;

    let response = app
        .server
        .post("/login")
        .json(&json!({ "username": "ada", "password": "wrongpassword" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(response.json::<ErrorResponse>().error, "Invalid username or password");
}

#[tokio::test]
async fn test_login_unknown_user() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/login")
        .json(&json!({ "username": "nobody", "password": "password123" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(response.json::<ErrorResponse>().error, "Invalid username or password");
}

#[tokio::test]
async fn test_login_missing_password() {
    let app = TestApp::new().await;

    let response = app.server.post("/login").json(&json!({ "username": "ada" })).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<ErrorResponse>().error, "Missing required field: password");
}

#[tokio::test]
async fn test_protected_route_without_token() {
    let app = TestApp::new().await;

    let response = app.server.get("/products").await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(response.json::<ErrorResponse>().error, "Token is missing");
}

#[tokio::test]
async fn test_protected_route_with_invalid_token() {
    let app = TestApp::new().await;
    let (name, value) = auth_header("not.a.token");

    let response = app.server.get("/products").add_header(name, value).await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(response.json::<ErrorResponse>().error, "Invalid token");
}

#[tokio::test]
async fn test_protected_route_with_expired_token() {
    let app = TestApp::new().await;
    let user = create_test_user(&app, "ada", "password123").await;
    let issued_at = Utc::now() - app.state.sessions.ttl() - Duration::seconds(5);
    let expired = app.state.sessions.create_token_at(user.id, issued_at).unwrap();
    let (name, value) = auth_header(&expired);

    let response = app.server.get("/products").add_header(name, value).await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(response.json::<ErrorResponse>().error, "Invalid token");
}

#[tokio::test]
async fn test_rejected_write_never_reaches_store() {
    let app = TestApp::new().await;
    let (name, value) = auth_header("forged");

    let response = app
        .server
        .post("/products")
        .add_header(name, value)
        .json(&json!({ "pname": "Widget", "description": "d", "price": 1.0, "stock": 1 }))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(app.count("products").await, 0);
}

#[tokio::test]
async fn test_bearer_prefix_accepted() {
    let app = TestApp::new().await;
    let user = create_test_user(&app, "ada", "password123").await;
    let (name, value) = auth_header(&format!("Bearer {}", user.token));

    let response = app.server.get("/products").add_header(name, value).await;

    assert_eq!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = TestApp::new().await;

    let response = app.server.get("/does-not-exist").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(response.json::<ErrorResponse>().error, "Not found");
}

#[tokio::test]
async fn test_signup_rejects_over_long_password() {
    let app = TestApp::new().await;
    let password = "a".repeat(72);

    let response = app
        .server
        .post("/signup")
        .json(&json!({ "name": "Ada", "username": "ada", "password": password }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<ErrorResponse>().error, "Password must be at most 71 bytes");
    assert_eq!(app.count("users").await, 0);
}

#[tokio::test]
async fn test_login_with_shared_prefix_rejected() {
    let app = TestApp::new().await;
    let prefix = "a".repeat(71);
    create_test_user(&app, "ada", &prefix).await;

    let response = app
        .server
        .post("/login")
        .json(&json!({ "username": "ada", "password": format!("{}WRONG", prefix) }))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(response.json::<ErrorResponse>().error, "Invalid username or password");
}

#[tokio::test]
async fn test_unknown_user_hash_uses_configured_cost() {
    let app = TestApp::new().await;

    assert!(app.state.unknown_user_hash.starts_with("$2b$04$"));
    assert_eq!(app.state.unknown_user_hash.len(), 60);
}

#[tokio::test]
async fn test_wrong_method_is_json() {
    let app = TestApp::new().await;
    let user = create_test_user(&app, "ada", "password123").await;
    let (name, value) = auth_header(&user.token);

    let response = app.server.patch("/products").add_header(name, value).await;

    assert_eq!(response.status_code(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(response.json::<ErrorResponse>().error, "Method not allowed");
}
