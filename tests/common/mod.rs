//! Test helpers for web integration tests.
//!
//! Builds the full router over an in-memory database and provides small
//! helpers for registering members and logging in through the HTTP surface.

#![allow(dead_code)]

use std::sync::Arc;

use axum::http::header::{HeaderValue, COOKIE, SET_COOKIE};
use axum_test::{TestRequest, TestServer};
use eduboard::config::AuthConfig;
use eduboard::web::{create_router, AppState};
use eduboard::Database;
use serde_json::json;

/// Build application state over a fresh in-memory database.
pub async fn create_test_state(auth: AuthConfig) -> Arc<AppState> {
    let db = Database::open_in_memory()
        .await
        .expect("Failed to create test database");
    AppState::assemble(auth, db)
}

/// Create a test server with default (email-identity) configuration.
pub async fn create_test_server() -> (TestServer, Arc<AppState>) {
    create_test_server_with(AuthConfig::default()).await
}

/// Create a test server with a custom auth configuration.
pub async fn create_test_server_with(auth: AuthConfig) -> (TestServer, Arc<AppState>) {
    let state = create_test_state(auth).await;
    let server =
        TestServer::new(create_router(state.clone())).expect("Failed to create test server");
    (server, state)
}

/// Register a member through the page surface.
pub async fn register_member(server: &TestServer, email: &str, password: &str, name: &str) {
    let response = server
        .post("/member/joinPro")
        .form(&json!({
            "email": email,
            "name": name,
            "password": password,
        }))
        .await;
    assert_eq!(response.status_code(), 303, "registration should redirect");
}

/// Register a member with an explicit role.
pub async fn register_member_with_role(
    server: &TestServer,
    email: &str,
    password: &str,
    name: &str,
    role: &str,
) {
    let response = server
        .post("/member/joinPro")
        .form(&json!({
            "email": email,
            "name": name,
            "password": password,
            "role": role,
        }))
        .await;
    assert_eq!(response.status_code(), 303, "registration should redirect");
}

/// Log in through the form endpoint and return the session cookie pair
/// (`EDUSESSION=<token>`), ready for a `Cookie` request header.
pub async fn login(server: &TestServer, email: &str, password: &str) -> String {
    let response = server
        .post("/member/loginPro")
        .form(&json!({
            "email": email,
            "password": password,
        }))
        .await;
    assert_eq!(response.status_code(), 303, "login should redirect");

    response
        .headers()
        .get(SET_COOKIE)
        .expect("login should set a session cookie")
        .to_str()
        .expect("cookie header should be valid UTF-8")
        .split(';')
        .next()
        .expect("cookie header should have a name=value pair")
        .to_string()
}

/// Attach a session cookie to a request.
pub fn with_session(request: TestRequest, cookie_pair: &str) -> TestRequest {
    request.add_header(
        COOKIE,
        HeaderValue::from_str(cookie_pair).expect("valid cookie header"),
    )
}
