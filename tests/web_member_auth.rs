//! Integration tests for membership: registration, duplicate-email
//! validation, login/logout, and both identity-field variants.

mod common;

use axum::http::header::{LOCATION, SET_COOKIE};
use common::{create_test_server, create_test_server_with, login, register_member, with_session};
use eduboard::config::{AuthConfig, IdentityField};
use eduboard::member::MemberRepository;
use serde_json::json;

#[tokio::test]
async fn test_join_page_renders() {
    let (server, _state) = create_test_server().await;

    let response = server.get("/member/new").await;
    assert_eq!(response.status_code(), 200);

    let html = response.text();
    assert!(html.contains("data-view=\"member/join\""));
    assert!(html.contains("name=\"email\""));
}

#[tokio::test]
async fn test_join_redirects_home() {
    let (server, _state) = create_test_server().await;

    let response = server
        .post("/member/joinPro")
        .form(&json!({
            "email": "a@x.com",
            "name": "Alice",
            "password": "password1",
        }))
        .await;

    assert_eq!(response.status_code(), 303);
    assert_eq!(
        response.headers().get(LOCATION).unwrap().to_str().unwrap(),
        "/"
    );
}

#[tokio::test]
async fn test_join_invalid_form_rerenders_with_errors() {
    let (server, state) = create_test_server().await;

    let response = server
        .post("/member/joinPro")
        .form(&json!({
            "email": "not-an-email",
            "name": "",
            "password": "pw",
        }))
        .await;

    // Re-render of the input form, not a redirect
    assert_eq!(response.status_code(), 200);
    let html = response.text();
    assert!(html.contains("data-view=\"member/join\""));
    assert!(html.contains("class=\"errors\""));

    // No member was written
    let repo = MemberRepository::new(state.db.pool());
    assert_eq!(repo.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_duplicate_email_aborts_registration() {
    let (server, state) = create_test_server().await;

    register_member(&server, "a@x.com", "pw1pw1pw1", "Alice").await;

    // Same email again with a different password
    let response = server
        .post("/member/joinPro")
        .form(&json!({
            "email": "a@x.com",
            "name": "Imposter",
            "password": "pw2pw2pw2",
        }))
        .await;

    assert_eq!(response.status_code(), 200);
    assert!(response.text().contains("already registered"));

    // Exactly one row for that email
    let repo = MemberRepository::new(state.db.pool());
    assert_eq!(repo.count_by_email("a@x.com").await.unwrap(), 1);
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_stored_password_is_hashed() {
    let (server, state) = create_test_server().await;

    register_member(&server, "a@x.com", "password1", "Alice").await;

    let repo = MemberRepository::new(state.db.pool());
    let member = repo.get_by_email("a@x.com").await.unwrap().unwrap();
    assert_ne!(member.password, "password1");
    assert!(eduboard::verify_password("password1", &member.password).is_ok());
}

#[tokio::test]
async fn test_dup_check_endpoint() {
    let (server, _state) = create_test_server().await;

    let response = server
        .post("/member/dup")
        .json(&json!({ "email": "a@x.com" }))
        .await;
    assert_eq!(response.status_code(), 200);
    let duplicate: bool = response.json();
    assert!(!duplicate);

    register_member(&server, "a@x.com", "password1", "Alice").await;

    let response = server
        .post("/member/dup")
        .json(&json!({ "email": "a@x.com" }))
        .await;
    let duplicate: bool = response.json();
    assert!(duplicate);
}

#[tokio::test]
async fn test_login_page_and_error_page() {
    let (server, _state) = create_test_server().await;

    let response = server.get("/member/login").await;
    assert_eq!(response.status_code(), 200);
    let html = response.text();
    assert!(html.contains("data-view=\"member/login\""));
    assert!(html.contains("name=\"email\""));
    assert!(!html.contains("class=\"error\""));

    let response = server.get("/member/login/error").await;
    assert_eq!(response.status_code(), 200);
    assert!(response.text().contains("아이디 또는 비밀번호를 확인해주세요"));
}

#[tokio::test]
async fn test_login_success_sets_session_cookie() {
    let (server, _state) = create_test_server().await;

    register_member(&server, "a@x.com", "password1", "Alice").await;

    let response = server
        .post("/member/loginPro")
        .form(&json!({
            "email": "a@x.com",
            "password": "password1",
        }))
        .await;

    assert_eq!(response.status_code(), 303);
    assert_eq!(
        response.headers().get(LOCATION).unwrap().to_str().unwrap(),
        "/"
    );

    let set_cookie = response
        .headers()
        .get(SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(set_cookie.starts_with("EDUSESSION="));
    assert!(set_cookie.contains("HttpOnly"));
}

#[tokio::test]
async fn test_login_failure_redirects_to_failure_url() {
    let (server, _state) = create_test_server().await;

    register_member(&server, "a@x.com", "password1", "Alice").await;

    // Wrong password
    let response = server
        .post("/member/loginPro")
        .form(&json!({
            "email": "a@x.com",
            "password": "wrong-password",
        }))
        .await;
    assert_eq!(response.status_code(), 303);
    assert_eq!(
        response.headers().get(LOCATION).unwrap().to_str().unwrap(),
        "/member/login/error"
    );

    // Unknown email: indistinguishable from a wrong password
    let response = server
        .post("/member/loginPro")
        .form(&json!({
            "email": "nobody@x.com",
            "password": "password1",
        }))
        .await;
    assert_eq!(response.status_code(), 303);
    assert_eq!(
        response.headers().get(LOCATION).unwrap().to_str().unwrap(),
        "/member/login/error"
    );
}

#[tokio::test]
async fn test_index_reflects_login_state() {
    let (server, _state) = create_test_server().await;

    register_member(&server, "a@x.com", "password1", "Alice").await;

    let anonymous = server.get("/").await.text();
    assert!(anonymous.contains("Login"));
    assert!(!anonymous.contains("Welcome back"));

    let cookie = login(&server, "a@x.com", "password1").await;
    let logged_in = with_session(server.get("/"), &cookie).await.text();
    assert!(logged_in.contains("Welcome back, Alice"));
}

#[tokio::test]
async fn test_logout_destroys_session() {
    let (server, state) = create_test_server().await;

    register_member(&server, "a@x.com", "password1", "Alice").await;
    let cookie = login(&server, "a@x.com", "password1").await;
    assert_eq!(state.sessions.len().await, 1);

    let response = with_session(server.post("/member/logout"), &cookie).await;
    assert_eq!(response.status_code(), 303);
    assert_eq!(
        response.headers().get(LOCATION).unwrap().to_str().unwrap(),
        "/"
    );
    assert_eq!(state.sessions.len().await, 0);

    // The old token no longer grants access to the gated detail page
    server
        .post("/api/register")
        .form(&json!({ "title": "t1", "content": "c1", "writer": "u1" }))
        .await;
    let response = with_session(server.get("/board/read").add_query_param("bno", 1), &cookie).await;
    assert_eq!(response.status_code(), 303);
    assert_eq!(
        response.headers().get(LOCATION).unwrap().to_str().unwrap(),
        "/member/login"
    );
}

#[tokio::test]
async fn test_username_identity_variant() {
    let auth = AuthConfig {
        identity_field: IdentityField::Username,
        ..AuthConfig::default()
    };
    let (server, _state) = create_test_server_with(auth).await;

    // Login page binds the username field in this variant
    let html = server.get("/member/login").await.text();
    assert!(html.contains("name=\"username\""));

    register_member(&server, "a@x.com", "password1", "alice").await;

    // Email is not the identity here
    let response = server
        .post("/member/loginPro")
        .form(&json!({ "email": "a@x.com", "password": "password1" }))
        .await;
    assert_eq!(
        response.headers().get(LOCATION).unwrap().to_str().unwrap(),
        "/member/login/error"
    );

    // The display name is
    let response = server
        .post("/member/loginPro")
        .form(&json!({ "username": "alice", "password": "password1" }))
        .await;
    assert_eq!(
        response.headers().get(LOCATION).unwrap().to_str().unwrap(),
        "/"
    );
    assert!(response.headers().get(SET_COOKIE).is_some());
}
