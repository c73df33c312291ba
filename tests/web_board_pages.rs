//! Integration tests for the server-rendered board pages, including the
//! role-gated detail view.

mod common;

use axum::http::header::LOCATION;
use common::{
    create_test_server, login, register_member, register_member_with_role, with_session,
};
use serde_json::json;

async fn create_post(server: &axum_test::TestServer, title: &str, content: &str, writer: &str) {
    let response = server
        .post("/board/register")
        .form(&json!({
            "title": title,
            "content": content,
            "writer": writer,
        }))
        .await;
    assert_eq!(response.status_code(), 303);
}

#[tokio::test]
async fn test_board_list_open_to_anonymous() {
    let (server, _state) = create_test_server().await;

    for path in ["/board", "/board/list"] {
        let response = server.get(path).await;
        assert_eq!(response.status_code(), 200, "GET {path}");
        assert!(response.text().contains("data-view=\"board/list\""));
    }
}

#[tokio::test]
async fn test_board_list_shows_posts() {
    let (server, _state) = create_test_server().await;

    create_post(&server, "hello board", "first content", "writer1").await;

    let html = server.get("/board/list").await.text();
    assert!(html.contains("hello board"));
    assert!(html.contains("writer1"));
    assert!(html.contains("/board/read?bno=1"));
}

#[tokio::test]
async fn test_board_read_redirects_anonymous_to_login() {
    let (server, _state) = create_test_server().await;

    create_post(&server, "t1", "c1", "u1").await;

    let response = server.get("/board/read").add_query_param("bno", 1).await;
    assert_eq!(response.status_code(), 303);
    assert_eq!(
        response.headers().get(LOCATION).unwrap().to_str().unwrap(),
        "/member/login"
    );
}

#[tokio::test]
async fn test_board_read_allows_authenticated_member() {
    let (server, _state) = create_test_server().await;

    create_post(&server, "gated title", "gated content", "u1").await;
    register_member(&server, "a@x.com", "password1", "Alice").await;
    let cookie = login(&server, "a@x.com", "password1").await;

    let response = with_session(server.get("/board/read").add_query_param("bno", 1), &cookie).await;
    assert_eq!(response.status_code(), 200);

    let html = response.text();
    assert!(html.contains("data-view=\"board/read\""));
    assert!(html.contains("gated title"));
    assert!(html.contains("gated content"));
}

#[tokio::test]
async fn test_board_read_allows_every_role() {
    let (server, _state) = create_test_server().await;

    create_post(&server, "t1", "c1", "u1").await;

    for (email, role) in [
        ("user@x.com", "user"),
        ("teacher@x.com", "teacher"),
        ("admin@x.com", "admin"),
    ] {
        register_member_with_role(&server, email, "password1", email, role).await;
        let cookie = login(&server, email, "password1").await;

        let response =
            with_session(server.get("/board/read").add_query_param("bno", 1), &cookie).await;
        assert_eq!(response.status_code(), 200, "role {role} should read");
    }
}

#[tokio::test]
async fn test_board_read_absent_is_not_found() {
    let (server, _state) = create_test_server().await;

    register_member(&server, "a@x.com", "password1", "Alice").await;
    let cookie = login(&server, "a@x.com", "password1").await;

    let response =
        with_session(server.get("/board/read").add_query_param("bno", 99), &cookie).await;
    assert_eq!(response.status_code(), 404);
}

#[tokio::test]
async fn test_board_write_form_and_submit() {
    let (server, _state) = create_test_server().await;

    let response = server.get("/board/write").await;
    assert_eq!(response.status_code(), 200);
    assert!(response.text().contains("data-view=\"board/write\""));

    let response = server
        .post("/board/register")
        .form(&json!({
            "title": "t1",
            "content": "c1",
            "writer": "u1",
        }))
        .await;
    assert_eq!(response.status_code(), 303);
    assert_eq!(
        response.headers().get(LOCATION).unwrap().to_str().unwrap(),
        "/board/list"
    );
}

#[tokio::test]
async fn test_board_register_invalid_rerenders_form() {
    let (server, _state) = create_test_server().await;

    let response = server
        .post("/board/register")
        .form(&json!({
            "title": "",
            "content": "",
            "writer": "u1",
        }))
        .await;

    assert_eq!(response.status_code(), 200);
    let html = response.text();
    assert!(html.contains("data-view=\"board/write\""));
    assert!(html.contains("class=\"errors\""));

    // Nothing was created
    let html = server.get("/board/list").await.text();
    assert!(!html.contains("/board/read?bno=1"));
}

#[tokio::test]
async fn test_board_modify_flow() {
    let (server, _state) = create_test_server().await;

    create_post(&server, "t1", "c1", "u1").await;

    // Prefilled form
    let response = server.get("/board/modify").add_query_param("bno", 1).await;
    assert_eq!(response.status_code(), 200);
    let html = response.text();
    assert!(html.contains("data-view=\"board/modify\""));
    assert!(html.contains("value=\"t1\""));

    // Submit redirects back to the detail page
    let response = server
        .post("/board/modify")
        .form(&json!({ "bno": 1, "title": "t2", "content": "c2" }))
        .await;
    assert_eq!(response.status_code(), 303);
    assert_eq!(
        response.headers().get(LOCATION).unwrap().to_str().unwrap(),
        "/board/read?bno=1"
    );

    // The change is visible through the API mirror
    let post: serde_json::Value = server
        .get("/api/read")
        .add_query_param("bno", 1)
        .await
        .json();
    assert_eq!(post["title"], "t2");
    assert_eq!(post["writer"], "u1");
}

#[tokio::test]
async fn test_board_modify_absent_is_not_found() {
    let (server, _state) = create_test_server().await;

    let response = server.get("/board/modify").add_query_param("bno", 5).await;
    assert_eq!(response.status_code(), 404);

    let response = server
        .post("/board/modify")
        .form(&json!({ "bno": 5, "title": "t2", "content": "c2" }))
        .await;
    assert_eq!(response.status_code(), 404);
}

#[tokio::test]
async fn test_board_modify_invalid_rerenders_with_submission() {
    let (server, _state) = create_test_server().await;

    create_post(&server, "t1", "c1", "u1").await;

    let response = server
        .post("/board/modify")
        .form(&json!({ "bno": 1, "title": "", "content": "still here" }))
        .await;
    assert_eq!(response.status_code(), 200);

    let html = response.text();
    assert!(html.contains("class=\"errors\""));
    assert!(html.contains("still here"));

    // Store untouched
    let post: serde_json::Value = server
        .get("/api/read")
        .add_query_param("bno", 1)
        .await
        .json();
    assert_eq!(post["title"], "t1");
    assert_eq!(post["content"], "c1");
}

#[tokio::test]
async fn test_board_remove_flow() {
    let (server, _state) = create_test_server().await;

    create_post(&server, "t1", "c1", "u1").await;

    let response = server.post("/board/remove").form(&json!({ "bno": 1 })).await;
    assert_eq!(response.status_code(), 303);
    assert_eq!(
        response.headers().get(LOCATION).unwrap().to_str().unwrap(),
        "/board/list"
    );

    // Removing again is still a redirect, not an error
    let response = server.post("/board/remove").form(&json!({ "bno": 1 })).await;
    assert_eq!(response.status_code(), 303);
}

#[tokio::test]
async fn test_both_surfaces_share_state() {
    let (server, _state) = create_test_server().await;

    // Created through the page surface, visible through the API
    create_post(&server, "page post", "page content", "u1").await;
    let posts: Vec<serde_json::Value> = server.get("/api/list").await.json();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0]["title"], "page post");

    // Created through the API, visible on the page
    server
        .post("/api/register")
        .form(&json!({ "title": "api post", "content": "api content", "writer": "u2" }))
        .await;
    let html = server.get("/board/list").await.text();
    assert!(html.contains("page post"));
    assert!(html.contains("api post"));
}
