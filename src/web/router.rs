//! Router configuration for both web surfaces.

use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use super::handlers::{
    api_list, api_modify, api_read, api_register, api_remove, dup_check, index, join_page,
    join_submit, list_page, login_error_page, login_page, login_submit, logout, modify_page,
    modify_submit, read_page, register_page, remove_page, write_page, AppState,
};
use super::middleware::session_guard;

/// Create the application router.
///
/// The session guard layer runs ahead of every route: it resolves the
/// principal from the cookie and applies the path-pattern access policy
/// before dispatch.
pub fn create_router(state: Arc<AppState>) -> Router {
    // JSON API mirror of the board operations
    let api_routes = Router::new()
        .route("/list", get(api_list))
        .route("/read", get(api_read))
        .route("/register", post(api_register))
        .route("/modify", post(api_modify))
        .route("/remove", post(api_remove));

    // Server-rendered board pages
    let board_routes = Router::new()
        .route("/", get(list_page))
        .route("/list", get(list_page))
        .route("/read", get(read_page))
        .route("/write", get(write_page).post(register_page))
        .route("/register", post(register_page))
        .route("/modify", get(modify_page).post(modify_submit))
        .route("/remove", post(remove_page));

    // Membership pages and endpoints
    let member_routes = Router::new()
        .route("/login", get(login_page))
        .route("/login/error", get(login_error_page))
        .route("/loginPro", post(login_submit))
        .route("/logout", post(logout))
        .route("/new", get(join_page))
        .route("/joinPro", post(join_submit))
        .route("/dup", post(dup_check));

    Router::new()
        .route("/", get(index))
        .nest("/api", api_routes)
        .nest("/board", board_routes)
        .nest("/member", member_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn_with_state(state.clone(), session_guard)),
        )
        .with_state(state)
}

/// Create a health check router.
pub fn create_health_router() -> Router {
    Router::new().route("/health", get(health_check))
}

/// Health check handler.
async fn health_check() -> &'static str {
    "OK"
}
