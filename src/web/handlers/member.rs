//! Member handlers: login, logout, registration, duplicate-email check.

use std::str::FromStr;
use std::sync::Arc;

use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    Form, Json,
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use tracing::info;

use crate::config::IdentityField;
use crate::member::{JoinRequest, Role};
use crate::web::dto::{flatten, validate_join_form, DupCheckRequest, JoinForm, LoginForm};
use crate::web::error::ApiError;
use crate::web::middleware::SESSION_COOKIE;
use crate::web::view;
use crate::web::handlers::AppState;
use crate::EduboardError;

/// Localized message shown on the login-error page.
const LOGIN_ERROR_MESSAGE: &str = "아이디 또는 비밀번호를 확인해주세요";

fn login_form_body(state: &AppState, error: Option<&str>) -> String {
    let field = state.auth.identity_field.form_field();
    let error_markup = error
        .map(|e| format!("<p class=\"error\">{}</p>", view::escape(e)))
        .unwrap_or_default();
    format!(
        "<h1>Login</h1>{error_markup}\
         <form method=\"post\" action=\"/member/loginPro\">\
         <label>{field} <input type=\"text\" name=\"{field}\"></label>\
         <label>password <input type=\"password\" name=\"password\"></label>\
         <button type=\"submit\">Login</button>\
         </form>"
    )
}

/// GET /member/login - render the login page.
pub async fn login_page(State(state): State<Arc<AppState>>) -> Html<String> {
    view::page("member/login", "Login", &login_form_body(&state, None))
}

/// GET /member/login/error - render the login page with an error message.
pub async fn login_error_page(State(state): State<Arc<AppState>>) -> Html<String> {
    view::page(
        "member/login",
        "Login",
        &login_form_body(&state, Some(LOGIN_ERROR_MESSAGE)),
    )
}

/// POST /member/loginPro - credential submission.
///
/// Success establishes a session, sets the cookie, and redirects to `/`.
/// Failure redirects to the configured failure URL without hinting at which
/// part of the credentials was wrong.
pub async fn login_submit(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Response {
    let identity = match state.auth.identity_field {
        IdentityField::Email => form.email,
        IdentityField::Username => form.username,
    };

    let Some(identity) = identity else {
        return Redirect::to(&state.auth.failure_url).into_response();
    };

    match state.members.authenticate(&identity, &form.password).await {
        Ok(member) => {
            let session = state.sessions.create(member.id).await;
            info!(member_id = member.id, "login succeeded");

            let cookie = Cookie::build((SESSION_COOKIE, session.token))
                .path("/")
                .http_only(true)
                .build();
            (jar.add(cookie), Redirect::to("/")).into_response()
        }
        Err(_) => Redirect::to(&state.auth.failure_url).into_response(),
    }
}

/// POST /member/logout - destroy the session and redirect to `/`.
pub async fn logout(State(state): State<Arc<AppState>>, jar: CookieJar) -> Response {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        state.sessions.destroy(cookie.value()).await;
    }

    let removal = Cookie::build((SESSION_COOKIE, "")).path("/").build();
    (jar.remove(removal), Redirect::to("/")).into_response()
}

fn join_form_body(errors: &[String]) -> String {
    format!(
        "<h1>Join</h1>{}\
         <form method=\"post\" action=\"/member/joinPro\">\
         <label>email <input type=\"text\" name=\"email\"></label>\
         <label>name <input type=\"text\" name=\"name\"></label>\
         <label>password <input type=\"password\" name=\"password\"></label>\
         <label>role <select name=\"role\">\
         <option value=\"user\">user</option>\
         <option value=\"teacher\">teacher</option>\
         <option value=\"admin\">admin</option>\
         </select></label>\
         <button type=\"submit\">Join</button>\
         </form>",
        view::error_list(errors)
    )
}

/// GET /member/new - render the registration form.
pub async fn join_page() -> Html<String> {
    view::page("member/join", "Join", &join_form_body(&[]))
}

/// POST /member/joinPro - submit registration.
///
/// Validation failures and duplicate emails re-render the form with error
/// messages; success redirects to `/`.
pub async fn join_submit(
    State(state): State<Arc<AppState>>,
    Form(form): Form<JoinForm>,
) -> Response {
    let errors = validate_join_form(&form.email, &form.name, &form.password, form.role.as_deref());
    if !errors.is_empty() {
        let body = join_form_body(&flatten(&errors));
        return view::page("member/join", "Join", &body).into_response();
    }

    let role = form
        .role
        .as_deref()
        .filter(|r| !r.is_empty())
        .and_then(|r| Role::from_str(r).ok())
        .unwrap_or_default();

    let request = JoinRequest::new(form.email, form.password, form.name).with_role(role);
    match state.members.register(request).await {
        Ok(_) => Redirect::to("/").into_response(),
        Err(EduboardError::DuplicateEmail(email)) => {
            let body = join_form_body(&[format!("email already registered: {email}")]);
            view::page("member/join", "Join", &body).into_response()
        }
        Err(e) => {
            let body = join_form_body(&[e.to_string()]);
            view::page("member/join", "Join", &body).into_response()
        }
    }
}

/// POST /member/dup - duplicate-email check.
///
/// Safe to call unauthenticated; pure existence check.
pub async fn dup_check(
    State(state): State<Arc<AppState>>,
    Json(req): Json<DupCheckRequest>,
) -> Result<Json<bool>, ApiError> {
    let duplicate = state.members.is_duplicate_email(&req.email).await?;
    Ok(Json(duplicate))
}
