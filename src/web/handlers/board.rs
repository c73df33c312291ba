//! Board handlers for both surfaces.
//!
//! The page handlers and the `/api` handlers run the same validation and
//! the same service calls; they differ only in how the result is encoded.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Extension, Form, Json,
};

use crate::board::{BoardPostDto, NewBoardPost};
use crate::auth::require_user;
use crate::web::dto::{
    flatten, validate_modify_form, validate_post_form, BnoQuery, ModifyForm, PostForm, RemoveForm,
};
use crate::web::error::ApiError;
use crate::web::handlers::AppState;
use crate::web::middleware::CurrentUser;
use crate::web::view;
use crate::EduboardError;

// ============================================================================
// JSON API surface
// ============================================================================

/// GET /api/list - list all posts.
pub async fn api_list(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<BoardPostDto>>, ApiError> {
    let posts = state.board.find_all().await?;
    Ok(Json(posts))
}

/// GET /api/read?bno= - fetch one post.
///
/// An absent post number answers JSON `null`, not an error status.
pub async fn api_read(
    State(state): State<Arc<AppState>>,
    Query(query): Query<BnoQuery>,
) -> Result<Json<Option<BoardPostDto>>, ApiError> {
    match state.board.find_by_bno(query.bno).await {
        Ok(post) => Ok(Json(Some(post))),
        Err(EduboardError::NotFound(_)) => Ok(Json(None)),
        Err(e) => Err(e.into()),
    }
}

/// POST /api/register - create a post, returning the generated number.
pub async fn api_register(
    State(state): State<Arc<AppState>>,
    Form(form): Form<PostForm>,
) -> Result<Json<i64>, ApiError> {
    let errors = validate_post_form(&form.title, &form.content, &form.writer);
    if !errors.is_empty() {
        return Err(ApiError::validation(errors));
    }

    let bno = state
        .board
        .register(NewBoardPost::new(form.title, form.content, form.writer))
        .await?;
    Ok(Json(bno))
}

/// POST /api/modify - update a post, returning the updated post.
pub async fn api_modify(
    State(state): State<Arc<AppState>>,
    Form(form): Form<ModifyForm>,
) -> Result<Json<BoardPostDto>, ApiError> {
    let errors = validate_modify_form(&form.title, &form.content);
    if !errors.is_empty() {
        return Err(ApiError::validation(errors));
    }

    let post = state
        .board
        .modify(form.bno, &form.title, &form.content)
        .await?;
    Ok(Json(post))
}

/// POST /api/remove - delete a post.
///
/// Redirects to the list; removal of an absent number is still a redirect.
pub async fn api_remove(
    State(state): State<Arc<AppState>>,
    Form(form): Form<RemoveForm>,
) -> Result<Redirect, ApiError> {
    state.board.remove(form.bno).await?;
    Ok(Redirect::to("/board/list"))
}

// ============================================================================
// Page surface
// ============================================================================

fn not_found_page() -> Response {
    (
        StatusCode::NOT_FOUND,
        view::page("board/notfound", "Not Found", "<p>No such post.</p>"),
    )
        .into_response()
}

fn post_row(post: &BoardPostDto) -> String {
    format!(
        "<tr><td>{}</td><td><a href=\"/board/read?bno={}\">{}</a></td><td>{}</td><td>{}</td></tr>",
        post.bno,
        post.bno,
        view::escape(&post.title),
        view::escape(&post.writer),
        view::escape(&post.regdate),
    )
}

/// GET /board, /board/list - render the post list.
pub async fn list_page(State(state): State<Arc<AppState>>) -> Result<Html<String>, Response> {
    let posts = state
        .board
        .find_all()
        .await
        .map_err(|e| ApiError::from(e).into_response())?;

    let rows: String = posts.iter().map(post_row).collect();
    let body = format!(
        "<h1>Board</h1>\
         <table><tr><th>bno</th><th>title</th><th>writer</th><th>regdate</th></tr>{rows}</table>\
         <p><a href=\"/board/write\">Write</a></p>"
    );
    Ok(view::page("board/list", "Board", &body))
}

/// GET /board/read?bno= - render a post detail page.
///
/// Role-gated: any authenticated member (USER/ADMIN/TEACHER). The path
/// policy already gates this route; this guard is the second, per-handler
/// enforcement layer.
pub async fn read_page(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(principal)): Extension<CurrentUser>,
    Query(query): Query<BnoQuery>,
) -> Response {
    if require_user(principal.as_ref()).is_err() {
        return Redirect::to("/member/login").into_response();
    }

    match state.board.find_by_bno(query.bno).await {
        Ok(post) => {
            let body = format!(
                "<h1>{}</h1>\
                 <dl><dt>bno</dt><dd>{}</dd>\
                 <dt>writer</dt><dd>{}</dd>\
                 <dt>regdate</dt><dd>{}</dd>\
                 <dt>moddate</dt><dd>{}</dd></dl>\
                 <div class=\"content\">{}</div>\
                 <p><a href=\"/board/modify?bno={}\">Modify</a> <a href=\"/board/list\">List</a></p>",
                view::escape(&post.title),
                post.bno,
                view::escape(&post.writer),
                view::escape(&post.regdate),
                view::escape(&post.moddate),
                view::escape(&post.content),
                post.bno,
            );
            view::page("board/read", "Board", &body).into_response()
        }
        Err(EduboardError::NotFound(_)) => not_found_page(),
        Err(e) => ApiError::from(e).into_response(),
    }
}

fn write_form_body(errors: &[String]) -> String {
    format!(
        "<h1>Write</h1>{}\
         <form method=\"post\" action=\"/board/register\">\
         <label>title <input type=\"text\" name=\"title\"></label>\
         <label>writer <input type=\"text\" name=\"writer\"></label>\
         <label>content <textarea name=\"content\"></textarea></label>\
         <button type=\"submit\">Register</button>\
         </form>",
        view::error_list(errors)
    )
}

/// GET /board/write - render the write form.
pub async fn write_page() -> Html<String> {
    view::page("board/write", "Write", &write_form_body(&[]))
}

/// POST /board/register - submit a new post.
pub async fn register_page(
    State(state): State<Arc<AppState>>,
    Form(form): Form<PostForm>,
) -> Response {
    let errors = validate_post_form(&form.title, &form.content, &form.writer);
    if !errors.is_empty() {
        let body = write_form_body(&flatten(&errors));
        return view::page("board/write", "Write", &body).into_response();
    }

    match state
        .board
        .register(NewBoardPost::new(form.title, form.content, form.writer))
        .await
    {
        Ok(_) => Redirect::to("/board/list").into_response(),
        Err(e) => {
            let body = write_form_body(&[e.to_string()]);
            view::page("board/write", "Write", &body).into_response()
        }
    }
}

fn modify_form_body(post: &BoardPostDto, errors: &[String]) -> String {
    format!(
        "<h1>Modify</h1>{}\
         <form method=\"post\" action=\"/board/modify\">\
         <input type=\"hidden\" name=\"bno\" value=\"{}\">\
         <label>title <input type=\"text\" name=\"title\" value=\"{}\"></label>\
         <label>content <textarea name=\"content\">{}</textarea></label>\
         <p>writer: {}</p>\
         <button type=\"submit\">Modify</button>\
         </form>",
        view::error_list(errors),
        post.bno,
        view::escape(&post.title),
        view::escape(&post.content),
        view::escape(&post.writer),
    )
}

/// GET /board/modify?bno= - render the modify form prefilled.
pub async fn modify_page(
    State(state): State<Arc<AppState>>,
    Query(query): Query<BnoQuery>,
) -> Response {
    match state.board.find_by_bno(query.bno).await {
        Ok(post) => view::page("board/modify", "Modify", &modify_form_body(&post, &[]))
            .into_response(),
        Err(EduboardError::NotFound(_)) => not_found_page(),
        Err(e) => ApiError::from(e).into_response(),
    }
}

/// POST /board/modify - submit a modification.
pub async fn modify_submit(
    State(state): State<Arc<AppState>>,
    Form(form): Form<ModifyForm>,
) -> Response {
    let errors = validate_modify_form(&form.title, &form.content);
    if !errors.is_empty() {
        // Re-render with the submitted values so nothing typed is lost
        match state.board.find_by_bno(form.bno).await {
            Ok(mut post) => {
                post.title = form.title;
                post.content = form.content;
                let body = modify_form_body(&post, &flatten(&errors));
                return view::page("board/modify", "Modify", &body).into_response();
            }
            Err(_) => return not_found_page(),
        }
    }

    match state.board.modify(form.bno, &form.title, &form.content).await {
        Ok(post) => Redirect::to(&format!("/board/read?bno={}", post.bno)).into_response(),
        Err(EduboardError::NotFound(_)) => not_found_page(),
        Err(e) => ApiError::from(e).into_response(),
    }
}

/// POST /board/remove - delete a post and return to the list.
pub async fn remove_page(
    State(state): State<Arc<AppState>>,
    Form(form): Form<RemoveForm>,
) -> Response {
    match state.board.remove(form.bno).await {
        Ok(()) => Redirect::to("/board/list").into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}
