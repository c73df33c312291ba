//! Session authentication middleware.
//!
//! Runs ahead of routing dispatch for every request: resolves the current
//! principal from the session cookie, attaches it to the request, and
//! enforces the path-pattern access policy. A denied request short-circuits
//! to a login redirect before any handler executes.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use tracing::debug;

use crate::auth::{AccessDecision, Principal};
use crate::web::handlers::AppState;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "EDUSESSION";

/// The principal resolved for the current request, if any.
///
/// Inserted into request extensions by [`session_guard`]; handlers read it
/// through `Extension<CurrentUser>`.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub Option<Principal>);

/// Resolve the session cookie to a principal.
///
/// Anything short of a live session backed by an existing member resolves
/// to `None` - an absent cookie, an expired or unknown token, or a member
/// row that has since disappeared.
pub async fn resolve_principal(state: &AppState, jar: &CookieJar) -> Option<Principal> {
    let token = jar.get(SESSION_COOKIE)?.value().to_string();
    let session = state.sessions.resolve(&token).await?;

    let member = state.members.find_by_id(session.member_id).await.ok()??;
    Some(Principal::from_member(&member))
}

/// Request guard composed ahead of the routing layer.
pub async fn session_guard(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Response {
    let principal = resolve_principal(&state, &jar).await;
    let path = request.uri().path().to_string();

    let decision = state.policy.evaluate(&path, principal.as_ref());
    request.extensions_mut().insert(CurrentUser(principal));

    match decision {
        AccessDecision::Permit => next.run(request).await,
        AccessDecision::RequireLogin => {
            debug!(%path, "anonymous request to protected path, redirecting to login");
            Redirect::to("/member/login").into_response()
        }
        AccessDecision::Forbidden => {
            debug!(%path, "insufficient role for path, redirecting to login");
            Redirect::to("/member/login").into_response()
        }
    }
}
