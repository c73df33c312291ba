//! Index page handler.

use axum::{response::Html, Extension};

use crate::web::middleware::CurrentUser;
use crate::web::view;

/// GET / - index page.
pub async fn index(Extension(CurrentUser(principal)): Extension<CurrentUser>) -> Html<String> {
    let body = match principal {
        Some(p) => format!(
            "<h1>eduboard</h1>\
             <p>Welcome back, {} ({}).</p>\
             <p><a href=\"/board/list\">Board</a></p>\
             <form method=\"post\" action=\"/member/logout\"><button type=\"submit\">Logout</button></form>",
            view::escape(&p.name),
            view::escape(p.role.as_str()),
        ),
        None => "<h1>eduboard</h1>\
                 <p><a href=\"/board/list\">Board</a> \
                 <a href=\"/member/login\">Login</a> \
                 <a href=\"/member/new\">Join</a></p>"
            .to_string(),
    };

    view::page("index", "eduboard", &body)
}
