//! Minimal page rendering for the server-rendered surface.
//!
//! There is no template engine; each page handler names its view and builds
//! a small HTML body. The view name ends up in a `data-view` attribute so
//! the rendered page stays identifiable the way a view identifier would be.

use axum::response::Html;

/// Escape text for safe inclusion in HTML.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render a page with the given view identifier, title, and body markup.
pub fn page(view: &str, title: &str, body: &str) -> Html<String> {
    Html(format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>{}</title></head>\n\
         <body data-view=\"{}\">\n{}\n</body>\n</html>\n",
        escape(title),
        escape(view),
        body
    ))
}

/// Render a list of error messages as markup for form re-rendering.
pub fn error_list(errors: &[String]) -> String {
    if errors.is_empty() {
        return String::new();
    }
    let items: String = errors
        .iter()
        .map(|e| format!("<li>{}</li>", escape(e)))
        .collect();
    format!("<ul class=\"errors\">{items}</ul>")
}
