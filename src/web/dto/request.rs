//! Request DTOs for both web surfaces.

use serde::Deserialize;

/// Login form submission.
///
/// Both identifying fields are declared; which one is consulted depends on
/// the configured identity field, so either deployment variant binds.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    /// Display-name credential (username variant).
    #[serde(default)]
    pub username: Option<String>,
    /// Email credential (email variant).
    #[serde(default)]
    pub email: Option<String>,
    /// Password.
    pub password: String,
}

/// Registration form submission.
#[derive(Debug, Deserialize)]
pub struct JoinForm {
    /// Email address.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Password.
    pub password: String,
    /// Role name (optional; defaults to user).
    #[serde(default)]
    pub role: Option<String>,
}

/// Duplicate-email check request body.
#[derive(Debug, Deserialize)]
pub struct DupCheckRequest {
    /// Email address to check.
    pub email: String,
}

/// New post form, shared by the page and API surfaces.
#[derive(Debug, Deserialize)]
pub struct PostForm {
    /// Post title.
    pub title: String,
    /// Post body.
    pub content: String,
    /// Writer handle.
    pub writer: String,
}

/// Modify form, shared by the page and API surfaces.
#[derive(Debug, Deserialize)]
pub struct ModifyForm {
    /// Post number.
    pub bno: i64,
    /// New title.
    pub title: String,
    /// New body.
    pub content: String,
}

/// Remove form.
#[derive(Debug, Deserialize)]
pub struct RemoveForm {
    /// Post number.
    pub bno: i64,
}

/// `?bno=` query parameter.
#[derive(Debug, Deserialize)]
pub struct BnoQuery {
    /// Post number.
    pub bno: i64,
}
