//! Middleware for the web surfaces.

pub mod auth;

pub use auth::{resolve_principal, session_guard, CurrentUser, SESSION_COOKIE};
