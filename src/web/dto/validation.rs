//! Form validation for the web surfaces.
//!
//! Both surfaces run the same checks before any service call: the page
//! surface flattens the result into re-rendered form errors, the API surface
//! wraps it in a structured 422. An empty map means the form is valid.

use std::collections::HashMap;
use std::str::FromStr;

use crate::auth::validation::{validate_email, validate_name, validate_password};
use crate::board::{validate_content, validate_title, validate_writer};
use crate::member::Role;
use crate::EduboardError;

/// Field-level validation errors, keyed by field name.
pub type FieldErrors = HashMap<String, Vec<String>>;

fn push(errors: &mut FieldErrors, field: &str, message: String) {
    errors.entry(field.to_string()).or_default().push(message);
}

fn push_validation(errors: &mut FieldErrors, field: &str, result: crate::Result<()>) {
    if let Err(EduboardError::Validation(msg)) = result {
        push(errors, field, msg);
    }
}

/// Validate a new-post form.
pub fn validate_post_form(title: &str, content: &str, writer: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();
    push_validation(&mut errors, "title", validate_title(title));
    push_validation(&mut errors, "content", validate_content(content));
    push_validation(&mut errors, "writer", validate_writer(writer));
    errors
}

/// Validate a modify form. The writer field is not part of the form;
/// it can never be altered.
pub fn validate_modify_form(title: &str, content: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();
    push_validation(&mut errors, "title", validate_title(title));
    push_validation(&mut errors, "content", validate_content(content));
    errors
}

/// Validate a registration form.
pub fn validate_join_form(
    email: &str,
    name: &str,
    password: &str,
    role: Option<&str>,
) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if let Err(e) = validate_email(email) {
        push(&mut errors, "email", e.to_string());
    }
    if let Err(e) = validate_name(name) {
        push(&mut errors, "name", e.to_string());
    }
    if let Err(e) = validate_password(password) {
        push(&mut errors, "password", e.to_string());
    }
    if let Some(role) = role {
        if !role.is_empty() && Role::from_str(role).is_err() {
            push(&mut errors, "role", format!("unknown role: {role}"));
        }
    }
    errors
}

/// Flatten field errors into a display list for form re-rendering.
pub fn flatten(errors: &FieldErrors) -> Vec<String> {
    let mut messages: Vec<String> = errors
        .iter()
        .flat_map(|(field, msgs)| msgs.iter().map(move |m| format!("{field}: {m}")))
        .collect();
    messages.sort();
    messages
}
