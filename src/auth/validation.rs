//! Input validation for member registration.
//!
//! Explicit validation functions called at the start of each handler; no
//! derive-driven binding. Each function checks one field.

use thiserror::Error;

/// Maximum email length.
pub const MAX_EMAIL_LENGTH: usize = 254;

/// Maximum display name length.
pub const MAX_NAME_LENGTH: usize = 50;

/// Minimum password length.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum password length.
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// Validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Email is empty.
    #[error("email cannot be empty")]
    EmailEmpty,

    /// Email is too long.
    #[error("email must be at most {MAX_EMAIL_LENGTH} characters")]
    EmailTooLong,

    /// Email format is invalid.
    #[error("invalid email format")]
    EmailInvalidFormat,

    /// Display name is empty.
    #[error("name cannot be empty")]
    NameEmpty,

    /// Display name is too long.
    #[error("name must be at most {MAX_NAME_LENGTH} characters")]
    NameTooLong,

    /// Password is too short.
    #[error("password must be at least {MIN_PASSWORD_LENGTH} characters")]
    PasswordTooShort,

    /// Password is too long.
    #[error("password must be at most {MAX_PASSWORD_LENGTH} characters")]
    PasswordTooLong,

    /// Unknown role name.
    #[error("unknown role: {0}")]
    RoleUnknown(String),
}

/// Validate an email address.
///
/// This is a shape check, not an RFC 5322 parser: one `@`, a non-empty
/// local part, and a dotted domain without whitespace.
///
/// # Examples
///
/// ```
/// use eduboard::auth::validation::validate_email;
///
/// assert!(validate_email("user@example.com").is_ok());
/// assert!(validate_email("not-an-email").is_err());
/// ```
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() {
        return Err(ValidationError::EmailEmpty);
    }
    if email.len() > MAX_EMAIL_LENGTH {
        return Err(ValidationError::EmailTooLong);
    }
    if email.chars().any(|c| c.is_whitespace()) {
        return Err(ValidationError::EmailInvalidFormat);
    }

    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let domain = parts.next().unwrap_or("");

    if local.is_empty() || domain.is_empty() {
        return Err(ValidationError::EmailInvalidFormat);
    }
    // Domain needs an interior dot: "a.b", not ".b" or "a."
    if !domain.contains('.') || domain.split('.').any(|seg| seg.is_empty()) {
        return Err(ValidationError::EmailInvalidFormat);
    }

    Ok(())
}

/// Validate a display name.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::NameEmpty);
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(ValidationError::NameTooLong);
    }
    Ok(())
}

/// Validate a registration password.
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::PasswordTooShort);
    }
    if password.len() > MAX_PASSWORD_LENGTH {
        return Err(ValidationError::PasswordTooLong);
    }
    Ok(())
}

/// Validate all registration fields, stopping at the first error.
pub fn validate_join(email: &str, name: &str, password: &str) -> Result<(), ValidationError> {
    validate_email(email)?;
    validate_name(name)?;
    validate_password(password)?;
    Ok(())
}
