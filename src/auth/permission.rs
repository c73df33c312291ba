//! Permission checking for eduboard.
//!
//! Explicit role-based access control guards, called at the top of each
//! handler that needs one. This is the finer-grained layer behind the
//! path-pattern policy in [`crate::auth::policy`].

use thiserror::Error;

use crate::auth::session::Principal;
use crate::member::Role;

/// Permission-related errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PermissionError {
    /// User is not authenticated.
    #[error("login is required for this operation")]
    NotAuthenticated,

    /// User does not have sufficient permission.
    #[error("this operation requires the {0} role or higher")]
    InsufficientRole(String),
}

/// Check if a principal meets the required role level.
///
/// An anonymous request (`None`) fails any role requirement with
/// `NotAuthenticated`; an authenticated principal below the required role
/// fails with `InsufficientRole`.
///
/// # Examples
///
/// ```
/// use eduboard::auth::permission::{check_permission, PermissionError};
/// use eduboard::member::Role;
///
/// assert!(matches!(
///     check_permission(None, Role::User),
///     Err(PermissionError::NotAuthenticated)
/// ));
/// ```
pub fn check_permission(
    principal: Option<&Principal>,
    required: Role,
) -> Result<(), PermissionError> {
    let principal = principal.ok_or(PermissionError::NotAuthenticated)?;

    if !principal.role.can_access(required) {
        return Err(PermissionError::InsufficientRole(
            required.as_str().to_string(),
        ));
    }

    Ok(())
}

/// Require any authenticated member (USER or higher).
pub fn require_user(principal: Option<&Principal>) -> Result<(), PermissionError> {
    check_permission(principal, Role::User)
}

/// Require at least the TEACHER role.
pub fn require_teacher(principal: Option<&Principal>) -> Result<(), PermissionError> {
    check_permission(principal, Role::Teacher)
}

/// Require the ADMIN role.
pub fn require_admin(principal: Option<&Principal>) -> Result<(), PermissionError> {
    check_permission(principal, Role::Admin)
}
