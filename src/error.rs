//! Error types for eduboard.

use thiserror::Error;

/// Common error type for eduboard.
#[derive(Error, Debug)]
pub enum EduboardError {
    /// Database error.
    ///
    /// This is a generic database error that wraps errors from the
    /// persistence backend. Errors from sqlx are converted automatically.
    #[error("database error: {0}")]
    Database(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Authentication error (bad credentials, missing session).
    #[error("authentication error: {0}")]
    Auth(String),

    /// Permission denied error.
    #[error("permission denied: {0}")]
    Permission(String),

    /// Validation error for user input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Resource not found.
    #[error("{0} not found")]
    NotFound(String),

    /// A member with the given email is already registered.
    #[error("email already registered: {0}")]
    DuplicateEmail(String),

    /// Password hashing or verification failed internally.
    #[error("password error: {0}")]
    Password(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

// Conversion from sqlx errors
impl From<sqlx::Error> for EduboardError {
    fn from(e: sqlx::Error) -> Self {
        EduboardError::Database(e.to_string())
    }
}

/// Result type alias for eduboard operations.
pub type Result<T> = std::result::Result<T, EduboardError>;
