//! Member model for eduboard.
//!
//! This module defines the Member entity and the Role enum used for
//! authorization decisions.

use std::fmt;
use std::str::FromStr;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row};

/// Member role for authorization.
///
/// Ordered so that `>=` means "at least": every authenticated member is a
/// USER, teachers can do what users can, admins can do everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Role {
    /// Regular member.
    #[default]
    User = 0,
    /// Course teacher.
    Teacher = 1,
    /// Site administrator.
    Admin = 2,
}

impl Role {
    /// Convert role to its database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Teacher => "teacher",
            Role::Admin => "admin",
        }
    }

    /// Check if this role has at least the required permission level.
    ///
    /// # Examples
    ///
    /// ```
    /// use eduboard::member::Role;
    ///
    /// assert!(Role::Admin.can_access(Role::User));
    /// assert!(Role::User.can_access(Role::User));
    /// assert!(!Role::User.can_access(Role::Admin));
    /// ```
    pub fn can_access(&self, required: Role) -> bool {
        *self >= required
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(Role::User),
            "teacher" => Ok(Role::Teacher),
            "admin" => Ok(Role::Admin),
            _ => Err(format!("unknown role: {s}")),
        }
    }
}

/// Member entity representing a registered member.
///
/// Identity fields (id, email) are immutable after creation; the role is
/// assigned at registration time.
#[derive(Debug, Clone)]
pub struct Member {
    /// Unique member ID.
    pub id: i64,
    /// Email address (unique).
    pub email: String,
    /// Display name.
    pub name: String,
    /// Password hash (Argon2).
    pub password: String,
    /// Role for permissions.
    pub role: Role,
    /// Account creation timestamp.
    pub created_at: String,
}

impl FromRow<'_, SqliteRow> for Member {
    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        let role: String = row.try_get("role")?;
        let role = role
            .parse::<Role>()
            .map_err(|e| sqlx::Error::ColumnDecode {
                index: "role".to_string(),
                source: e.into(),
            })?;

        Ok(Self {
            id: row.try_get("id")?,
            email: row.try_get("email")?,
            name: row.try_get("name")?,
            password: row.try_get("password")?,
            role,
            created_at: row.try_get("created_at")?,
        })
    }
}

/// Data for creating a new member.
///
/// The password must already be hashed; repositories never see plaintext.
#[derive(Debug, Clone)]
pub struct NewMember {
    /// Email address.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Password hash.
    pub password: String,
    /// Role (defaults to User).
    pub role: Role,
}

impl NewMember {
    /// Create a new member record with the default role.
    pub fn new(
        email: impl Into<String>,
        name: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
            password: password.into(),
            role: Role::User,
        }
    }

    /// Set the role.
    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }
}
