//! Member repository for eduboard.
//!
//! This module provides persistence operations for members, including the
//! email-uniqueness check backing duplicate validation.

use sqlx::SqlitePool;

use super::types::{Member, NewMember};
use crate::{EduboardError, Result};

/// Repository for member persistence operations.
pub struct MemberRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> MemberRepository<'a> {
    /// Create a new MemberRepository with the given pool reference.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new member.
    ///
    /// Returns the created member with the assigned ID. A unique-constraint
    /// violation on the email column maps to `DuplicateEmail`, so the race
    /// between the service-level pre-check and the insert stays safe.
    pub async fn create(&self, new_member: &NewMember) -> Result<Member> {
        let result = sqlx::query(
            "INSERT INTO members (email, name, password, role) VALUES (?, ?, ?, ?)",
        )
        .bind(&new_member.email)
        .bind(&new_member.name)
        .bind(&new_member.password)
        .bind(new_member.role.as_str())
        .execute(self.pool)
        .await
        .map_err(|e| match e.as_database_error() {
            Some(db) if db.is_unique_violation() => {
                EduboardError::DuplicateEmail(new_member.email.clone())
            }
            _ => EduboardError::Database(e.to_string()),
        })?;

        let id = result.last_insert_rowid();
        self.get_by_id(id)
            .await?
            .ok_or_else(|| EduboardError::NotFound("member".to_string()))
    }

    /// Get a member by ID.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Member>> {
        let result = sqlx::query_as::<_, Member>(
            "SELECT id, email, name, password, role, created_at FROM members WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| EduboardError::Database(e.to_string()))?;

        Ok(result)
    }

    /// Get a member by email (case-insensitive).
    pub async fn get_by_email(&self, email: &str) -> Result<Option<Member>> {
        let result = sqlx::query_as::<_, Member>(
            "SELECT id, email, name, password, role, created_at
             FROM members WHERE email = ? COLLATE NOCASE",
        )
        .bind(email)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| EduboardError::Database(e.to_string()))?;

        Ok(result)
    }

    /// Get a member by display name.
    ///
    /// Used by the login variant that identifies members by name instead of
    /// email. Names are not unique by schema; the first match wins.
    pub async fn get_by_name(&self, name: &str) -> Result<Option<Member>> {
        let result = sqlx::query_as::<_, Member>(
            "SELECT id, email, name, password, role, created_at
             FROM members WHERE name = ? ORDER BY id LIMIT 1",
        )
        .bind(name)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| EduboardError::Database(e.to_string()))?;

        Ok(result)
    }

    /// Check if an email address is already registered (case-insensitive).
    pub async fn email_exists(&self, email: &str) -> Result<bool> {
        let exists: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM members WHERE email = ? COLLATE NOCASE)")
                .bind(email)
                .fetch_one(self.pool)
                .await
                .map_err(|e| EduboardError::Database(e.to_string()))?;
        Ok(exists.0)
    }

    /// Count all members.
    pub async fn count(&self) -> Result<i64> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM members")
            .fetch_one(self.pool)
            .await
            .map_err(|e| EduboardError::Database(e.to_string()))?;
        Ok(count.0)
    }

    /// Count members registered under the given email.
    pub async fn count_by_email(&self, email: &str) -> Result<i64> {
        let count: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM members WHERE email = ? COLLATE NOCASE")
                .bind(email)
                .fetch_one(self.pool)
                .await
                .map_err(|e| EduboardError::Database(e.to_string()))?;
        Ok(count.0)
    }
}
