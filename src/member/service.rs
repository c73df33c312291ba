//! Member service for eduboard.
//!
//! Orchestrates registration (validate, duplicate check, hash, persist),
//! duplicate-email queries, and credential authentication.

use sqlx::SqlitePool;
use tracing::{info, warn};

use super::repository::MemberRepository;
use super::types::{Member, NewMember, Role};
use crate::auth::validation::validate_join;
use crate::auth::{hash_password, verify_password};
use crate::config::IdentityField;
use crate::{EduboardError, Result};

/// Registration request data, as submitted by the join form.
#[derive(Debug, Clone)]
pub struct JoinRequest {
    /// Email address (unique identity).
    pub email: String,
    /// Plaintext password; hashed before it reaches the store.
    pub password: String,
    /// Display name.
    pub name: String,
    /// Role, assignable at creation time only.
    pub role: Role,
}

impl JoinRequest {
    /// Create a join request with the default role.
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            name: name.into(),
            role: Role::User,
        }
    }

    /// Set the role.
    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }
}

/// Service for member operations.
#[derive(Clone)]
pub struct MemberService {
    pool: SqlitePool,
    identity_field: IdentityField,
}

impl MemberService {
    /// Create a new member service.
    pub fn new(pool: SqlitePool, identity_field: IdentityField) -> Self {
        Self {
            pool,
            identity_field,
        }
    }

    /// Register a new member.
    ///
    /// Validates the form fields, checks email uniqueness, hashes the
    /// password and persists the member. On any failure nothing is written.
    pub async fn register(&self, request: JoinRequest) -> Result<Member> {
        validate_join(&request.email, &request.name, &request.password)
            .map_err(|e| EduboardError::Validation(e.to_string()))?;

        let repo = MemberRepository::new(&self.pool);

        if repo.email_exists(&request.email).await? {
            return Err(EduboardError::DuplicateEmail(request.email));
        }

        let digest =
            hash_password(&request.password).map_err(|e| EduboardError::Password(e.to_string()))?;

        let new_member =
            NewMember::new(&request.email, &request.name, digest).with_role(request.role);
        let member = repo.create(&new_member).await?;

        info!(
            member_id = member.id,
            email = %member.email,
            role = %member.role,
            "new member registered"
        );

        Ok(member)
    }

    /// Check whether an email address is already registered.
    ///
    /// Pure existence check with no side effects; safe to call
    /// unauthenticated.
    pub async fn is_duplicate_email(&self, email: &str) -> Result<bool> {
        MemberRepository::new(&self.pool).email_exists(email).await
    }

    /// Authenticate a member by the configured identifying field.
    ///
    /// The same generic `Auth` error covers both an unknown identity and a
    /// wrong password, so the response never reveals whether the email is
    /// registered.
    pub async fn authenticate(&self, identity: &str, password: &str) -> Result<Member> {
        let repo = MemberRepository::new(&self.pool);

        let member = match self.identity_field {
            IdentityField::Email => repo.get_by_email(identity).await?,
            IdentityField::Username => repo.get_by_name(identity).await?,
        };

        let Some(member) = member else {
            warn!("login failed: unknown identity");
            return Err(EduboardError::Auth("invalid credentials".to_string()));
        };

        verify_password(password, &member.password).map_err(|_| {
            warn!(member_id = member.id, "login failed: password mismatch");
            EduboardError::Auth("invalid credentials".to_string())
        })?;

        Ok(member)
    }

    /// Fetch a member by ID.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Member>> {
        MemberRepository::new(&self.pool).get_by_id(id).await
    }
}
