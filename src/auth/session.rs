//! Server-side session management for eduboard.
//!
//! Sessions are transient: an in-memory token map that lives and dies with
//! the process. The token travels in an HttpOnly cookie; everything else
//! stays on the server.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use crate::member::{Member, Role};

/// Default session lifetime (24 hours).
pub const DEFAULT_SESSION_TTL_SECS: u64 = 24 * 60 * 60;

/// The authenticated identity attached to a request after login.
#[derive(Debug, Clone)]
pub struct Principal {
    /// Member ID.
    pub member_id: i64,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Role for authorization decisions.
    pub role: Role,
}

impl Principal {
    /// Build a principal from a member record.
    pub fn from_member(member: &Member) -> Self {
        Self {
            member_id: member.id,
            name: member.name.clone(),
            email: member.email.clone(),
            role: member.role,
        }
    }
}

/// A logged-in session.
#[derive(Debug, Clone)]
pub struct Session {
    /// Unique session token (UUID v4).
    pub token: String,
    /// Member ID associated with this session.
    pub member_id: i64,
    /// When the session was created.
    pub created_at: DateTime<Utc>,
    /// When the session expires.
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Create a new session for a member with the given lifetime.
    pub fn new(member_id: i64, ttl_secs: u64) -> Self {
        let now = Utc::now();
        Self {
            token: Uuid::new_v4().to_string(),
            member_id,
            created_at: now,
            expires_at: now + chrono::Duration::seconds(ttl_secs as i64),
        }
    }

    /// Check if the session has expired.
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }
}

/// In-memory store of active sessions, keyed by token.
#[derive(Debug)]
pub struct SessionStore {
    sessions: RwLock<HashMap<String, Session>>,
    ttl_secs: u64,
}

impl SessionStore {
    /// Create a new store with the given session lifetime.
    pub fn new(ttl_secs: u64) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            ttl_secs,
        }
    }

    /// Create and register a session for a member. Returns the session.
    pub async fn create(&self, member_id: i64) -> Session {
        let session = Session::new(member_id, self.ttl_secs);
        info!(member_id, "session created");
        self.sessions
            .write()
            .await
            .insert(session.token.clone(), session.clone());
        session
    }

    /// Resolve a token to its session.
    ///
    /// Expired sessions are dropped on access and resolve to `None`.
    pub async fn resolve(&self, token: &str) -> Option<Session> {
        {
            let sessions = self.sessions.read().await;
            match sessions.get(token) {
                Some(s) if !s.is_expired() => return Some(s.clone()),
                None => return None,
                Some(_) => {}
            }
        }

        // Expired; take the write lock and remove it
        self.sessions.write().await.remove(token);
        debug!("expired session dropped");
        None
    }

    /// Destroy a session (logout). Returns true if the token was active.
    pub async fn destroy(&self, token: &str) -> bool {
        let removed = self.sessions.write().await.remove(token).is_some();
        if removed {
            info!("session destroyed");
        }
        removed
    }

    /// Drop all expired sessions.
    pub async fn purge_expired(&self) {
        self.sessions.write().await.retain(|_, s| !s.is_expired());
    }

    /// Number of live sessions (expired but unpurged entries included).
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Whether the store holds no sessions.
    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}
