//! Handlers for both web surfaces.

pub mod board;
pub mod home;
pub mod member;

pub use board::*;
pub use home::*;
pub use member::*;

use std::sync::Arc;

use crate::auth::{AccessPolicy, SessionStore};
use crate::board::BoardService;
use crate::config::AuthConfig;
use crate::member::MemberService;
use crate::Database;

/// Application state shared across handlers.
///
/// Built once at startup by [`AppState::assemble`]: explicit
/// constructor-based composition, no registry.
pub struct AppState {
    /// Database handle (owns the connection pool).
    pub db: Arc<Database>,
    /// Member service.
    pub members: MemberService,
    /// Board service.
    pub board: BoardService,
    /// Active login sessions.
    pub sessions: SessionStore,
    /// Path-pattern access policy.
    pub policy: AccessPolicy,
    /// Authentication settings.
    pub auth: AuthConfig,
}

impl AppState {
    /// Wire up stores, services, sessions, and the access policy.
    pub fn assemble(auth: AuthConfig, db: Database) -> Arc<Self> {
        let db = Arc::new(db);
        let members = MemberService::new(db.pool().clone(), auth.identity_field);
        let board = BoardService::new(db.pool().clone());
        let sessions = SessionStore::new(auth.session_ttl_secs);
        let policy = AccessPolicy::standard();

        Arc::new(Self {
            db,
            members,
            board,
            sessions,
            policy,
            auth,
        })
    }
}
