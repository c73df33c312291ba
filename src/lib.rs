//! eduboard - a course community bulletin board.
//!
//! A small web application providing membership (registration,
//! duplicate-email validation, login/logout) and a discussion-board CRUD
//! feature, secured by role-based access control.

pub mod auth;
pub mod board;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod member;
pub mod web;

pub use auth::{
    check_permission, hash_password, require_admin, require_teacher, require_user,
    verify_password, AccessDecision, AccessPolicy, PasswordError, PermissionError, Principal,
    Session, SessionStore, ValidationError,
};
pub use board::{BoardPost, BoardPostDto, BoardRepository, BoardService, NewBoardPost};
pub use config::Config;
pub use db::Database;
pub use error::{EduboardError, Result};
pub use member::{JoinRequest, Member, MemberRepository, MemberService, NewMember, Role};
pub use web::{AppState, WebServer};
