//! Board post model for eduboard.

use serde::{Deserialize, Serialize};

/// Board post entity, keyed by an auto-incrementing `bno`.
///
/// `bno` and `writer` are immutable after creation; `title` and `content`
/// change through the modify operation, which also bumps `moddate`.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct BoardPost {
    /// Post number, assigned by the store on creation and never reused.
    pub bno: i64,
    /// Post title.
    pub title: String,
    /// Post body.
    pub content: String,
    /// Writer handle. Free text, not a member reference.
    pub writer: String,
    /// Creation timestamp (store-managed).
    pub regdate: String,
    /// Last modification timestamp (store-managed).
    pub moddate: String,
}

/// Data for creating a new board post.
#[derive(Debug, Clone)]
pub struct NewBoardPost {
    /// Post title.
    pub title: String,
    /// Post body.
    pub content: String,
    /// Writer handle.
    pub writer: String,
}

impl NewBoardPost {
    /// Create new post data.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        writer: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            writer: writer.into(),
        }
    }
}

/// Externally-facing shape of a board post.
///
/// Converted from the entity by an explicit function rather than a mapping
/// utility, so the conversion contract stays visible and testable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardPostDto {
    /// Post number.
    pub bno: i64,
    /// Post title.
    pub title: String,
    /// Post body.
    pub content: String,
    /// Writer handle.
    pub writer: String,
    /// Creation timestamp.
    pub regdate: String,
    /// Last modification timestamp.
    pub moddate: String,
}

impl BoardPostDto {
    /// Convert a persisted entity into the external shape.
    pub fn from_entity(post: BoardPost) -> Self {
        Self {
            bno: post.bno,
            title: post.title,
            content: post.content,
            writer: post.writer,
            regdate: post.regdate,
            moddate: post.moddate,
        }
    }
}
