//! Board service for eduboard.
//!
//! High-level CRUD operations over board posts, translating between the
//! persisted entity and the externally-facing DTO.

use sqlx::SqlitePool;
use tracing::{debug, info};

use super::repository::BoardRepository;
use super::types::{BoardPostDto, NewBoardPost};
use crate::{EduboardError, Result};

/// Maximum length for post titles (in characters).
pub const MAX_TITLE_LENGTH: usize = 100;

/// Maximum length for post content (in characters).
pub const MAX_CONTENT_LENGTH: usize = 10_000;

/// Maximum length for the writer handle (in characters).
pub const MAX_WRITER_LENGTH: usize = 50;

/// Validate a post title.
pub fn validate_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(EduboardError::Validation("title cannot be empty".to_string()));
    }
    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(EduboardError::Validation(format!(
            "title must be at most {MAX_TITLE_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validate post content.
pub fn validate_content(content: &str) -> Result<()> {
    if content.trim().is_empty() {
        return Err(EduboardError::Validation(
            "content cannot be empty".to_string(),
        ));
    }
    if content.chars().count() > MAX_CONTENT_LENGTH {
        return Err(EduboardError::Validation(format!(
            "content must be at most {MAX_CONTENT_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validate a writer handle.
pub fn validate_writer(writer: &str) -> Result<()> {
    if writer.trim().is_empty() {
        return Err(EduboardError::Validation(
            "writer cannot be empty".to_string(),
        ));
    }
    if writer.chars().count() > MAX_WRITER_LENGTH {
        return Err(EduboardError::Validation(format!(
            "writer must be at most {MAX_WRITER_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Service for board post operations.
#[derive(Clone)]
pub struct BoardService {
    pool: SqlitePool,
}

impl BoardService {
    /// Create a new board service.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new post and return the store-assigned post number.
    pub async fn register(&self, data: NewBoardPost) -> Result<i64> {
        validate_title(&data.title)?;
        validate_content(&data.content)?;
        validate_writer(&data.writer)?;

        let repo = BoardRepository::new(&self.pool);
        let bno = repo.create(&data).await?;

        info!(bno, writer = %data.writer, "board post created");
        Ok(bno)
    }

    /// Fetch a single post.
    pub async fn find_by_bno(&self, bno: i64) -> Result<BoardPostDto> {
        let repo = BoardRepository::new(&self.pool);
        repo.get(bno)
            .await?
            .map(BoardPostDto::from_entity)
            .ok_or_else(|| EduboardError::NotFound("board post".to_string()))
    }

    /// List all posts in post-number order.
    pub async fn find_all(&self) -> Result<Vec<BoardPostDto>> {
        let repo = BoardRepository::new(&self.pool);
        let posts = repo.list_all().await?;
        Ok(posts.into_iter().map(BoardPostDto::from_entity).collect())
    }

    /// Change a post's title and content.
    ///
    /// Fails with `NotFound` when the post is absent; the store is left
    /// untouched in that case. Writer and post number never change.
    pub async fn modify(&self, bno: i64, title: &str, content: &str) -> Result<BoardPostDto> {
        validate_title(title)?;
        validate_content(content)?;

        let repo = BoardRepository::new(&self.pool);
        let updated = repo
            .update(bno, title, content)
            .await?
            .ok_or_else(|| EduboardError::NotFound("board post".to_string()))?;

        info!(bno, "board post modified");
        Ok(BoardPostDto::from_entity(updated))
    }

    /// Remove a post.
    ///
    /// Removal is idempotent: deleting an absent post number succeeds
    /// silently, mirroring the store's permissive delete.
    pub async fn remove(&self, bno: i64) -> Result<()> {
        let repo = BoardRepository::new(&self.pool);
        let removed = repo.delete(bno).await?;

        if removed {
            info!(bno, "board post removed");
        } else {
            debug!(bno, "remove of absent post ignored");
        }
        Ok(())
    }
}
