//! Board post repository for eduboard.
//!
//! CRUD operations over the `board` table. The update path runs inside a
//! transaction so the fetch-modify-store cycle commits atomically.

use sqlx::SqlitePool;

use super::types::{BoardPost, NewBoardPost};
use crate::{EduboardError, Result};

const SELECT_COLUMNS: &str = "SELECT bno, title, content, writer, regdate, moddate FROM board";

/// Repository for board post persistence.
pub struct BoardRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> BoardRepository<'a> {
    /// Create a new BoardRepository with the given pool reference.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new post. The store assigns the post number.
    ///
    /// Returns the generated `bno`.
    pub async fn create(&self, new_post: &NewBoardPost) -> Result<i64> {
        let result = sqlx::query("INSERT INTO board (title, content, writer) VALUES (?, ?, ?)")
            .bind(&new_post.title)
            .bind(&new_post.content)
            .bind(&new_post.writer)
            .execute(self.pool)
            .await
            .map_err(|e| EduboardError::Database(e.to_string()))?;

        Ok(result.last_insert_rowid())
    }

    /// Get a post by its number.
    pub async fn get(&self, bno: i64) -> Result<Option<BoardPost>> {
        let result = sqlx::query_as::<_, BoardPost>(&format!("{SELECT_COLUMNS} WHERE bno = ?"))
            .bind(bno)
            .fetch_optional(self.pool)
            .await
            .map_err(|e| EduboardError::Database(e.to_string()))?;

        Ok(result)
    }

    /// List all posts in post-number order.
    pub async fn list_all(&self) -> Result<Vec<BoardPost>> {
        let posts = sqlx::query_as::<_, BoardPost>(&format!("{SELECT_COLUMNS} ORDER BY bno"))
            .fetch_all(self.pool)
            .await
            .map_err(|e| EduboardError::Database(e.to_string()))?;

        Ok(posts)
    }

    /// Update a post's title and content, bumping `moddate`.
    ///
    /// Fetch-modify-store inside one transaction: if the post is absent the
    /// transaction rolls back untouched and `None` is returned. `bno` and
    /// `writer` are never altered.
    pub async fn update(
        &self,
        bno: i64,
        title: &str,
        content: &str,
    ) -> Result<Option<BoardPost>> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| EduboardError::Database(e.to_string()))?;

        let existing =
            sqlx::query_as::<_, BoardPost>(&format!("{SELECT_COLUMNS} WHERE bno = ?"))
                .bind(bno)
                .fetch_optional(&mut *tx)
                .await
                .map_err(|e| EduboardError::Database(e.to_string()))?;

        if existing.is_none() {
            // Dropping the transaction rolls it back
            return Ok(None);
        }

        sqlx::query(
            "UPDATE board SET title = ?, content = ?, moddate = datetime('now') WHERE bno = ?",
        )
        .bind(title)
        .bind(content)
        .bind(bno)
        .execute(&mut *tx)
        .await
        .map_err(|e| EduboardError::Database(e.to_string()))?;

        let updated = sqlx::query_as::<_, BoardPost>(&format!("{SELECT_COLUMNS} WHERE bno = ?"))
            .bind(bno)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| EduboardError::Database(e.to_string()))?;

        tx.commit()
            .await
            .map_err(|e| EduboardError::Database(e.to_string()))?;

        Ok(Some(updated))
    }

    /// Delete a post by its number.
    ///
    /// Returns true if a row was removed, false if the number was absent.
    pub async fn delete(&self, bno: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM board WHERE bno = ?")
            .bind(bno)
            .execute(self.pool)
            .await
            .map_err(|e| EduboardError::Database(e.to_string()))?;
        Ok(result.rows_affected() > 0)
    }

    /// Count all posts.
    pub async fn count(&self) -> Result<i64> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM board")
            .fetch_one(self.pool)
            .await
            .map_err(|e| EduboardError::Database(e.to_string()))?;
        Ok(count.0)
    }
}
