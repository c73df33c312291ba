//! Board module for eduboard.
//!
//! This module provides the discussion-board feature:
//! - Board post entity and external DTO shape
//! - Board repository (auto-increment keys, transactional update)
//! - Board service: create, read, list, modify, remove

mod repository;
mod service;
mod types;

pub use repository::BoardRepository;
pub use service::{
    validate_content, validate_title, validate_writer, BoardService, MAX_CONTENT_LENGTH,
    MAX_TITLE_LENGTH, MAX_WRITER_LENGTH,
};
pub use types::{BoardPost, BoardPostDto, NewBoardPost};
