// ABOUTME: Data layer and persistence for Architecture Studio
// ABOUTME: SQLite pool management plus the vision, OKR, story, comment, and architecture surfaces

use thiserror::Error;

pub mod architecture;
pub mod comments;
pub mod database;
pub mod okrs;
pub mod stories;
pub mod types;
pub mod vision;

pub use database::Database;
pub use types::{
    ArchitectureElement, ArchitectureElementCreateInput, Comment, CommentCreateInput,
    ElementPosition, Okr, OkrDeletion, OkrInput, UserStory, UserStoryCreateInput, Vision,
};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Database error: {0}")]
    Sqlx(#[from] sqlx::Error),
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;
