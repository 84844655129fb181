// ABOUTME: Storage operations for discussion comments on user stories
// ABOUTME: Append-only; listed in conversation order

use chrono::Utc;
use sqlx::SqliteConnection;
use tracing::debug;

use crate::types::{Comment, CommentCreateInput};
use crate::{StorageError, StorageResult};

/// Comments for a story, oldest first. Unknown stories yield an empty list.
pub async fn list_comments(conn: &mut SqliteConnection, story_id: i64) -> StorageResult<Vec<Comment>> {
    debug!("Fetching comments for story {}", story_id);

    sqlx::query_as::<_, Comment>(
        r#"
        SELECT id, story_id, author, text, created_at
        FROM comments
        WHERE story_id = ?
        ORDER BY created_at ASC, id ASC
        "#,
    )
    .bind(story_id)
    .fetch_all(&mut *conn)
    .await
    .map_err(StorageError::Sqlx)
}

pub async fn create_comment(
    conn: &mut SqliteConnection,
    input: &CommentCreateInput,
) -> StorageResult<Comment> {
    debug!("Adding comment to story {} (author: {})", input.story_id, input.author);

    sqlx::query_as::<_, Comment>(
        r#"
        INSERT INTO comments (story_id, author, text, created_at)
        VALUES (?, ?, ?, ?)
        RETURNING id, story_id, author, text, created_at
        "#,
    )
    .bind(input.story_id)
    .bind(&input.author)
    .bind(&input.text)
    .bind(Utc::now())
    .fetch_one(&mut *conn)
    .await
    .map_err(StorageError::Sqlx)
}
