// ABOUTME: Storage operations for user stories
// ABOUTME: Stories are listed newest first

use archstudio_core::ProjectScope;
use chrono::Utc;
use sqlx::SqliteConnection;
use tracing::debug;

use crate::types::{UserStory, UserStoryCreateInput};
use crate::{StorageError, StorageResult};

pub async fn list_stories(
    conn: &mut SqliteConnection,
    scope: ProjectScope,
) -> StorageResult<Vec<UserStory>> {
    debug!("Fetching user stories for {}", scope);

    sqlx::query_as::<_, UserStory>(
        r#"
        SELECT id, role, action, benefit, priority, epic, created_at, updated_at
        FROM user_stories
        WHERE project_id = ?
        ORDER BY created_at DESC, id DESC
        "#,
    )
    .bind(scope.id())
    .fetch_all(&mut *conn)
    .await
    .map_err(StorageError::Sqlx)
}

pub async fn create_story(
    conn: &mut SqliteConnection,
    scope: ProjectScope,
    input: &UserStoryCreateInput,
) -> StorageResult<UserStory> {
    let now = Utc::now();

    debug!("Creating user story for {} (role: {})", scope, input.role);

    sqlx::query_as::<_, UserStory>(
        r#"
        INSERT INTO user_stories (project_id, role, action, benefit, priority, epic, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        RETURNING id, role, action, benefit, priority, epic, created_at, updated_at
        "#,
    )
    .bind(scope.id())
    .bind(&input.role)
    .bind(&input.action)
    .bind(&input.benefit)
    .bind(&input.priority)
    .bind(&input.epic)
    .bind(now)
    .bind(now)
    .fetch_one(&mut *conn)
    .await
    .map_err(StorageError::Sqlx)
}
