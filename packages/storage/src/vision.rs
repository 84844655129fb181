// ABOUTME: Storage operations for the project's product vision
// ABOUTME: Reads and fully replaces the narrative fields on the project row

use archstudio_core::ProjectScope;
use chrono::Utc;
use sqlx::SqliteConnection;
use tracing::debug;

use crate::types::Vision;
use crate::{StorageError, StorageResult};

/// Read the vision; `None` when the project row does not exist
pub async fn get_vision(
    conn: &mut SqliteConnection,
    scope: ProjectScope,
) -> StorageResult<Option<Vision>> {
    debug!("Fetching vision for {}", scope);

    sqlx::query_as::<_, Vision>(
        r#"
        SELECT vision, target_audience, value_proposition, timeline, budget, success_metric
        FROM projects
        WHERE id = ?
        "#,
    )
    .bind(scope.id())
    .fetch_optional(&mut *conn)
    .await
    .map_err(StorageError::Sqlx)
}

/// Overwrite all six vision fields and return what was written
pub async fn replace_vision(
    conn: &mut SqliteConnection,
    scope: ProjectScope,
    input: &Vision,
) -> StorageResult<Option<Vision>> {
    debug!("Replacing vision for {}", scope);

    sqlx::query_as::<_, Vision>(
        r#"
        UPDATE projects
        SET vision = ?, target_audience = ?, value_proposition = ?,
            timeline = ?, budget = ?, success_metric = ?, updated_at = ?
        WHERE id = ?
        RETURNING vision, target_audience, value_proposition, timeline, budget, success_metric
        "#,
    )
    .bind(&input.vision)
    .bind(&input.target_audience)
    .bind(&input.value_proposition)
    .bind(&input.timeline)
    .bind(&input.budget)
    .bind(&input.success_metric)
    .bind(Utc::now())
    .bind(scope.id())
    .fetch_optional(&mut *conn)
    .await
    .map_err(StorageError::Sqlx)
}
