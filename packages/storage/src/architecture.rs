// ABOUTME: Storage operations for positioned architecture diagram elements
// ABOUTME: Elements live on one canvas variant; only their position changes after creation

use archstudio_core::{CanvasType, ProjectScope};
use chrono::Utc;
use sqlx::SqliteConnection;
use tracing::debug;

use crate::types::{ArchitectureElement, ArchitectureElementCreateInput, ElementPosition};
use crate::{StorageError, StorageResult};

const ELEMENT_COLUMNS: &str =
    "id, element_type, name, x_position AS x, y_position AS y, canvas_type, created_at, updated_at";

/// Elements on one canvas in insertion order
pub async fn list_elements(
    conn: &mut SqliteConnection,
    scope: ProjectScope,
    canvas: CanvasType,
) -> StorageResult<Vec<ArchitectureElement>> {
    debug!("Fetching {} canvas elements for {}", canvas, scope);

    let query = format!(
        "SELECT {} FROM architecture_elements WHERE project_id = ? AND canvas_type = ? ORDER BY id ASC",
        ELEMENT_COLUMNS
    );

    sqlx::query_as::<_, ArchitectureElement>(&query)
        .bind(scope.id())
        .bind(canvas.as_str())
        .fetch_all(&mut *conn)
        .await
        .map_err(StorageError::Sqlx)
}

pub async fn create_element(
    conn: &mut SqliteConnection,
    scope: ProjectScope,
    canvas: CanvasType,
    input: &ArchitectureElementCreateInput,
) -> StorageResult<ArchitectureElement> {
    let now = Utc::now();

    debug!(
        "Creating {} element '{}' on {} canvas for {}",
        input.element_type, input.name, canvas, scope
    );

    let query = format!(
        r#"
        INSERT INTO architecture_elements
            (project_id, canvas_type, element_type, name, x_position, y_position, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        RETURNING {}
        "#,
        ELEMENT_COLUMNS
    );

    sqlx::query_as::<_, ArchitectureElement>(&query)
        .bind(scope.id())
        .bind(canvas.as_str())
        .bind(&input.element_type)
        .bind(&input.name)
        .bind(input.x)
        .bind(input.y)
        .bind(now)
        .bind(now)
        .fetch_one(&mut *conn)
        .await
        .map_err(StorageError::Sqlx)
}

/// Move an element; `None` when no element matched `(id, project)`
pub async fn move_element(
    conn: &mut SqliteConnection,
    scope: ProjectScope,
    element_id: i64,
    position: ElementPosition,
) -> StorageResult<Option<ArchitectureElement>> {
    debug!(
        "Moving element {} to ({}, {}) for {}",
        element_id, position.x, position.y, scope
    );

    let query = format!(
        r#"
        UPDATE architecture_elements
        SET x_position = ?, y_position = ?, updated_at = ?
        WHERE id = ? AND project_id = ?
        RETURNING {}
        "#,
        ELEMENT_COLUMNS
    );

    sqlx::query_as::<_, ArchitectureElement>(&query)
        .bind(position.x)
        .bind(position.y)
        .bind(Utc::now())
        .bind(element_id)
        .bind(scope.id())
        .fetch_optional(&mut *conn)
        .await
        .map_err(StorageError::Sqlx)
}
