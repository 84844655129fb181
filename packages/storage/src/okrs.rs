// ABOUTME: Storage operations for objectives and key results
// ABOUTME: Key results are persisted as the raw JSON fragment and returned untouched

use archstudio_core::ProjectScope;
use chrono::Utc;
use serde_json::value::RawValue;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqliteConnection};
use tracing::debug;

use crate::types::{Okr, OkrInput};
use crate::{StorageError, StorageResult};

const OKR_COLUMNS: &str = "id, objective, key_results, created_at, updated_at";

/// List OKRs in the order they were set (oldest first)
pub async fn list_okrs(conn: &mut SqliteConnection, scope: ProjectScope) -> StorageResult<Vec<Okr>> {
    debug!("Fetching OKRs for {}", scope);

    let query = format!(
        "SELECT {} FROM okrs WHERE project_id = ? ORDER BY created_at ASC, id ASC",
        OKR_COLUMNS
    );

    let rows = sqlx::query(&query)
        .bind(scope.id())
        .fetch_all(&mut *conn)
        .await
        .map_err(StorageError::Sqlx)?;

    rows.iter().map(row_to_okr).collect()
}

pub async fn create_okr(
    conn: &mut SqliteConnection,
    scope: ProjectScope,
    input: &OkrInput,
) -> StorageResult<Okr> {
    let now = Utc::now();

    debug!("Creating OKR for {} (objective: {})", scope, input.objective);

    let query = format!(
        r#"
        INSERT INTO okrs (project_id, objective, key_results, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?)
        RETURNING {}
        "#,
        OKR_COLUMNS
    );

    let row = sqlx::query(&query)
        .bind(scope.id())
        .bind(&input.objective)
        .bind(input.key_results.get())
        .bind(now)
        .bind(now)
        .fetch_one(&mut *conn)
        .await
        .map_err(StorageError::Sqlx)?;

    row_to_okr(&row)
}

/// Replace objective and key results; `None` when no OKR matched `(id, project)`
pub async fn replace_okr(
    conn: &mut SqliteConnection,
    scope: ProjectScope,
    okr_id: i64,
    input: &OkrInput,
) -> StorageResult<Option<Okr>> {
    debug!("Replacing OKR {} for {}", okr_id, scope);

    let query = format!(
        r#"
        UPDATE okrs
        SET objective = ?, key_results = ?, updated_at = ?
        WHERE id = ? AND project_id = ?
        RETURNING {}
        "#,
        OKR_COLUMNS
    );

    let row = sqlx::query(&query)
        .bind(&input.objective)
        .bind(input.key_results.get())
        .bind(Utc::now())
        .bind(okr_id)
        .bind(scope.id())
        .fetch_optional(&mut *conn)
        .await
        .map_err(StorageError::Sqlx)?;

    row.as_ref().map(row_to_okr).transpose()
}

/// Delete an OKR, returning the deleted id when a row matched
pub async fn delete_okr(
    conn: &mut SqliteConnection,
    scope: ProjectScope,
    okr_id: i64,
) -> StorageResult<Option<i64>> {
    debug!("Deleting OKR {} for {}", okr_id, scope);

    sqlx::query_scalar::<_, i64>("DELETE FROM okrs WHERE id = ? AND project_id = ? RETURNING id")
        .bind(okr_id)
        .bind(scope.id())
        .fetch_optional(&mut *conn)
        .await
        .map_err(StorageError::Sqlx)
}

fn row_to_okr(row: &SqliteRow) -> StorageResult<Okr> {
    let key_results: String = row.try_get("key_results").map_err(StorageError::Sqlx)?;

    Ok(Okr {
        id: row.try_get("id").map_err(StorageError::Sqlx)?,
        objective: row.try_get("objective").map_err(StorageError::Sqlx)?,
        key_results: RawValue::from_string(key_results)?,
        created_at: row.try_get("created_at").map_err(StorageError::Sqlx)?,
        updated_at: row.try_get("updated_at").map_err(StorageError::Sqlx)?,
    })
}
