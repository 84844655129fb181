// ABOUTME: Handlers for objectives and key results
// ABOUTME: Key results pass through as raw JSON; replace and delete answer {} or a null id on no match

use archstudio_core::{require_text, ValidationError};
use archstudio_storage::{okrs, OkrDeletion, OkrInput};
use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::value::RawValue;
use sqlx::SqliteConnection;
use tracing::info;

use crate::error::ApiResult;
use crate::request::ActionRequest;
use crate::response::found_or_empty;

#[derive(Debug, Deserialize)]
pub struct OkrRequest {
    pub id: Option<i64>,
    pub objective: Option<String>,
    pub key_results: Option<Box<RawValue>>,
}

impl OkrRequest {
    fn into_input(self) -> Result<OkrInput, ValidationError> {
        Ok(OkrInput {
            objective: require_text(self.objective, "objective")?,
            key_results: self
                .key_results
                .ok_or(ValidationError::MissingField("key_results"))?,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct DeleteOkrRequest {
    pub id: Option<i64>,
}

pub async fn list_okrs(conn: &mut SqliteConnection, request: &ActionRequest) -> ApiResult<Response> {
    let okrs = okrs::list_okrs(conn, request.scope).await?;
    Ok(Json(okrs).into_response())
}

pub async fn create_okr(conn: &mut SqliteConnection, request: &ActionRequest) -> ApiResult<Response> {
    let input = request.json_body::<OkrRequest>()?.into_input()?;

    let okr = okrs::create_okr(conn, request.scope, &input).await?;
    info!("Created OKR {} for {}", okr.id, request.scope);

    Ok(Json(okr).into_response())
}

pub async fn replace_okr(conn: &mut SqliteConnection, request: &ActionRequest) -> ApiResult<Response> {
    let payload: OkrRequest = request.json_body()?;
    let okr_id = payload.id.ok_or(ValidationError::MissingField("id"))?;
    let input = payload.into_input()?;

    let replaced = okrs::replace_okr(conn, request.scope, okr_id, &input).await?;
    if replaced.is_some() {
        info!("Replaced OKR {} for {}", okr_id, request.scope);
    }

    Ok(found_or_empty(replaced))
}

/// Delete by `id` from the body, or from the `id` query parameter
pub async fn delete_okr(conn: &mut SqliteConnection, request: &ActionRequest) -> ApiResult<Response> {
    let payload: DeleteOkrRequest = request.json_body()?;
    let okr_id = match payload.id {
        Some(id) => id,
        None => request.required_query_id("id")?,
    };

    let deleted = okrs::delete_okr(conn, request.scope, okr_id).await?;
    if let Some(id) = deleted {
        info!("Deleted OKR {} for {}", id, request.scope);
    }

    Ok(Json(OkrDeletion {
        success: true,
        id: deleted,
    })
    .into_response())
}
