// ABOUTME: Handlers for the project vision surface
// ABOUTME: Read returns {} when the project row is missing; replace overwrites every field

use archstudio_storage::{vision, Vision};
use axum::response::Response;
use serde::Deserialize;
use sqlx::SqliteConnection;
use tracing::info;

use crate::error::ApiResult;
use crate::request::ActionRequest;
use crate::response::found_or_empty;

/// Replacement payload; absent fields are written as empty strings
#[derive(Debug, Default, Deserialize)]
pub struct ReplaceVisionRequest {
    pub vision: Option<String>,
    pub target_audience: Option<String>,
    pub value_proposition: Option<String>,
    pub timeline: Option<String>,
    pub budget: Option<String>,
    pub success_metric: Option<String>,
}

impl From<ReplaceVisionRequest> for Vision {
    fn from(request: ReplaceVisionRequest) -> Self {
        Vision {
            vision: request.vision.unwrap_or_default(),
            target_audience: request.target_audience.unwrap_or_default(),
            value_proposition: request.value_proposition.unwrap_or_default(),
            timeline: request.timeline.unwrap_or_default(),
            budget: request.budget.unwrap_or_default(),
            success_metric: request.success_metric.unwrap_or_default(),
        }
    }
}

pub async fn read_vision(conn: &mut SqliteConnection, request: &ActionRequest) -> ApiResult<Response> {
    let current = vision::get_vision(conn, request.scope).await?;
    Ok(found_or_empty(current))
}

pub async fn replace_vision(
    conn: &mut SqliteConnection,
    request: &ActionRequest,
) -> ApiResult<Response> {
    let payload: ReplaceVisionRequest = request.json_body()?;
    info!("Replacing vision for {}", request.scope);

    let written = vision::replace_vision(conn, request.scope, &payload.into()).await?;
    Ok(found_or_empty(written))
}
