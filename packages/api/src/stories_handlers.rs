// ABOUTME: Handlers for user stories
// ABOUTME: Lists newest first and creates stories with an optional epic

use archstudio_core::require_text;
use archstudio_storage::{stories, UserStoryCreateInput};
use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use sqlx::SqliteConnection;
use tracing::info;

use crate::error::ApiResult;
use crate::request::ActionRequest;

#[derive(Debug, Deserialize)]
pub struct CreateStoryRequest {
    pub role: Option<String>,
    pub action: Option<String>,
    pub benefit: Option<String>,
    pub priority: Option<String>,
    pub epic: Option<String>,
}

pub async fn list_stories(
    conn: &mut SqliteConnection,
    request: &ActionRequest,
) -> ApiResult<Response> {
    let stories = stories::list_stories(conn, request.scope).await?;
    Ok(Json(stories).into_response())
}

pub async fn create_story(
    conn: &mut SqliteConnection,
    request: &ActionRequest,
) -> ApiResult<Response> {
    let payload: CreateStoryRequest = request.json_body()?;
    let input = UserStoryCreateInput {
        role: require_text(payload.role, "role")?,
        action: require_text(payload.action, "action")?,
        benefit: require_text(payload.benefit, "benefit")?,
        priority: require_text(payload.priority, "priority")?,
        epic: payload.epic.unwrap_or_default(),
    };

    let story = stories::create_story(conn, request.scope, &input).await?;
    info!("Created story {} for {}", story.id, request.scope);

    Ok(Json(story).into_response())
}
