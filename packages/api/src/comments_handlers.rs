// ABOUTME: Handlers for comments attached to user stories
// ABOUTME: Comments are keyed by story id only; unknown stories simply have no comments

use archstudio_core::{require_text, ValidationError};
use archstudio_storage::{comments, CommentCreateInput};
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
pub struct CreateCommentRequest {
    pub story_id: Option<i64>,
    pub author: Option<String>,
    pub text: Option<String>,
}

/// Comments for the `story_id` query parameter, oldest first
pub async fn list_comments(
    conn: &mut SqliteConnection,
    request: &ActionRequest,
) -> ApiResult<Response> {
    let story_id = request.required_query_id("story_id")?;
    let comments = comments::list_comments(conn, story_id).await?;
    Ok(Json(comments).into_response())
}

pub async fn create_comment(
    conn: &mut SqliteConnection,
    request: &ActionRequest,
) -> ApiResult<Response> {
    let payload: CreateCommentRequest = request.json_body()?;
    let input = CommentCreateInput {
        story_id: payload
            .story_id
            .ok_or(ValidationError::MissingField("story_id"))?,
        author: require_text(payload.author, "author")?,
        text: require_text(payload.text, "text")?,
    };

    let comment = comments::create_comment(conn, &input).await?;
    info!("Created comment {} on story {}", comment.id, comment.story_id);

    Ok(Json(comment).into_response())
}
