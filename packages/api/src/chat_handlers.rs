// ABOUTME: HTTP handler for the studio assistant
// ABOUTME: Decodes the chat request and relays the persona-led completion

use archstudio_ai::{ChatReply, ChatRequest, DEFAULT_PERSONA};
use axum::{body::Bytes, extract::State, Json};
use tracing::info;

use crate::error::{ApiError, ApiResult};
use crate::request::parse_json_body;
use crate::state::ApiState;

pub async fn chat(State(state): State<ApiState>, body: Bytes) -> ApiResult<Json<ChatReply>> {
    let request: ChatRequest = parse_json_body(&body)?;

    info!(
        "Chat request: context={}, history_turns={}",
        request.context.as_deref().unwrap_or(DEFAULT_PERSONA),
        request.history.len()
    );

    let reply = state.chat.reply(&request).await?;
    Ok(Json(reply))
}

/// Any method other than POST (preflights never reach the router)
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
