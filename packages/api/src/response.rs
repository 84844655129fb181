// ABOUTME: Shared response bodies for the API
// ABOUTME: Error envelope, the empty-object reply, and the catch-all 404

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ApiError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Serialize `value`, or reply with `{}` when there is nothing to return
pub fn found_or_empty<T: Serialize>(value: Option<T>) -> Response {
    match value {
        Some(value) => Json(value).into_response(),
        None => Json(Value::Object(Map::new())).into_response(),
    }
}

/// Fallback for any path outside the router
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}
