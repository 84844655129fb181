// ABOUTME: Handlers for architecture diagram elements
// ABOUTME: The HTTP surface always works on the context canvas; moves change only the position

use archstudio_core::{require_finite, require_text, CanvasType, ValidationError};
use archstudio_storage::{architecture, ArchitectureElementCreateInput, ElementPosition};
use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use sqlx::SqliteConnection;
use tracing::info;

use crate::error::ApiResult;
use crate::request::ActionRequest;
use crate::response::found_or_empty;

/// Canvas served by the persistence endpoint
pub const ENDPOINT_CANVAS: CanvasType = CanvasType::Context;

#[derive(Debug, Deserialize)]
pub struct CreateElementRequest {
    #[serde(rename = "type")]
    pub element_type: Option<String>,
    pub name: Option<String>,
    pub x: Option<f64>,
    pub y: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct MoveElementRequest {
    pub id: Option<i64>,
    pub x: Option<f64>,
    pub y: Option<f64>,
}

pub async fn list_elements(
    conn: &mut SqliteConnection,
    request: &ActionRequest,
) -> ApiResult<Response> {
    let elements = architecture::list_elements(conn, request.scope, ENDPOINT_CANVAS).await?;
    Ok(Json(elements).into_response())
}

pub async fn create_element(
    conn: &mut SqliteConnection,
    request: &ActionRequest,
) -> ApiResult<Response> {
    let payload: CreateElementRequest = request.json_body()?;
    let input = ArchitectureElementCreateInput {
        element_type: require_text(payload.element_type, "type")?,
        name: require_text(payload.name, "name")?,
        x: require_finite(payload.x, "x")?,
        y: require_finite(payload.y, "y")?,
    };

    let element =
        architecture::create_element(conn, request.scope, ENDPOINT_CANVAS, &input).await?;
    info!(
        "Created {} element {} on {} canvas",
        element.element_type, element.id, element.canvas_type
    );

    Ok(Json(element).into_response())
}

pub async fn move_element(
    conn: &mut SqliteConnection,
    request: &ActionRequest,
) -> ApiResult<Response> {
    let payload: MoveElementRequest = request.json_body()?;
    let element_id = payload.id.ok_or(ValidationError::MissingField("id"))?;
    let position = ElementPosition {
        x: require_finite(payload.x, "x")?,
        y: require_finite(payload.y, "y")?,
    };

    let moved = architecture::move_element(conn, request.scope, element_id, position).await?;
    Ok(found_or_empty(moved))
}
