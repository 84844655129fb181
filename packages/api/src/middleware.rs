// ABOUTME: Middleware shared by every route
// ABOUTME: Permissive CORS with a one-day preflight cache and a JSON panic handler

use std::time::Duration;

use axum::{
    http::{header, HeaderName, Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
};
use tracing::error;

use crate::response::ErrorBody;

const PREFLIGHT_MAX_AGE: Duration = Duration::from_secs(86400);

/// CORS policy: any origin, the verbs the studio uses, and its identity headers
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static("x-user-id"),
            HeaderName::from_static("x-session-id"),
        ])
        .max_age(PREFLIGHT_MAX_AGE)
}

/// Create a panic handler that returns consistent error responses
pub fn create_panic_handler(
) -> CatchPanicLayer<fn(Box<dyn std::any::Any + Send + 'static>) -> Response> {
    CatchPanicLayer::custom(handle_panic)
}

fn handle_panic(err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    let panic_message = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic occurred"
    };

    error!(panic_message = %panic_message, "Handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody {
            error: "Internal server error".to_string(),
        }),
    )
        .into_response()
}
