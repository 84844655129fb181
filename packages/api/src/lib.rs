// ABOUTME: HTTP API layer for Architecture Studio
// ABOUTME: Action-routed persistence endpoint, chat proxy, health check, and the shared middleware stack

pub mod architecture_handlers;
pub mod chat_handlers;
pub mod comments_handlers;
pub mod dispatch;
pub mod error;
pub mod health;
pub mod middleware;
pub mod okrs_handlers;
pub mod request;
pub mod response;
pub mod routing;
pub mod state;
pub mod stories_handlers;
pub mod vision_handlers;

use axum::{
    routing::{any, get, post},
    Router,
};
use tower_http::trace::TraceLayer;

pub use error::{ApiError, ApiResult};
pub use routing::{Action, Route};
pub use state::ApiState;

/// Build the application router with every endpoint and middleware layer
pub fn create_router(state: ApiState) -> Router {
    Router::new()
        .route("/", any(dispatch::dispatch))
        .route(
            "/chat",
            post(chat_handlers::chat).fallback(chat_handlers::method_not_allowed),
        )
        .route("/health", get(health::health_check))
        .fallback(response::not_found)
        .with_state(state)
        .layer(middleware::create_panic_handler())
        .layer(middleware::cors_layer())
        .layer(TraceLayer::new_for_http())
}
