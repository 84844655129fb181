// ABOUTME: Entry point for the action-routed persistence endpoint
// ABOUTME: Resolves the route, then runs its handler inside one transaction per request

use std::collections::HashMap;

use archstudio_storage::{Database, StorageError};
use axum::{
    body::Bytes,
    extract::{rejection::QueryRejection, Query, State},
    http::Method,
    response::{IntoResponse, Response},
};
use sqlx::SqliteConnection;
use tracing::{debug, warn};

use crate::error::{ApiError, ApiResult};
use crate::request::ActionRequest;
use crate::routing::Route;
use crate::state::ApiState;
use crate::{
    architecture_handlers, comments_handlers, okrs_handlers, stories_handlers, vision_handlers,
};

pub async fn dispatch(
    State(state): State<ApiState>,
    method: Method,
    query: Result<Query<HashMap<String, String>>, QueryRejection>,
    body: Bytes,
) -> Response {
    let params = match query {
        Ok(Query(params)) => params,
        Err(rejection) => return ApiError::InvalidQuery(rejection.body_text()).into_response(),
    };
    let action = params.get("action").map(String::as_str).unwrap_or_default();

    let Some(route) = Route::resolve(&method, action) else {
        debug!("No route for {} action='{}'", method, action);
        return ApiError::NotFound.into_response();
    };

    let request = ActionRequest {
        scope: state.scope,
        params,
        body,
    };

    match run_in_transaction(&state.db, route, &request).await {
        Ok(mut response) => {
            *response.status_mut() = route.success_status();
            response
        }
        Err(err) => err.into_response(),
    }
}

/// Commit on success; roll back on any failure, including validation
async fn run_in_transaction(
    db: &Database,
    route: Route,
    request: &ActionRequest,
) -> ApiResult<Response> {
    let mut tx = db.begin().await?;

    match execute(&mut tx, route, request).await {
        Ok(response) => {
            tx.commit().await.map_err(StorageError::Sqlx)?;
            Ok(response)
        }
        Err(err) => {
            if let Err(rollback_err) = tx.rollback().await {
                warn!("Rollback failed for {:?}: {}", route, rollback_err);
            }
            Err(err)
        }
    }
}

async fn execute(
    conn: &mut SqliteConnection,
    route: Route,
    request: &ActionRequest,
) -> ApiResult<Response> {
    match route {
        Route::ReadVision => vision_handlers::read_vision(conn, request).await,
        Route::ReplaceVision => vision_handlers::replace_vision(conn, request).await,
        Route::ListOkrs => okrs_handlers::list_okrs(conn, request).await,
        Route::CreateOkr => okrs_handlers::create_okr(conn, request).await,
        Route::ReplaceOkr => okrs_handlers::replace_okr(conn, request).await,
        Route::DeleteOkr => okrs_handlers::delete_okr(conn, request).await,
        Route::ListStories => stories_handlers::list_stories(conn, request).await,
        Route::CreateStory => stories_handlers::create_story(conn, request).await,
        Route::ListComments => comments_handlers::list_comments(conn, request).await,
        Route::CreateComment => comments_handlers::create_comment(conn, request).await,
        Route::ListElements => architecture_handlers::list_elements(conn, request).await,
        Route::CreateElement => architecture_handlers::create_element(conn, request).await,
        Route::MoveElement => architecture_handlers::move_element(conn, request).await,
    }
}
