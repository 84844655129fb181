// ABOUTME: Common test utilities for router tests
// ABOUTME: Builds the app over an in-memory database and drives it with oneshot requests

use archstudio_ai::{ChatService, ChatSettings, PersonaCatalog};
use archstudio_api::{create_router, ApiState};
use archstudio_core::ProjectScope;
use archstudio_storage::Database;
use axum::{
    body::{Body, Bytes},
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

/// Test context holding the router and a handle on its database
pub struct TestApp {
    pub router: Router,
    #[allow(dead_code)]
    pub db: Database,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("response body is not JSON")
    }

    #[allow(dead_code)]
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

#[allow(dead_code)]
pub async fn setup_app() -> TestApp {
    setup_app_with_chat(offline_chat()).await
}

pub fn offline_chat() -> ChatService {
    ChatService::new(None, ChatSettings::default(), PersonaCatalog::builtin())
        .expect("Failed to build chat service")
}

pub async fn setup_app_with_chat(chat: ChatService) -> TestApp {
    setup_app_for_project(ProjectScope::default(), chat).await
}

pub async fn setup_app_for_project(scope: ProjectScope, chat: ChatService) -> TestApp {
    let db = Database::in_memory()
        .await
        .expect("Failed to create test database");
    db.ensure_project(scope)
        .await
        .expect("Failed to create project row");

    let state = ApiState::new(db.clone(), scope, chat);

    TestApp {
        router: create_router(state),
        db,
    }
}

impl TestApp {
    pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
        let body = body.map(|value| value.to_string()).unwrap_or_default();
        self.send_raw(method, uri, body).await
    }

    pub async fn send_raw(&self, method: Method, uri: &str, body: impl Into<String>) -> TestResponse {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::ORIGIN, "http://localhost:5173")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.into()))
            .unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.into_body().collect().await.unwrap().to_bytes();

        TestResponse {
            status,
            headers,
            body,
        }
    }

    #[allow(dead_code)]
    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Method::GET, uri, None).await
    }
}
