// ABOUTME: Router tests for the action-routed persistence endpoint
// ABOUTME: Exercises every surface through HTTP, including CORS, validation, and rollback

mod common;

use axum::http::{header, Method, StatusCode};
use archstudio_core::ProjectScope;
use common::{offline_chat, setup_app, setup_app_for_project};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

#[tokio::test]
async fn test_health_check() {
    let app = setup_app().await;

    let response = app.get("/health").await;
    assert_eq!(response.status, StatusCode::OK);

    let body = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "archstudio");
    assert!(body["version"].is_string());
    assert!(body["timestamp"].is_u64());
}

#[tokio::test]
async fn test_unknown_action_is_not_found() {
    let app = setup_app().await;

    for uri in ["/?action=unknown", "/", "/?action="] {
        let response = app.get(uri).await;
        assert_eq!(response.status, StatusCode::NOT_FOUND, "{}", uri);
        assert_eq!(response.json(), json!({ "error": "Not found" }));
    }
}

#[tokio::test]
async fn test_method_outside_table_is_not_found() {
    let app = setup_app().await;

    let response = app.send(Method::DELETE, "/?action=stories", None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app.send(Method::PATCH, "/?action=okrs", None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let app = setup_app().await;

    let response = app.get("/api/projects").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.json()["error"], "Not found");
}

#[tokio::test]
async fn test_preflight_answers_with_empty_body() {
    let app = setup_app().await;

    for uri in ["/?action=stories", "/?action=nonsense", "/chat"] {
        let response = app.send(Method::OPTIONS, uri, None).await;
        assert_eq!(response.status, StatusCode::OK, "{}", uri);
        assert!(response.body.is_empty());

        let methods = response
            .headers
            .get(header::ACCESS_CONTROL_ALLOW_METHODS)
            .expect("allow-methods header")
            .to_str()
            .unwrap()
            .to_string();
        for method in ["GET", "POST", "PUT", "DELETE", "OPTIONS"] {
            assert!(methods.contains(method), "{} missing from {}", method, methods);
        }

        assert_eq!(
            response.headers.get(header::ACCESS_CONTROL_MAX_AGE).unwrap(),
            "86400"
        );
    }
}

#[tokio::test]
async fn test_responses_allow_any_origin() {
    let app = setup_app().await;

    for uri in ["/?action=stories", "/?action=unknown"] {
        let response = app.get(uri).await;
        assert_eq!(
            response
                .headers
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .unwrap(),
            "*"
        );
    }
}

#[tokio::test]
async fn test_seeded_vision_is_blank() {
    let app = setup_app().await;

    let response = app.get("/?action=vision").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.json(),
        json!({
            "vision": "",
            "target_audience": "",
            "value_proposition": "",
            "timeline": "",
            "budget": "",
            "success_metric": ""
        })
    );
}

#[tokio::test]
async fn test_vision_replace_overwrites_every_field() {
    let app = setup_app().await;

    let first = json!({
        "vision": "One place for architecture decisions",
        "target_audience": "Platform teams",
        "value_proposition": "Fewer surprises",
        "timeline": "Q3",
        "budget": "Small",
        "success_metric": "Adoption"
    });
    let response = app.send(Method::PUT, "/?action=vision", Some(first.clone())).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json(), first);

    let response = app
        .send(Method::PUT, "/?action=vision", Some(json!({ "vision": "Narrower" })))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let current = app.get("/?action=vision").await.json();
    assert_eq!(current["vision"], "Narrower");
    assert_eq!(current["target_audience"], "");
    assert_eq!(current["success_metric"], "");
}

#[tokio::test]
async fn test_okr_lifecycle() {
    let app = setup_app().await;

    let response = app
        .send(
            Method::POST,
            "/?action=okrs",
            Some(json!({
                "objective": "Ship the studio",
                "key_results": [{ "text": "Three teams onboarded", "progress": 40 }]
            })),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    let created = response.json();
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["objective"], "Ship the studio");
    assert_eq!(created["key_results"][0]["progress"], 40);
    assert!(created["created_at"].is_string());

    let response = app
        .send(
            Method::PUT,
            "/?action=okrs",
            Some(json!({ "id": id, "objective": "Ship it twice", "key_results": [] })),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["objective"], "Ship it twice");

    let listed = app.get("/?action=okrs").await.json();
    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert_eq!(listed[0]["key_results"], json!([]));

    let response = app
        .send(Method::DELETE, "/?action=okrs", Some(json!({ "id": id })))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json(), json!({ "success": true, "id": id }));

    let response = app
        .send(Method::DELETE, "/?action=okrs", Some(json!({ "id": id })))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json(), json!({ "success": true, "id": null }));
}

#[tokio::test]
async fn test_okr_delete_accepts_query_id() {
    let app = setup_app().await;

    let created = app
        .send(
            Method::POST,
            "/?action=okrs",
            Some(json!({ "objective": "Trim scope", "key_results": {} })),
        )
        .await
        .json();
    let id = created["id"].as_i64().unwrap();

    let response = app
        .send(Method::DELETE, &format!("/?action=okrs&id={}", id), None)
        .await;
    assert_eq!(response.json(), json!({ "success": true, "id": id }));
}

#[tokio::test]
async fn test_okr_key_results_round_trip_verbatim() {
    let app = setup_app().await;

    let raw_key_results = r#"[{"kr":"Latency p99","target":1.50,"unit":"s"}]"#;
    let body = format!(
        r#"{{"objective":"Faster pages","key_results":{}}}"#,
        raw_key_results
    );

    let response = app.send_raw(Method::POST, "/?action=okrs", body).await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert!(response.text().contains(raw_key_results));

    let listed = app.get("/?action=okrs").await;
    assert!(listed.text().contains(raw_key_results));
}

#[tokio::test]
async fn test_okr_update_of_missing_id_returns_empty_object() {
    let app = setup_app().await;

    let response = app
        .send(
            Method::PUT,
            "/?action=okrs",
            Some(json!({ "id": 999, "objective": "Ghost", "key_results": [] })),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json(), json!({}));
}

#[tokio::test]
async fn test_okr_missing_fields_are_bad_requests() {
    let app = setup_app().await;

    let response = app
        .send(Method::POST, "/?action=okrs", Some(json!({ "key_results": [] })))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json(), json!({ "error": "objective is required" }));

    let response = app
        .send(Method::POST, "/?action=okrs", Some(json!({ "objective": "No results" })))
        .await;
    assert_eq!(response.json(), json!({ "error": "key_results is required" }));

    let response = app
        .send(
            Method::PUT,
            "/?action=okrs",
            Some(json!({ "objective": "x", "key_results": [] })),
        )
        .await;
    assert_eq!(response.json(), json!({ "error": "id is required" }));

    let response = app.send(Method::DELETE, "/?action=okrs", None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json(), json!({ "error": "id is required" }));
}

#[tokio::test]
async fn test_created_story_is_listed_first() {
    let app = setup_app().await;

    app.send(
        Method::POST,
        "/?action=stories",
        Some(json!({
            "role": "architect",
            "action": "sketch the context diagram",
            "benefit": "stakeholders see the boundaries",
            "priority": "Should",
            "epic": "Discovery"
        })),
    )
    .await;

    let response = app
        .send(
            Method::POST,
            "/?action=stories",
            Some(json!({
                "role": "developer",
                "action": "comment on a story",
                "benefit": "questions are recorded",
                "priority": "Must"
            })),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    let created = response.json();
    assert_eq!(created["epic"], "");
    assert_eq!(created["priority"], "Must");

    let listed = app.get("/?action=stories").await.json();
    let listed = listed.as_array().unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0]["id"], created["id"]);
    assert_eq!(listed[1]["epic"], "Discovery");
}

#[tokio::test]
async fn test_story_validation_leaves_no_row() {
    let app = setup_app().await;

    let response = app
        .send(
            Method::POST,
            "/?action=stories",
            Some(json!({ "action": "a", "benefit": "b", "priority": "Must" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json(), json!({ "error": "role is required" }));

    let response = app.send(Method::POST, "/?action=stories", None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json(), json!({ "error": "role is required" }));

    let listed = app.get("/?action=stories").await.json();
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn test_malformed_body_is_bad_request() {
    let app = setup_app().await;

    let response = app
        .send_raw(Method::POST, "/?action=stories", "{\"role\": ")
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let message = response.json()["error"].as_str().unwrap().to_string();
    assert!(message.starts_with("Invalid request body"), "{}", message);

    let response = app
        .send(
            Method::POST,
            "/?action=comments",
            Some(json!({ "story_id": "seven", "author": "a", "text": "t" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_comments_for_story_without_comments() {
    let app = setup_app().await;

    let response = app.get("/?action=comments&story_id=42").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json(), json!([]));
}

#[tokio::test]
async fn test_comment_listing_requires_numeric_story_id() {
    let app = setup_app().await;

    let response = app.get("/?action=comments").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json(), json!({ "error": "story_id is required" }));

    let response = app.get("/?action=comments&story_id=abc").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_comments_keep_conversation_order() {
    let app = setup_app().await;

    for text in ["First question", "An answer", "Follow-up"] {
        let response = app
            .send(
                Method::POST,
                "/?action=comments",
                Some(json!({ "story_id": 7, "author": "jo", "text": text })),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED);
        assert_eq!(response.json()["story_id"], 7);
    }

    let listed = app.get("/?action=comments&story_id=7").await.json();
    let texts: Vec<&str> = listed
        .as_array()
        .unwrap()
        .iter()
        .map(|comment| comment["text"].as_str().unwrap())
        .collect();
    assert_eq!(texts, vec!["First question", "An answer", "Follow-up"]);

    let other = app.get("/?action=comments&story_id=8").await.json();
    assert_eq!(other, json!([]));
}

#[tokio::test]
async fn test_architecture_element_lifecycle() {
    let app = setup_app().await;

    let response = app
        .send(
            Method::POST,
            "/?action=arch-elements",
            Some(json!({ "type": "system", "name": "Billing", "x": 120, "y": 80.5 })),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    let created = response.json();
    assert_eq!(created["type"], "system");
    assert_eq!(created["canvas_type"], "context");
    assert_eq!(created["x"], 120.0);

    let id = created["id"].as_i64().unwrap();
    let response = app
        .send(
            Method::PUT,
            "/?action=arch-elements",
            Some(json!({ "id": id, "x": 300, "y": -20 })),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let moved = response.json();
    assert_eq!(moved["x"], 300.0);
    assert_eq!(moved["y"], -20.0);
    assert_eq!(moved["name"], "Billing");

    let listed = app.get("/?action=arch-elements").await.json();
    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert_eq!(listed[0]["x"], 300.0);
}

#[tokio::test]
async fn test_moving_missing_element_returns_empty_object() {
    let app = setup_app().await;

    let response = app
        .send(
            Method::PUT,
            "/?action=arch-elements",
            Some(json!({ "id": 999, "x": 10, "y": 20 })),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json(), json!({}));
}

#[tokio::test]
async fn test_element_requires_coordinates() {
    let app = setup_app().await;

    let response = app
        .send(
            Method::POST,
            "/?action=arch-elements",
            Some(json!({ "type": "person", "name": "Customer", "x": 1 })),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json(), json!({ "error": "y is required" }));

    let listed: Value = app.get("/?action=arch-elements").await.json();
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn test_storage_fault_is_reported_as_json_500() {
    let app = setup_app().await;
    app.db.close().await;

    let response = app.get("/?action=stories").await;
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    let message = response.json()["error"].as_str().unwrap().to_string();
    assert!(message.starts_with("Database error"), "{}", message);
}

#[tokio::test]
async fn test_undecodable_query_still_answers_json() {
    let app = setup_app().await;

    for uri in ["/?action=%ZZ", "/?action=comments&story_id=%FF", "/?%"] {
        let response = app.get(uri).await;
        assert!(response.status.is_client_error(), "{}", uri);
        assert_eq!(
            response.headers.get(header::CONTENT_TYPE).unwrap(),
            "application/json",
            "{}",
            uri
        );
        assert!(response.json()["error"].is_string(), "{}", uri);
    }
}

#[tokio::test]
async fn test_configured_project_other_than_default() {
    let scope = ProjectScope::new(2).unwrap();
    let app = setup_app_for_project(scope, offline_chat()).await;

    let response = app
        .send(
            Method::POST,
            "/?action=stories",
            Some(json!({
                "role": "analyst",
                "action": "track a second product",
                "benefit": "both roadmaps live in one studio",
                "priority": "Must"
            })),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    let created = response.json();

    let listed = app.get("/?action=stories").await.json();
    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert_eq!(listed[0]["id"], created["id"]);

    let vision = app.get("/?action=vision").await;
    assert_eq!(vision.status, StatusCode::OK);
    assert_eq!(vision.json()["vision"], "");

    let response = app
        .send(
            Method::POST,
            "/?action=okrs",
            Some(json!({ "objective": "Second product", "key_results": [] })),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
}
