use axum::http::StatusCode;
use serde_json::json;

use crate::common;

#[tokio::test]
async fn test_create_cat_success() {
    let (app, _stub, _store) = common::test_app().await;
    let token = common::token_for("alice", "user");

    let body = json!({
        "name": "Whiskers",
        "breed": "Maine Coon",
        "birthdate": "2021-03-15",
        "weight": 6.5,
        "location": { "lat": 60.17, "lng": 24.94 },
    });

    let (status, response) = common::post_json(&app, "/api/cats", &body, Some(&token)).await;

    assert_eq!(status, StatusCode::CREATED, "{response}");
    assert_eq!(response["name"], "Whiskers");
    assert_eq!(response["owner"], "alice");
    assert!(response.get("id").is_some());
}

#[tokio::test]
async fn test_create_cat_owner_always_caller_even_when_body_smuggles_one() {
    let (app, _stub, _store) = common::test_app().await;
    let token = common::token_for("alice", "user");

    let body = json!({
        "name": "Sneaky",
        "breed": "Siamese",
        "birthdate": "2022-01-01",
        "weight": 3.0,
        "owner": "mallory",
        "location": { "lat": 0.0, "lng": 0.0 },
    });

    let (status, response) = common::post_json(&app, "/api/cats", &body, Some(&token)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(response["owner"], "alice");
}

#[tokio::test]
async fn test_create_cat_anonymous_is_unauthorized() {
    let (app, _stub, _store) = common::test_app().await;

    let body = json!({
        "name": "Stray",
        "breed": "Unknown",
        "birthdate": "2020-01-01",
        "weight": 4.0,
        "location": { "lat": 1.0, "lng": 1.0 },
    });

    let (status, response) = common::post_json(&app, "/api/cats", &body, None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(response["kind"], "Unauthorized");
}

#[tokio::test]
async fn test_create_cat_invalid_token_is_unauthorized() {
    let (app, _stub, _store) = common::test_app().await;

    let body = json!({
        "name": "Ghost",
        "breed": "Unknown",
        "birthdate": "2020-01-01",
        "weight": 4.0,
        "location": { "lat": 1.0, "lng": 1.0 },
    });

    let (status, _) = common::post_json(&app, "/api/cats", &body, Some("not-a-valid-jwt")).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_cat_rejects_empty_name() {
    let (app, _stub, _store) = common::test_app().await;
    let token = common::token_for("alice", "user");

    let body = json!({
        "name": "",
        "breed": "Tabby",
        "birthdate": "2020-01-01",
        "weight": 4.0,
        "location": { "lat": 1.0, "lng": 1.0 },
    });

    let (status, response) = common::post_json(&app, "/api/cats", &body, Some(&token)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response["kind"], "ValidationError");
    assert!(response["field_errors"].get("name").is_some());
}
