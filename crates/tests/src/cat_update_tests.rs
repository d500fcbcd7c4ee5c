use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use uuid::Uuid;

use crate::common;

#[tokio::test]
async fn test_owner_can_update_their_cat() {
    let (app, _stub, _store) = common::test_app().await;
    let id = common::create_cat_as(&app, "alice", "Misu").await;
    let token = common::token_for("alice", "user");

    let patch = json!({ "name": "Misu II", "weight": 5.1 });
    let (status, response) =
        common::put_json(&app, &format!("/api/cats/{id}"), &patch, Some(&token)).await;

    assert_eq!(status, StatusCode::OK, "{response}");
    assert_eq!(response["name"], "Misu II");
    assert_eq!(response["weight"], 5.1);
    // Untouched fields keep their stored values.
    assert_eq!(response["breed"], "Tabby");
    assert_eq!(response["owner"], "alice");
}

#[tokio::test]
async fn test_non_owner_update_is_unauthorized() {
    let (app, _stub, _store) = common::test_app().await;
    let id = common::create_cat_as(&app, "alice", "Misu").await;
    let token = common::token_for("bob", "user");

    let patch = json!({ "name": "Stolen" });
    let (status, response) =
        common::put_json(&app, &format!("/api/cats/{id}"), &patch, Some(&token)).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(response["kind"], "Unauthorized");

    // The record is untouched.
    let (_, cat) = common::get(&app, &format!("/api/cats/{id}"), None).await;
    assert_eq!(cat["name"], "Misu");
}

#[tokio::test]
async fn test_update_missing_cat_is_not_found_even_without_permission() {
    let (app, _stub, _store) = common::test_app().await;

    // Anonymous caller, nonexistent id: existence is checked first, so
    // the answer is not-found rather than unauthorized.
    let patch = json!({ "name": "Nobody" });
    let (status, response) = common::put_json(
        &app,
        &format!("/api/cats/{}", Uuid::new_v4()),
        &patch,
        None,
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(response["kind"], "NotFound");
}

#[tokio::test]
async fn test_update_with_malformed_id_is_bad_request() {
    let (app, _stub, _store) = common::test_app().await;
    let token = common::token_for("alice", "user");

    let patch = json!({ "name": "X" });
    let (status, _) =
        common::put_json(&app, "/api/cats/garbage", &patch, Some(&token)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_ownership_comparison_is_case_insensitive() {
    let (app, _stub, _store) = common::test_app().await;
    let id = common::create_cat_as(&app, "Alice-1", "Misu").await;
    // Token subject differs only by case from the stored owner id.
    let token = common::token_for("alice-1", "user");

    let patch = json!({ "name": "Renamed" });
    let (status, response) =
        common::put_json(&app, &format!("/api/cats/{id}"), &patch, Some(&token)).await;

    assert_eq!(status, StatusCode::OK, "{response}");
    assert_eq!(response["name"], "Renamed");
}
