use axum::http::StatusCode;
use uuid::Uuid;

use crate::common;

#[tokio::test]
async fn test_cat_owner_resolves_through_identity_service() {
    let (app, stub, _store) = common::test_app().await;
    let id = common::create_cat_as(&app, "alice", "Misu").await;

    let (status, response) = common::get(&app, &format!("/api/cats/{id}/owner"), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["id"], "alice");
    assert_eq!(response["user_name"], "user-alice");

    let requests = stub.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, "/users/alice");
}

#[tokio::test]
async fn test_owner_of_missing_cat_is_not_found_without_downstream_call() {
    let (app, stub, _store) = common::test_app().await;

    let (status, _) =
        common::get(&app, &format!("/api/cats/{}/owner", Uuid::new_v4()), None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(stub.requests().is_empty());
}

#[tokio::test]
async fn test_owner_resolution_relays_upstream_failure_as_not_found() {
    let (app, stub, _store) = common::test_app().await;
    let id = common::create_cat_as(&app, "alice", "Misu").await;
    stub.fail_with(500);

    let (status, response) = common::get(&app, &format!("/api/cats/{id}/owner"), None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(response["message"], "Internal Server Error");
}
