use axum::http::StatusCode;

use crate::common;

#[tokio::test]
async fn test_list_users_relays_identity_service() {
    let (app, stub, _store) = common::test_app().await;

    let (status, response) = common::get(&app, "/api/users", None).await;

    assert_eq!(status, StatusCode::OK);
    let users = response.as_array().unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[0]["id"], "u1");

    let requests = stub.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].path, "/users");
    // No credential is forwarded for the public listing.
    assert!(requests[0].bearer.is_none());
}

#[tokio::test]
async fn test_get_user_by_id() {
    let (app, stub, _store) = common::test_app().await;

    let (status, response) = common::get(&app, "/api/users/u42", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["id"], "u42");
    assert_eq!(stub.requests()[0].path, "/users/u42");
}

#[tokio::test]
async fn test_upstream_503_becomes_not_found_with_status_text() {
    let (app, stub, _store) = common::test_app().await;
    stub.fail_with(503);

    let (status, response) = common::get(&app, "/api/users/u1", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(response["kind"], "NotFound");
    assert_eq!(response["message"], "Service Unavailable");
}

#[tokio::test]
async fn test_upstream_4xx_also_collapses_to_not_found() {
    let (app, stub, _store) = common::test_app().await;
    stub.fail_with(403);

    let (status, response) = common::get(&app, "/api/users", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(response["message"], "Forbidden");
}

#[tokio::test]
async fn test_check_token_forwards_bearer_and_returns_subject() {
    let (app, stub, _store) = common::test_app().await;
    let token = common::token_for("alice", "user");

    let (status, response) = common::get(&app, "/api/users/token", Some(&token)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["id"], "alice");

    let requests = stub.requests();
    assert_eq!(requests[0].path, "/users/token");
    assert_eq!(requests[0].bearer.as_deref(), Some(token.as_str()));
}

#[tokio::test]
async fn test_check_token_without_credential_is_unauthorized() {
    let (app, stub, _store) = common::test_app().await;

    let (status, response) = common::get(&app, "/api/users/token", None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(response["kind"], "Unauthorized");
    // Rejected locally, before any downstream call.
    assert!(stub.requests().is_empty());
}
