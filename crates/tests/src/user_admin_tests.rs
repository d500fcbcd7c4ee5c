use axum::http::StatusCode;
use serde_json::json;

use crate::common;

#[tokio::test]
async fn test_admin_update_carries_explicit_target_id() {
    let (app, stub, _store) = common::test_app().await;
    let admin = common::token_for("root", "admin");

    let body = json!({ "user_name": "renamed-by-admin" });
    let (status, response) =
        common::put_json(&app, "/api/admin/users/u7", &body, Some(&admin)).await;

    assert_eq!(status, StatusCode::OK, "{response}");
    assert_eq!(response["user"]["id"], "u7");

    let requests = stub.requests();
    assert_eq!(requests[0].method, "PUT");
    assert_eq!(requests[0].path, "/users/u7");
    assert_eq!(requests[0].bearer.as_deref(), Some(admin.as_str()));
}

#[tokio::test]
async fn test_admin_delete_targets_id_in_path() {
    let (app, stub, _store) = common::test_app().await;
    let admin = common::token_for("root", "admin");

    let (status, response) = common::delete(&app, "/api/admin/users/u7", Some(&admin)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["message"], "Deleted");
    assert_eq!(stub.requests()[0].path, "/users/u7");
}

#[tokio::test]
async fn test_non_admin_role_is_rejected_before_downstream() {
    let (app, stub, _store) = common::test_app().await;
    let user = common::token_for("alice", "user");

    let body = json!({ "user_name": "nope" });
    let (status, response) =
        common::put_json(&app, "/api/admin/users/u7", &body, Some(&user)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(response["kind"], "Unauthorized");

    let (status, _) = common::delete(&app, "/api/admin/users/u7", Some(&user)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    assert!(stub.requests().is_empty());
}

#[tokio::test]
async fn test_missing_token_is_rejected_before_role_check() {
    let (app, stub, _store) = common::test_app().await;

    let body = json!({ "user_name": "nope" });
    let (status, _) = common::put_json(&app, "/api/admin/users/u7", &body, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = common::delete(&app, "/api/admin/users/u7", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    assert!(stub.requests().is_empty());
}
