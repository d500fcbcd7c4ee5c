pub mod cat;
pub mod user;

use axum::{
    routing::{get, post},
    Router,
};

use crate::db::AppState;
use crate::health;
use crate::openapi;

/// Build the gateway's REST router.
pub fn api_router() -> Router<AppState> {
    Router::new()
        // Cats: local resource resolver
        .route("/api/cats", get(cat::list_cats).post(cat::create_cat))
        .route("/api/cats/area", get(cat::cats_by_area))
        .route("/api/cats/owner/{owner_id}", get(cat::cats_by_owner))
        .route(
            "/api/cats/{id}",
            get(cat::get_cat)
                .put(cat::update_cat)
                .delete(cat::delete_cat),
        )
        .route("/api/cats/{id}/owner", get(cat::get_cat_owner))
        .route(
            "/api/admin/cats/{id}",
            axum::routing::put(cat::admin_update_cat).delete(cat::admin_delete_cat),
        )
        // Users: identity mediator
        .route(
            "/api/users",
            get(user::list_users)
                .post(user::register)
                .put(user::update_me)
                .delete(user::delete_me),
        )
        .route("/api/users/token", get(user::check_token))
        .route("/api/users/{id}", get(user::get_user))
        .route(
            "/api/admin/users/{id}",
            axum::routing::put(user::admin_update_user).delete(user::admin_delete_user),
        )
        .route("/api/auth/login", post(user::login))
        // Plumbing
        .route("/health", get(health::health_check))
        .route("/api-docs/openapi.json", get(openapi::openapi_json))
}
