use axum::Json;
use shared_types::{
    AppError, AppErrorKind, CatResponse, CreateCatRequest, Credentials, GeoPoint, LoginResponse,
    RegisterRequest, Role, UpdateCatRequest, UpdateUserRequest, User,
};
use utoipa::OpenApi;

use crate::health::HealthResponse;
use crate::rest;

/// OpenAPI document covering the whole gateway surface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Cat Gateway API",
        description = "Unified query/mutation surface over a local cat store and a remote identity service"
    ),
    paths(
        rest::cat::list_cats,
        rest::cat::get_cat,
        rest::cat::cats_by_area,
        rest::cat::cats_by_owner,
        rest::cat::get_cat_owner,
        rest::cat::create_cat,
        rest::cat::update_cat,
        rest::cat::delete_cat,
        rest::cat::admin_update_cat,
        rest::cat::admin_delete_cat,
        rest::user::list_users,
        rest::user::check_token,
        rest::user::get_user,
        rest::user::login,
        rest::user::register,
        rest::user::update_me,
        rest::user::delete_me,
        rest::user::admin_update_user,
        rest::user::admin_delete_user,
        crate::health::health_check,
    ),
    components(schemas(
        AppError,
        AppErrorKind,
        CatResponse,
        CreateCatRequest,
        UpdateCatRequest,
        Credentials,
        RegisterRequest,
        UpdateUserRequest,
        LoginResponse,
        User,
        Role,
        GeoPoint,
        HealthResponse,
    )),
    tags(
        (name = "cats", description = "Cat resource resolver"),
        (name = "users", description = "Identity mediator"),
        (name = "auth", description = "Authentication relay"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;

/// GET /api-docs/openapi.json
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
