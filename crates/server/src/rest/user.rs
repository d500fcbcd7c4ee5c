use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use shared_types::{AppError, Credentials, LoginResponse, RegisterRequest, UpdateUserRequest, User};

use crate::auth::Principal;
use crate::db::AppState;
use crate::error_convert::ValidateRequest;

// ---------------------------------------------------------------------------
// GET /api/users
// ---------------------------------------------------------------------------

/// List all users, relayed from the identity service.
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "All users", body = Vec<User>),
        (status = 404, description = "Identity service error", body = AppError)
    ),
    tag = "users"
)]
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, AppError> {
    let users = state.users.list_users().await?;
    Ok(Json(users))
}

// ---------------------------------------------------------------------------
// GET /api/users/token
// ---------------------------------------------------------------------------

/// Ask the identity service for a fresh check of the caller's token.
/// This is the one operation that re-validates the credential rather
/// than trusting the principal.
#[utoipa::path(
    get,
    path = "/api/users/token",
    responses(
        (status = 200, description = "Token subject", body = User),
        (status = 401, description = "Missing credential", body = AppError)
    ),
    security(("bearer" = [])),
    tag = "users"
)]
pub async fn check_token(
    State(state): State<AppState>,
    principal: Principal,
) -> Result<Json<User>, AppError> {
    let token = principal.require_token()?;
    let user = state.users.check_token(token).await?;
    Ok(Json(user))
}

// ---------------------------------------------------------------------------
// GET /api/users/{id}
// ---------------------------------------------------------------------------

/// Get a user by id, relayed from the identity service.
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(("id" = String, Path, description = "Identity-service user id")),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 404, description = "Not found", body = AppError)
    ),
    tag = "users"
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<User>, AppError> {
    let user = state.users.user_by_id(&id).await?;
    Ok(Json(user))
}

// ---------------------------------------------------------------------------
// POST /api/auth/login
// ---------------------------------------------------------------------------

/// Authenticate against the identity service.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = Credentials,
    responses(
        (status = 200, description = "Authenticated", body = LoginResponse),
        (status = 404, description = "Login rejected upstream", body = AppError)
    ),
    tag = "auth"
)]
pub async fn login(
    State(state): State<AppState>,
    Json(credentials): Json<Credentials>,
) -> Result<Json<LoginResponse>, AppError> {
    let response = state.users.login(&credentials).await?;
    Ok(Json(response))
}

// ---------------------------------------------------------------------------
// POST /api/users
// ---------------------------------------------------------------------------

/// Register a new user with the identity service.
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered", body = LoginResponse),
        (status = 422, description = "Invalid request", body = AppError)
    ),
    tag = "users"
)]
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<LoginResponse>), AppError> {
    body.validate_request()?;
    let response = state.users.register(&body).await?;
    tracing::info!(user = %response.user.id, "user registered");
    Ok((StatusCode::CREATED, Json(response)))
}

// ---------------------------------------------------------------------------
// PUT /api/users
// ---------------------------------------------------------------------------

/// Update the calling user. No target id is sent downstream; the
/// identity service derives the subject from the bearer token.
#[utoipa::path(
    put,
    path = "/api/users",
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Updated user", body = LoginResponse),
        (status = 401, description = "Missing credential", body = AppError)
    ),
    security(("bearer" = [])),
    tag = "users"
)]
pub async fn update_me(
    State(state): State<AppState>,
    principal: Principal,
    Json(body): Json<UpdateUserRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let token = principal.require_token()?;
    let response = state.users.update_self(token, &body).await?;
    Ok(Json(response))
}

// ---------------------------------------------------------------------------
// DELETE /api/users
// ---------------------------------------------------------------------------

/// Delete the calling user; subject derived from the token downstream.
#[utoipa::path(
    delete,
    path = "/api/users",
    responses(
        (status = 200, description = "Deleted user", body = LoginResponse),
        (status = 401, description = "Missing credential", body = AppError)
    ),
    security(("bearer" = [])),
    tag = "users"
)]
pub async fn delete_me(
    State(state): State<AppState>,
    principal: Principal,
) -> Result<Json<LoginResponse>, AppError> {
    let token = principal.require_token()?;
    let response = state.users.delete_self(token).await?;
    tracing::info!("user deleted self");
    Ok(Json(response))
}

// ---------------------------------------------------------------------------
// PUT /api/admin/users/{id}
// ---------------------------------------------------------------------------

/// Update any user by id. Requires a credential and the admin role;
/// authorization is purely role-based, decoupled from ownership.
#[utoipa::path(
    put,
    path = "/api/admin/users/{id}",
    params(("id" = String, Path, description = "Identity-service user id")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Updated user", body = LoginResponse),
        (status = 401, description = "Missing credential or not admin", body = AppError)
    ),
    security(("bearer" = [])),
    tag = "users"
)]
pub async fn admin_update_user(
    State(state): State<AppState>,
    principal: Principal,
    Path(id): Path<String>,
    Json(body): Json<UpdateUserRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let token = principal.require_token()?;
    principal.require_admin()?;
    let response = state.users.update_user(token, &id, &body).await?;
    Ok(Json(response))
}

// ---------------------------------------------------------------------------
// DELETE /api/admin/users/{id}
// ---------------------------------------------------------------------------

/// Delete any user by id. Requires a credential and the admin role.
#[utoipa::path(
    delete,
    path = "/api/admin/users/{id}",
    params(("id" = String, Path, description = "Identity-service user id")),
    responses(
        (status = 200, description = "Deleted user", body = LoginResponse),
        (status = 401, description = "Missing credential or not admin", body = AppError)
    ),
    security(("bearer" = [])),
    tag = "users"
)]
pub async fn admin_delete_user(
    State(state): State<AppState>,
    principal: Principal,
    Path(id): Path<String>,
) -> Result<Json<LoginResponse>, AppError> {
    let token = principal.require_token()?;
    principal.require_admin()?;
    let response = state.users.delete_user(token, &id).await?;
    tracing::info!(target_user = %id, "user deleted by admin");
    Ok(Json(response))
}
