use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use shared_types::{AppError, CatResponse, CreateCatRequest, GeoPoint, UpdateCatRequest, User};

use crate::auth::Principal;
use crate::db::AppState;
use crate::error_convert::ValidateRequest;
use crate::geo::rectangle_bounds;
use crate::repo::NewCat;

// ---------------------------------------------------------------------------
// Query parameters
// ---------------------------------------------------------------------------

/// Two opposite corners of the search rectangle.
#[derive(Debug, Clone, Deserialize, utoipa::IntoParams)]
pub struct AreaParams {
    pub top_right_lat: f64,
    pub top_right_lng: f64,
    pub bottom_left_lat: f64,
    pub bottom_left_lng: f64,
}

fn parse_cat_id(id: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(id).map_err(|_| AppError::bad_request("Invalid cat id"))
}

// ---------------------------------------------------------------------------
// GET /api/cats
// ---------------------------------------------------------------------------

/// List all cats.
#[utoipa::path(
    get,
    path = "/api/cats",
    responses(
        (status = 200, description = "All cat records", body = Vec<CatResponse>)
    ),
    tag = "cats"
)]
pub async fn list_cats(State(state): State<AppState>) -> Result<Json<Vec<CatResponse>>, AppError> {
    let cats = state.store.list().await?;
    Ok(Json(cats.into_iter().map(CatResponse::from).collect()))
}

// ---------------------------------------------------------------------------
// GET /api/cats/{id}
// ---------------------------------------------------------------------------

/// Get a single cat by id.
#[utoipa::path(
    get,
    path = "/api/cats/{id}",
    params(("id" = String, Path, description = "Cat UUID")),
    responses(
        (status = 200, description = "Cat found", body = CatResponse),
        (status = 404, description = "Not found", body = AppError)
    ),
    tag = "cats"
)]
pub async fn get_cat(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CatResponse>, AppError> {
    let id = parse_cat_id(&id)?;
    let cat = state
        .store
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Cat not found"))?;
    Ok(Json(cat.into()))
}

// ---------------------------------------------------------------------------
// GET /api/cats/area
// ---------------------------------------------------------------------------

/// List cats whose location falls within the rectangle spanned by the
/// top-right and bottom-left corners. Boundary points are included.
#[utoipa::path(
    get,
    path = "/api/cats/area",
    params(AreaParams),
    responses(
        (status = 200, description = "Cats inside the rectangle", body = Vec<CatResponse>)
    ),
    tag = "cats"
)]
pub async fn cats_by_area(
    State(state): State<AppState>,
    Query(params): Query<AreaParams>,
) -> Result<Json<Vec<CatResponse>>, AppError> {
    let bounds = rectangle_bounds(
        GeoPoint {
            lat: params.top_right_lat,
            lng: params.top_right_lng,
        },
        GeoPoint {
            lat: params.bottom_left_lat,
            lng: params.bottom_left_lng,
        },
    );
    let cats = state.store.find_within(&bounds).await?;
    Ok(Json(cats.into_iter().map(CatResponse::from).collect()))
}

// ---------------------------------------------------------------------------
// GET /api/cats/owner/{owner_id}
// ---------------------------------------------------------------------------

/// List cats belonging to a given owner.
#[utoipa::path(
    get,
    path = "/api/cats/owner/{owner_id}",
    params(("owner_id" = String, Path, description = "Identity-service user id")),
    responses(
        (status = 200, description = "Cats with matching owner", body = Vec<CatResponse>)
    ),
    tag = "cats"
)]
pub async fn cats_by_owner(
    State(state): State<AppState>,
    Path(owner_id): Path<String>,
) -> Result<Json<Vec<CatResponse>>, AppError> {
    let cats = state.store.find_by_owner(&owner_id).await?;
    Ok(Json(cats.into_iter().map(CatResponse::from).collect()))
}

// ---------------------------------------------------------------------------
// GET /api/cats/{id}/owner
// ---------------------------------------------------------------------------

/// Resolve the owner of a cat from the identity service.
#[utoipa::path(
    get,
    path = "/api/cats/{id}/owner",
    params(("id" = String, Path, description = "Cat UUID")),
    responses(
        (status = 200, description = "Owner user record", body = User),
        (status = 404, description = "Cat or owner not found", body = AppError)
    ),
    tag = "cats"
)]
pub async fn get_cat_owner(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<User>, AppError> {
    let id = parse_cat_id(&id)?;
    let cat = state
        .store
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Cat not found"))?;
    let owner = state.users.user_by_id(&cat.owner).await?;
    Ok(Json(owner))
}

// ---------------------------------------------------------------------------
// POST /api/cats
// ---------------------------------------------------------------------------

/// Create a cat. The owner is always the calling principal; client
/// input cannot set it.
#[utoipa::path(
    post,
    path = "/api/cats",
    request_body = CreateCatRequest,
    responses(
        (status = 201, description = "Cat created", body = CatResponse),
        (status = 401, description = "Missing credential", body = AppError)
    ),
    security(("bearer" = [])),
    tag = "cats"
)]
pub async fn create_cat(
    State(state): State<AppState>,
    principal: Principal,
    Json(body): Json<CreateCatRequest>,
) -> Result<(StatusCode, Json<CatResponse>), AppError> {
    principal.require_token()?;
    body.validate_request()?;

    let owner = principal
        .id
        .clone()
        .ok_or_else(|| AppError::unauthorized("Unauthorized"))?;

    let cat = state
        .store
        .insert(NewCat {
            name: body.name,
            breed: body.breed,
            birthdate: body.birthdate,
            weight: body.weight,
            owner,
            location: body.location,
        })
        .await?;

    tracing::info!(cat_id = %cat.id, owner = %cat.owner, "cat created");
    Ok((StatusCode::CREATED, Json(cat.into())))
}

// ---------------------------------------------------------------------------
// PUT /api/cats/{id}
// ---------------------------------------------------------------------------

/// Update a cat owned by the caller. Existence is checked before
/// ownership: a missing cat reports not-found even to callers who
/// would lack permission.
#[utoipa::path(
    put,
    path = "/api/cats/{id}",
    params(("id" = String, Path, description = "Cat UUID")),
    request_body = UpdateCatRequest,
    responses(
        (status = 200, description = "Updated cat", body = CatResponse),
        (status = 401, description = "Caller is not the owner", body = AppError),
        (status = 404, description = "Not found", body = AppError)
    ),
    security(("bearer" = [])),
    tag = "cats"
)]
pub async fn update_cat(
    State(state): State<AppState>,
    principal: Principal,
    Path(id): Path<String>,
    Json(body): Json<UpdateCatRequest>,
) -> Result<Json<CatResponse>, AppError> {
    let id = parse_cat_id(&id)?;

    let cat = state
        .store
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Cat not found"))?;
    principal.require_owner(&cat.owner)?;

    let updated = state
        .store
        .update(id, &body)
        .await?
        .ok_or_else(|| AppError::not_found("Cat not found"))?;
    Ok(Json(updated.into()))
}

// ---------------------------------------------------------------------------
// DELETE /api/cats/{id}
// ---------------------------------------------------------------------------

/// Delete a cat owned by the caller; returns the deleted record.
#[utoipa::path(
    delete,
    path = "/api/cats/{id}",
    params(("id" = String, Path, description = "Cat UUID")),
    responses(
        (status = 200, description = "Deleted cat", body = CatResponse),
        (status = 401, description = "Caller is not the owner", body = AppError),
        (status = 404, description = "Not found", body = AppError)
    ),
    security(("bearer" = [])),
    tag = "cats"
)]
pub async fn delete_cat(
    State(state): State<AppState>,
    principal: Principal,
    Path(id): Path<String>,
) -> Result<Json<CatResponse>, AppError> {
    let id = parse_cat_id(&id)?;

    let cat = state
        .store
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Cat not found"))?;
    principal.require_owner(&cat.owner)?;

    let deleted = state
        .store
        .delete(id)
        .await?
        .ok_or_else(|| AppError::not_found("Cat not found"))?;
    tracing::info!(cat_id = %id, "cat deleted");
    Ok(Json(deleted.into()))
}

// ---------------------------------------------------------------------------
// PUT /api/admin/cats/{id}
// ---------------------------------------------------------------------------

/// Update any cat. Admin role required; ownership is not checked.
#[utoipa::path(
    put,
    path = "/api/admin/cats/{id}",
    params(("id" = String, Path, description = "Cat UUID")),
    request_body = UpdateCatRequest,
    responses(
        (status = 200, description = "Updated cat", body = CatResponse),
        (status = 401, description = "Caller is not an admin", body = AppError),
        (status = 404, description = "Not found", body = AppError)
    ),
    security(("bearer" = [])),
    tag = "cats"
)]
pub async fn admin_update_cat(
    State(state): State<AppState>,
    principal: Principal,
    Path(id): Path<String>,
    Json(body): Json<UpdateCatRequest>,
) -> Result<Json<CatResponse>, AppError> {
    principal.require_admin()?;
    let id = parse_cat_id(&id)?;

    let updated = state
        .store
        .update(id, &body)
        .await?
        .ok_or_else(|| AppError::not_found("Cat not found"))?;
    Ok(Json(updated.into()))
}

// ---------------------------------------------------------------------------
// DELETE /api/admin/cats/{id}
// ---------------------------------------------------------------------------

/// Delete any cat. Admin role required; ownership is not checked.
#[utoipa::path(
    delete,
    path = "/api/admin/cats/{id}",
    params(("id" = String, Path, description = "Cat UUID")),
    responses(
        (status = 200, description = "Deleted cat", body = CatResponse),
        (status = 401, description = "Caller is not an admin", body = AppError),
        (status = 404, description = "Not found", body = AppError)
    ),
    security(("bearer" = [])),
    tag = "cats"
)]
pub async fn admin_delete_cat(
    State(state): State<AppState>,
    principal: Principal,
    Path(id): Path<String>,
) -> Result<Json<CatResponse>, AppError> {
    principal.require_admin()?;
    let id = parse_cat_id(&id)?;

    let deleted = state
        .store
        .delete(id)
        .await?
        .ok_or_else(|| AppError::not_found("Cat not found"))?;
    tracing::info!(cat_id = %id, "cat deleted by admin");
    Ok(Json(deleted.into()))
}
