use async_trait::async_trait;
use chrono::NaiveDate;
use shared_types::{AppError, Cat, GeoPoint, UpdateCatRequest};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::error_convert::SqlxErrorExt;
use crate::geo::Rectangle;

use super::{CatStore, NewCat};

const CAT_COLUMNS: &str = "id, name, breed, birthdate, weight, owner, lat, lng";

/// Postgres-backed cat store. Geospatial containment uses the built-in
/// geometric `point <@ polygon` operator against the rectangle's
/// polygon literal.
#[derive(Clone)]
pub struct PgCatStore {
    pool: Pool<Postgres>,
}

impl PgCatStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

/// Flat row shape; `lat`/`lng` columns fold into the location point.
#[derive(sqlx::FromRow)]
struct CatRow {
    id: Uuid,
    name: String,
    breed: String,
    birthdate: NaiveDate,
    weight: f64,
    owner: String,
    lat: f64,
    lng: f64,
}

impl From<CatRow> for Cat {
    fn from(r: CatRow) -> Self {
        Cat {
            id: r.id,
            name: r.name,
            breed: r.breed,
            birthdate: r.birthdate,
            weight: r.weight,
            owner: r.owner,
            location: GeoPoint {
                lat: r.lat,
                lng: r.lng,
            },
        }
    }
}

#[async_trait]
impl CatStore for PgCatStore {
    async fn list(&self) -> Result<Vec<Cat>, AppError> {
        let rows = sqlx::query_as::<_, CatRow>(&format!(
            "SELECT {CAT_COLUMNS} FROM cats ORDER BY name"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)?;

        Ok(rows.into_iter().map(Cat::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Cat>, AppError> {
        let row = sqlx::query_as::<_, CatRow>(&format!(
            "SELECT {CAT_COLUMNS} FROM cats WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)?;

        Ok(row.map(Cat::from))
    }

    async fn find_by_owner(&self, owner: &str) -> Result<Vec<Cat>, AppError> {
        let rows = sqlx::query_as::<_, CatRow>(&format!(
            "SELECT {CAT_COLUMNS} FROM cats WHERE owner = $1 ORDER BY name"
        ))
        .bind(owner)
        .fetch_all(&self.pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)?;

        Ok(rows.into_iter().map(Cat::from).collect())
    }

    async fn find_within(&self, bounds: &Rectangle) -> Result<Vec<Cat>, AppError> {
        let rows = sqlx::query_as::<_, CatRow>(&format!(
            "SELECT {CAT_COLUMNS} FROM cats WHERE point(lng, lat) <@ $1::polygon ORDER BY name"
        ))
        .bind(bounds.to_pg_polygon())
        .fetch_all(&self.pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)?;

        Ok(rows.into_iter().map(Cat::from).collect())
    }

    async fn insert(&self, new: NewCat) -> Result<Cat, AppError> {
        let row = sqlx::query_as::<_, CatRow>(&format!(
            "INSERT INTO cats (name, breed, birthdate, weight, owner, lat, lng) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {CAT_COLUMNS}"
        ))
        .bind(&new.name)
        .bind(&new.breed)
        .bind(new.birthdate)
        .bind(new.weight)
        .bind(&new.owner)
        .bind(new.location.lat)
        .bind(new.location.lng)
        .fetch_one(&self.pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)?;

        Ok(row.into())
    }

    async fn update(&self, id: Uuid, patch: &UpdateCatRequest) -> Result<Option<Cat>, AppError> {
        let row = sqlx::query_as::<_, CatRow>(&format!(
            "UPDATE cats SET \
                 name = COALESCE($2, name), \
                 breed = COALESCE($3, breed), \
                 birthdate = COALESCE($4, birthdate), \
                 weight = COALESCE($5, weight), \
                 lat = COALESCE($6, lat), \
                 lng = COALESCE($7, lng) \
             WHERE id = $1 \
             RETURNING {CAT_COLUMNS}"
        ))
        .bind(id)
        .bind(patch.name.as_deref())
        .bind(patch.breed.as_deref())
        .bind(patch.birthdate)
        .bind(patch.weight)
        .bind(patch.location.map(|p| p.lat))
        .bind(patch.location.map(|p| p.lng))
        .fetch_optional(&self.pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)?;

        Ok(row.map(Cat::from))
    }

    async fn delete(&self, id: Uuid) -> Result<Option<Cat>, AppError> {
        let row = sqlx::query_as::<_, CatRow>(&format!(
            "DELETE FROM cats WHERE id = $1 RETURNING {CAT_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)?;

        Ok(row.map(Cat::from))
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map_err(SqlxErrorExt::into_app_error)?;
        Ok(())
    }
}
