use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::GeoPoint;

// ---------------------------------------------------------------------------
// Domain Struct
// ---------------------------------------------------------------------------

/// A cat record held in the local store.
///
/// `owner` is the identity-service id of the principal that created the
/// record. It is set server-side at creation and never accepted from
/// client input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Cat {
    pub id: Uuid,
    pub name: String,
    pub breed: String,
    pub birthdate: NaiveDate,
    pub weight: f64,
    pub owner: String,
    pub location: GeoPoint,
}

// ---------------------------------------------------------------------------
// Request/Response DTOs
// ---------------------------------------------------------------------------

/// API response for a cat record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CatResponse {
    pub id: String,
    pub name: String,
    pub breed: String,
    pub birthdate: String,
    pub weight: f64,
    pub owner: String,
    pub location: GeoPoint,
}

impl From<Cat> for CatResponse {
    fn from(c: Cat) -> Self {
        Self {
            id: c.id.to_string(),
            name: c.name,
            breed: c.breed,
            birthdate: c.birthdate.to_string(),
            weight: c.weight,
            owner: c.owner,
            location: c.location,
        }
    }
}

/// Request body for creating a cat. Has no owner field on purpose:
/// ownership comes from the caller's principal.
#[derive(Debug, Clone, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct CreateCatRequest {
    #[cfg_attr(feature = "validation", validate(length(min = 1, max = 100)))]
    pub name: String,
    #[cfg_attr(feature = "validation", validate(length(min = 1, max = 100)))]
    pub breed: String,
    pub birthdate: NaiveDate,
    #[cfg_attr(feature = "validation", validate(range(min = 0.01, max = 200.0)))]
    pub weight: f64,
    pub location: GeoPoint,
}

/// Partial update for a cat. Absent fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UpdateCatRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub breed: Option<String>,
    #[serde(default)]
    pub birthdate: Option<NaiveDate>,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub location: Option<GeoPoint>,
}
