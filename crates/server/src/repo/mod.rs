pub mod postgres;

use async_trait::async_trait;
use chrono::NaiveDate;
use shared_types::{AppError, Cat, GeoPoint, UpdateCatRequest};
use uuid::Uuid;

/// Fields for a cat about to be persisted. The owner is already
/// resolved from the creating principal by the time this is built.
#[derive(Debug, Clone)]
pub struct NewCat {
    pub name: String,
    pub breed: String,
    pub birthdate: NaiveDate,
    pub weight: f64,
    pub owner: String,
    pub location: GeoPoint,
}

/// Persistence contract for the cat collection.
///
/// The Postgres implementation is used in production; tests substitute
/// an in-memory store so the gateway's authorization logic can be
/// exercised without a database.
#[async_trait]
pub trait CatStore: Send + Sync {
    /// All cat records.
    async fn list(&self) -> Result<Vec<Cat>, AppError>;

    /// Find a single cat by id.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Cat>, AppError>;

    /// Cats whose owner id matches.
    async fn find_by_owner(&self, owner: &str) -> Result<Vec<Cat>, AppError>;

    /// Cats whose location falls within the bounding rectangle,
    /// boundary inclusive.
    async fn find_within(&self, bounds: &crate::geo::Rectangle) -> Result<Vec<Cat>, AppError>;

    /// Persist a new cat and return it with its assigned id.
    async fn insert(&self, new: NewCat) -> Result<Cat, AppError>;

    /// Apply a partial update and return the post-update record, or
    /// `None` if no such cat exists.
    async fn update(&self, id: Uuid, patch: &UpdateCatRequest) -> Result<Option<Cat>, AppError>;

    /// Remove a cat and return the deleted record, or `None` if no
    /// such cat exists.
    async fn delete(&self, id: Uuid) -> Result<Option<Cat>, AppError>;

    /// Connectivity probe for the health check.
    async fn ping(&self) -> Result<(), AppError>;
}
