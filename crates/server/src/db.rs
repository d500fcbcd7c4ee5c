use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};

use crate::auth_api::AuthApi;
use crate::config::AppConfig;
use crate::repo::CatStore;

/// Shared application state passed to Axum handlers via `State`.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CatStore>,
    pub users: AuthApi,
    pub jwt_secret: Arc<String>,
}

impl AppState {
    pub fn new(store: Arc<dyn CatStore>, users: AuthApi, jwt_secret: impl Into<String>) -> Self {
        Self {
            store,
            users,
            jwt_secret: Arc::new(jwt_secret.into()),
        }
    }
}

/// Create the database connection pool. Uses `connect_lazy` so no
/// connections open until the first query.
pub fn create_pool(config: &AppConfig) -> Pool<Postgres> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(std::time::Duration::from_secs(5))
        .connect_lazy(&config.database_url)
        .expect("Failed to create database pool")
}

/// Run database migrations against the given pool.
pub async fn run_migrations(pool: &Pool<Postgres>) {
    sqlx::migrate!("../../migrations")
        .run(pool)
        .await
        .expect("Failed to run database migrations");
}
