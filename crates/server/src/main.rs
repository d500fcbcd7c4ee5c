use std::sync::Arc;

use axum::middleware;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use server::auth::middleware::auth_middleware;
use server::auth_api::AuthApi;
use server::config::AppConfig;
use server::db::{self, AppState};
use server::health;
use server::repo::postgres::PgCatStore;
use server::rest;

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match AppConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("configuration error: {e}");
            std::process::exit(1);
        }
    };

    health::record_start_time();

    let pool = db::create_pool(&config);
    db::run_migrations(&pool).await;

    let state = AppState::new(
        Arc::new(PgCatStore::new(pool)),
        AuthApi::new(config.auth_api_url.clone()),
        config.jwt_secret.clone(),
    );

    let app = rest::api_router()
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .expect("Failed to bind listen address");

    tracing::info!(addr = %config.bind_addr, auth_api = %config.auth_api_url, "gateway listening");

    axum::serve(listener, app)
        .await
        .expect("Server error");
}
