/// Runtime configuration, gathered once at startup.
///
/// The identity-service base URL is read here and injected into
/// `AuthApi` at construction; nothing reads it ad hoc at call time.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Postgres connection string for the cat store.
    pub database_url: String,
    /// Maximum connections in the pool.
    pub max_connections: u32,
    /// Base address of the remote identity service, without a trailing slash.
    pub auth_api_url: String,
    /// Shared secret for decoding bearer tokens issued by the identity service.
    pub jwt_secret: String,
    /// Listen address for the gateway.
    pub bind_addr: String,
}

impl AppConfig {
    /// Read configuration from the environment. Loads `.env` first if
    /// present (ignored in production where env vars are set directly).
    pub fn from_env() -> Result<Self, String> {
        let _ = dotenvy::dotenv();

        let database_url =
            std::env::var("DATABASE_URL").map_err(|_| "DATABASE_URL must be set".to_string())?;
        let auth_api_url =
            std::env::var("AUTH_API_URL").map_err(|_| "AUTH_API_URL must be set".to_string())?;
        let jwt_secret =
            std::env::var("JWT_SECRET").map_err(|_| "JWT_SECRET must be set".to_string())?;

        let max_connections = std::env::var("DATABASE_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        let bind_addr =
            std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        Ok(Self {
            database_url,
            max_connections,
            auth_api_url: auth_api_url.trim_end_matches('/').to_string(),
            jwt_secret,
            bind_addr,
        })
    }
}
