use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Claims carried in tokens issued by the identity service.
///
/// The gateway shares the signing secret with that service and only
/// decodes; minting here exists for the test harness, which plays the
/// identity service's part.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Identity-service user id.
    pub sub: String,
    pub role: String,
    pub exp: i64,
    pub iat: i64,
}

pub fn token_expiry_minutes() -> i64 {
    std::env::var("JWT_TOKEN_EXPIRY_MINUTES")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(60)
}

/// Sign a token for the given subject and role.
pub fn create_token(
    user_id: &str,
    role: &str,
    secret: &str,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now();
    let claims = Claims {
        sub: user_id.to_string(),
        role: role.to_string(),
        exp: (now + Duration::minutes(token_expiry_minutes())).timestamp(),
        iat: now.timestamp(),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

/// Decode and verify a bearer token, returning its claims.
pub fn validate_token(token: &str, secret: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )?;
    Ok(data.claims)
}
