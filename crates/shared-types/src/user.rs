use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Relayed representations
// ---------------------------------------------------------------------------

/// A user as represented by the remote identity service. The gateway
/// never persists these; it only relays them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct User {
    pub id: String,
    pub user_name: String,
    pub email: String,
}

/// Envelope returned by the identity service for login, registration
/// and self update/delete flows. The token is only present on login.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct LoginResponse {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    pub user: User,
}

// ---------------------------------------------------------------------------
// Request DTOs
// ---------------------------------------------------------------------------

/// Login credentials, forwarded verbatim to the identity service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Request body for registering a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct RegisterRequest {
    #[cfg_attr(feature = "validation", validate(length(min = 2, max = 50)))]
    pub user_name: String,
    #[cfg_attr(feature = "validation", validate(email))]
    pub email: String,
    #[cfg_attr(feature = "validation", validate(length(min = 8, max = 128)))]
    pub password: String,
}

/// Partial self-service profile update. Deliberately has no id field:
/// the identity service derives the subject from the bearer token.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UpdateUserRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}
