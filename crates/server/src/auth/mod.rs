pub mod extractors;
pub mod jwt;
pub mod middleware;

use shared_types::{AppError, Role};

use jwt::Claims;

/// The authenticated calling context for one request.
///
/// Built exactly once by the permissive auth middleware and carried in
/// request extensions; resolvers trust it as the output of an already
/// verified authentication step and never re-validate the token
/// themselves. Anonymous callers get an empty principal.
#[derive(Debug, Clone, Default)]
pub struct Principal {
    pub id: Option<String>,
    pub token: Option<String>,
    pub role: Role,
}

impl Principal {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn from_claims(claims: Claims, token: String) -> Self {
        Self {
            id: Some(claims.sub),
            role: Role::from_str_or_default(&claims.role),
            token: Some(token),
        }
    }

    /// The bearer credential, or `Unauthorized` for anonymous callers.
    pub fn require_token(&self) -> Result<&str, AppError> {
        self.token
            .as_deref()
            .ok_or_else(|| AppError::unauthorized("Unauthorized"))
    }

    /// `Unauthorized` unless the caller's role is admin.
    pub fn require_admin(&self) -> Result<(), AppError> {
        if self.role.is_admin() {
            Ok(())
        } else {
            Err(AppError::unauthorized("Unauthorized"))
        }
    }

    /// Ownership test against a stored owner id. Identifiers from the
    /// store and from the token are normalized to a common comparable
    /// form before the check.
    pub fn owns(&self, owner: &str) -> bool {
        match &self.id {
            Some(id) => normalize_id(id) == normalize_id(owner),
            None => false,
        }
    }

    /// `Unauthorized` unless the caller owns the resource. Independent
    /// of role: admins go through the dedicated admin operations.
    pub fn require_owner(&self, owner: &str) -> Result<(), AppError> {
        if self.owns(owner) {
            Ok(())
        } else {
            Err(AppError::unauthorized("Unauthorized"))
        }
    }
}

fn normalize_id(id: &str) -> String {
    id.trim().to_ascii_lowercase()
}
