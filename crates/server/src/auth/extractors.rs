use axum::{extract::FromRequestParts, http::request::Parts};

use super::Principal;

/// `Principal` extracts from any handler argument position. Never
/// fails: requests that did not pass the auth middleware (or carried no
/// usable token) yield the anonymous principal, and each operation
/// applies its own authorization rule.
impl<S: Send + Sync> FromRequestParts<S> for Principal {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts
            .extensions
            .get::<Principal>()
            .cloned()
            .unwrap_or_else(Principal::anonymous))
    }
}
