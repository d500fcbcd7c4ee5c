use axum::extract::{Request, State};
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;

use crate::db::AppState;

use super::jwt::validate_token;
use super::Principal;

/// Permissive auth middleware: decodes the bearer token, if any, into a
/// `Principal` stored in request extensions.
///
/// This is the gateway's external authentication step. Requests without
/// a token (or with an invalid one) proceed as anonymous; downstream
/// handlers decide authorization per operation.
pub async fn auth_middleware(State(state): State<AppState>, mut req: Request, next: Next) -> Response {
    let principal = match bearer_token(&req) {
        Some(token) => match validate_token(&token, &state.jwt_secret) {
            Ok(claims) => Principal::from_claims(claims, token),
            Err(e) => {
                tracing::debug!(error = %e, "rejecting invalid bearer token");
                Principal::anonymous()
            }
        },
        None => Principal::anonymous(),
    };

    req.extensions_mut().insert(principal);
    next.run(req).await
}

fn bearer_token(req: &Request) -> Option<String> {
    let value = req.headers().get(header::AUTHORIZATION)?.to_str().ok()?;
    value
        .strip_prefix("Bearer ")
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
}
