use serde::de::DeserializeOwned;
use shared_types::{AppError, Credentials, LoginResponse, RegisterRequest, UpdateUserRequest, User};

/// Client for the remote identity service.
///
/// Owns no data: every method builds one HTTP request, forwards the
/// bearer credential where the downstream call needs one, and
/// translates the response. Any non-success status collapses to
/// `NotFound` carrying the upstream status text; bodies of failed
/// responses are never parsed.
#[derive(Clone)]
pub struct AuthApi {
    base_url: String,
    http: reqwest::Client,
}

impl AuthApi {
    /// The base URL is injected here once; nothing reads it at call time.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET /users
    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        let resp = self
            .http
            .get(self.url("/users"))
            .send()
            .await
            .map_err(transport_error)?;
        relay(resp).await
    }

    /// GET /users/{id}
    pub async fn user_by_id(&self, id: &str) -> Result<User, AppError> {
        let resp = self
            .http
            .get(self.url(&format!("/users/{id}")))
            .send()
            .await
            .map_err(transport_error)?;
        relay(resp).await
    }

    /// GET /users/token. Asks the identity service for a fresh check
    /// of the presented credential.
    pub async fn check_token(&self, token: &str) -> Result<User, AppError> {
        let resp = self
            .http
            .get(self.url("/users/token"))
            .bearer_auth(token)
            .send()
            .await
            .map_err(transport_error)?;
        relay(resp).await
    }

    /// POST /auth/login
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, AppError> {
        let resp = self
            .http
            .post(self.url("/auth/login"))
            .json(credentials)
            .send()
            .await
            .map_err(transport_error)?;
        relay(resp).await
    }

    /// POST /users
    pub async fn register(&self, user: &RegisterRequest) -> Result<LoginResponse, AppError> {
        let resp = self
            .http
            .post(self.url("/users"))
            .json(user)
            .send()
            .await
            .map_err(transport_error)?;
        relay(resp).await
    }

    /// PUT /users. No target id in the path or body; the identity
    /// service derives the subject from the bearer token, so a caller
    /// cannot spoof another user's id.
    pub async fn update_self(
        &self,
        token: &str,
        update: &UpdateUserRequest,
    ) -> Result<LoginResponse, AppError> {
        let resp = self
            .http
            .put(self.url("/users"))
            .bearer_auth(token)
            .json(update)
            .send()
            .await
            .map_err(transport_error)?;
        relay(resp).await
    }

    /// DELETE /users. Same subject-from-token rule as `update_self`.
    pub async fn delete_self(&self, token: &str) -> Result<LoginResponse, AppError> {
        let resp = self
            .http
            .delete(self.url("/users"))
            .bearer_auth(token)
            .send()
            .await
            .map_err(transport_error)?;
        relay(resp).await
    }

    /// PUT /users/{id}, admin path, target id explicit.
    pub async fn update_user(
        &self,
        token: &str,
        id: &str,
        update: &UpdateUserRequest,
    ) -> Result<LoginResponse, AppError> {
        let resp = self
            .http
            .put(self.url(&format!("/users/{id}")))
            .bearer_auth(token)
            .json(update)
            .send()
            .await
            .map_err(transport_error)?;
        relay(resp).await
    }

    /// DELETE /users/{id}, admin path, target id explicit.
    pub async fn delete_user(&self, token: &str, id: &str) -> Result<LoginResponse, AppError> {
        let resp = self
            .http
            .delete(self.url(&format!("/users/{id}")))
            .bearer_auth(token)
            .send()
            .await
            .map_err(transport_error)?;
        relay(resp).await
    }
}

/// Deserialize a successful response; surface anything else as
/// `NotFound` with the status line's text. 4xx and 5xx are not
/// distinguished.
async fn relay<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, AppError> {
    let status = resp.status();
    if !status.is_success() {
        return Err(AppError::not_found(status_text(status)));
    }
    resp.json::<T>()
        .await
        .map_err(|e| AppError::internal(format!("Invalid identity service response: {e}")))
}

fn status_text(status: reqwest::StatusCode) -> String {
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| status.as_u16().to_string())
}

fn transport_error(e: reqwest::Error) -> AppError {
    AppError::internal(format!("Identity service unreachable: {e}"))
}
