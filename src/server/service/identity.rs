//! Client for the identity service.
//!
//! Resolves bearer tokens to admin profiles. Every failure, whether the
//! service is unreachable, rejects the token or answers with an unexpected body, is
//! reported as `AuthError::InvalidToken` so callers never leak upstream details.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::de::DeserializeOwned;

use crate::server::{
    config::ServiceEndpoint,
    error::{auth::AuthError, AppError},
    model::auth::{AdminMeResponse, AuthAdmin},
};

pub const IDENTITY_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone)]
pub struct IdentityClient {
    http: reqwest::Client,
    base_url: Option<String>,
}

impl IdentityClient {
    pub fn new(http: reqwest::Client, endpoint: &ServiceEndpoint) -> Self {
        Self {
            http,
            base_url: endpoint
                .base_url
                .as_deref()
                .map(|url| url.trim_end_matches('/').to_string()),
        }
    }

    /// Builds the HTTP client used for identity lookups: JSON content type, no redirects
    /// and a 10 second request timeout.
    pub fn build_http_client() -> Result<reqwest::Client, AppError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .redirect(reqwest::redirect::Policy::none())
            .timeout(IDENTITY_REQUEST_TIMEOUT)
            .build()?;

        Ok(client)
    }

    /// Resolves an admin token via `GET /admin/me`.
    ///
    /// # Returns
    /// - `Ok(AuthAdmin)` - Admin owning the token
    /// - `Err(AppError::AuthErr(AuthError::InvalidToken))` - Token rejected or lookup failed
    pub async fn get_admin_profile(&self, token: &str) -> Result<AuthAdmin, AppError> {
        let response: AdminMeResponse = self.get_json("/admin/me", token).await?;

        Ok(response.admin)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, token: &str) -> Result<T, AppError> {
        let Some(base_url) = &self.base_url else {
            return Err(AuthError::InvalidToken("AUTH_SERVICE_URL not configured".to_string()).into());
        };

        let response = self
            .http
            .get(format!("{}{}", base_url, path))
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Identity service request to {} failed: {}", path, e);
                AuthError::InvalidToken(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!("Identity service rejected token on {}: {}", path, status);
            return Err(AuthError::InvalidToken(format!("identity service responded {}", status)).into());
        }

        let body = response
            .json::<T>()
            .await
            .map_err(|e| AuthError::InvalidToken(format!("unexpected identity response: {}", e)))?;

        Ok(body)
    }
}
