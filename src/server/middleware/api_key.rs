//! API key guard applied to every route except the public ones.

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use crate::server::{
    error::{auth::AuthError, AppError},
    state::AppState,
};

pub const PUBLIC_HEALTH_PATH: &str = "/api/v1/health";

const KEY_HEADERS: [&str; 3] = ["x-api-key", "x-apikey", "x-api_key"];
const KEY_QUERY_PARAMS: [&str; 2] = ["api_key", "apiKey"];

pub async fn require_api_key(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let settings = &state.config.api_keys;

    if !settings.enabled || is_public_path(req.uri().path()) {
        return Ok(next.run(req).await);
    }

    let candidate = extract_api_key(req.headers(), req.uri().query());
    if !settings.accepts(candidate.as_deref()) {
        tracing::warn!(path = %req.uri().path(), "Rejected request without a valid API key");
        return Err(AuthError::InvalidApiKey.into());
    }

    Ok(next.run(req).await)
}

/// Paths served without an API key: the health check and the swagger UI.
pub fn is_public_path(path: &str) -> bool {
    path == PUBLIC_HEALTH_PATH || path.starts_with("/docs") || path.contains("swagger")
}

/// Reads the key from the first matching header, falling back to the query string.
pub fn extract_api_key(headers: &HeaderMap, query: Option<&str>) -> Option<String> {
    let from_header = KEY_HEADERS.iter().find_map(|name| {
        headers
            .get(*name)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(String::from)
    });

    from_header.or_else(|| {
        url::form_urlencoded::parse(query?.as_bytes())
            .find(|(key, value)| KEY_QUERY_PARAMS.contains(&key.as_ref()) && !value.is_empty())
            .map(|(_, value)| value.into_owned())
    })
}
