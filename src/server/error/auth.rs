use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request did not carry an `Authorization: Bearer` header.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Admin access token required")]
    MissingToken,

    /// The identity service rejected the token or could not be reached.
    ///
    /// The reason is only logged. Results in a 401 Unauthorized response.
    #[error("Invalid admin token: {0}")]
    InvalidToken(String),

    /// API key missing or not in the configured allow-list.
    ///
    /// Results in a 403 Forbidden response.
    #[error("Invalid or missing API key")]
    InvalidApiKey,
}

/// Converts authentication errors into HTTP responses.
///
/// - `MissingToken` → 401 Unauthorized with "Admin access token required"
/// - `InvalidToken` → 401 Unauthorized with "Invalid admin token"
/// - `InvalidApiKey` → 403 Forbidden with "Forbidden resource"
///
/// Details are logged at debug level while client-facing messages stay generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::MissingToken => (StatusCode::UNAUTHORIZED, "Admin access token required"),
            Self::InvalidToken(_) => (StatusCode::UNAUTHORIZED, "Invalid admin token"),
            Self::InvalidApiKey => (StatusCode::FORBIDDEN, "Forbidden resource"),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
