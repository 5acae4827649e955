use axum::http::{header::AUTHORIZATION, HeaderMap};

use crate::server::{
    error::{auth::AuthError, AppError},
    model::auth::AuthAdmin,
    service::identity::IdentityClient,
};

pub struct AuthGuard<'a> {
    identity: &'a IdentityClient,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(identity: &'a IdentityClient, headers: &'a HeaderMap) -> Self {
        Self { identity, headers }
    }

    /// Resolves the bearer token to an admin.
    ///
    /// # Returns
    /// - `Ok(AuthAdmin)` - Admin owning the token
    /// - `Err(AuthError::MissingToken)` - No `Authorization: Bearer` header
    /// - `Err(AuthError::InvalidToken)` - Identity service rejected the token
    pub async fn require(&self) -> Result<AuthAdmin, AppError> {
        let Some(token) = bearer_token(self.headers) else {
            return Err(AuthError::MissingToken.into());
        };

        self.identity.get_admin_profile(token).await
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();
    (!token.is_empty()).then_some(token)
}
