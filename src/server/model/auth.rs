//! Identities resolved through the identity service.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

/// Admin profile as returned by `GET /admin/me`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthAdmin {
    pub id: Uuid,
    pub name: String,
    pub username: String,
    /// 0 = super admin, 1 = admin.
    pub role: i32,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Envelope of the `GET /admin/me` response.
#[derive(Debug, Deserialize)]
pub struct AdminMeResponse {
    pub admin: AuthAdmin,
}
