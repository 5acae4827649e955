use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct DatabaseHealthDto {
    /// `"healthy"` or `"unhealthy"`.
    pub status: String,
    /// Ping round trip in milliseconds.
    #[serde(rename = "responseTime")]
    pub response_time: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct HealthDto {
    /// Always `"healthy"` while the process serves requests.
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
    /// Seconds since the server started.
    pub uptime: u64,
    pub database: DatabaseHealthDto,
}
