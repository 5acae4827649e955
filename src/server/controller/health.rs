use std::time::Instant;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;

use crate::{
    model::health::{DatabaseHealthDto, HealthDto},
    server::state::AppState,
};

/// Tag for grouping health endpoints in OpenAPI documentation
pub static HEALTH_TAG: &str = "health";

/// Report service health.
///
/// Pings the database and reports its response time. Public: no API key or admin
/// token required. Always answers `200 OK` with status `healthy`; an unreachable
/// database shows up only as `database.status = "unhealthy"`.
#[utoipa::path(
    get,
    path = "/api/v1/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Service is up; database status reported in the body", body = HealthDto)
    ),
)]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let started = Instant::now();
    let ping = state.db.ping().await;
    let response_time = started.elapsed().as_millis() as u64;

    let db_status = match ping {
        Ok(()) => "healthy",
        Err(e) => {
            tracing::error!("Health check database ping failed: {}", e);
            "unhealthy"
        }
    };

    let body = HealthDto {
        status: "healthy".to_string(),
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime: state.started_at.elapsed().as_secs(),
        database: DatabaseHealthDto {
            status: db_status.to_string(),
            response_time,
        },
    };

    (StatusCode::OK, Json(body))
}
