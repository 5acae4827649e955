use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    model::{
        activity_log::{ActivityLogDto, ActivitySummaryDto},
        api::{ErrorDto, PaginatedDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            activity_log::{ActivityLogFilter, SummaryFilter},
            pagination::PageRequest,
        },
        service::activity_log::ActivityLogService,
        state::AppState,
    },
};

/// Tag for grouping activity log endpoints in OpenAPI documentation
pub static ACTIVITY_LOG_TAG: &str = "activity-log";

#[derive(Deserialize)]
pub struct ActivityLogListParams {
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_list_limit")]
    pub limit: u64,
    pub hackathon_id: Option<Uuid>,
    pub user_id: Option<Uuid>,
    pub admin_id: Option<Uuid>,
    pub action: Option<String>,
}

#[derive(Deserialize)]
pub struct RecentParams {
    #[serde(default = "default_recent_limit")]
    pub limit: u64,
}

#[derive(Deserialize)]
pub struct SummaryParams {
    pub hackathon_id: Option<Uuid>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// Which end of a summary window a date bound describes.
#[derive(Clone, Copy)]
enum Bound {
    Start,
    End,
}

/// Parses a summary window bound given as an RFC 3339 timestamp or a `YYYY-MM-DD` date.
///
/// A bare date covers the whole UTC day: a start bound begins at 00:00:00.000 and an end
/// bound stops at 23:59:59.999. Blank values mean no bound.
fn parse_date_bound(
    name: &str,
    raw: Option<&str>,
    bound: Bound,
) -> Result<Option<DateTime<Utc>>, AppError> {
    let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
        return Ok(None);
    };

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Ok(Some(timestamp.with_timezone(&Utc)));
    }

    let day = NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
        AppError::BadRequest(format!(
            "{} must be an RFC 3339 timestamp or a YYYY-MM-DD date",
            name
        ))
    })?;

    let time = match bound {
        Bound::Start => day.and_hms_milli_opt(0, 0, 0, 0),
        Bound::End => day.and_hms_milli_opt(23, 59, 59, 999),
    };

    Ok(time.map(|t| t.and_utc()))
}

fn default_page() -> u64 {
    1
}

fn default_list_limit() -> u64 {
    50
}

fn default_recent_limit() -> u64 {
    20
}

/// List activity log entries, newest first.
///
/// `action` matches case-insensitively anywhere in the action name.
///
/// # Access Control
/// - `Admin` - Any authenticated admin
#[utoipa::path(
    get,
    path = "/api/v1/activity-logs",
    tag = ACTIVITY_LOG_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number, 1-based (default: 1)"),
        ("limit" = Option<u64>, Query, description = "Items per page (default: 50)"),
        ("hackathon_id" = Option<Uuid>, Query, description = "Only entries of this hackathon"),
        ("user_id" = Option<Uuid>, Query, description = "Only entries of this user"),
        ("admin_id" = Option<Uuid>, Query, description = "Only entries of this admin"),
        ("action" = Option<String>, Query, description = "Substring of the action name")
    ),
    responses(
        (status = 200, description = "Successfully retrieved activity logs", body = PaginatedDto<ActivityLogDto>),
        (status = 401, description = "Missing or invalid admin token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []), ("api_key" = [])),
)]
pub async fn get_activity_logs(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<ActivityLogListParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.identity, &headers)
        .require()
        .await?;

    let filter = ActivityLogFilter {
        hackathon_id: params.hackathon_id,
        user_id: params.user_id,
        admin_id: params.admin_id,
        action: params.action.filter(|a| !a.trim().is_empty()),
    };

    let page = ActivityLogService::new(&state.db)
        .get_paginated(filter, PageRequest::new(params.page, params.limit))
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto(|log| log.into_dto()))))
}

#[utoipa::path(
    get,
    path = "/api/v1/activity-logs/recent",
    tag = ACTIVITY_LOG_TAG,
    params(
        ("limit" = Option<u64>, Query, description = "Number of entries (default: 20)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved recent activity", body = Vec<ActivityLogDto>),
        (status = 401, description = "Missing or invalid admin token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []), ("api_key" = [])),
)]
pub async fn get_recent_activity(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<RecentParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.identity, &headers)
        .require()
        .await?;

    let logs = ActivityLogService::new(&state.db)
        .get_recent(params.limit)
        .await?;

    let dtos: Vec<ActivityLogDto> = logs.into_iter().map(|log| log.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Summarize activity.
///
/// Returns the total count, counts per action (highest first) and counts per UTC day
/// (oldest first). Both date bounds are inclusive and accept either an RFC 3339 timestamp
/// or a `YYYY-MM-DD` date covering the whole UTC day.
#[utoipa::path(
    get,
    path = "/api/v1/activity-logs/summary",
    tag = ACTIVITY_LOG_TAG,
    params(
        ("hackathon_id" = Option<Uuid>, Query, description = "Only entries of this hackathon"),
        ("start_date" = Option<String>, Query, description = "Earliest timestamp or date (start of day)"),
        ("end_date" = Option<String>, Query, description = "Latest timestamp or date (end of day)")
    ),
    responses(
        (status = 200, description = "Successfully summarized activity", body = ActivitySummaryDto),
        (status = 400, description = "Unparsable date bound or start_date after end_date", body = ErrorDto),
        (status = 401, description = "Missing or invalid admin token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []), ("api_key" = [])),
)]
pub async fn get_activity_summary(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<SummaryParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.identity, &headers)
        .require()
        .await?;

    let start = parse_date_bound("start_date", params.start_date.as_deref(), Bound::Start)?;
    let end = parse_date_bound("end_date", params.end_date.as_deref(), Bound::End)?;

    let summary = ActivityLogService::new(&state.db)
        .get_summary(SummaryFilter {
            hackathon_id: params.hackathon_id,
            start,
            end,
        })
        .await?;

    Ok((StatusCode::OK, Json(summary.into_dto())))
}
