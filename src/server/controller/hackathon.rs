use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use entity::hackathon::HackathonStatus;
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    model::{
        api::{ErrorDto, PaginatedDto},
        hackathon::{
            CreateHackathonDto, HackathonDto, HackathonStatsDto, HackathonStatusDto,
            UpdateHackathonDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            hackathon::{
                status_from_dto, CreateHackathonParams, HackathonFilter, StatusTransition,
            },
            pagination::PageRequest,
        },
        service::hackathon::HackathonService,
        state::AppState,
    },
};

/// Tag for grouping hackathon endpoints in OpenAPI documentation
pub static HACKATHON_TAG: &str = "hackathon";

#[derive(Deserialize)]
pub struct HackathonListParams {
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_limit")]
    pub limit: u64,
    pub status: Option<HackathonStatusDto>,
}

#[derive(Deserialize)]
pub struct PaginationParams {
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_limit")]
    pub limit: u64,
}

fn default_page() -> u64 {
    1
}

fn default_limit() -> u64 {
    10
}

/// Create a new hackathon.
///
/// The calling admin becomes the organizer. Status defaults to `draft` and settings
/// to an empty object.
///
/// # Access Control
/// - `Admin` - Any authenticated admin
///
/// # Returns
/// - `201 Created` - Created hackathon
/// - `401 Unauthorized` - Missing or invalid admin token
/// - `403 Forbidden` - Missing or invalid API key
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/v1/hackathons",
    tag = HACKATHON_TAG,
    request_body = CreateHackathonDto,
    responses(
        (status = 201, description = "Successfully created hackathon", body = HackathonDto),
        (status = 401, description = "Missing or invalid admin token", body = ErrorDto),
        (status = 403, description = "Missing or invalid API key", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []), ("api_key" = [])),
)]
pub async fn create_hackathon(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateHackathonDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.identity, &headers)
        .require()
        .await?;

    let params = CreateHackathonParams::from_dto(admin.id, payload);
    let hackathon = HackathonService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(hackathon.into_dto())))
}

/// List the calling admin's hackathons.
///
/// Newest first, optionally restricted to one status.
///
/// # Access Control
/// - `Admin` - Only hackathons organized by the caller are returned
#[utoipa::path(
    get,
    path = "/api/v1/hackathons",
    tag = HACKATHON_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number, 1-based (default: 1)"),
        ("limit" = Option<u64>, Query, description = "Items per page (default: 10)"),
        ("status" = Option<HackathonStatusDto>, Query, description = "Only hackathons in this status")
    ),
    responses(
        (status = 200, description = "Successfully retrieved hackathons", body = PaginatedDto<HackathonDto>),
        (status = 401, description = "Missing or invalid admin token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []), ("api_key" = [])),
)]
pub async fn get_my_hackathons(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<HackathonListParams>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.identity, &headers)
        .require()
        .await?;

    let filter = HackathonFilter {
        organizer_id: Some(admin.id),
        statuses: params.status.map(status_from_dto).into_iter().collect(),
    };

    let page = HackathonService::new(&state.db)
        .get_paginated(filter, PageRequest::new(params.page, params.limit))
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto(|h| h.into_dto()))))
}

/// List hackathons open to participants.
///
/// Returns published and active hackathons of every organizer. Requires an API key
/// but no admin token.
#[utoipa::path(
    get,
    path = "/api/v1/hackathons/public",
    tag = HACKATHON_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number, 1-based (default: 1)"),
        ("limit" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved hackathons", body = PaginatedDto<HackathonDto>),
        (status = 403, description = "Missing or invalid API key", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_key" = [])),
)]
pub async fn get_public_hackathons(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let filter = HackathonFilter {
        organizer_id: None,
        statuses: vec![HackathonStatus::Published, HackathonStatus::Active],
    };

    let page = HackathonService::new(&state.db)
        .get_paginated(filter, PageRequest::new(params.page, params.limit))
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto(|h| h.into_dto()))))
}

#[utoipa::path(
    get,
    path = "/api/v1/hackathons/{id}",
    tag = HACKATHON_TAG,
    params(("id" = Uuid, Path, description = "Hackathon ID")),
    responses(
        (status = 200, description = "Successfully retrieved hackathon", body = HackathonDto),
        (status = 404, description = "Hackathon not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_key" = [])),
)]
pub async fn get_hackathon_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let hackathon = HackathonService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(hackathon.into_dto())))
}

/// Get a hackathon by slug.
///
/// The slug is matched against the exact title.
#[utoipa::path(
    get,
    path = "/api/v1/hackathons/slug/{slug}",
    tag = HACKATHON_TAG,
    params(("slug" = String, Path, description = "Hackathon title")),
    responses(
        (status = 200, description = "Successfully retrieved hackathon", body = HackathonDto),
        (status = 404, description = "Hackathon not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_key" = [])),
)]
pub async fn get_hackathon_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let hackathon = HackathonService::new(&state.db).get_by_slug(&slug).await?;

    Ok((StatusCode::OK, Json(hackathon.into_dto())))
}

/// Get team and submission statistics for a hackathon.
///
/// `total_participants` is not tracked yet and is always 0.
///
/// # Access Control
/// - `Admin` - Any authenticated admin
#[utoipa::path(
    get,
    path = "/api/v1/hackathons/{id}/stats",
    tag = HACKATHON_TAG,
    params(("id" = Uuid, Path, description = "Hackathon ID")),
    responses(
        (status = 200, description = "Successfully retrieved statistics", body = HackathonStatsDto),
        (status = 401, description = "Missing or invalid admin token", body = ErrorDto),
        (status = 404, description = "Hackathon not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []), ("api_key" = [])),
)]
pub async fn get_hackathon_stats(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.identity, &headers)
        .require()
        .await?;

    let stats = HackathonService::new(&state.db).get_stats(id).await?;

    Ok((StatusCode::OK, Json(stats.into_dto())))
}

/// Update a hackathon.
///
/// Only the fields present in the body change. The status cannot be changed here; use
/// the publish, activate and complete endpoints.
///
/// # Access Control
/// - `Admin` - Caller must be the organizer
///
/// # Returns
/// - `200 OK` - Updated hackathon
/// - `401 Unauthorized` - Missing or invalid admin token
/// - `403 Forbidden` - Caller is not the organizer
/// - `404 Not Found` - Hackathon not found
#[utoipa::path(
    patch,
    path = "/api/v1/hackathons/{id}",
    tag = HACKATHON_TAG,
    params(("id" = Uuid, Path, description = "Hackathon ID")),
    request_body = UpdateHackathonDto,
    responses(
        (status = 200, description = "Successfully updated hackathon", body = HackathonDto),
        (status = 401, description = "Missing or invalid admin token", body = ErrorDto),
        (status = 403, description = "Caller is not the organizer", body = ErrorDto),
        (status = 404, description = "Hackathon not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []), ("api_key" = [])),
)]
pub async fn update_hackathon(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateHackathonDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.identity, &headers)
        .require()
        .await?;

    let hackathon = HackathonService::new(&state.db)
        .update(id, admin.id, payload.into())
        .await?;

    Ok((StatusCode::OK, Json(hackathon.into_dto())))
}

/// Delete a hackathon together with its teams.
///
/// # Access Control
/// - `Admin` - Caller must be the organizer
#[utoipa::path(
    delete,
    path = "/api/v1/hackathons/{id}",
    tag = HACKATHON_TAG,
    params(("id" = Uuid, Path, description = "Hackathon ID")),
    responses(
        (status = 204, description = "Successfully deleted hackathon"),
        (status = 401, description = "Missing or invalid admin token", body = ErrorDto),
        (status = 403, description = "Caller is not the organizer", body = ErrorDto),
        (status = 404, description = "Hackathon not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []), ("api_key" = [])),
)]
pub async fn delete_hackathon(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.identity, &headers)
        .require()
        .await?;

    HackathonService::new(&state.db).delete(id, admin.id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Publish a draft hackathon.
///
/// # Access Control
/// - `Admin` - Caller must be the organizer
///
/// # Returns
/// - `200 OK` - Hackathon now `published`
/// - `400 Bad Request` - Hackathon is not a draft
/// - `403 Forbidden` - Caller is not the organizer
/// - `404 Not Found` - Hackathon not found
#[utoipa::path(
    post,
    path = "/api/v1/hackathons/{id}/publish",
    tag = HACKATHON_TAG,
    params(("id" = Uuid, Path, description = "Hackathon ID")),
    responses(
        (status = 200, description = "Hackathon published", body = HackathonDto),
        (status = 400, description = "Hackathon is not a draft", body = ErrorDto),
        (status = 401, description = "Missing or invalid admin token", body = ErrorDto),
        (status = 403, description = "Caller is not the organizer", body = ErrorDto),
        (status = 404, description = "Hackathon not found", body = ErrorDto)
    ),
    security(("bearer" = []), ("api_key" = [])),
)]
pub async fn publish_hackathon(
    state: State<AppState>,
    headers: HeaderMap,
    id: Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    transition(state, headers, id, StatusTransition::Publish).await
}

/// Activate a published hackathon.
#[utoipa::path(
    post,
    path = "/api/v1/hackathons/{id}/activate",
    tag = HACKATHON_TAG,
    params(("id" = Uuid, Path, description = "Hackathon ID")),
    responses(
        (status = 200, description = "Hackathon activated", body = HackathonDto),
        (status = 400, description = "Hackathon is not published", body = ErrorDto),
        (status = 401, description = "Missing or invalid admin token", body = ErrorDto),
        (status = 403, description = "Caller is not the organizer", body = ErrorDto),
        (status = 404, description = "Hackathon not found", body = ErrorDto)
    ),
    security(("bearer" = []), ("api_key" = [])),
)]
pub async fn activate_hackathon(
    state: State<AppState>,
    headers: HeaderMap,
    id: Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    transition(state, headers, id, StatusTransition::Activate).await
}

/// Complete an active hackathon.
#[utoipa::path(
    post,
    path = "/api/v1/hackathons/{id}/complete",
    tag = HACKATHON_TAG,
    params(("id" = Uuid, Path, description = "Hackathon ID")),
    responses(
        (status = 200, description = "Hackathon completed", body = HackathonDto),
        (status = 400, description = "Hackathon is not active", body = ErrorDto),
        (status = 401, description = "Missing or invalid admin token", body = ErrorDto),
        (status = 403, description = "Caller is not the organizer", body = ErrorDto),
        (status = 404, description = "Hackathon not found", body = ErrorDto)
    ),
    security(("bearer" = []), ("api_key" = [])),
)]
pub async fn complete_hackathon(
    state: State<AppState>,
    headers: HeaderMap,
    id: Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    transition(state, headers, id, StatusTransition::Complete).await
}

async fn transition(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
    transition: StatusTransition,
) -> Result<(StatusCode, Json<HackathonDto>), AppError> {
    let admin = AuthGuard::new(&state.identity, &headers)
        .require()
        .await?;

    let hackathon = HackathonService::new(&state.db)
        .transition(id, admin.id, transition)
        .await?;

    Ok((StatusCode::OK, Json(hackathon.into_dto())))
}
