use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    model::{
        api::{ErrorDto, PaginatedDto},
        team::{CreateTeamDto, TeamDto, TeamStatsDto, TeamStatusDto, UpdateTeamDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            pagination::PageRequest,
            team::{status_from_dto, TeamFilter},
        },
        service::team::TeamService,
        state::AppState,
    },
};

/// Tag for grouping team endpoints in OpenAPI documentation
pub static TEAM_TAG: &str = "team";

#[derive(Deserialize)]
pub struct TeamListParams {
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_limit")]
    pub limit: u64,
    pub hackathon_id: Option<Uuid>,
    pub status: Option<TeamStatusDto>,
}

fn default_page() -> u64 {
    1
}

fn default_limit() -> u64 {
    10
}

/// Register a team for a hackathon.
///
/// # Returns
/// - `201 Created` - Created team, status `pending` unless given
/// - `400 Bad Request` - Team name already used in this hackathon
/// - `404 Not Found` - Hackathon not found
#[utoipa::path(
    post,
    path = "/api/v1/teams",
    tag = TEAM_TAG,
    request_body = CreateTeamDto,
    responses(
        (status = 201, description = "Successfully created team", body = TeamDto),
        (status = 400, description = "Team name already exists in this hackathon", body = ErrorDto),
        (status = 404, description = "Hackathon not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_key" = [])),
)]
pub async fn create_team(
    State(state): State<AppState>,
    Json(payload): Json<CreateTeamDto>,
) -> Result<impl IntoResponse, AppError> {
    let team = TeamService::new(&state.db).create(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(team.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/v1/teams",
    tag = TEAM_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number, 1-based (default: 1)"),
        ("limit" = Option<u64>, Query, description = "Items per page (default: 10)"),
        ("hackathon_id" = Option<Uuid>, Query, description = "Only teams of this hackathon"),
        ("status" = Option<TeamStatusDto>, Query, description = "Only teams in this status")
    ),
    responses(
        (status = 200, description = "Successfully retrieved teams", body = PaginatedDto<TeamDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_key" = [])),
)]
pub async fn get_teams(
    State(state): State<AppState>,
    Query(params): Query<TeamListParams>,
) -> Result<impl IntoResponse, AppError> {
    let filter = TeamFilter {
        hackathon_id: params.hackathon_id,
        status: params.status.map(status_from_dto),
    };

    let page = TeamService::new(&state.db)
        .get_paginated(filter, PageRequest::new(params.page, params.limit))
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto(|t| t.into_dto()))))
}

#[utoipa::path(
    get,
    path = "/api/v1/teams/{id}",
    tag = TEAM_TAG,
    params(("id" = Uuid, Path, description = "Team ID")),
    responses(
        (status = 200, description = "Successfully retrieved team", body = TeamDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_key" = [])),
)]
pub async fn get_team_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let team = TeamService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(team.into_dto())))
}

/// Get the review state of a team.
///
/// # Access Control
/// - `Admin` - Any authenticated admin
#[utoipa::path(
    get,
    path = "/api/v1/teams/{id}/stats",
    tag = TEAM_TAG,
    params(("id" = Uuid, Path, description = "Team ID")),
    responses(
        (status = 200, description = "Successfully retrieved team statistics", body = TeamStatsDto),
        (status = 401, description = "Missing or invalid admin token", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []), ("api_key" = [])),
)]
pub async fn get_team_stats(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.identity, &headers)
        .require()
        .await?;

    let team = TeamService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(team.into_stats_dto())))
}

#[utoipa::path(
    patch,
    path = "/api/v1/teams/{id}",
    tag = TEAM_TAG,
    params(("id" = Uuid, Path, description = "Team ID")),
    request_body = UpdateTeamDto,
    responses(
        (status = 200, description = "Successfully updated team", body = TeamDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_key" = [])),
)]
pub async fn update_team(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateTeamDto>,
) -> Result<impl IntoResponse, AppError> {
    let team = TeamService::new(&state.db)
        .update(id, payload.into())
        .await?;

    Ok((StatusCode::OK, Json(team.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/v1/teams/{id}",
    tag = TEAM_TAG,
    params(("id" = Uuid, Path, description = "Team ID")),
    responses(
        (status = 204, description = "Successfully deleted team"),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_key" = [])),
)]
pub async fn delete_team(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    TeamService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
