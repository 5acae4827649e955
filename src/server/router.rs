use axum::{
    http::{HeaderValue, Method},
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{AllowHeaders, CorsLayer},
    trace::TraceLayer,
};
use utoipa::{
    openapi::security::{ApiKey, ApiKeyValue, HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        activity_log::{ActionCountDto, ActivityLogDto, ActivitySummaryDto, DailyCountDto},
        api::ErrorDto,
        hackathon::{
            CreateHackathonDto, HackathonDto, HackathonModeDto, HackathonStatsDto,
            HackathonStatusDto, UpdateHackathonDto,
        },
        health::{DatabaseHealthDto, HealthDto},
        team::{
            CreateTeamDto, SubmissionStatusDto, TeamDto, TeamStatsDto, TeamStatusDto,
            UpdateTeamDto,
        },
    },
    server::{
        config::Config,
        controller::{activity_log, hackathon, health, team},
        middleware::api_key::require_api_key,
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Hackathon Core API", description = "Hackathons, teams and activity logs"),
    paths(
        health::health,
        hackathon::create_hackathon,
        hackathon::get_my_hackathons,
        hackathon::get_public_hackathons,
        hackathon::get_hackathon_by_id,
        hackathon::get_hackathon_by_slug,
        hackathon::get_hackathon_stats,
        hackathon::update_hackathon,
        hackathon::delete_hackathon,
        hackathon::publish_hackathon,
        hackathon::activate_hackathon,
        hackathon::complete_hackathon,
        team::create_team,
        team::get_teams,
        team::get_team_by_id,
        team::get_team_stats,
        team::update_team,
        team::delete_team,
        activity_log::get_activity_logs,
        activity_log::get_recent_activity,
        activity_log::get_activity_summary,
    ),
    components(schemas(
        ErrorDto,
        HealthDto,
        DatabaseHealthDto,
        HackathonDto,
        HackathonModeDto,
        HackathonStatusDto,
        CreateHackathonDto,
        UpdateHackathonDto,
        HackathonStatsDto,
        TeamDto,
        TeamStatusDto,
        SubmissionStatusDto,
        CreateTeamDto,
        UpdateTeamDto,
        TeamStatsDto,
        ActivityLogDto,
        ActivitySummaryDto,
        ActionCountDto,
        DailyCountDto,
    )),
    modifiers(&SecuritySchemes),
    tags(
        (name = "health", description = "Service health"),
        (name = "hackathon", description = "Hackathon management"),
        (name = "team", description = "Team management"),
        (name = "activity-log", description = "Audit trail"),
    ),
)]
pub struct ApiDoc;

struct SecuritySchemes;

impl Modify for SecuritySchemes {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);

        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build()),
        );
        components.add_security_scheme(
            "api_key",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new("x-api-key"))),
        );
    }
}

/// Routes under `/api/v1`, without state or layers.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route(
            "/hackathons",
            get(hackathon::get_my_hackathons).post(hackathon::create_hackathon),
        )
        .route("/hackathons/public", get(hackathon::get_public_hackathons))
        .route(
            "/hackathons/slug/{slug}",
            get(hackathon::get_hackathon_by_slug),
        )
        .route(
            "/hackathons/{id}",
            get(hackathon::get_hackathon_by_id)
                .patch(hackathon::update_hackathon)
                .delete(hackathon::delete_hackathon),
        )
        .route("/hackathons/{id}/stats", get(hackathon::get_hackathon_stats))
        .route("/hackathons/{id}/publish", post(hackathon::publish_hackathon))
        .route(
            "/hackathons/{id}/activate",
            post(hackathon::activate_hackathon),
        )
        .route(
            "/hackathons/{id}/complete",
            post(hackathon::complete_hackathon),
        )
        .route("/teams", get(team::get_teams).post(team::create_team))
        .route(
            "/teams/{id}",
            get(team::get_team_by_id)
                .patch(team::update_team)
                .delete(team::delete_team),
        )
        .route("/teams/{id}/stats", get(team::get_team_stats))
        .route("/activity-logs", get(activity_log::get_activity_logs))
        .route(
            "/activity-logs/recent",
            get(activity_log::get_recent_activity),
        )
        .route(
            "/activity-logs/summary",
            get(activity_log::get_activity_summary),
        )
}

/// Builds the complete application router.
///
/// The API key guard wraps every route; it lets the health check and the swagger UI
/// through on its own. Swagger is served at `/docs` when enabled.
pub fn router(state: AppState) -> Router {
    let config = state.config.clone();

    let mut router = Router::new().nest("/api/v1", api_routes());

    if config.swagger_enabled {
        router = router.merge(SwaggerUi::new("/docs").url("/docs/openapi.json", ApiDoc::openapi()));
    }

    router
        .layer(from_fn_with_state(state.clone(), require_api_key))
        .layer(cors_layer(&config))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(config: &Config) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
