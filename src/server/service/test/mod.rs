use crate::server::{
    error::AppError,
    model::{
        activity_log::{ActivityLogFilter, SummaryFilter, HACKATHON_STATUS_CHANGE, TEAM_CREATION},
        hackathon::{HackathonFilter, StatusTransition, UpdateHackathonParams},
        pagination::PageRequest,
        team::{CreateTeamParams, TeamFilter, UpdateTeamParams},
    },
    service::{activity_log::ActivityLogService, hackathon::HackathonService, team::TeamService},
};
use chrono::{Duration, Utc};
use entity::{hackathon::HackathonStatus, team::TeamStatus};
use sea_orm::ConnectionTrait;
use serde_json::json;
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;
