use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
pub enum HackathonModeDto {
    Online,
    Offline,
    Hybrid,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum HackathonStatusDto {
    Draft,
    Published,
    Active,
    Completed,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct HackathonDto {
    pub id: Uuid,
    pub organizer_id: Uuid,
    pub title: String,
    pub problem_statement: String,
    pub mode: HackathonModeDto,
    pub status: HackathonStatusDto,
    pub banner_url: Option<String>,
    pub logo_url: Option<String>,
    #[schema(value_type = Object)]
    pub timeline: Value,
    #[schema(value_type = Object)]
    pub participation_rules: Value,
    #[schema(value_type = Object)]
    pub submission_requirements: Value,
    #[schema(value_type = Object)]
    pub communication_resources: Value,
    #[schema(value_type = Object)]
    pub prize_rewards: Value,
    #[schema(value_type = Object)]
    pub settings: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct CreateHackathonDto {
    pub title: String,
    pub problem_statement: String,
    pub mode: HackathonModeDto,
    /// Initial status, `draft` when omitted.
    pub status: Option<HackathonStatusDto>,
    pub banner_url: Option<String>,
    pub logo_url: Option<String>,
    #[schema(value_type = Object)]
    pub timeline: Value,
    #[schema(value_type = Object)]
    pub participation_rules: Value,
    #[schema(value_type = Object)]
    pub submission_requirements: Value,
    #[schema(value_type = Object)]
    pub communication_resources: Value,
    #[schema(value_type = Object)]
    pub prize_rewards: Value,
    #[schema(value_type = Option<Object>)]
    pub settings: Option<Value>,
}

/// Partial update; absent fields are left unchanged.
///
/// Status is not patchable, it only moves through the publish, activate and complete
/// transitions.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, ToSchema)]
pub struct UpdateHackathonDto {
    pub title: Option<String>,
    pub problem_statement: Option<String>,
    pub mode: Option<HackathonModeDto>,
    pub banner_url: Option<String>,
    pub logo_url: Option<String>,
    #[schema(value_type = Option<Object>)]
    pub timeline: Option<Value>,
    #[schema(value_type = Option<Object>)]
    pub participation_rules: Option<Value>,
    #[schema(value_type = Option<Object>)]
    pub submission_requirements: Option<Value>,
    #[schema(value_type = Option<Object>)]
    pub communication_resources: Option<Value>,
    #[schema(value_type = Option<Object>)]
    pub prize_rewards: Option<Value>,
    #[schema(value_type = Option<Object>)]
    pub settings: Option<Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct HackathonStatsDto {
    pub total_teams: u64,
    pub total_submissions: u64,
    pub total_participants: u64,
    /// Percentage of teams that submitted, 0 when there are no teams.
    pub submission_rate: f64,
}
