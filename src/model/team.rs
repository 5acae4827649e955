use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum TeamStatusDto {
    Pending,
    Approved,
    CheckedIn,
    Disqualified,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatusDto {
    NotSubmitted,
    Submitted,
    Late,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct TeamDto {
    pub id: Uuid,
    pub hackathon_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub status: TeamStatusDto,
    pub submission_status: SubmissionStatusDto,
    pub ai_score: Option<f64>,
    pub eligibility: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct CreateTeamDto {
    pub hackathon_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub status: Option<TeamStatusDto>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, ToSchema)]
pub struct UpdateTeamDto {
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<TeamStatusDto>,
    pub submission_status: Option<SubmissionStatusDto>,
    pub ai_score: Option<f64>,
    pub eligibility: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct TeamStatsDto {
    pub status: TeamStatusDto,
    pub submission_status: SubmissionStatusDto,
    pub created_at: DateTime<Utc>,
    pub has_submission: bool,
    pub ai_score: Option<f64>,
    pub eligibility: Option<String>,
}
