//! Team domain models and parameters.

use chrono::{DateTime, Utc};
use entity::team::{SubmissionStatus, TeamStatus};
use uuid::Uuid;

use crate::model::team::{
    CreateTeamDto, SubmissionStatusDto, TeamDto, TeamStatsDto, TeamStatusDto, UpdateTeamDto,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Team {
    pub id: Uuid,
    pub hackathon_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub status: TeamStatus,
    pub submission_status: SubmissionStatus,
    pub ai_score: Option<f64>,
    pub eligibility: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Team {
    pub fn from_entity(entity: entity::team::Model) -> Self {
        Self {
            id: entity.id,
            hackathon_id: entity.hackathon_id,
            name: entity.name,
            description: entity.description,
            status: entity.status,
            submission_status: entity.submission_status,
            ai_score: entity.ai_score,
            eligibility: entity.eligibility,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> TeamDto {
        TeamDto {
            id: self.id,
            hackathon_id: self.hackathon_id,
            name: self.name,
            description: self.description,
            status: status_to_dto(self.status),
            submission_status: submission_to_dto(self.submission_status),
            ai_score: self.ai_score,
            eligibility: self.eligibility,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn has_submission(&self) -> bool {
        self.submission_status != SubmissionStatus::NotSubmitted
    }

    pub fn into_stats_dto(self) -> TeamStatsDto {
        TeamStatsDto {
            has_submission: self.has_submission(),
            status: status_to_dto(self.status),
            submission_status: submission_to_dto(self.submission_status),
            created_at: self.created_at,
            ai_score: self.ai_score,
            eligibility: self.eligibility,
        }
    }
}

pub fn status_to_dto(status: TeamStatus) -> TeamStatusDto {
    match status {
        TeamStatus::Pending => TeamStatusDto::Pending,
        TeamStatus::Approved => TeamStatusDto::Approved,
        TeamStatus::CheckedIn => TeamStatusDto::CheckedIn,
        TeamStatus::Disqualified => TeamStatusDto::Disqualified,
    }
}

pub fn status_from_dto(status: TeamStatusDto) -> TeamStatus {
    match status {
        TeamStatusDto::Pending => TeamStatus::Pending,
        TeamStatusDto::Approved => TeamStatus::Approved,
        TeamStatusDto::CheckedIn => TeamStatus::CheckedIn,
        TeamStatusDto::Disqualified => TeamStatus::Disqualified,
    }
}

pub fn submission_to_dto(status: SubmissionStatus) -> SubmissionStatusDto {
    match status {
        SubmissionStatus::NotSubmitted => SubmissionStatusDto::NotSubmitted,
        SubmissionStatus::Submitted => SubmissionStatusDto::Submitted,
        SubmissionStatus::Late => SubmissionStatusDto::Late,
    }
}

pub fn submission_from_dto(status: SubmissionStatusDto) -> SubmissionStatus {
    match status {
        SubmissionStatusDto::NotSubmitted => SubmissionStatus::NotSubmitted,
        SubmissionStatusDto::Submitted => SubmissionStatus::Submitted,
        SubmissionStatusDto::Late => SubmissionStatus::Late,
    }
}

#[derive(Debug, Clone)]
pub struct CreateTeamParams {
    pub hackathon_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub status: TeamStatus,
}

impl From<CreateTeamDto> for CreateTeamParams {
    fn from(dto: CreateTeamDto) -> Self {
        Self {
            hackathon_id: dto.hackathon_id,
            name: dto.name,
            description: dto.description,
            status: dto
                .status
                .map(status_from_dto)
                .unwrap_or(TeamStatus::Pending),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateTeamParams {
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<TeamStatus>,
    pub submission_status: Option<SubmissionStatus>,
    pub ai_score: Option<f64>,
    pub eligibility: Option<String>,
}

impl From<UpdateTeamDto> for UpdateTeamParams {
    fn from(dto: UpdateTeamDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            status: dto.status.map(status_from_dto),
            submission_status: dto.submission_status.map(submission_from_dto),
            ai_score: dto.ai_score,
            eligibility: dto.eligibility,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TeamFilter {
    pub hackathon_id: Option<Uuid>,
    pub status: Option<TeamStatus>,
}
