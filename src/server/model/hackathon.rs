//! Hackathon domain models and parameters.
//!
//! A hackathon is owned by the admin who created it (its organizer) and moves through a
//! fixed lifecycle: `draft` → `published` → `active` → `completed`. Status only changes
//! through [`StatusTransition`]s; partial updates never touch it.

use chrono::{DateTime, Utc};
use entity::hackathon::{HackathonMode, HackathonStatus};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::model::hackathon::{
    CreateHackathonDto, HackathonDto, HackathonModeDto, HackathonStatsDto, HackathonStatusDto,
    UpdateHackathonDto,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Hackathon {
    pub id: Uuid,
    pub organizer_id: Uuid,
    pub title: String,
    pub problem_statement: String,
    pub mode: HackathonMode,
    pub status: HackathonStatus,
    pub banner_url: Option<String>,
    pub logo_url: Option<String>,
    pub timeline: Value,
    pub participation_rules: Value,
    pub submission_requirements: Value,
    pub communication_resources: Value,
    pub prize_rewards: Value,
    pub settings: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Hackathon {
    /// Converts an entity model to the domain model at the repository boundary.
    pub fn from_entity(entity: entity::hackathon::Model) -> Self {
        Self {
            id: entity.id,
            organizer_id: entity.organizer_id,
            title: entity.title,
            problem_statement: entity.problem_statement,
            mode: entity.mode,
            status: entity.status,
            banner_url: entity.banner_url,
            logo_url: entity.logo_url,
            timeline: entity.timeline,
            participation_rules: entity.participation_rules,
            submission_requirements: entity.submission_requirements,
            communication_resources: entity.communication_resources,
            prize_rewards: entity.prize_rewards,
            settings: entity.settings,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> HackathonDto {
        HackathonDto {
            id: self.id,
            organizer_id: self.organizer_id,
            title: self.title,
            problem_statement: self.problem_statement,
            mode: mode_to_dto(self.mode),
            status: status_to_dto(self.status),
            banner_url: self.banner_url,
            logo_url: self.logo_url,
            timeline: self.timeline,
            participation_rules: self.participation_rules,
            submission_requirements: self.submission_requirements,
            communication_resources: self.communication_resources,
            prize_rewards: self.prize_rewards,
            settings: self.settings,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn is_organized_by(&self, admin_id: Uuid) -> bool {
        self.organizer_id == admin_id
    }
}

pub fn mode_to_dto(mode: HackathonMode) -> HackathonModeDto {
    match mode {
        HackathonMode::Online => HackathonModeDto::Online,
        HackathonMode::Offline => HackathonModeDto::Offline,
        HackathonMode::Hybrid => HackathonModeDto::Hybrid,
    }
}

pub fn mode_from_dto(mode: HackathonModeDto) -> HackathonMode {
    match mode {
        HackathonModeDto::Online => HackathonMode::Online,
        HackathonModeDto::Offline => HackathonMode::Offline,
        HackathonModeDto::Hybrid => HackathonMode::Hybrid,
    }
}

pub fn status_to_dto(status: HackathonStatus) -> HackathonStatusDto {
    match status {
        HackathonStatus::Draft => HackathonStatusDto::Draft,
        HackathonStatus::Published => HackathonStatusDto::Published,
        HackathonStatus::Active => HackathonStatusDto::Active,
        HackathonStatus::Completed => HackathonStatusDto::Completed,
    }
}

pub fn status_from_dto(status: HackathonStatusDto) -> HackathonStatus {
    match status {
        HackathonStatusDto::Draft => HackathonStatus::Draft,
        HackathonStatusDto::Published => HackathonStatus::Published,
        HackathonStatusDto::Active => HackathonStatus::Active,
        HackathonStatusDto::Completed => HackathonStatus::Completed,
    }
}

/// Lowercase status name as stored and logged.
pub fn status_name(status: HackathonStatus) -> &'static str {
    match status {
        HackathonStatus::Draft => "draft",
        HackathonStatus::Published => "published",
        HackathonStatus::Active => "active",
        HackathonStatus::Completed => "completed",
    }
}

/// A lifecycle step an organizer can apply to their hackathon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTransition {
    Publish,
    Activate,
    Complete,
}

impl StatusTransition {
    /// The only status this transition may start from.
    pub fn source(self) -> HackathonStatus {
        match self {
            Self::Publish => HackathonStatus::Draft,
            Self::Activate => HackathonStatus::Published,
            Self::Complete => HackathonStatus::Active,
        }
    }

    pub fn target(self) -> HackathonStatus {
        match self {
            Self::Publish => HackathonStatus::Published,
            Self::Activate => HackathonStatus::Active,
            Self::Complete => HackathonStatus::Completed,
        }
    }

    pub fn can_apply_to(self, current: HackathonStatus) -> bool {
        current == self.source()
    }

    /// Verb used in client-facing messages, e.g. "publish".
    pub fn verb(self) -> &'static str {
        match self {
            Self::Publish => "publish",
            Self::Activate => "activate",
            Self::Complete => "complete",
        }
    }

    /// Message returned when the transition is attempted from the wrong status.
    pub fn rejection_message(self) -> String {
        format!(
            "Only {} hackathons can be {}",
            status_name(self.source()),
            match self {
                Self::Publish => "published",
                Self::Activate => "activated",
                Self::Complete => "completed",
            }
        )
    }
}

#[derive(Debug, Clone)]
pub struct CreateHackathonParams {
    pub organizer_id: Uuid,
    pub title: String,
    pub problem_statement: String,
    pub mode: HackathonMode,
    pub status: HackathonStatus,
    pub banner_url: Option<String>,
    pub logo_url: Option<String>,
    pub timeline: Value,
    pub participation_rules: Value,
    pub submission_requirements: Value,
    pub communication_resources: Value,
    pub prize_rewards: Value,
    pub settings: Value,
}

impl CreateHackathonParams {
    /// Builds creation parameters, defaulting status to draft and settings to `{}`.
    pub fn from_dto(organizer_id: Uuid, dto: CreateHackathonDto) -> Self {
        Self {
            organizer_id,
            title: dto.title,
            problem_statement: dto.problem_statement,
            mode: mode_from_dto(dto.mode),
            status: dto
                .status
                .map(status_from_dto)
                .unwrap_or(HackathonStatus::Draft),
            banner_url: dto.banner_url,
            logo_url: dto.logo_url,
            timeline: dto.timeline,
            participation_rules: dto.participation_rules,
            submission_requirements: dto.submission_requirements,
            communication_resources: dto.communication_resources,
            prize_rewards: dto.prize_rewards,
            settings: dto.settings.unwrap_or_else(|| json!({})),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateHackathonParams {
    pub title: Option<String>,
    pub problem_statement: Option<String>,
    pub mode: Option<HackathonMode>,
    pub banner_url: Option<String>,
    pub logo_url: Option<String>,
    pub timeline: Option<Value>,
    pub participation_rules: Option<Value>,
    pub submission_requirements: Option<Value>,
    pub communication_resources: Option<Value>,
    pub prize_rewards: Option<Value>,
    pub settings: Option<Value>,
}

impl From<UpdateHackathonDto> for UpdateHackathonParams {
    fn from(dto: UpdateHackathonDto) -> Self {
        Self {
            title: dto.title,
            problem_statement: dto.problem_statement,
            mode: dto.mode.map(mode_from_dto),
            banner_url: dto.banner_url,
            logo_url: dto.logo_url,
            timeline: dto.timeline,
            participation_rules: dto.participation_rules,
            submission_requirements: dto.submission_requirements,
            communication_resources: dto.communication_resources,
            prize_rewards: dto.prize_rewards,
            settings: dto.settings,
        }
    }
}

/// Filter for hackathon listings; `None` fields do not restrict.
#[derive(Debug, Clone, Default)]
pub struct HackathonFilter {
    pub organizer_id: Option<Uuid>,
    /// Matches any of the given statuses when non-empty.
    pub statuses: Vec<HackathonStatus>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HackathonStats {
    pub total_teams: u64,
    pub total_submissions: u64,
}

impl HackathonStats {
    /// Percentage of teams with a submission, 0 for a hackathon without teams.
    pub fn submission_rate(&self) -> f64 {
        if self.total_teams == 0 {
            return 0.0;
        }
        self.total_submissions as f64 / self.total_teams as f64 * 100.0
    }

    pub fn into_dto(self) -> HackathonStatsDto {
        HackathonStatsDto {
            submission_rate: self.submission_rate(),
            total_teams: self.total_teams,
            total_submissions: self.total_submissions,
            total_participants: 0,
        }
    }
}
