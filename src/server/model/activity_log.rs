//! Activity log domain models and parameters.
//!
//! Activity logs are an append-only audit trail of notable actions, e.g. hackathon
//! status changes and team creation, optionally linked to a hackathon, admin, user
//! or team.

use chrono::{DateTime, NaiveDate, Utc};
use serde_json::Value;
use uuid::Uuid;

use crate::model::activity_log::{
    ActionCountDto, ActivityLogDto, ActivitySummaryDto, DailyCountDto,
};

pub const HACKATHON_STATUS_CHANGE: &str = "HACKATHON_STATUS_CHANGE";
pub const TEAM_CREATION: &str = "TEAM_CREATION";

#[derive(Debug, Clone, PartialEq)]
pub struct ActivityLog {
    pub id: Uuid,
    pub hackathon_id: Option<Uuid>,
    pub admin_id: Option<Uuid>,
    pub user_id: Option<Uuid>,
    pub team_id: Option<Uuid>,
    pub action: String,
    pub details: Value,
    pub ip_address: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl ActivityLog {
    pub fn from_entity(entity: entity::activity_log::Model) -> Self {
        Self {
            id: entity.id,
            hackathon_id: entity.hackathon_id,
            admin_id: entity.admin_id,
            user_id: entity.user_id,
            team_id: entity.team_id,
            action: entity.action,
            details: entity.details,
            ip_address: entity.ip_address,
            timestamp: entity.timestamp,
        }
    }

    pub fn into_dto(self) -> ActivityLogDto {
        ActivityLogDto {
            id: self.id,
            hackathon_id: self.hackathon_id,
            admin_id: self.admin_id,
            user_id: self.user_id,
            team_id: self.team_id,
            action: self.action,
            details: self.details,
            ip_address: self.ip_address,
            timestamp: self.timestamp,
        }
    }
}

/// A new log entry; the repository assigns id and timestamp.
#[derive(Debug, Clone)]
pub struct NewActivityLog {
    pub hackathon_id: Option<Uuid>,
    pub admin_id: Option<Uuid>,
    pub user_id: Option<Uuid>,
    pub team_id: Option<Uuid>,
    pub action: String,
    pub details: Value,
    pub ip_address: Option<String>,
}

impl NewActivityLog {
    pub fn new(action: impl Into<String>, details: Value) -> Self {
        Self {
            hackathon_id: None,
            admin_id: None,
            user_id: None,
            team_id: None,
            action: action.into(),
            details,
            ip_address: None,
        }
    }
}

/// Filter for log listings. `action` is a case-insensitive substring match.
#[derive(Debug, Clone, Default)]
pub struct ActivityLogFilter {
    pub hackathon_id: Option<Uuid>,
    pub user_id: Option<Uuid>,
    pub admin_id: Option<Uuid>,
    pub action: Option<String>,
}

/// Filter for summaries; both date bounds are inclusive.
#[derive(Debug, Clone, Default)]
pub struct SummaryFilter {
    pub hackathon_id: Option<Uuid>,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActivitySummary {
    pub total: u64,
    pub by_action: Vec<(String, u64)>,
    pub by_day: Vec<(NaiveDate, u64)>,
}

impl ActivitySummary {
    pub fn into_dto(self) -> ActivitySummaryDto {
        ActivitySummaryDto {
            total_activities: self.total,
            action_stats: self
                .by_action
                .into_iter()
                .map(|(action, count)| ActionCountDto { action, count })
                .collect(),
            daily_activity: self
                .by_day
                .into_iter()
                .map(|(date, count)| DailyCountDto { date, count })
                .collect(),
        }
    }
}
