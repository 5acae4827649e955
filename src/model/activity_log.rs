use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ActivityLogDto {
    pub id: Uuid,
    pub hackathon_id: Option<Uuid>,
    pub admin_id: Option<Uuid>,
    pub user_id: Option<Uuid>,
    pub team_id: Option<Uuid>,
    pub action: String,
    #[schema(value_type = Object)]
    pub details: Value,
    pub ip_address: Option<String>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ActionCountDto {
    pub action: String,
    pub count: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct DailyCountDto {
    pub date: NaiveDate,
    pub count: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ActivitySummaryDto {
    pub total_activities: u64,
    /// Ordered by count, highest first.
    pub action_stats: Vec<ActionCountDto>,
    /// Ordered by date, oldest first.
    pub daily_activity: Vec<DailyCountDto>,
}
