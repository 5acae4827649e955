//! Activity log factory for creating test activity log entries.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::json;
use uuid::Uuid;

/// Factory for creating test activity log entries.
pub struct ActivityLogFactory<'a> {
    db: &'a DatabaseConnection,
    action: String,
    hackathon_id: Option<Uuid>,
    admin_id: Option<Uuid>,
    user_id: Option<Uuid>,
    timestamp: DateTime<Utc>,
}

impl<'a> ActivityLogFactory<'a> {
    /// Creates a new ActivityLogFactory for the given action, timestamped now.
    pub fn new(db: &'a DatabaseConnection, action: impl Into<String>) -> Self {
        Self {
            db,
            action: action.into(),
            hackathon_id: None,
            admin_id: None,
            user_id: None,
            timestamp: Utc::now(),
        }
    }

    pub fn hackathon_id(mut self, hackathon_id: Uuid) -> Self {
        self.hackathon_id = Some(hackathon_id);
        self
    }

    pub fn admin_id(mut self, admin_id: Uuid) -> Self {
        self.admin_id = Some(admin_id);
        self
    }

    pub fn user_id(mut self, user_id: Uuid) -> Self {
        self.user_id = Some(user_id);
        self
    }

    pub fn timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Builds and inserts the activity log entry into the database.
    pub async fn build(self) -> Result<entity::activity_log::Model, DbErr> {
        entity::activity_log::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            hackathon_id: ActiveValue::Set(self.hackathon_id),
            admin_id: ActiveValue::Set(self.admin_id),
            user_id: ActiveValue::Set(self.user_id),
            team_id: ActiveValue::Set(None),
            action: ActiveValue::Set(self.action),
            details: ActiveValue::Set(json!({})),
            ip_address: ActiveValue::Set(None),
            timestamp: ActiveValue::Set(self.timestamp),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an activity log entry with the given action and no associations.
pub async fn create_activity_log(
    db: &DatabaseConnection,
    action: impl Into<String>,
) -> Result<entity::activity_log::Model, DbErr> {
    ActivityLogFactory::new(db, action).build().await
}
