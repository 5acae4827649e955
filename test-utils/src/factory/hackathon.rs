//! Hackathon factory for creating test hackathon entities.

use chrono::{DateTime, Utc};
use entity::hackathon::{HackathonMode, HackathonStatus};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::json;
use uuid::Uuid;

use crate::factory::helpers::next_id;

/// Factory for creating test hackathons with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let hackathon = HackathonFactory::new(&db)
///     .organizer_id(admin_id)
///     .status(HackathonStatus::Active)
///     .build()
///     .await?;
/// ```
pub struct HackathonFactory<'a> {
    db: &'a DatabaseConnection,
    organizer_id: Uuid,
    title: String,
    mode: HackathonMode,
    status: HackathonStatus,
    created_at: DateTime<Utc>,
}

impl<'a> HackathonFactory<'a> {
    /// Creates a new HackathonFactory with default values.
    ///
    /// Defaults:
    /// - organizer_id: random UUID
    /// - title: `"Hackathon {id}"`
    /// - mode: `Online`
    /// - status: `Draft`
    /// - created_at: now
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            organizer_id: Uuid::new_v4(),
            title: format!("Hackathon {}", id),
            mode: HackathonMode::Online,
            status: HackathonStatus::Draft,
            created_at: Utc::now(),
        }
    }

    pub fn organizer_id(mut self, organizer_id: Uuid) -> Self {
        self.organizer_id = organizer_id;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn mode(mut self, mode: HackathonMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn status(mut self, status: HackathonStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the creation timestamp, used by tests that depend on ordering.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the hackathon entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::hackathon::Model)` - Created hackathon entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::hackathon::Model, DbErr> {
        entity::hackathon::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            organizer_id: ActiveValue::Set(self.organizer_id),
            title: ActiveValue::Set(self.title),
            problem_statement: ActiveValue::Set("Build something useful".to_string()),
            mode: ActiveValue::Set(self.mode),
            banner_url: ActiveValue::Set(None),
            logo_url: ActiveValue::Set(None),
            timeline: ActiveValue::Set(json!({ "start": "2025-10-01", "end": "2025-10-03" })),
            participation_rules: ActiveValue::Set(json!({ "max_team_size": 4 })),
            submission_requirements: ActiveValue::Set(json!({ "repository": true })),
            communication_resources: ActiveValue::Set(json!({})),
            prize_rewards: ActiveValue::Set(json!({ "first": 1000 })),
            settings: ActiveValue::Set(json!({})),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a draft hackathon with default values.
///
/// Shorthand for `HackathonFactory::new(db).build().await`.
pub async fn create_hackathon(
    db: &DatabaseConnection,
) -> Result<entity::hackathon::Model, DbErr> {
    HackathonFactory::new(db).build().await
}
