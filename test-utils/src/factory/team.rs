//! Team factory for creating test team entities.

use chrono::Utc;
use entity::team::{SubmissionStatus, TeamStatus};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

use crate::factory::helpers::next_id;

/// Factory for creating test teams with customizable fields.
///
/// The hackathon must already exist; teams carry a foreign key to it.
pub struct TeamFactory<'a> {
    db: &'a DatabaseConnection,
    hackathon_id: Uuid,
    name: String,
    status: TeamStatus,
    submission_status: SubmissionStatus,
}

impl<'a> TeamFactory<'a> {
    /// Creates a new TeamFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Team {id}"`
    /// - status: `Pending`
    /// - submission_status: `NotSubmitted`
    pub fn new(db: &'a DatabaseConnection, hackathon_id: Uuid) -> Self {
        let id = next_id();
        Self {
            db,
            hackathon_id,
            name: format!("Team {}", id),
            status: TeamStatus::Pending,
            submission_status: SubmissionStatus::NotSubmitted,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn status(mut self, status: TeamStatus) -> Self {
        self.status = status;
        self
    }

    pub fn submission_status(mut self, submission_status: SubmissionStatus) -> Self {
        self.submission_status = submission_status;
        self
    }

    /// Builds and inserts the team entity into the database.
    pub async fn build(self) -> Result<entity::team::Model, DbErr> {
        let now = Utc::now();
        entity::team::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            hackathon_id: ActiveValue::Set(self.hackathon_id),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(None),
            status: ActiveValue::Set(self.status),
            submission_status: ActiveValue::Set(self.submission_status),
            ai_score: ActiveValue::Set(None),
            eligibility: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a team with default values for the given hackathon.
pub async fn create_team(
    db: &DatabaseConnection,
    hackathon_id: Uuid,
) -> Result<entity::team::Model, DbErr> {
    TeamFactory::new(db, hackathon_id).build().await
}
