use sea_orm::{DatabaseConnection, TransactionTrait};
use serde_json::json;
use uuid::Uuid;

use crate::server::{
    data::{
        activity_log::ActivityLogRepository, hackathon::HackathonRepository, team::TeamRepository,
    },
    error::AppError,
    model::{
        activity_log::{NewActivityLog, TEAM_CREATION},
        pagination::{Page, PageRequest},
        team::{CreateTeamParams, Team, TeamFilter, UpdateTeamParams},
    },
};

pub struct TeamService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a team in an existing hackathon.
    ///
    /// # Returns
    /// - `Ok(Team)` - Created team
    /// - `Err(AppError::NotFound)` - Hackathon does not exist
    /// - `Err(AppError::BadRequest)` - Name already used in this hackathon
    pub async fn create(&self, params: CreateTeamParams) -> Result<Team, AppError> {
        let hackathon_id = params.hackathon_id;

        if HackathonRepository::new(self.db)
            .find_by_id(hackathon_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!(
                "Hackathon with ID {} not found",
                hackathon_id
            )));
        }

        let repo = TeamRepository::new(self.db);

        if repo.name_taken(hackathon_id, &params.name).await? {
            return Err(AppError::BadRequest(
                "Team name already exists in this hackathon".to_string(),
            ));
        }

        let txn = self.db.begin().await?;

        let team = TeamRepository::new(&txn).create(params).await?;

        ActivityLogRepository::new(&txn)
            .create(NewActivityLog {
                hackathon_id: Some(hackathon_id),
                team_id: Some(team.id),
                ..NewActivityLog::new(TEAM_CREATION, json!({ "event": "Team created" }))
            })
            .await?;

        txn.commit().await?;

        Ok(team)
    }

    pub async fn get_paginated(
        &self,
        filter: TeamFilter,
        request: PageRequest,
    ) -> Result<Page<Team>, AppError> {
        let page = TeamRepository::new(self.db)
            .get_paginated(&filter, request)
            .await?;

        Ok(page)
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Team, AppError> {
        TeamRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Team with ID {} not found", id)))
    }

    /// Applies a partial update.
    ///
    /// # Returns
    /// - `Ok(Team)` - Updated team
    /// - `Err(AppError::NotFound)` - No team with that id
    /// - `Err(AppError::BadRequest)` - New name already used in the team's hackathon
    pub async fn update(&self, id: Uuid, params: UpdateTeamParams) -> Result<Team, AppError> {
        let repo = TeamRepository::new(self.db);
        let team = self.get_by_id(id).await?;

        if let Some(name) = params.name.as_deref() {
            if name != team.name && repo.name_taken(team.hackathon_id, name).await? {
                return Err(AppError::BadRequest(
                    "Team name already exists in this hackathon".to_string(),
                ));
            }
        }

        repo.update(id, params)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Team with ID {} not found", id)))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        if !TeamRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound(format!("Team with ID {} not found", id)));
        }

        Ok(())
    }
}
