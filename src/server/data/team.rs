use chrono::Utc;
use entity::team::SubmissionStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::model::{
    pagination::{Page, PageRequest},
    team::{CreateTeamParams, Team, TeamFilter, UpdateTeamParams},
};

pub struct TeamRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TeamRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a team that has not submitted yet.
    pub async fn create(&self, params: CreateTeamParams) -> Result<Team, DbErr> {
        let now = Utc::now();

        let team = entity::team::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            hackathon_id: ActiveValue::Set(params.hackathon_id),
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            status: ActiveValue::Set(params.status),
            submission_status: ActiveValue::Set(SubmissionStatus::NotSubmitted),
            ai_score: ActiveValue::Set(None),
            eligibility: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Ok(Team::from_entity(team))
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Team>, DbErr> {
        let team = entity::prelude::Team::find_by_id(id).one(self.db).await?;

        Ok(team.map(Team::from_entity))
    }

    /// Whether a team with exactly this name already exists in the hackathon.
    pub async fn name_taken(&self, hackathon_id: Uuid, name: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Team::find()
            .filter(entity::team::Column::HackathonId.eq(hackathon_id))
            .filter(entity::team::Column::Name.eq(name))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets a page of teams matching `filter`, newest first.
    pub async fn get_paginated(
        &self,
        filter: &TeamFilter,
        request: PageRequest,
    ) -> Result<Page<Team>, DbErr> {
        let mut query = entity::prelude::Team::find();

        if let Some(hackathon_id) = filter.hackathon_id {
            query = query.filter(entity::team::Column::HackathonId.eq(hackathon_id));
        }
        if let Some(status) = filter.status {
            query = query.filter(entity::team::Column::Status.eq(status));
        }

        let paginator = query
            .order_by_desc(entity::team::Column::CreatedAt)
            .paginate(self.db, request.limit);

        let total = paginator.num_items().await?;
        let teams = paginator
            .fetch_page(request.index())
            .await?
            .into_iter()
            .map(Team::from_entity)
            .collect();

        Ok(Page::new(teams, total, request))
    }

    /// Applies the provided fields and bumps `updated_at`.
    ///
    /// # Returns
    /// - `Ok(Some(Team))` - Updated team
    /// - `Ok(None)` - No team with that id
    pub async fn update(&self, id: Uuid, params: UpdateTeamParams) -> Result<Option<Team>, DbErr> {
        let Some(team) = entity::prelude::Team::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::team::ActiveModel = team.into();

        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(description) = params.description {
            active.description = ActiveValue::Set(Some(description));
        }
        if let Some(status) = params.status {
            active.status = ActiveValue::Set(status);
        }
        if let Some(submission_status) = params.submission_status {
            active.submission_status = ActiveValue::Set(submission_status);
        }
        if let Some(ai_score) = params.ai_score {
            active.ai_score = ActiveValue::Set(Some(ai_score));
        }
        if let Some(eligibility) = params.eligibility {
            active.eligibility = ActiveValue::Set(Some(eligibility));
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let updated = active.update(self.db).await?;

        Ok(Some(Team::from_entity(updated)))
    }

    /// Deletes a team.
    ///
    /// # Returns
    /// - `Ok(true)` - Team deleted
    /// - `Ok(false)` - No team with that id
    pub async fn delete(&self, id: Uuid) -> Result<bool, DbErr> {
        let result = entity::prelude::Team::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
