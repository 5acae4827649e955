use chrono::Utc;
use entity::{hackathon::HackathonStatus, team::SubmissionStatus};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Select,
};
use uuid::Uuid;

use crate::server::model::{
    hackathon::{
        CreateHackathonParams, Hackathon, HackathonFilter, HackathonStats, UpdateHackathonParams,
    },
    pagination::{Page, PageRequest},
};

pub struct HackathonRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> HackathonRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new hackathon with a fresh id and matching created/updated timestamps.
    pub async fn create(&self, params: CreateHackathonParams) -> Result<Hackathon, DbErr> {
        let now = Utc::now();

        let hackathon = entity::hackathon::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            organizer_id: ActiveValue::Set(params.organizer_id),
            title: ActiveValue::Set(params.title),
            problem_statement: ActiveValue::Set(params.problem_statement),
            mode: ActiveValue::Set(params.mode),
            banner_url: ActiveValue::Set(params.banner_url),
            logo_url: ActiveValue::Set(params.logo_url),
            timeline: ActiveValue::Set(params.timeline),
            participation_rules: ActiveValue::Set(params.participation_rules),
            submission_requirements: ActiveValue::Set(params.submission_requirements),
            communication_resources: ActiveValue::Set(params.communication_resources),
            prize_rewards: ActiveValue::Set(params.prize_rewards),
            settings: ActiveValue::Set(params.settings),
            status: ActiveValue::Set(params.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Ok(Hackathon::from_entity(hackathon))
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Hackathon>, DbErr> {
        let hackathon = entity::prelude::Hackathon::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(hackathon.map(Hackathon::from_entity))
    }

    /// Finds a hackathon by exact title, which doubles as its slug.
    pub async fn find_by_title(&self, title: &str) -> Result<Option<Hackathon>, DbErr> {
        let hackathon = entity::prelude::Hackathon::find()
            .filter(entity::hackathon::Column::Title.eq(title))
            .one(self.db)
            .await?;

        Ok(hackathon.map(Hackathon::from_entity))
    }

    /// Gets a page of hackathons matching `filter`, newest first.
    pub async fn get_paginated(
        &self,
        filter: &HackathonFilter,
        request: PageRequest,
    ) -> Result<Page<Hackathon>, DbErr> {
        let paginator = Self::filtered(filter)
            .order_by_desc(entity::hackathon::Column::CreatedAt)
            .paginate(self.db, request.limit);

        let total = paginator.num_items().await?;
        let hackathons = paginator
            .fetch_page(request.index())
            .await?
            .into_iter()
            .map(Hackathon::from_entity)
            .collect();

        Ok(Page::new(hackathons, total, request))
    }

    fn filtered(filter: &HackathonFilter) -> Select<entity::hackathon::Entity> {
        let mut query = entity::prelude::Hackathon::find();

        if let Some(organizer_id) = filter.organizer_id {
            query = query.filter(entity::hackathon::Column::OrganizerId.eq(organizer_id));
        }

        if !filter.statuses.is_empty() {
            query = query.filter(entity::hackathon::Column::Status.is_in(filter.statuses.clone()));
        }

        query
    }

    /// Applies the provided fields and bumps `updated_at`.
    ///
    /// # Returns
    /// - `Ok(Some(Hackathon))` - Updated hackathon
    /// - `Ok(None)` - No hackathon with that id
    pub async fn update(
        &self,
        id: Uuid,
        params: UpdateHackathonParams,
    ) -> Result<Option<Hackathon>, DbErr> {
        let Some(hackathon) = entity::prelude::Hackathon::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::hackathon::ActiveModel = hackathon.into();

        if let Some(title) = params.title {
            active.title = ActiveValue::Set(title);
        }
        if let Some(problem_statement) = params.problem_statement {
            active.problem_statement = ActiveValue::Set(problem_statement);
        }
        if let Some(mode) = params.mode {
            active.mode = ActiveValue::Set(mode);
        }
        if let Some(banner_url) = params.banner_url {
            active.banner_url = ActiveValue::Set(Some(banner_url));
        }
        if let Some(logo_url) = params.logo_url {
            active.logo_url = ActiveValue::Set(Some(logo_url));
        }
        if let Some(timeline) = params.timeline {
            active.timeline = ActiveValue::Set(timeline);
        }
        if let Some(rules) = params.participation_rules {
            active.participation_rules = ActiveValue::Set(rules);
        }
        if let Some(requirements) = params.submission_requirements {
            active.submission_requirements = ActiveValue::Set(requirements);
        }
        if let Some(resources) = params.communication_resources {
            active.communication_resources = ActiveValue::Set(resources);
        }
        if let Some(prizes) = params.prize_rewards {
            active.prize_rewards = ActiveValue::Set(prizes);
        }
        if let Some(settings) = params.settings {
            active.settings = ActiveValue::Set(settings);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let updated = active.update(self.db).await?;

        Ok(Some(Hackathon::from_entity(updated)))
    }

    /// Sets the status unconditionally; lifecycle rules are enforced by the service.
    pub async fn set_status(&self, id: Uuid, status: HackathonStatus) -> Result<Hackathon, DbErr> {
        let updated = entity::hackathon::ActiveModel {
            id: ActiveValue::Unchanged(id),
            status: ActiveValue::Set(status),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(Hackathon::from_entity(updated))
    }

    /// Deletes a hackathon; its teams and activity logs cascade.
    pub async fn delete(&self, id: Uuid) -> Result<(), DbErr> {
        entity::prelude::Hackathon::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Counts the hackathon's teams and how many of them have submitted.
    pub async fn get_stats(&self, id: Uuid) -> Result<HackathonStats, DbErr> {
        let teams = entity::prelude::Team::find()
            .filter(entity::team::Column::HackathonId.eq(id));

        let total_teams = teams.clone().count(self.db).await?;
        let total_submissions = teams
            .filter(entity::team::Column::SubmissionStatus.ne(SubmissionStatus::NotSubmitted))
            .count(self.db)
            .await?;

        Ok(HackathonStats {
            total_teams,
            total_submissions,
        })
    }
}
