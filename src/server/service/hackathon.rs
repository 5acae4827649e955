use sea_orm::{DatabaseConnection, TransactionTrait};
use serde_json::json;
use uuid::Uuid;

use crate::server::{
    data::{activity_log::ActivityLogRepository, hackathon::HackathonRepository},
    error::AppError,
    model::{
        activity_log::{NewActivityLog, HACKATHON_STATUS_CHANGE},
        hackathon::{
            status_name, CreateHackathonParams, Hackathon, HackathonFilter, HackathonStats,
            StatusTransition, UpdateHackathonParams,
        },
        pagination::{Page, PageRequest},
    },
};

pub struct HackathonService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HackathonService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateHackathonParams) -> Result<Hackathon, AppError> {
        let hackathon = HackathonRepository::new(self.db).create(params).await?;

        tracing::info!(
            hackathon_id = %hackathon.id,
            organizer_id = %hackathon.organizer_id,
            "Hackathon created"
        );

        Ok(hackathon)
    }

    pub async fn get_paginated(
        &self,
        filter: HackathonFilter,
        request: PageRequest,
    ) -> Result<Page<Hackathon>, AppError> {
        let page = HackathonRepository::new(self.db)
            .get_paginated(&filter, request)
            .await?;

        Ok(page)
    }

    /// Gets a hackathon by id.
    ///
    /// # Returns
    /// - `Ok(Hackathon)` - Found hackathon
    /// - `Err(AppError::NotFound)` - No hackathon with that id
    pub async fn get_by_id(&self, id: Uuid) -> Result<Hackathon, AppError> {
        HackathonRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Hackathon with ID {} not found", id)))
    }

    /// Gets a hackathon by slug; the slug is the exact title.
    pub async fn get_by_slug(&self, slug: &str) -> Result<Hackathon, AppError> {
        HackathonRepository::new(self.db)
            .find_by_title(slug)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Hackathon with slug {} not found", slug)))
    }

    pub async fn get_stats(&self, id: Uuid) -> Result<HackathonStats, AppError> {
        let hackathon = self.get_by_id(id).await?;

        let stats = HackathonRepository::new(self.db)
            .get_stats(hackathon.id)
            .await?;

        Ok(stats)
    }

    /// Applies a partial update on behalf of the hackathon's organizer.
    ///
    /// # Returns
    /// - `Ok(Hackathon)` - Updated hackathon
    /// - `Err(AppError::NotFound)` - No hackathon with that id
    /// - `Err(AppError::Forbidden)` - `admin_id` does not organize the hackathon
    pub async fn update(
        &self,
        id: Uuid,
        admin_id: Uuid,
        params: UpdateHackathonParams,
    ) -> Result<Hackathon, AppError> {
        self.get_owned(id, admin_id, "update").await?;

        HackathonRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Hackathon with ID {} not found", id)))
    }

    pub async fn delete(&self, id: Uuid, admin_id: Uuid) -> Result<(), AppError> {
        self.get_owned(id, admin_id, "delete").await?;

        HackathonRepository::new(self.db).delete(id).await?;

        tracing::info!(hackathon_id = %id, admin_id = %admin_id, "Hackathon deleted");

        Ok(())
    }

    /// Moves the hackathon one step through its lifecycle and records the change.
    ///
    /// # Returns
    /// - `Ok(Hackathon)` - Hackathon in its new status
    /// - `Err(AppError::NotFound)` - No hackathon with that id
    /// - `Err(AppError::Forbidden)` - `admin_id` does not organize the hackathon
    /// - `Err(AppError::BadRequest)` - Current status does not allow the transition
    pub async fn transition(
        &self,
        id: Uuid,
        admin_id: Uuid,
        transition: StatusTransition,
    ) -> Result<Hackathon, AppError> {
        let hackathon = self.get_owned(id, admin_id, transition.verb()).await?;

        if !transition.can_apply_to(hackathon.status) {
            return Err(AppError::BadRequest(transition.rejection_message()));
        }

        let txn = self.db.begin().await?;

        let updated = HackathonRepository::new(&txn)
            .set_status(id, transition.target())
            .await?;

        ActivityLogRepository::new(&txn)
            .create(NewActivityLog {
                hackathon_id: Some(id),
                admin_id: Some(admin_id),
                ..NewActivityLog::new(
                    HACKATHON_STATUS_CHANGE,
                    json!({
                        "event": "Hackathon status changed",
                        "oldStatus": status_name(hackathon.status),
                        "newStatus": status_name(updated.status),
                    }),
                )
            })
            .await?;

        txn.commit().await?;

        tracing::info!(
            hackathon_id = %id,
            from = status_name(hackathon.status),
            to = status_name(updated.status),
            "Hackathon status changed"
        );

        Ok(updated)
    }

    async fn get_owned(&self, id: Uuid, admin_id: Uuid, verb: &str) -> Result<Hackathon, AppError> {
        let hackathon = self.get_by_id(id).await?;

        if !hackathon.is_organized_by(admin_id) {
            return Err(AppError::Forbidden(format!(
                "You can only {} hackathons you organize",
                verb
            )));
        }

        Ok(hackathon)
    }
}
