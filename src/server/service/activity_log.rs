use sea_orm::DatabaseConnection;

use crate::server::{
    data::activity_log::ActivityLogRepository,
    error::AppError,
    model::{
        activity_log::{ActivityLog, ActivityLogFilter, ActivitySummary, SummaryFilter},
        pagination::{Page, PageRequest},
    },
};

pub struct ActivityLogService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ActivityLogService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_paginated(
        &self,
        filter: ActivityLogFilter,
        request: PageRequest,
    ) -> Result<Page<ActivityLog>, AppError> {
        let page = ActivityLogRepository::new(self.db)
            .get_paginated(&filter, request)
            .await?;

        Ok(page)
    }

    pub async fn get_recent(&self, limit: u64) -> Result<Vec<ActivityLog>, AppError> {
        let logs = ActivityLogRepository::new(self.db)
            .get_recent(limit.max(1))
            .await?;

        Ok(logs)
    }

    /// Aggregates matching entries into a total, per-action counts and per-day counts.
    ///
    /// # Returns
    /// - `Ok(ActivitySummary)` - Counts for the filter
    /// - `Err(AppError::BadRequest)` - `start` is after `end`
    pub async fn get_summary(&self, filter: SummaryFilter) -> Result<ActivitySummary, AppError> {
        if let (Some(start), Some(end)) = (filter.start, filter.end) {
            if start > end {
                return Err(AppError::BadRequest(
                    "start_date must not be after end_date".to_string(),
                ));
            }
        }

        let repo = ActivityLogRepository::new(self.db);

        Ok(ActivitySummary {
            total: repo.count(&filter).await?,
            by_action: repo.count_by_action(&filter).await?,
            by_day: repo.count_by_day(&filter).await?,
        })
    }
}
