use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::{
    sea_query::{Expr, ExprTrait, Func},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select,
};
use uuid::Uuid;

use crate::server::model::{
    activity_log::{ActivityLog, ActivityLogFilter, NewActivityLog, SummaryFilter},
    pagination::{Page, PageRequest},
};

pub struct ActivityLogRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ActivityLogRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Appends a log entry timestamped now.
    pub async fn create(&self, log: NewActivityLog) -> Result<ActivityLog, DbErr> {
        let entry = entity::activity_log::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            hackathon_id: ActiveValue::Set(log.hackathon_id),
            admin_id: ActiveValue::Set(log.admin_id),
            user_id: ActiveValue::Set(log.user_id),
            team_id: ActiveValue::Set(log.team_id),
            action: ActiveValue::Set(log.action),
            details: ActiveValue::Set(log.details),
            ip_address: ActiveValue::Set(log.ip_address),
            timestamp: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(ActivityLog::from_entity(entry))
    }

    /// Gets a page of log entries matching `filter`, newest first.
    pub async fn get_paginated(
        &self,
        filter: &ActivityLogFilter,
        request: PageRequest,
    ) -> Result<Page<ActivityLog>, DbErr> {
        let mut query = entity::prelude::ActivityLog::find();

        if let Some(hackathon_id) = filter.hackathon_id {
            query = query.filter(entity::activity_log::Column::HackathonId.eq(hackathon_id));
        }
        if let Some(user_id) = filter.user_id {
            query = query.filter(entity::activity_log::Column::UserId.eq(user_id));
        }
        if let Some(admin_id) = filter.admin_id {
            query = query.filter(entity::activity_log::Column::AdminId.eq(admin_id));
        }
        if let Some(action) = filter.action.as_deref().filter(|a| !a.is_empty()) {
            let pattern = format!("%{}%", action.to_lowercase());
            query = query.filter(
                Expr::expr(Func::lower(Expr::col(entity::activity_log::Column::Action)))
                    .like(pattern),
            );
        }

        let paginator = query
            .order_by_desc(entity::activity_log::Column::Timestamp)
            .paginate(self.db, request.limit);

        let total = paginator.num_items().await?;
        let logs = paginator
            .fetch_page(request.index())
            .await?
            .into_iter()
            .map(ActivityLog::from_entity)
            .collect();

        Ok(Page::new(logs, total, request))
    }

    /// Gets the `limit` most recent entries across all hackathons.
    pub async fn get_recent(&self, limit: u64) -> Result<Vec<ActivityLog>, DbErr> {
        let logs = entity::prelude::ActivityLog::find()
            .order_by_desc(entity::activity_log::Column::Timestamp)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(logs.into_iter().map(ActivityLog::from_entity).collect())
    }

    pub async fn count(&self, filter: &SummaryFilter) -> Result<u64, DbErr> {
        Self::summarized(filter).count(self.db).await
    }

    /// Number of entries per action, highest count first and ties by action name.
    pub async fn count_by_action(&self, filter: &SummaryFilter) -> Result<Vec<(String, u64)>, DbErr> {
        let rows: Vec<(String, i64)> = Self::summarized(filter)
            .select_only()
            .column(entity::activity_log::Column::Action)
            .column_as(
                Expr::expr(Func::count(Expr::col(entity::activity_log::Column::Id))),
                "count",
            )
            .group_by(entity::activity_log::Column::Action)
            .into_tuple()
            .all(self.db)
            .await?;

        let mut counts: Vec<(String, u64)> = rows
            .into_iter()
            .map(|(action, count)| (action, Ord::max(count, 0) as u64))
            .collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        Ok(counts)
    }

    /// Number of entries per UTC calendar day, oldest day first.
    pub async fn count_by_day(&self, filter: &SummaryFilter) -> Result<Vec<(NaiveDate, u64)>, DbErr> {
        let timestamps: Vec<DateTime<Utc>> = Self::summarized(filter)
            .select_only()
            .column(entity::activity_log::Column::Timestamp)
            .into_tuple()
            .all(self.db)
            .await?;

        let mut days: BTreeMap<NaiveDate, u64> = BTreeMap::new();
        for timestamp in timestamps {
            *days.entry(timestamp.date_naive()).or_default() += 1;
        }

        Ok(days.into_iter().collect())
    }

    fn summarized(filter: &SummaryFilter) -> Select<entity::activity_log::Entity> {
        let mut query = entity::prelude::ActivityLog::find();

        if let Some(hackathon_id) = filter.hackathon_id {
            query = query.filter(entity::activity_log::Column::HackathonId.eq(hackathon_id));
        }
        if let Some(start) = filter.start {
            query = query.filter(entity::activity_log::Column::Timestamp.gte(start));
        }
        if let Some(end) = filter.end {
            query = query.filter(entity::activity_log::Column::Timestamp.lte(end));
        }

        query
    }
}
