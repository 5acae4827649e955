use crate::server::{
    data::activity_log::ActivityLogRepository,
    model::{
        activity_log::{ActivityLogFilter, NewActivityLog, SummaryFilter},
        pagination::PageRequest,
    },
};
use chrono::{Duration, NaiveDate, TimeZone, Utc};
use sea_orm::DbErr;
use serde_json::json;
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod create;
mod get_paginated;
mod get_recent;
mod summary;
