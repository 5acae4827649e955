use crate::server::{
    data::hackathon::HackathonRepository,
    model::{
        hackathon::{CreateHackathonParams, HackathonFilter, UpdateHackathonParams},
        pagination::PageRequest,
    },
};
use chrono::{Duration, Utc};
use entity::{
    hackathon::{HackathonMode, HackathonStatus},
    team::SubmissionStatus,
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use serde_json::json;
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod create;
mod delete;
mod get_paginated;
mod get_stats;
mod update;
