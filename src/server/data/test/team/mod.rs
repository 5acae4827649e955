use crate::server::{
    data::team::TeamRepository,
    model::{
        pagination::PageRequest,
        team::{CreateTeamParams, TeamFilter, UpdateTeamParams},
    },
};
use entity::team::{SubmissionStatus, TeamStatus};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod create;
mod delete;
mod get_paginated;
mod update;
