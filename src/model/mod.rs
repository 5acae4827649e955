//! Request and response DTOs of the HTTP API.

pub mod activity_log;
pub mod api;
pub mod hackathon;
pub mod health;
pub mod team;
