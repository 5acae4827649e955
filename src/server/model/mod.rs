//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary, keeping business logic separate from
//! database and API concerns.

pub mod activity_log;
pub mod auth;
pub mod hackathon;
pub mod pagination;
pub mod team;
