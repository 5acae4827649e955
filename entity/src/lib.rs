//! SeaORM entity definitions for the hackathon core database schema.

pub mod prelude;

pub mod activity_log;
pub mod hackathon;
pub mod team;
