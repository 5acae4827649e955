//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller layer and the data layer. They enforce business
//! rules such as organizer ownership, lifecycle transitions and team name uniqueness, and
//! coordinate repositories and the identity service. They work with domain models rather
//! than DTOs or entity models.

pub mod activity_log;
pub mod hackathon;
pub mod identity;
pub mod team;

#[cfg(test)]
mod test;
