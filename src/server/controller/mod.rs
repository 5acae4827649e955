//! HTTP request handlers.
//!
//! Controllers extract request data, run the admin guard where required, convert DTOs
//! to domain parameters, call the service layer and convert results back to DTOs.
//! Each handler carries a `utoipa::path` annotation collected by the router's OpenAPI
//! document.

pub mod activity_log;
pub mod hackathon;
pub mod health;
pub mod team;

#[cfg(test)]
mod test;
