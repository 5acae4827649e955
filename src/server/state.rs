//! Application state shared across all request handlers.
//!
//! The state is built once during startup, after the readiness gate passed and
//! migrations ran, and is then cloned into each handler through Axum's state extraction.

use sea_orm::DatabaseConnection;
use std::{sync::Arc, time::Instant};

use crate::server::{config::Config, service::identity::IdentityClient};

/// Shared resources for request handling.
///
/// Every field is cheap to clone: the database connection and the reqwest client are
/// pools behind reference counts, and the configuration sits in an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: DatabaseConnection,

    /// Client for resolving bearer tokens through the identity service.
    pub identity: IdentityClient,

    /// Immutable process configuration.
    pub config: Arc<Config>,

    /// Moment the state was created; the health endpoint reports uptime from it.
    pub started_at: Instant,
}

impl AppState {
    pub fn new(db: DatabaseConnection, identity: IdentityClient, config: Arc<Config>) -> Self {
        Self {
            db,
            identity,
            config,
            started_at: Instant::now(),
        }
    }
}
