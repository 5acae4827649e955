//! Server-side API backend and business logic.
//!
//! The backend uses Axum as the web framework and SeaORM for database operations.
//! Identity is delegated to a sibling identity service reached over HTTP.
//!
//! # Architecture
//!
//! The server follows a layered architecture:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Business rules between controllers and the data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - API key guard and admin guard
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **Readiness** (`readiness/`) - Dependency checks run before the listener is bound
//! - **State** (`state`) - Shared application state (DB, identity client, configuration)
//! - **Startup** (`startup`) - Tracing, readiness wait, database connection and migrations
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives the request; the API key guard rejects unknown keys
//! 2. **Controller** runs the admin guard if needed and converts DTOs to params
//! 3. **Service** executes business logic and orchestrates repositories
//! 4. **Data** queries the database and converts entities to domain models
//! 5. **Controller** converts the domain model to a DTO and responds

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod readiness;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;

#[cfg(test)]
pub mod test_support;
