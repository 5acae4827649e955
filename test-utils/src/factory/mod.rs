//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with a `Factory`
//! struct for customization and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let hackathon = factory::create_hackathon(&db).await?;
//! let team = factory::create_team(&db, hackathon.id).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! use test_utils::factory::hackathon::HackathonFactory;
//! use entity::hackathon::HackathonStatus;
//!
//! let hackathon = HackathonFactory::new(&db)
//!     .title("Rust Jam")
//!     .status(HackathonStatus::Published)
//!     .build()
//!     .await?;
//! ```

pub mod activity_log;
pub mod hackathon;
pub mod helpers;
pub mod team;

pub use activity_log::create_activity_log;
pub use hackathon::create_hackathon;
pub use team::create_team;
