//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a hackathon with one team attached.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((hackathon, team))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_team_with_hackathon(
    db: &DatabaseConnection,
) -> Result<(entity::hackathon::Model, entity::team::Model), DbErr> {
    let hackathon = crate::factory::hackathon::create_hackathon(db).await?;
    let team = crate::factory::team::create_team(db, hackathon.id).await?;

    Ok((hackathon, team))
}
