//! Database repository layer for all domain entities.
//!
//! Repositories wrap a borrowed connection, either the pool or an open transaction, and perform the CRUD operations for
//! one domain each. They use SeaORM entity models internally and return domain models,
//! keeping SQL concerns out of the service layer.

pub mod activity_log;
pub mod hackathon;
pub mod team;

#[cfg(test)]
mod test;
