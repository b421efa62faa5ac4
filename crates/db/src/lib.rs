//! Database layer with `SeaORM` entities and repositories.
//!
//! This crate provides:
//! - `SeaORM` entity definitions
//! - Repository abstractions for data access
//! - Database migrations
//! - The `QueryOutcome` classification that distinguishes an absent table
//!   from a failing one

pub mod entities;
pub mod migration;
pub mod outcome;
pub mod repositories;

pub use outcome::QueryOutcome;
pub use repositories::{LedgerError, LedgerRepository, ReportingRepository};

use sea_orm::{Database, DatabaseConnection, DbErr};

/// Establishes a connection to the database.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    Database::connect(database_url).await
}
