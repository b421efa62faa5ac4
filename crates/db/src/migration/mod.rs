//! Database migrations.
//!
//! Migrations are managed using sea-orm-migration. The ledger tables live in
//! their own migration: an installation migrated only through the initial
//! step runs entirely on the invoice-derived reporting path.

pub use sea_orm_migration::prelude::*;

mod m20260815_000001_initial;
mod m20260815_000002_ledger;

/// Migrator for running database migrations.
pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260815_000001_initial::Migration),
            Box::new(m20260815_000002_ledger::Migration),
        ]
    }
}
