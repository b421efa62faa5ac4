//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations,
//! hiding the `SeaORM` implementation details from the rest of the
//! application. Both repositories classify every table read through
//! [`crate::outcome::QueryOutcome`] so that an unprovisioned table triggers
//! the derived path instead of an error.

pub mod ledger;
pub mod reporting;

pub use ledger::{LedgerError, LedgerRepository};
pub use reporting::ReportingRepository;
