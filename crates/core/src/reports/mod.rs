//! Financial report generation.
//!
//! Pure aggregation over journal entries and raw invoice/order/inventory
//! rows:
//! - Trial balance totals
//! - Chart of accounts (native or best-effort synthesis)
//! - General ledger (the journal projection itself)
//! - Financial KPI bundle with month-over-month deltas

pub mod error;
pub mod service;
pub mod types;

#[cfg(test)]
mod tests;

pub use error::ReportError;
pub use service::ReportService;
pub use types::*;
