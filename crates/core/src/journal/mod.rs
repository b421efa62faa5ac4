//! Journal derivation and entry validation.
//!
//! A tenant's journal has two possible sources: a dedicated ledger collection
//! (native entries) or, when that collection is not provisioned, a projection
//! synthesized from sales and purchase invoices. This module implements:
//! - Domain types for invoices and journal entries
//! - The tagged `Journal` variant and its uniform projection
//! - Create-entry validation and the invoice-synthesis dispatch
//! - Status transition rules for posting and reversal

pub mod derive;
pub mod error;
pub mod types;
pub mod validation;

#[cfg(test)]
mod derive_props;

pub use derive::{JOURNAL_PAGE_LIMIT, Journal, entry_from_invoice};
pub use error::JournalError;
pub use types::{
    CreateEntryInput, EntryKind, EntryStatus, Invoice, InvoiceDirection, InvoiceStatus,
    JournalEntry, JournalFilter, SourceRef, SynthesizedInvoice, WriteOutcome,
};
pub use validation::{can_post, can_reverse, validate_create};
