//! Journal domain types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Direction of an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceDirection {
    /// Sales invoice (money owed to the tenant).
    Sale,
    /// Purchase invoice (money owed by the tenant).
    Purchase,
}

/// Invoice lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    /// Being drafted, not yet sent.
    Draft,
    /// Issued to the counterparty.
    Issued,
    /// Fully paid.
    Paid,
    /// Voided; contributes to no aggregate.
    Voided,
}

/// An invoice row as read from the sales or purchase collections.
///
/// Invoices are created by the sales/purchase modules and are read-only from
/// the reporting engine's perspective. Invariant: `total >= 0`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    /// Invoice ID.
    pub id: Uuid,
    /// Owning tenant.
    pub tenant_id: Uuid,
    /// Human-facing document number.
    pub document_number: String,
    /// Sale or purchase.
    pub direction: InvoiceDirection,
    /// Issue date.
    pub issued_on: NaiveDate,
    /// Due date, if any.
    pub due_on: Option<NaiveDate>,
    /// Payment date, if paid.
    pub paid_on: Option<NaiveDate>,
    /// Lifecycle status.
    pub status: InvoiceStatus,
    /// Invoice total.
    pub total: Decimal,
    /// Free-form notes; round-trips the entry description for synthesized
    /// invoices.
    pub notes: Option<String>,
}

/// Classification of a journal entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Derived from (or mirroring) a sales invoice.
    Sales,
    /// Derived from (or mirroring) a purchase invoice.
    Purchase,
    /// Manually created entry.
    Standard,
}

/// Journal entry status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryStatus {
    /// Not yet posted.
    Draft,
    /// Posted to the ledger.
    Posted,
    /// Reversed after posting.
    Reversed,
}

/// Reference to the row a derived entry was synthesized from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRef {
    /// Source collection kind, e.g. `sales_invoice`.
    pub doc_type: String,
    /// Source row ID.
    pub id: Uuid,
}

/// A journal entry, either native or synthesized from an invoice.
///
/// A synthesized entry has no identity of its own: its `id` is the source
/// invoice's id and exactly one of `debit`/`credit` is nonzero. A native
/// entry may carry both sides.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Entry ID (the source invoice ID for derived entries).
    pub id: Uuid,
    /// Owning tenant.
    pub tenant_id: Uuid,
    /// Human-facing entry number.
    pub entry_number: String,
    /// Entry date.
    pub entry_date: NaiveDate,
    /// Description.
    pub description: String,
    /// Entry classification.
    pub kind: EntryKind,
    /// Debit amount.
    pub debit: Decimal,
    /// Credit amount.
    pub credit: Decimal,
    /// Entry status.
    pub status: EntryStatus,
    /// Source reference for derived entries.
    pub source: Option<SourceRef>,
}

/// Optional filters for journal listings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JournalFilter {
    /// Keep only entries with this status.
    pub status: Option<EntryStatus>,
    /// Keep only entries dated on or after this date.
    pub from: Option<NaiveDate>,
    /// Keep only entries dated on or before this date.
    pub to: Option<NaiveDate>,
}

impl JournalFilter {
    /// Returns whether an entry passes the filter.
    #[must_use]
    pub fn matches(&self, entry: &JournalEntry) -> bool {
        if let Some(status) = self.status
            && entry.status != status
        {
            return false;
        }
        if let Some(from) = self.from
            && entry.entry_date < from
        {
            return false;
        }
        if let Some(to) = self.to
            && entry.entry_date > to
        {
            return false;
        }
        true
    }
}

/// Raw create-entry payload.
///
/// Money and date fields are deliberately loose (`serde_json::Value`) so a
/// sloppy client degrades per-field instead of failing deserialization;
/// normalization happens in [`crate::journal::validation`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateEntryInput {
    /// Entry number; generated when absent.
    pub entry_number: Option<String>,
    /// Entry date; defaults to today.
    #[serde(default)]
    pub entry_date: serde_json::Value,
    /// Description (required).
    pub description: Option<String>,
    /// Entry classification; defaults to `Standard`.
    pub kind: Option<EntryKind>,
    /// Debit amount; defaults to 0.
    #[serde(default)]
    pub debit: serde_json::Value,
    /// Credit amount; defaults to 0.
    #[serde(default)]
    pub credit: serde_json::Value,
    /// Entry status; defaults to `Draft`.
    pub status: Option<EntryStatus>,
}

/// The invoice to create for a validated journal entry.
///
/// Absent a real ledger table a journal entry *is* an invoice, so the write
/// path synthesizes one, inverting the read projection: a debit-only entry
/// becomes a sale, a credit-only entry becomes a purchase, and `Posted`
/// status maps to a `Paid` invoice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesizedInvoice {
    /// Sale for debit-shaped entries, purchase for credit-shaped ones.
    pub direction: InvoiceDirection,
    /// Document number; generated by the store when `None`.
    pub document_number: Option<String>,
    /// Issue date (the entry date).
    pub issued_on: NaiveDate,
    /// Entry description, carried in the invoice notes.
    pub description: String,
    /// Invoice total (the nonzero side of the entry).
    pub total: Decimal,
    /// Requested entry classification (kept for the response echo).
    pub kind: EntryKind,
    /// `Paid` when the requested entry status was `Posted`.
    pub paid: bool,
}

/// Outcome of a post/reverse request.
///
/// On the derived path there is no ledger row to mutate; the request is
/// accepted as a no-op with `applied = false` and a note directing the
/// operator to the underlying invoice.
#[derive(Debug, Clone, Serialize)]
pub struct WriteOutcome {
    /// The entry after the write, when one exists.
    pub entry: Option<JournalEntry>,
    /// Whether a row was actually mutated.
    pub applied: bool,
    /// Explanatory note for accepted no-ops.
    pub note: Option<String>,
}

impl WriteOutcome {
    /// A write that mutated a native row.
    #[must_use]
    pub fn applied(entry: JournalEntry) -> Self {
        Self {
            entry: Some(entry),
            applied: true,
            note: None,
        }
    }

    /// An accepted no-op on the derived path.
    #[must_use]
    pub fn noop(entry: Option<JournalEntry>, note: &str) -> Self {
        Self {
            entry,
            applied: false,
            note: Some(note.to_string()),
        }
    }
}
