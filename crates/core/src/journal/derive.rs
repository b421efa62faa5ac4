//! Journal projection over native entries or invoice-derived ones.

use rust_decimal::Decimal;
use uuid::Uuid;

use super::types::{
    EntryKind, EntryStatus, Invoice, InvoiceDirection, InvoiceStatus, JournalEntry, JournalFilter,
    SourceRef,
};

/// Upper bound on journal listings, native and derived alike.
pub const JOURNAL_PAGE_LIMIT: usize = 250;

/// A tenant's journal, tagged by its authoritative source.
///
/// Every downstream report consumes the uniform projection from
/// [`Journal::into_entries`], so trial balance, general ledger, and KPI code
/// never branch on which source produced the data.
#[derive(Debug, Clone)]
pub enum Journal {
    /// Rows read from the dedicated ledger collection.
    Native(Vec<JournalEntry>),
    /// Fallback synthesis from the invoice collections.
    Derived {
        /// Sales invoices for the tenant.
        sales: Vec<Invoice>,
        /// Purchase invoices for the tenant.
        purchases: Vec<Invoice>,
    },
}

impl Journal {
    /// Projects the journal to a uniform entry list for `tenant_id`.
    ///
    /// Entries are sorted by entry date descending and capped at
    /// [`JOURNAL_PAGE_LIMIT`]. Voided invoices and rows belonging to another
    /// tenant never make it into the projection.
    #[must_use]
    pub fn into_entries(self, tenant_id: Uuid) -> Vec<JournalEntry> {
        self.into_entries_filtered(tenant_id, &JournalFilter::default())
    }

    /// Projects the journal with a filter applied before the cap.
    ///
    /// The filter runs before truncation, so a date-range query can reach
    /// entries older than the newest page would hold.
    #[must_use]
    pub fn into_entries_filtered(
        self,
        tenant_id: Uuid,
        filter: &JournalFilter,
    ) -> Vec<JournalEntry> {
        let mut entries: Vec<JournalEntry> = match self {
            Self::Native(rows) => rows
                .into_iter()
                .filter(|e| e.tenant_id == tenant_id && filter.matches(e))
                .collect(),
            Self::Derived { sales, purchases } => sales
                .into_iter()
                .chain(purchases)
                .filter_map(|inv| entry_from_invoice(inv, tenant_id))
                .filter(|e| filter.matches(e))
                .collect(),
        };

        entries.sort_by(|a, b| {
            b.entry_date
                .cmp(&a.entry_date)
                .then_with(|| b.entry_number.cmp(&a.entry_number))
        });
        entries.truncate(JOURNAL_PAGE_LIMIT);
        entries
    }
}

/// Synthesizes a journal entry from an invoice.
///
/// A sale carries its total on the debit side, a purchase on the credit
/// side; an invoice is never both a receivable and a payable at once. The
/// entry is `Posted` only when the invoice is paid.
#[must_use]
pub fn entry_from_invoice(invoice: Invoice, tenant_id: Uuid) -> Option<JournalEntry> {
    if invoice.tenant_id != tenant_id || invoice.status == InvoiceStatus::Voided {
        return None;
    }

    let (kind, doc_type, debit, credit) = match invoice.direction {
        InvoiceDirection::Sale => (EntryKind::Sales, "sales_invoice", invoice.total, Decimal::ZERO),
        InvoiceDirection::Purchase => (
            EntryKind::Purchase,
            "purchase_invoice",
            Decimal::ZERO,
            invoice.total,
        ),
    };

    let status = if invoice.status == InvoiceStatus::Paid {
        EntryStatus::Posted
    } else {
        EntryStatus::Draft
    };

    let description = invoice.notes.clone().unwrap_or_else(|| match invoice.direction {
        InvoiceDirection::Sale => format!("Sales invoice {}", invoice.document_number),
        InvoiceDirection::Purchase => format!("Purchase invoice {}", invoice.document_number),
    });

    Some(JournalEntry {
        id: invoice.id,
        tenant_id: invoice.tenant_id,
        entry_number: invoice.document_number,
        entry_date: invoice.issued_on,
        description,
        kind,
        debit,
        credit,
        status,
        source: Some(SourceRef {
            doc_type: doc_type.to_string(),
            id: invoice.id,
        }),
    })
}

/// Builds an invoice fixture.
#[cfg(test)]
pub(crate) fn invoice(
    tenant_id: Uuid,
    direction: InvoiceDirection,
    document_number: &str,
    issued_on: chrono::NaiveDate,
    status: InvoiceStatus,
    total: Decimal,
) -> Invoice {
    Invoice {
        id: Uuid::new_v4(),
        tenant_id,
        document_number: document_number.to_string(),
        direction,
        issued_on,
        due_on: None,
        paid_on: None,
        status,
        total,
        notes: None,
    }
}
