//! Property-based tests for the derived journal projection.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;
use uuid::Uuid;

use super::derive::{JOURNAL_PAGE_LIMIT, Journal, invoice};
use super::types::{EntryStatus, InvoiceDirection, InvoiceStatus};

fn any_status() -> impl Strategy<Value = InvoiceStatus> {
    prop_oneof![
        Just(InvoiceStatus::Draft),
        Just(InvoiceStatus::Issued),
        Just(InvoiceStatus::Paid),
        Just(InvoiceStatus::Voided),
    ]
}

fn any_direction() -> impl Strategy<Value = InvoiceDirection> {
    prop_oneof![Just(InvoiceDirection::Sale), Just(InvoiceDirection::Purchase)]
}

proptest! {
    /// A synthesized entry always carries exactly one nonzero side: an
    /// invoice is never both a receivable and a payable at once.
    #[test]
    fn test_derived_entries_are_single_sided(
        rows in prop::collection::vec(
            (any_direction(), any_status(), 1i64..1_000_000, 0u64..365),
            0..100,
        )
    ) {
        let tenant = Uuid::new_v4();
        let base = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();

        let (sales, purchases): (Vec<_>, Vec<_>) = rows
            .into_iter()
            .map(|(direction, status, cents, day)| {
                let mut inv = invoice(
                    tenant,
                    direction,
                    "DOC",
                    base + chrono::Days::new(day),
                    status,
                    Decimal::new(cents, 2),
                );
                inv.document_number = format!("DOC-{}", inv.id);
                inv
            })
            .partition(|inv| inv.direction == InvoiceDirection::Sale);

        let voided = sales
            .iter()
            .chain(purchases.iter())
            .filter(|i| i.status == InvoiceStatus::Voided)
            .count();
        let total = sales.len() + purchases.len();

        let entries = Journal::Derived { sales, purchases }.into_entries(tenant);

        prop_assert!(entries.len() <= JOURNAL_PAGE_LIMIT);
        prop_assert_eq!(entries.len(), (total - voided).min(JOURNAL_PAGE_LIMIT));

        for entry in &entries {
            let sided = (entry.debit.is_zero(), entry.credit.is_zero());
            prop_assert!(
                sided == (false, true) || sided == (true, false),
                "entry has both or neither side: {entry:?}"
            );
            prop_assert_eq!(entry.tenant_id, tenant);
            prop_assert!(entry.status == EntryStatus::Posted || entry.status == EntryStatus::Draft);
        }

        // Descending by entry date.
        prop_assert!(entries.windows(2).all(|w| w[0].entry_date >= w[1].entry_date));
    }
}
