//! Create-entry validation and invoice-synthesis dispatch.

use chrono::NaiveDate;

use super::error::JournalError;
use super::types::{
    CreateEntryInput, EntryKind, EntryStatus, InvoiceDirection, SynthesizedInvoice,
};
use crate::numeric::{to_date, to_decimal};

/// Validates a raw create-entry payload and dispatches it by shape.
///
/// Normalization: `entry_date` defaults to `today`, `kind` to `Standard`,
/// `debit`/`credit` to 0, `status` to `Draft`. Rejections happen here,
/// synchronously, before any store access:
/// - empty or missing `description`
/// - both amounts zero
/// - both amounts nonzero (balanced entries are two separate entries in the
///   derived ledger)
/// - a negative amount on either side
///
/// # Errors
///
/// Returns the specific [`JournalError`] for the offending field.
pub fn validate_create(
    input: &CreateEntryInput,
    today: NaiveDate,
) -> Result<SynthesizedInvoice, JournalError> {
    let description = input
        .description
        .as_deref()
        .map(str::trim)
        .unwrap_or_default();
    if description.is_empty() {
        return Err(JournalError::MissingDescription);
    }

    let debit = to_decimal(&input.debit);
    let credit = to_decimal(&input.credit);

    if debit.is_sign_negative() {
        return Err(JournalError::NegativeDebit);
    }
    if credit.is_sign_negative() {
        return Err(JournalError::NegativeCredit);
    }
    if debit.is_zero() && credit.is_zero() {
        return Err(JournalError::ZeroAmounts);
    }
    if !debit.is_zero() && !credit.is_zero() {
        return Err(JournalError::BalancedEntryUnsupported);
    }

    let issued_on = to_date(&input.entry_date).unwrap_or(today);
    let status = input.status.unwrap_or(EntryStatus::Draft);

    let (direction, total) = if credit.is_zero() {
        (InvoiceDirection::Sale, debit)
    } else {
        (InvoiceDirection::Purchase, credit)
    };
    // The derived read projection classifies by direction on its own; a
    // kind-less entry stays Standard on a native ledger.
    let kind = input.kind.unwrap_or(EntryKind::Standard);

    Ok(SynthesizedInvoice {
        direction,
        document_number: input
            .entry_number
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string),
        issued_on,
        description: description.to_string(),
        total,
        kind,
        paid: status == EntryStatus::Posted,
    })
}

/// Checks that an entry can be posted. Only drafts post.
///
/// # Errors
///
/// Returns `JournalError::InvalidTransition` for posted or reversed entries.
pub const fn can_post(status: EntryStatus) -> Result<(), JournalError> {
    match status {
        EntryStatus::Draft => Ok(()),
        EntryStatus::Posted => Err(JournalError::InvalidTransition {
            status: "posted",
            action: "posted again",
        }),
        EntryStatus::Reversed => Err(JournalError::InvalidTransition {
            status: "reversed",
            action: "posted",
        }),
    }
}

/// Checks that an entry can be reversed. Only posted entries reverse.
///
/// # Errors
///
/// Returns `JournalError::InvalidTransition` for draft or reversed entries.
pub const fn can_reverse(status: EntryStatus) -> Result<(), JournalError> {
    match status {
        EntryStatus::Posted => Ok(()),
        EntryStatus::Draft => Err(JournalError::InvalidTransition {
            status: "draft",
            action: "reversed",
        }),
        EntryStatus::Reversed => Err(JournalError::InvalidTransition {
            status: "reversed",
            action: "reversed again",
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 30).unwrap()
    }

    fn input(description: &str, debit: serde_json::Value, credit: serde_json::Value) -> CreateEntryInput {
        CreateEntryInput {
            description: Some(description.to_string()),
            debit,
            credit,
            ..CreateEntryInput::default()
        }
    }

    #[test]
    fn test_debit_entry_dispatches_to_sale() {
        let synth = validate_create(&input("x", json!(100), json!(0)), today()).unwrap();
        assert_eq!(synth.direction, InvoiceDirection::Sale);
        assert_eq!(synth.total, dec!(100));
        assert!(!synth.paid);
        assert_eq!(synth.issued_on, today());
    }

    #[test]
    fn test_credit_entry_dispatches_to_purchase() {
        let synth = validate_create(&input("office rent", json!(0), json!(250)), today()).unwrap();
        assert_eq!(synth.direction, InvoiceDirection::Purchase);
        assert_eq!(synth.total, dec!(250));
    }

    #[test]
    fn test_kind_defaults_to_standard_either_direction() {
        let debit_synth = validate_create(&input("x", json!(100), json!(0)), today()).unwrap();
        assert_eq!(debit_synth.kind, EntryKind::Standard);

        let credit_synth = validate_create(&input("x", json!(0), json!(100)), today()).unwrap();
        assert_eq!(credit_synth.kind, EntryKind::Standard);
    }

    #[test]
    fn test_explicit_kind_passes_through() {
        let mut raw = input("x", json!(100), json!(0));
        raw.kind = Some(EntryKind::Sales);
        let synth = validate_create(&raw, today()).unwrap();
        assert_eq!(synth.kind, EntryKind::Sales);
    }

    #[test]
    fn test_posted_status_maps_to_paid_invoice() {
        let mut raw = input("x", json!(100), json!(0));
        raw.status = Some(EntryStatus::Posted);
        let synth = validate_create(&raw, today()).unwrap();
        assert!(synth.paid);
    }

    #[test]
    fn test_missing_description_rejected() {
        let raw = input("   ", json!(100), json!(0));
        assert_eq!(
            validate_create(&raw, today()),
            Err(JournalError::MissingDescription)
        );

        let raw = CreateEntryInput {
            debit: json!(100),
            ..CreateEntryInput::default()
        };
        assert_eq!(
            validate_create(&raw, today()),
            Err(JournalError::MissingDescription)
        );
    }

    #[test]
    fn test_both_zero_rejected() {
        assert_eq!(
            validate_create(&input("x", json!(0), json!(0)), today()),
            Err(JournalError::ZeroAmounts)
        );
    }

    #[test]
    fn test_balanced_entry_rejected() {
        let err = validate_create(&input("x", json!(50), json!(50)), today()).unwrap_err();
        assert_eq!(err, JournalError::BalancedEntryUnsupported);
        assert!(err.to_string().contains("balanced entries"));
    }

    #[test]
    fn test_negative_amount_rejected() {
        assert_eq!(
            validate_create(&input("x", json!(-10), json!(0)), today()),
            Err(JournalError::NegativeDebit)
        );
        assert_eq!(
            validate_create(&input("x", json!(0), json!("-3")), today()),
            Err(JournalError::NegativeCredit)
        );
    }

    #[test]
    fn test_malformed_amounts_degrade_to_zero_and_reject() {
        // A non-numeric debit coerces to 0, so the entry has no amounts.
        assert_eq!(
            validate_create(&input("x", json!("lots"), json!(null)), today()),
            Err(JournalError::ZeroAmounts)
        );
    }

    #[test]
    fn test_entry_date_and_number_pass_through() {
        let mut raw = input("x", json!("75.25"), json!(0));
        raw.entry_date = json!("2026-02-14");
        raw.entry_number = Some("JE-0042".to_string());

        let synth = validate_create(&raw, today()).unwrap();
        assert_eq!(
            synth.issued_on,
            NaiveDate::from_ymd_opt(2026, 2, 14).unwrap()
        );
        assert_eq!(synth.document_number.as_deref(), Some("JE-0042"));
        assert_eq!(synth.total, dec!(75.25));
    }

    #[test]
    fn test_invalid_date_defaults_to_today() {
        let mut raw = input("x", json!(10), json!(0));
        raw.entry_date = json!("next tuesday");
        let synth = validate_create(&raw, today()).unwrap();
        assert_eq!(synth.issued_on, today());
    }

    #[test]
    fn test_post_and_reverse_transitions() {
        assert!(can_post(EntryStatus::Draft).is_ok());
        assert!(can_post(EntryStatus::Posted).is_err());
        assert!(can_post(EntryStatus::Reversed).is_err());

        assert!(can_reverse(EntryStatus::Posted).is_ok());
        assert!(can_reverse(EntryStatus::Draft).is_err());
        assert!(can_reverse(EntryStatus::Reversed).is_err());
    }
}
