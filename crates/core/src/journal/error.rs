//! Journal error types.

use kontor_shared::AppError;
use thiserror::Error;

/// Errors that can occur while validating a journal entry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum JournalError {
    /// Description is missing or empty.
    #[error("description must not be empty")]
    MissingDescription,

    /// Neither side of the entry carries an amount.
    #[error("exactly one of debit and credit must be nonzero")]
    ZeroAmounts,

    /// Both sides carry an amount.
    #[error(
        "balanced entries are not supported in the derived ledger; create two separate entries"
    )]
    BalancedEntryUnsupported,

    /// The debit amount is negative.
    #[error("debit must not be negative")]
    NegativeDebit,

    /// The credit amount is negative.
    #[error("credit must not be negative")]
    NegativeCredit,

    /// The entry is not in a status that allows the requested transition.
    #[error("entry with status {status} cannot be {action}")]
    InvalidTransition {
        /// Current status, lowercase.
        status: &'static str,
        /// Requested action, lowercase.
        action: &'static str,
    },
}

impl From<JournalError> for AppError {
    fn from(err: JournalError) -> Self {
        match &err {
            JournalError::MissingDescription => {
                Self::validation_field("description", "must not be empty")
            }
            JournalError::ZeroAmounts => Self::validation_field("debit", &err.to_string()),
            JournalError::BalancedEntryUnsupported => {
                Self::validation_field("credit", &err.to_string())
            }
            JournalError::NegativeDebit => Self::validation_field("debit", "must not be negative"),
            JournalError::NegativeCredit => {
                Self::validation_field("credit", "must not be negative")
            }
            JournalError::InvalidTransition { .. } => Self::BusinessRule(err.to_string()),
        }
    }
}
