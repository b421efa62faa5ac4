//! Report error types.

use chrono::NaiveDate;
use kontor_shared::AppError;
use thiserror::Error;

/// Errors that can occur during report generation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReportError {
    /// Invalid date range.
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidDateRange {
        /// Start date.
        start: NaiveDate,
        /// End date.
        end: NaiveDate,
    },
}

impl From<ReportError> for AppError {
    fn from(err: ReportError) -> Self {
        match err {
            ReportError::InvalidDateRange { .. } => Self::Validation(err.to_string()),
        }
    }
}

/// Validates an optional report date range.
///
/// # Errors
///
/// Returns `ReportError::InvalidDateRange` when both bounds are present and
/// inverted.
pub fn validate_range(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Result<(), ReportError> {
    if let (Some(start), Some(end)) = (from, to)
        && start > end
    {
        return Err(ReportError::InvalidDateRange { start, end });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_range() {
        let early = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let late = NaiveDate::from_ymd_opt(2026, 6, 1).unwrap();

        assert!(validate_range(None, None).is_ok());
        assert!(validate_range(Some(early), None).is_ok());
        assert!(validate_range(Some(early), Some(late)).is_ok());
        assert!(validate_range(Some(late), Some(early)).is_err());
    }

    #[test]
    fn test_invalid_range_is_a_validation_error() {
        let early = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let late = NaiveDate::from_ymd_opt(2026, 6, 1).unwrap();
        let err: AppError = ReportError::InvalidDateRange {
            start: late,
            end: early,
        }
        .into();
        assert_eq!(err.status_code(), 400);
    }
}
