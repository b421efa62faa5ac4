//! Calendar-month bucketing.
//!
//! Financial periods are implicit here: a `"YYYY-MM"` key derived from a
//! date, used to bucket invoices into current and previous month.

use chrono::{Datelike, NaiveDate};

/// Returns the `"YYYY-MM"` month bucket key for a date (zero-padded month).
#[must_use]
pub fn month_key(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

/// Returns the month bucket key for an optional date, or `None`.
#[must_use]
pub fn month_key_opt(date: Option<NaiveDate>) -> Option<String> {
    date.map(month_key)
}

/// Returns the first day of the month containing `date`.
#[must_use]
pub fn month_start(date: NaiveDate) -> NaiveDate {
    // with_day(1) cannot fail for day 1
    date.with_day(1).unwrap_or(date)
}

/// Returns the month bucket key of the month before the one containing
/// `date`, crossing year boundaries as needed.
#[must_use]
pub fn previous_month_key(date: NaiveDate) -> String {
    let first = month_start(date);
    let last_of_previous = first.pred_opt().unwrap_or(first);
    month_key(last_of_previous)
}
