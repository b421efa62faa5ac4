//! Safe numeric and temporal utilities.
//!
//! Source rows can arrive with missing or malformed numeric and date fields.
//! Reports must degrade per-row to zero/`None` instead of aborting, so every
//! coercion here is total.

pub mod coerce;
pub mod delta;
pub mod period;

#[cfg(test)]
mod delta_props;

pub use coerce::{to_date, to_decimal};
pub use delta::{percent_change, round_dp, round_money};
pub use period::{month_key, month_key_opt, month_start, previous_month_key};
