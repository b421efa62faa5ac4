//! Core reporting logic for Kontor.
//!
//! This crate contains pure business logic with ZERO web or database
//! dependencies. All domain types, derivation rules, and report calculations
//! live here.
//!
//! # Modules
//!
//! - `numeric` - Safe numeric/date coercion, month bucketing, deltas
//! - `journal` - Journal derivation from invoices and entry validation
//! - `reports` - Trial balance, chart of accounts, and financial KPIs

pub mod journal;
pub mod numeric;
pub mod reports;
