//! Query outcome classification.
//!
//! The ledger fallback and the KPI source reads both depend on telling
//! "this table does not exist" apart from "this query failed". Postgres
//! reports the former as SQLSTATE `42P01` (`undefined_table`); everything
//! else stays a real store error.

use sea_orm::{DbErr, RuntimeErr};

/// Postgres SQLSTATE for `undefined_table`.
const UNDEFINED_TABLE: &str = "42P01";

/// Result of a query against a table that may not be provisioned.
#[derive(Debug)]
pub enum QueryOutcome<T> {
    /// The table exists and the query succeeded.
    Ok(T),
    /// The table is not provisioned; callers fall back or zero out.
    SchemaAbsent,
}

impl<T> QueryOutcome<T> {
    /// Classifies a query result, absorbing `undefined_table` into
    /// [`QueryOutcome::SchemaAbsent`] and passing every other error through.
    ///
    /// # Errors
    ///
    /// Returns the original `DbErr` for anything other than an absent table.
    pub fn classify(result: Result<T, DbErr>) -> Result<Self, DbErr> {
        match result {
            Ok(value) => Ok(Self::Ok(value)),
            Err(err) if is_undefined_table(&err) => Ok(Self::SchemaAbsent),
            Err(err) => Err(err),
        }
    }

    /// Returns the rows, substituting `default` when the table is absent.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Ok(value) => value,
            Self::SchemaAbsent => default,
        }
    }
}

impl<T: Default> QueryOutcome<T> {
    /// Returns the rows, substituting the default value when the table is
    /// absent. This is the silent-zeroing path used by the KPI reads.
    pub fn unwrap_or_default(self) -> T {
        self.unwrap_or(T::default())
    }
}

/// Returns whether the error is Postgres complaining about a missing table.
#[must_use]
pub fn is_undefined_table(err: &DbErr) -> bool {
    match err {
        DbErr::Query(RuntimeErr::SqlxError(sqlx_err))
        | DbErr::Exec(RuntimeErr::SqlxError(sqlx_err)) => sqlx_err
            .as_database_error()
            .and_then(sqlx::error::DatabaseError::code)
            .is_some_and(|code| code == UNDEFINED_TABLE),
        _ => false,
    }
}
