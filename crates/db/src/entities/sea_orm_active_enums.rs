//! Postgres enum mappings.
//!
//! Each database enum has a core-domain counterpart; the `From` impls keep
//! the mapping in one place so repositories never match on raw strings.

use kontor_core::journal::{EntryKind, EntryStatus, InvoiceDirection, InvoiceStatus};
use kontor_core::reports::{AccountKind, OrderStatus};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Invoice direction enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "invoice_direction")]
pub enum DbInvoiceDirection {
    /// Sales invoice.
    #[sea_orm(string_value = "sale")]
    Sale,
    /// Purchase invoice.
    #[sea_orm(string_value = "purchase")]
    Purchase,
}

/// Invoice status enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "invoice_status")]
pub enum DbInvoiceStatus {
    /// Draft.
    #[sea_orm(string_value = "draft")]
    Draft,
    /// Issued.
    #[sea_orm(string_value = "issued")]
    Issued,
    /// Paid.
    #[sea_orm(string_value = "paid")]
    Paid,
    /// Voided.
    #[sea_orm(string_value = "voided")]
    Voided,
}

/// Journal entry kind enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "entry_kind")]
pub enum DbEntryKind {
    /// Sales entry.
    #[sea_orm(string_value = "sales")]
    Sales,
    /// Purchase entry.
    #[sea_orm(string_value = "purchase")]
    Purchase,
    /// Manual entry.
    #[sea_orm(string_value = "standard")]
    Standard,
}

/// Journal entry status enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "entry_status")]
pub enum DbEntryStatus {
    /// Draft.
    #[sea_orm(string_value = "draft")]
    Draft,
    /// Posted.
    #[sea_orm(string_value = "posted")]
    Posted,
    /// Reversed.
    #[sea_orm(string_value = "reversed")]
    Reversed,
}

/// Sales order status enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "order_status")]
pub enum DbOrderStatus {
    /// Pending.
    #[sea_orm(string_value = "pending")]
    Pending,
    /// Processing.
    #[sea_orm(string_value = "processing")]
    Processing,
    /// Shipped.
    #[sea_orm(string_value = "shipped")]
    Shipped,
    /// Delivered.
    #[sea_orm(string_value = "delivered")]
    Delivered,
    /// Canceled.
    #[sea_orm(string_value = "canceled")]
    Canceled,
}

/// Account classification enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "account_kind")]
pub enum DbAccountKind {
    /// Asset.
    #[sea_orm(string_value = "asset")]
    Asset,
    /// Liability.
    #[sea_orm(string_value = "liability")]
    Liability,
    /// Equity.
    #[sea_orm(string_value = "equity")]
    Equity,
    /// Revenue.
    #[sea_orm(string_value = "revenue")]
    Revenue,
    /// Expense.
    #[sea_orm(string_value = "expense")]
    Expense,
}

impl From<DbInvoiceDirection> for InvoiceDirection {
    fn from(value: DbInvoiceDirection) -> Self {
        match value {
            DbInvoiceDirection::Sale => Self::Sale,
            DbInvoiceDirection::Purchase => Self::Purchase,
        }
    }
}

impl From<InvoiceDirection> for DbInvoiceDirection {
    fn from(value: InvoiceDirection) -> Self {
        match value {
            InvoiceDirection::Sale => Self::Sale,
            InvoiceDirection::Purchase => Self::Purchase,
        }
    }
}

impl From<DbInvoiceStatus> for InvoiceStatus {
    fn from(value: DbInvoiceStatus) -> Self {
        match value {
            DbInvoiceStatus::Draft => Self::Draft,
            DbInvoiceStatus::Issued => Self::Issued,
            DbInvoiceStatus::Paid => Self::Paid,
            DbInvoiceStatus::Voided => Self::Voided,
        }
    }
}

impl From<InvoiceStatus> for DbInvoiceStatus {
    fn from(value: InvoiceStatus) -> Self {
        match value {
            InvoiceStatus::Draft => Self::Draft,
            InvoiceStatus::Issued => Self::Issued,
            InvoiceStatus::Paid => Self::Paid,
            InvoiceStatus::Voided => Self::Voided,
        }
    }
}

impl From<DbEntryKind> for EntryKind {
    fn from(value: DbEntryKind) -> Self {
        match value {
            DbEntryKind::Sales => Self::Sales,
            DbEntryKind::Purchase => Self::Purchase,
            DbEntryKind::Standard => Self::Standard,
        }
    }
}

impl From<EntryKind> for DbEntryKind {
    fn from(value: EntryKind) -> Self {
        match value {
            EntryKind::Sales => Self::Sales,
            EntryKind::Purchase => Self::Purchase,
            EntryKind::Standard => Self::Standard,
        }
    }
}

impl From<DbEntryStatus> for EntryStatus {
    fn from(value: DbEntryStatus) -> Self {
        match value {
            DbEntryStatus::Draft => Self::Draft,
            DbEntryStatus::Posted => Self::Posted,
            DbEntryStatus::Reversed => Self::Reversed,
        }
    }
}

impl From<EntryStatus> for DbEntryStatus {
    fn from(value: EntryStatus) -> Self {
        match value {
            EntryStatus::Draft => Self::Draft,
            EntryStatus::Posted => Self::Posted,
            EntryStatus::Reversed => Self::Reversed,
        }
    }
}

impl From<DbOrderStatus> for OrderStatus {
    fn from(value: DbOrderStatus) -> Self {
        match value {
            DbOrderStatus::Pending => Self::Pending,
            DbOrderStatus::Processing => Self::Processing,
            DbOrderStatus::Shipped => Self::Shipped,
            DbOrderStatus::Delivered => Self::Delivered,
            DbOrderStatus::Canceled => Self::Canceled,
        }
    }
}

impl From<DbAccountKind> for AccountKind {
    fn from(value: DbAccountKind) -> Self {
        match value {
            DbAccountKind::Asset => Self::Asset,
            DbAccountKind::Liability => Self::Liability,
            DbAccountKind::Equity => Self::Equity,
            DbAccountKind::Revenue => Self::Revenue,
            DbAccountKind::Expense => Self::Expense,
        }
    }
}
