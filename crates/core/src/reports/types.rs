//! Report data types.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::journal::Invoice;

/// Trial balance totals for a tenant's journal.
///
/// On the derived path nothing constructs entries as balanced pairs, so
/// `difference` can legitimately be nonzero; this is an approximation, not a
/// double-entry guarantee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialBalanceReport {
    /// Sum of debit amounts.
    pub total_debit: Decimal,
    /// Sum of credit amounts.
    pub total_credit: Decimal,
    /// `total_debit - total_credit`.
    pub difference: Decimal,
    /// Number of entries aggregated.
    pub entry_count: usize,
}

/// Account classification for chart-of-accounts rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    /// Asset account.
    Asset,
    /// Liability account.
    Liability,
    /// Equity account.
    Equity,
    /// Revenue account.
    Revenue,
    /// Expense account.
    Expense,
}

/// One row of a chart of accounts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartAccount {
    /// Account code, ordered lexicographically in listings.
    pub code: String,
    /// Account name.
    pub name: String,
    /// Account classification.
    pub kind: AccountKind,
    /// Current balance.
    pub balance: Decimal,
}

/// Chart of accounts report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartOfAccountsReport {
    /// Account rows, ordered by code.
    pub accounts: Vec<ChartAccount>,
    /// True when the rows were synthesized from products and invoices
    /// because no dedicated collection exists. Synthesized rows are a
    /// best-effort visualization with no normal-balance semantics.
    pub synthesized: bool,
}

/// A current/previous month pair with its percent change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricDelta {
    /// Current-month value.
    pub current: Decimal,
    /// Previous-month value.
    pub previous: Decimal,
    /// Percent change from previous to current.
    pub change_pct: Decimal,
}

/// Outstanding amounts with an overdue split.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgingBucket {
    /// Total outstanding.
    pub current: Decimal,
    /// Portion of `current` whose due date has passed.
    pub overdue: Decimal,
}

/// Instantaneous inventory metrics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryMetrics {
    /// Value of stock on hand at cost.
    pub value: Decimal,
    /// Annualized turnover approximated from a single month's revenue;
    /// callers must not treat it as a trailing-twelve-month figure.
    pub turnover: Decimal,
}

/// Sales order counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderCounts {
    /// Orders still in flight (any non-canceled, non-delivered status).
    pub pending: u64,
    /// Delivered orders.
    pub completed: u64,
}

/// The financial KPI bundle: a single coherent snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialKpis {
    /// Sales invoice revenue, month-bucketed.
    pub revenue: MetricDelta,
    /// Purchase invoice expenses, month-bucketed.
    pub expenses: MetricDelta,
    /// Revenue minus expenses per bucket.
    pub profit: MetricDelta,
    /// Paid sales minus paid purchases; `current` is a running total,
    /// `previous` a snapshot as of the start of the current month, so the
    /// delta approximates cash generated this month.
    pub cash: MetricDelta,
    /// Unpaid sales invoices.
    pub receivables: AgingBucket,
    /// Unpaid purchase invoices.
    pub payables: AgingBucket,
    /// Stock value and turnover.
    pub inventory: InventoryMetrics,
    /// Sales order counts.
    pub orders: OrderCounts,
}

/// Sales order lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Awaiting confirmation.
    Pending,
    /// Being prepared.
    Processing,
    /// Shipped to the customer.
    Shipped,
    /// Delivered; counts as completed.
    Delivered,
    /// Canceled; counts as nothing.
    Canceled,
}

/// A sales order row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesOrder {
    /// Order ID.
    pub id: Uuid,
    /// Owning tenant.
    pub tenant_id: Uuid,
    /// Lifecycle status.
    pub status: OrderStatus,
}

/// An inventory snapshot row: instantaneous stock on hand, not
/// time-bucketed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventorySnapshot {
    /// Owning tenant.
    pub tenant_id: Uuid,
    /// Product held.
    pub product_id: Uuid,
    /// Warehouse holding the stock.
    pub warehouse_id: Uuid,
    /// Quantity available.
    pub quantity_available: Decimal,
    /// Unit cost recorded on the snapshot, when known.
    pub unit_cost: Option<Decimal>,
}

/// A product category row (used only for chart-of-accounts synthesis).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCategory {
    /// Category ID.
    pub id: Uuid,
    /// Owning tenant.
    pub tenant_id: Uuid,
    /// Category name.
    pub name: String,
}

/// Product identity and cost.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductInfo {
    /// Product ID.
    pub id: Uuid,
    /// Owning tenant.
    pub tenant_id: Uuid,
    /// Stock-keeping unit.
    pub sku: String,
    /// Product name.
    pub name: String,
    /// Unit cost price.
    pub cost_price: Decimal,
}

/// Source rows for the KPI bundle, fetched concurrently by the caller.
#[derive(Debug, Clone, Default)]
pub struct KpiSources {
    /// Sales invoices for the tenant.
    pub sales: Vec<Invoice>,
    /// Purchase invoices for the tenant.
    pub purchases: Vec<Invoice>,
    /// Sales orders for the tenant.
    pub orders: Vec<SalesOrder>,
    /// Inventory snapshots for the tenant.
    pub inventory: Vec<InventorySnapshot>,
    /// Cost price per product ID; missing products value at zero.
    pub product_costs: HashMap<Uuid, Decimal>,
}

/// Source rows for chart-of-accounts synthesis.
#[derive(Debug, Clone, Default)]
pub struct ChartSources {
    /// Product categories (revenue-account placeholders).
    pub categories: Vec<ProductCategory>,
    /// Products (one asset row each, valued at on-hand quantity x cost).
    pub products: Vec<ProductInfo>,
    /// Inventory snapshots backing the product valuations.
    pub inventory: Vec<InventorySnapshot>,
    /// Sales invoices (one revenue row each).
    pub sales: Vec<Invoice>,
    /// Purchase invoices (one expense row each).
    pub purchases: Vec<Invoice>,
}
