//! Report generation service.
//!
//! Every function here is pure: rows in, report out. The reference instant
//! for month bucketing is an explicit parameter so reports are reproducible
//! under test; callers pass "today" from the request clock.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use super::types::{
    AccountKind, AgingBucket, ChartAccount, ChartOfAccountsReport, ChartSources, FinancialKpis,
    InventoryMetrics, KpiSources, MetricDelta, OrderCounts, TrialBalanceReport,
};
use crate::journal::{Invoice, InvoiceStatus, JournalEntry};
use crate::numeric::{month_key, month_start, percent_change, previous_month_key, round_dp,
    round_money};

const MONTHS_PER_YEAR: u32 = 12;

/// Service for generating financial reports.
pub struct ReportService;

impl ReportService {
    /// Sums debits and credits across a uniform journal projection.
    ///
    /// The projection already excludes voided sources; the caller decides
    /// which statuses are in scope (posted-only for the native ledger, all
    /// synthesized entries for the derived one). `difference` carries no
    /// balancing guarantee on the derived path.
    #[must_use]
    pub fn trial_balance(entries: &[JournalEntry]) -> TrialBalanceReport {
        let total_debit: Decimal = entries.iter().map(|e| e.debit).sum();
        let total_credit: Decimal = entries.iter().map(|e| e.credit).sum();

        TrialBalanceReport {
            total_debit: round_money(total_debit),
            total_credit: round_money(total_credit),
            difference: round_money(total_debit - total_credit),
            entry_count: entries.len(),
        }
    }

    /// Wraps native chart-of-accounts rows verbatim, ordered by code.
    #[must_use]
    pub fn chart_of_accounts(mut accounts: Vec<ChartAccount>) -> ChartOfAccountsReport {
        accounts.sort_by(|a, b| a.code.cmp(&b.code));
        ChartOfAccountsReport {
            accounts,
            synthesized: false,
        }
    }

    /// Synthesizes a chart of accounts when no dedicated collection exists.
    ///
    /// Best-effort visualization only: category rows are revenue-account
    /// placeholders, product rows are valued at on-hand quantity times cost,
    /// and each non-voided invoice becomes one revenue or expense row. The
    /// result has no normal-balance semantics.
    #[must_use]
    pub fn synthesize_chart(tenant_id: Uuid, sources: &ChartSources) -> ChartOfAccountsReport {
        let mut accounts = Vec::new();

        for (i, category) in sources
            .categories
            .iter()
            .filter(|c| c.tenant_id == tenant_id)
            .enumerate()
        {
            accounts.push(ChartAccount {
                code: format!("4{:03}", i + 1),
                name: category.name.clone(),
                kind: AccountKind::Revenue,
                balance: Decimal::ZERO,
            });
        }

        for product in sources.products.iter().filter(|p| p.tenant_id == tenant_id) {
            let balance: Decimal = sources
                .inventory
                .iter()
                .filter(|s| s.tenant_id == tenant_id && s.product_id == product.id)
                .map(|s| s.quantity_available * s.unit_cost.unwrap_or(product.cost_price))
                .sum();

            accounts.push(ChartAccount {
                code: format!("14-{}", product.sku),
                name: product.name.clone(),
                kind: AccountKind::Asset,
                balance: round_money(balance),
            });
        }

        for invoice in active(&sources.sales, tenant_id) {
            accounts.push(ChartAccount {
                code: format!("11-{}", invoice.document_number),
                name: format!("Sales invoice {}", invoice.document_number),
                kind: AccountKind::Revenue,
                balance: round_money(invoice.total),
            });
        }

        for invoice in active(&sources.purchases, tenant_id) {
            accounts.push(ChartAccount {
                code: format!("21-{}", invoice.document_number),
                name: format!("Purchase invoice {}", invoice.document_number),
                kind: AccountKind::Expense,
                balance: round_money(invoice.total),
            });
        }

        accounts.sort_by(|a, b| a.code.cmp(&b.code));
        ChartOfAccountsReport {
            accounts,
            synthesized: true,
        }
    }

    /// Computes the financial KPI bundle for a tenant as of `today`.
    #[must_use]
    pub fn financial_kpis(
        tenant_id: Uuid,
        sources: &KpiSources,
        today: NaiveDate,
    ) -> FinancialKpis {
        let current_key = month_key(today);
        let previous_key = previous_month_key(today);
        let current_month_start = month_start(today);

        let sales: Vec<&Invoice> = active(&sources.sales, tenant_id).collect();
        let purchases: Vec<&Invoice> = active(&sources.purchases, tenant_id).collect();

        let revenue_current = bucket_total(&sales, &current_key);
        let revenue_previous = bucket_total(&sales, &previous_key);
        let expenses_current = bucket_total(&purchases, &current_key);
        let expenses_previous = bucket_total(&purchases, &previous_key);

        // Running total vs. a snapshot as of the start of this month; the
        // delta approximates cash generated this month.
        let cash_current = paid_total(&sales, None) - paid_total(&purchases, None);
        let cash_previous = paid_total(&sales, Some(current_month_start))
            - paid_total(&purchases, Some(current_month_start));

        let inventory_value: Decimal = sources
            .inventory
            .iter()
            .filter(|s| s.tenant_id == tenant_id)
            .map(|s| {
                s.quantity_available
                    * sources
                        .product_costs
                        .get(&s.product_id)
                        .copied()
                        .unwrap_or(Decimal::ZERO)
            })
            .sum();

        // Annualized from a single month of revenue; approximate by design.
        let turnover = if inventory_value > Decimal::ZERO {
            round_dp(
                revenue_current * Decimal::from(MONTHS_PER_YEAR) / inventory_value,
                1,
            )
        } else {
            Decimal::ZERO
        };

        let mut orders = OrderCounts {
            pending: 0,
            completed: 0,
        };
        for order in sources.orders.iter().filter(|o| o.tenant_id == tenant_id) {
            match order.status {
                super::types::OrderStatus::Delivered => orders.completed += 1,
                super::types::OrderStatus::Canceled => {}
                _ => orders.pending += 1,
            }
        }

        FinancialKpis {
            revenue: delta(revenue_current, revenue_previous),
            expenses: delta(expenses_current, expenses_previous),
            profit: delta(
                revenue_current - expenses_current,
                revenue_previous - expenses_previous,
            ),
            cash: delta(cash_current, cash_previous),
            receivables: aging(&sales, today),
            payables: aging(&purchases, today),
            inventory: InventoryMetrics {
                value: round_money(inventory_value),
                turnover,
            },
            orders,
        }
    }
}

/// Non-voided invoices belonging to the tenant.
fn active(invoices: &[Invoice], tenant_id: Uuid) -> impl Iterator<Item = &Invoice> {
    invoices
        .iter()
        .filter(move |i| i.tenant_id == tenant_id && i.status != InvoiceStatus::Voided)
}

/// Sum of non-draft invoice totals issued in the given month bucket.
fn bucket_total(invoices: &[&Invoice], key: &str) -> Decimal {
    invoices
        .iter()
        .filter(|i| i.status != InvoiceStatus::Draft)
        .filter(|i| month_key(i.issued_on) == key)
        .map(|i| i.total)
        .sum()
}

/// Sum of paid invoice totals, optionally only those paid strictly before
/// `cutoff`. A paid invoice without a payment date counts only in the
/// running total.
fn paid_total(invoices: &[&Invoice], cutoff: Option<NaiveDate>) -> Decimal {
    invoices
        .iter()
        .filter(|i| i.status == InvoiceStatus::Paid)
        .filter(|i| match cutoff {
            None => true,
            Some(cut) => i.paid_on.is_some_and(|paid| paid < cut),
        })
        .map(|i| i.total)
        .sum()
}

/// Outstanding (non-paid) totals with the overdue portion split out.
fn aging(invoices: &[&Invoice], today: NaiveDate) -> AgingBucket {
    let mut bucket = AgingBucket {
        current: Decimal::ZERO,
        overdue: Decimal::ZERO,
    };
    for invoice in invoices.iter().filter(|i| i.status != InvoiceStatus::Paid) {
        bucket.current += invoice.total;
        if invoice.due_on.is_some_and(|due| due < today) {
            bucket.overdue += invoice.total;
        }
    }
    bucket.current = round_money(bucket.current);
    bucket.overdue = round_money(bucket.overdue);
    bucket
}

/// Rounded delta pair; the percent change is computed before rounding.
fn delta(current: Decimal, previous: Decimal) -> MetricDelta {
    MetricDelta {
        current: round_money(current),
        previous: round_money(previous),
        change_pct: round_dp(percent_change(current, previous), 2),
    }
}
