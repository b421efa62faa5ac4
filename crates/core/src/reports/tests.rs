//! Report service tests.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal_macros::dec;
use uuid::Uuid;

use super::service::ReportService;
use super::types::{
    AccountKind, ChartAccount, ChartSources, InventorySnapshot, KpiSources, OrderStatus,
    ProductCategory, ProductInfo, SalesOrder,
};
use crate::journal::derive::invoice;
use crate::journal::{Invoice, InvoiceDirection, InvoiceStatus, Journal};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn sale(
    tenant: Uuid,
    number: &str,
    issued: NaiveDate,
    status: InvoiceStatus,
    total: rust_decimal::Decimal,
) -> Invoice {
    invoice(tenant, InvoiceDirection::Sale, number, issued, status, total)
}

fn purchase(
    tenant: Uuid,
    number: &str,
    issued: NaiveDate,
    status: InvoiceStatus,
    total: rust_decimal::Decimal,
) -> Invoice {
    invoice(
        tenant,
        InvoiceDirection::Purchase,
        number,
        issued,
        status,
        total,
    )
}

fn order(tenant: Uuid, status: OrderStatus) -> SalesOrder {
    SalesOrder {
        id: Uuid::new_v4(),
        tenant_id: tenant,
        status,
    }
}

mod trial_balance {
    use super::*;

    #[test]
    fn test_empty_journal_sums_to_zero() {
        let report = ReportService::trial_balance(&[]);
        assert_eq!(report.total_debit, dec!(0));
        assert_eq!(report.total_credit, dec!(0));
        assert_eq!(report.difference, dec!(0));
        assert_eq!(report.entry_count, 0);
    }

    #[test]
    fn test_derived_journal_totals_and_imbalance() {
        let tenant = Uuid::new_v4();
        let entries = Journal::Derived {
            sales: vec![
                sale(tenant, "INV-1", d(2026, 8, 1), InvoiceStatus::Paid, dec!(100)),
                sale(tenant, "INV-2", d(2026, 8, 2), InvoiceStatus::Issued, dec!(50)),
            ],
            purchases: vec![purchase(
                tenant,
                "BILL-1",
                d(2026, 8, 3),
                InvoiceStatus::Paid,
                dec!(30),
            )],
        }
        .into_entries(tenant);

        let report = ReportService::trial_balance(&entries);
        assert_eq!(report.total_debit, dec!(150.00));
        assert_eq!(report.total_credit, dec!(30.00));
        // Single-sided synthesis means the books need not balance.
        assert_eq!(report.difference, dec!(120.00));
        assert_eq!(report.entry_count, 3);
    }

    #[test]
    fn test_voided_invoices_do_not_contribute() {
        let tenant = Uuid::new_v4();
        let entries = Journal::Derived {
            sales: vec![
                sale(tenant, "INV-1", d(2026, 8, 1), InvoiceStatus::Paid, dec!(100)),
                sale(tenant, "INV-2", d(2026, 8, 2), InvoiceStatus::Voided, dec!(999)),
            ],
            purchases: vec![],
        }
        .into_entries(tenant);

        let report = ReportService::trial_balance(&entries);
        assert_eq!(report.total_debit, dec!(100.00));
        assert_eq!(report.entry_count, 1);
    }
}

mod chart_of_accounts {
    use super::*;

    #[test]
    fn test_native_rows_pass_through_sorted() {
        let report = ReportService::chart_of_accounts(vec![
            ChartAccount {
                code: "4000".to_string(),
                name: "Revenue".to_string(),
                kind: AccountKind::Revenue,
                balance: dec!(10),
            },
            ChartAccount {
                code: "1000".to_string(),
                name: "Cash".to_string(),
                kind: AccountKind::Asset,
                balance: dec!(500),
            },
        ]);

        assert!(!report.synthesized);
        assert_eq!(report.accounts[0].code, "1000");
        assert_eq!(report.accounts[1].code, "4000");
    }

    #[test]
    fn test_synthesis_builds_all_four_row_families() {
        let tenant = Uuid::new_v4();
        let product_id = Uuid::new_v4();
        let sources = ChartSources {
            categories: vec![ProductCategory {
                id: Uuid::new_v4(),
                tenant_id: tenant,
                name: "Services".to_string(),
            }],
            products: vec![ProductInfo {
                id: product_id,
                tenant_id: tenant,
                sku: "WID-1".to_string(),
                name: "Widget".to_string(),
                cost_price: dec!(4),
            }],
            inventory: vec![InventorySnapshot {
                tenant_id: tenant,
                product_id,
                warehouse_id: Uuid::new_v4(),
                quantity_available: dec!(10),
                unit_cost: Some(dec!(5)),
            }],
            sales: vec![sale(
                tenant,
                "INV-1",
                d(2026, 8, 1),
                InvoiceStatus::Paid,
                dec!(200),
            )],
            purchases: vec![purchase(
                tenant,
                "BILL-1",
                d(2026, 8, 1),
                InvoiceStatus::Issued,
                dec!(80),
            )],
        };

        let report = ReportService::synthesize_chart(tenant, &sources);
        assert!(report.synthesized);
        assert_eq!(report.accounts.len(), 4);

        let product_row = report
            .accounts
            .iter()
            .find(|a| a.code == "14-WID-1")
            .unwrap();
        assert_eq!(product_row.kind, AccountKind::Asset);
        // Snapshot unit cost wins over the product cost price.
        assert_eq!(product_row.balance, dec!(50.00));

        let sales_row = report.accounts.iter().find(|a| a.code == "11-INV-1").unwrap();
        assert_eq!(sales_row.kind, AccountKind::Revenue);
        assert_eq!(sales_row.balance, dec!(200.00));

        let purchase_row = report
            .accounts
            .iter()
            .find(|a| a.code == "21-BILL-1")
            .unwrap();
        assert_eq!(purchase_row.kind, AccountKind::Expense);
        assert_eq!(purchase_row.balance, dec!(80.00));

        let category_row = report.accounts.iter().find(|a| a.code == "4001").unwrap();
        assert_eq!(category_row.name, "Services");
        assert_eq!(category_row.balance, dec!(0));
    }

    #[test]
    fn test_synthesis_falls_back_to_product_cost_price() {
        let tenant = Uuid::new_v4();
        let product_id = Uuid::new_v4();
        let sources = ChartSources {
            products: vec![ProductInfo {
                id: product_id,
                tenant_id: tenant,
                sku: "WID-2".to_string(),
                name: "Widget".to_string(),
                cost_price: dec!(3),
            }],
            inventory: vec![InventorySnapshot {
                tenant_id: tenant,
                product_id,
                warehouse_id: Uuid::new_v4(),
                quantity_available: dec!(7),
                unit_cost: None,
            }],
            ..ChartSources::default()
        };

        let report = ReportService::synthesize_chart(tenant, &sources);
        assert_eq!(report.accounts[0].balance, dec!(21.00));
    }

    #[test]
    fn test_synthesis_ignores_other_tenants_and_voided() {
        let tenant = Uuid::new_v4();
        let sources = ChartSources {
            sales: vec![
                sale(tenant, "INV-1", d(2026, 8, 1), InvoiceStatus::Voided, dec!(1)),
                sale(
                    Uuid::new_v4(),
                    "INV-2",
                    d(2026, 8, 1),
                    InvoiceStatus::Paid,
                    dec!(2),
                ),
            ],
            products: vec![ProductInfo {
                id: Uuid::new_v4(),
                tenant_id: Uuid::new_v4(),
                sku: "X".to_string(),
                name: "Foreign".to_string(),
                cost_price: dec!(1),
            }],
            ..ChartSources::default()
        };

        let report = ReportService::synthesize_chart(tenant, &sources);
        assert!(report.accounts.is_empty());
    }
}

mod financial_kpis {
    use super::*;

    const TODAY: (i32, u32, u32) = (2026, 8, 30);

    fn today() -> NaiveDate {
        d(TODAY.0, TODAY.1, TODAY.2)
    }

    #[test]
    fn test_revenue_buckets_by_issue_month() {
        let tenant = Uuid::new_v4();
        let sources = KpiSources {
            sales: vec![
                sale(tenant, "INV-1", d(2026, 8, 5), InvoiceStatus::Paid, dec!(150)),
                sale(tenant, "INV-2", d(2026, 8, 20), InvoiceStatus::Issued, dec!(50)),
                sale(tenant, "INV-3", d(2026, 7, 10), InvoiceStatus::Paid, dec!(100)),
                sale(tenant, "INV-4", d(2026, 6, 1), InvoiceStatus::Paid, dec!(999)),
            ],
            ..KpiSources::default()
        };

        let kpis = ReportService::financial_kpis(tenant, &sources, today());
        assert_eq!(kpis.revenue.current, dec!(200.00));
        assert_eq!(kpis.revenue.previous, dec!(100.00));
        assert_eq!(kpis.revenue.change_pct, dec!(100.00));
    }

    #[test]
    fn test_revenue_excludes_draft_and_voided() {
        let tenant = Uuid::new_v4();
        let sources = KpiSources {
            sales: vec![
                sale(tenant, "INV-1", d(2026, 8, 5), InvoiceStatus::Draft, dec!(40)),
                sale(tenant, "INV-2", d(2026, 8, 6), InvoiceStatus::Voided, dec!(60)),
                sale(tenant, "INV-3", d(2026, 8, 7), InvoiceStatus::Issued, dec!(10)),
            ],
            ..KpiSources::default()
        };

        let kpis = ReportService::financial_kpis(tenant, &sources, today());
        assert_eq!(kpis.revenue.current, dec!(10.00));
    }

    #[test]
    fn test_profit_is_revenue_minus_expenses_per_bucket() {
        let tenant = Uuid::new_v4();
        let sources = KpiSources {
            sales: vec![
                sale(tenant, "INV-1", d(2026, 8, 5), InvoiceStatus::Paid, dec!(300)),
                sale(tenant, "INV-2", d(2026, 7, 5), InvoiceStatus::Paid, dec!(200)),
            ],
            purchases: vec![
                purchase(tenant, "BILL-1", d(2026, 8, 6), InvoiceStatus::Paid, dec!(120)),
                purchase(tenant, "BILL-2", d(2026, 7, 6), InvoiceStatus::Paid, dec!(50)),
            ],
            ..KpiSources::default()
        };

        let kpis = ReportService::financial_kpis(tenant, &sources, today());
        assert_eq!(kpis.profit.current, dec!(180.00));
        assert_eq!(kpis.profit.previous, dec!(150.00));
        assert_eq!(kpis.profit.change_pct, dec!(20.00));
    }

    #[test]
    fn test_cash_previous_is_a_start_of_month_snapshot() {
        let tenant = Uuid::new_v4();
        let mut paid_july = sale(tenant, "INV-1", d(2026, 7, 1), InvoiceStatus::Paid, dec!(500));
        paid_july.paid_on = Some(d(2026, 7, 15));
        let mut paid_august = sale(tenant, "INV-2", d(2026, 8, 1), InvoiceStatus::Paid, dec!(200));
        paid_august.paid_on = Some(d(2026, 8, 10));
        // Paid with no payment date: running total only.
        let undated = sale(tenant, "INV-3", d(2026, 8, 2), InvoiceStatus::Paid, dec!(50));

        let sources = KpiSources {
            sales: vec![paid_july, paid_august, undated],
            ..KpiSources::default()
        };

        let kpis = ReportService::financial_kpis(tenant, &sources, today());
        assert_eq!(kpis.cash.current, dec!(750.00));
        assert_eq!(kpis.cash.previous, dec!(500.00));
        assert_eq!(kpis.cash.change_pct, dec!(50.00));
    }

    #[test]
    fn test_aging_splits_overdue_by_due_date() {
        let tenant = Uuid::new_v4();
        let mut overdue = sale(tenant, "INV-1", d(2026, 7, 1), InvoiceStatus::Issued, dec!(80));
        overdue.due_on = Some(d(2026, 8, 1));
        let mut not_due = sale(tenant, "INV-2", d(2026, 8, 20), InvoiceStatus::Issued, dec!(20));
        not_due.due_on = Some(d(2026, 9, 20));
        let no_due_date = sale(tenant, "INV-3", d(2026, 8, 25), InvoiceStatus::Draft, dec!(5));

        let sources = KpiSources {
            sales: vec![overdue, not_due, no_due_date],
            ..KpiSources::default()
        };

        let kpis = ReportService::financial_kpis(tenant, &sources, today());
        assert_eq!(kpis.receivables.current, dec!(105.00));
        assert_eq!(kpis.receivables.overdue, dec!(80.00));
    }

    #[test]
    fn test_paid_invoices_leave_the_aging_buckets() {
        let tenant = Uuid::new_v4();
        let mut paid = purchase(tenant, "BILL-1", d(2026, 7, 1), InvoiceStatus::Paid, dec!(90));
        paid.due_on = Some(d(2026, 7, 15));
        let open = purchase(tenant, "BILL-2", d(2026, 8, 1), InvoiceStatus::Issued, dec!(30));

        let sources = KpiSources {
            purchases: vec![paid, open],
            ..KpiSources::default()
        };

        let kpis = ReportService::financial_kpis(tenant, &sources, today());
        assert_eq!(kpis.payables.current, dec!(30.00));
        assert_eq!(kpis.payables.overdue, dec!(0.00));
    }

    #[test]
    fn test_inventory_value_and_turnover() {
        let tenant = Uuid::new_v4();
        let product_id = Uuid::new_v4();
        let mut costs = HashMap::new();
        costs.insert(product_id, dec!(5));

        let sources = KpiSources {
            sales: vec![sale(
                tenant,
                "INV-1",
                d(2026, 8, 5),
                InvoiceStatus::Paid,
                dec!(100),
            )],
            inventory: vec![
                InventorySnapshot {
                    tenant_id: tenant,
                    product_id,
                    warehouse_id: Uuid::new_v4(),
                    quantity_available: dec!(20),
                    unit_cost: None,
                },
                // Unknown product values at zero.
                InventorySnapshot {
                    tenant_id: tenant,
                    product_id: Uuid::new_v4(),
                    warehouse_id: Uuid::new_v4(),
                    quantity_available: dec!(99),
                    unit_cost: None,
                },
            ],
            product_costs: costs,
            ..KpiSources::default()
        };

        let kpis = ReportService::financial_kpis(tenant, &sources, today());
        assert_eq!(kpis.inventory.value, dec!(100.00));
        // 100 * 12 / 100 = 12, one decimal place.
        assert_eq!(kpis.inventory.turnover, dec!(12.0));
    }

    #[test]
    fn test_turnover_is_zero_without_stock() {
        let tenant = Uuid::new_v4();
        let sources = KpiSources {
            sales: vec![sale(
                tenant,
                "INV-1",
                d(2026, 8, 5),
                InvoiceStatus::Paid,
                dec!(100),
            )],
            ..KpiSources::default()
        };

        let kpis = ReportService::financial_kpis(tenant, &sources, today());
        assert_eq!(kpis.inventory.value, dec!(0.00));
        assert_eq!(kpis.inventory.turnover, dec!(0));
    }

    #[test]
    fn test_order_counts() {
        let tenant = Uuid::new_v4();
        let sources = KpiSources {
            orders: vec![
                order(tenant, OrderStatus::Pending),
                order(tenant, OrderStatus::Processing),
                order(tenant, OrderStatus::Shipped),
                order(tenant, OrderStatus::Delivered),
                order(tenant, OrderStatus::Delivered),
                order(tenant, OrderStatus::Canceled),
                order(Uuid::new_v4(), OrderStatus::Pending),
            ],
            ..KpiSources::default()
        };

        let kpis = ReportService::financial_kpis(tenant, &sources, today());
        assert_eq!(kpis.orders.pending, 3);
        assert_eq!(kpis.orders.completed, 2);
    }

    #[test]
    fn test_empty_sources_produce_an_all_zero_bundle() {
        let kpis = ReportService::financial_kpis(Uuid::new_v4(), &KpiSources::default(), today());
        assert_eq!(kpis.revenue.current, dec!(0.00));
        assert_eq!(kpis.revenue.change_pct, dec!(0.00));
        assert_eq!(kpis.cash.current, dec!(0.00));
        assert_eq!(kpis.receivables.current, dec!(0.00));
        assert_eq!(kpis.inventory.turnover, dec!(0));
        assert_eq!(kpis.orders.pending, 0);
    }

    #[test]
    fn test_other_tenants_never_leak_into_the_bundle() {
        let tenant = Uuid::new_v4();
        let other = Uuid::new_v4();
        let sources = KpiSources {
            sales: vec![sale(other, "INV-1", d(2026, 8, 5), InvoiceStatus::Paid, dec!(100))],
            purchases: vec![purchase(
                other,
                "BILL-1",
                d(2026, 8, 5),
                InvoiceStatus::Paid,
                dec!(40),
            )],
            inventory: vec![InventorySnapshot {
                tenant_id: other,
                product_id: Uuid::new_v4(),
                warehouse_id: Uuid::new_v4(),
                quantity_available: dec!(10),
                unit_cost: Some(dec!(10)),
            }],
            ..KpiSources::default()
        };

        let kpis = ReportService::financial_kpis(tenant, &sources, today());
        assert_eq!(kpis.revenue.current, dec!(0.00));
        assert_eq!(kpis.expenses.current, dec!(0.00));
        assert_eq!(kpis.inventory.value, dec!(0.00));
    }
}
