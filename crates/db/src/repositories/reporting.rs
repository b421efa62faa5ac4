//! Reporting repository: fetches report sources and delegates aggregation.
//!
//! All arithmetic lives in `kontor_core::reports`; this module only decides
//! which tables to read and how missing tables and store failures map onto
//! the report contracts. Listings and the chart degrade to empty results,
//! the KPI bundle is all-or-nothing.

use chrono::NaiveDate;
use kontor_core::journal::{Invoice, JournalEntry, JournalFilter};
use kontor_core::reports::{
    ChartOfAccountsReport, ChartSources, FinancialKpis, InventorySnapshot, KpiSources,
    ProductCategory, ReportService, SalesOrder, TrialBalanceReport,
};
use rust_decimal::Decimal;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};
use std::collections::HashMap;
use uuid::Uuid;

use crate::entities::sea_orm_active_enums::{DbEntryStatus, DbInvoiceDirection};
use crate::entities::{
    chart_of_accounts, inventory_levels, product_categories, products, sales_orders,
};
use crate::outcome::QueryOutcome;

use super::ledger::{fetch_invoices, fetch_journal};

/// Repository for the reporting and dashboard queries.
#[derive(Debug, Clone)]
pub struct ReportingRepository {
    db: DatabaseConnection,
}

impl ReportingRepository {
    /// Creates a new reporting repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Computes the trial balance for an organization.
    ///
    /// Native path sums posted entries only; the derived path sums every
    /// synthesized entry, since invoice-derived drafts are part of the
    /// approximation. Store errors degrade to an all-zero report.
    pub async fn trial_balance(&self, organization_id: Uuid) -> TrialBalanceReport {
        let journal = fetch_journal(
            &self.db,
            organization_id,
            Some(DbEntryStatus::Posted),
            &JournalFilter::default(),
        )
        .await;
        let entries = match journal {
            Ok(journal) => journal.into_entries(organization_id),
            Err(err) => {
                tracing::warn!(%organization_id, error = %err, "trial balance read failed, degrading to zeros");
                Vec::new()
            }
        };
        ReportService::trial_balance(&entries)
    }

    /// Lists the general ledger with an optional date range.
    ///
    /// Same two-tier derivation as the journal listing; store errors degrade
    /// to an empty list.
    pub async fn general_ledger(
        &self,
        organization_id: Uuid,
        filter: &JournalFilter,
    ) -> Vec<JournalEntry> {
        match fetch_journal(&self.db, organization_id, None, filter).await {
            Ok(journal) => journal.into_entries_filtered(organization_id, filter),
            Err(err) => {
                tracing::warn!(%organization_id, error = %err, "general ledger read failed, degrading to empty");
                Vec::new()
            }
        }
    }

    /// Builds the chart of accounts, synthesizing one if the table is
    /// absent. Store failures degrade to an empty report; only the KPI
    /// bundle surfaces them.
    pub async fn chart_of_accounts(&self, organization_id: Uuid) -> ChartOfAccountsReport {
        match self.build_chart(organization_id).await {
            Ok(report) => report,
            Err(err) => {
                tracing::warn!(%organization_id, error = %err, "chart of accounts read failed, degrading to empty");
                ChartOfAccountsReport {
                    accounts: Vec::new(),
                    synthesized: false,
                }
            }
        }
    }

    async fn build_chart(&self, organization_id: Uuid) -> Result<ChartOfAccountsReport, DbErr> {
        let native = QueryOutcome::classify(
            chart_of_accounts::Entity::find()
                .filter(chart_of_accounts::Column::OrganizationId.eq(organization_id))
                .filter(chart_of_accounts::Column::IsActive.eq(true))
                .all(&self.db)
                .await,
        )?;

        match native {
            QueryOutcome::Ok(rows) => Ok(ReportService::chart_of_accounts(
                rows.into_iter().map(Into::into).collect(),
            )),
            QueryOutcome::SchemaAbsent => {
                let (categories, product_rows, inventory, sales, purchases) = tokio::try_join!(
                    self.fetch_categories(organization_id),
                    self.fetch_products(organization_id),
                    self.fetch_inventory(organization_id),
                    self.fetch_invoices_lenient(organization_id, DbInvoiceDirection::Sale),
                    self.fetch_invoices_lenient(organization_id, DbInvoiceDirection::Purchase),
                )?;
                let sources = ChartSources {
                    categories,
                    products: product_rows.into_iter().map(Into::into).collect(),
                    inventory,
                    sales,
                    purchases,
                };
                Ok(ReportService::synthesize_chart(organization_id, &sources))
            }
        }
    }

    /// Computes the financial KPI bundle as of `today`.
    ///
    /// The five source reads run concurrently. A source whose table is
    /// absent contributes empty rows (its metrics read zero); any real store
    /// failure aborts the whole bundle, because a partial KPI snapshot is
    /// worse than an explicit failure.
    ///
    /// # Errors
    ///
    /// Returns the first database error from any of the source reads.
    pub async fn financial_kpis(
        &self,
        organization_id: Uuid,
        today: NaiveDate,
    ) -> Result<FinancialKpis, DbErr> {
        let (sales, purchases, orders, inventory, product_rows) = tokio::try_join!(
            self.fetch_invoices_lenient(organization_id, DbInvoiceDirection::Sale),
            self.fetch_invoices_lenient(organization_id, DbInvoiceDirection::Purchase),
            self.fetch_orders(organization_id),
            self.fetch_inventory(organization_id),
            self.fetch_products(organization_id),
        )?;

        let product_costs: HashMap<Uuid, Decimal> = product_rows
            .into_iter()
            .map(|p| (p.id, p.cost_price))
            .collect();

        let sources = KpiSources {
            sales,
            purchases,
            orders,
            inventory,
            product_costs,
        };
        Ok(ReportService::financial_kpis(
            organization_id,
            &sources,
            today,
        ))
    }

    /// Invoice read that treats an absent `invoices` table like the other
    /// optional sources: it contributes no rows instead of failing the
    /// bundle.
    async fn fetch_invoices_lenient(
        &self,
        organization_id: Uuid,
        direction: DbInvoiceDirection,
    ) -> Result<Vec<Invoice>, DbErr> {
        Ok(
            QueryOutcome::classify(fetch_invoices(&self.db, organization_id, direction).await)?
                .unwrap_or_default(),
        )
    }

    async fn fetch_orders(&self, organization_id: Uuid) -> Result<Vec<SalesOrder>, DbErr> {
        let rows = QueryOutcome::classify(
            sales_orders::Entity::find()
                .filter(sales_orders::Column::OrganizationId.eq(organization_id))
                .all(&self.db)
                .await,
        )?
        .unwrap_or_default();
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn fetch_inventory(
        &self,
        organization_id: Uuid,
    ) -> Result<Vec<InventorySnapshot>, DbErr> {
        let rows = QueryOutcome::classify(
            inventory_levels::Entity::find()
                .filter(inventory_levels::Column::OrganizationId.eq(organization_id))
                .all(&self.db)
                .await,
        )?
        .unwrap_or_default();
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn fetch_products(&self, organization_id: Uuid) -> Result<Vec<products::Model>, DbErr> {
        Ok(QueryOutcome::classify(
            products::Entity::find()
                .filter(products::Column::OrganizationId.eq(organization_id))
                .all(&self.db)
                .await,
        )?
        .unwrap_or_default())
    }

    async fn fetch_categories(
        &self,
        organization_id: Uuid,
    ) -> Result<Vec<ProductCategory>, DbErr> {
        let rows = QueryOutcome::classify(
            product_categories::Entity::find()
                .filter(product_categories::Column::OrganizationId.eq(organization_id))
                .all(&self.db)
                .await,
        )?
        .unwrap_or_default();
        Ok(rows.into_iter().map(Into::into).collect())
    }
}
