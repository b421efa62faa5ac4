//! `SeaORM` entity definitions.

pub mod chart_of_accounts;
pub mod inventory_levels;
pub mod invoices;
pub mod journal_entries;
pub mod organizations;
pub mod product_categories;
pub mod products;
pub mod sales_orders;
pub mod sea_orm_active_enums;
