//! `SeaORM` Entity for invoices table.
//!
//! One table holds both sales and purchase invoices, discriminated by
//! `direction`. The ledger fallback and every KPI read consume these rows.

use kontor_core::journal::Invoice;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::{DbInvoiceDirection, DbInvoiceStatus};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "invoices")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub organization_id: Uuid,
    pub document_number: String,
    pub direction: DbInvoiceDirection,
    pub issued_on: Date,
    pub due_on: Option<Date>,
    pub paid_on: Option<Date>,
    pub status: DbInvoiceStatus,
    pub total: Decimal,
    pub notes: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::organizations::Entity",
        from = "Column::OrganizationId",
        to = "super::organizations::Column::Id"
    )]
    Organizations,
}

impl Related<super::organizations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Organizations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Invoice {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            tenant_id: model.organization_id,
            document_number: model.document_number,
            direction: model.direction.into(),
            issued_on: model.issued_on,
            due_on: model.due_on,
            paid_on: model.paid_on,
            status: model.status.into(),
            total: model.total,
            notes: model.notes,
        }
    }
}
