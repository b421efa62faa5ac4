//! `SeaORM` Entity for journal entries table.
//!
//! This table is optional at runtime: tenants provisioned without it are
//! served by the invoice-derived projection instead.

use kontor_core::journal::{JournalEntry, SourceRef};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::{DbEntryKind, DbEntryStatus};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "journal_entries")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub organization_id: Uuid,
    pub entry_number: String,
    pub entry_date: Date,
    pub description: String,
    pub kind: DbEntryKind,
    pub debit: Decimal,
    pub credit: Decimal,
    pub status: DbEntryStatus,
    pub source_type: Option<String>,
    pub source_id: Option<Uuid>,
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

impl From<Model> for JournalEntry {
    fn from(model: Model) -> Self {
        let source = match (model.source_type, model.source_id) {
            (Some(doc_type), Some(id)) => Some(SourceRef { doc_type, id }),
            _ => None,
        };
        Self {
            id: model.id,
            tenant_id: model.organization_id,
            entry_number: model.entry_number,
            entry_date: model.entry_date,
            description: model.description,
            kind: model.kind.into(),
            debit: model.debit,
            credit: model.credit,
            status: model.status.into(),
            source,
        }
    }
}
