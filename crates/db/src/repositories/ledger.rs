//! Ledger repository: the two-tier journal read and write paths.
//!
//! Reads try the dedicated `journal_entries` table first and fall back to a
//! projection synthesized from invoices when that table is not provisioned.
//! Writes dispatch the other way around: an entry that cannot land in the
//! ledger table is persisted as the invoice it describes.

use chrono::{NaiveDate, Utc};
use kontor_core::journal::{
    CreateEntryInput, EntryStatus, InvoiceDirection, Journal, JournalEntry, JournalError,
    JournalFilter, SynthesizedInvoice, WriteOutcome, can_post, can_reverse, entry_from_invoice,
    validate_create, JOURNAL_PAGE_LIMIT,
};
use kontor_shared::AppError;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

use crate::entities::sea_orm_active_enums::{DbEntryStatus, DbInvoiceDirection, DbInvoiceStatus};
use crate::entities::{invoices, journal_entries};
use crate::outcome::QueryOutcome;

/// Note returned when a post/reverse request targets a derived entry.
const DERIVED_WRITE_NOTE: &str = "entry is derived from an invoice and has no ledger row; \
     update the source invoice status instead";

/// Error types for ledger operations.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    /// Journal entry not found.
    #[error("Journal entry not found: {0}")]
    EntryNotFound(Uuid),

    /// Entry payload failed validation or a status transition rule.
    #[error(transparent)]
    Entry(#[from] JournalError),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::EntryNotFound(id) => Self::NotFound(format!("journal entry {id}")),
            LedgerError::Entry(inner) => inner.into(),
            LedgerError::Database(inner) => Self::Database(inner.to_string()),
        }
    }
}

/// Repository for journal reads and writes.
#[derive(Debug, Clone)]
pub struct LedgerRepository {
    db: DatabaseConnection,
}

impl LedgerRepository {
    /// Creates a new ledger repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists journal entries for an organization.
    ///
    /// Store errors degrade to an empty list; a dashboard renders zeros
    /// rather than failing on a partially provisioned schema.
    pub async fn list_entries(
        &self,
        organization_id: Uuid,
        filter: &JournalFilter,
    ) -> Vec<JournalEntry> {
        match fetch_journal(&self.db, organization_id, None, filter).await {
            Ok(journal) => journal.into_entries_filtered(organization_id, filter),
            Err(err) => {
                tracing::warn!(%organization_id, error = %err, "journal read failed, degrading to empty");
                Vec::new()
            }
        }
    }

    /// Finds a single journal entry by id.
    ///
    /// Follows the same two-tier lookup as the listing; store errors degrade
    /// to `None`.
    pub async fn find_entry(&self, organization_id: Uuid, entry_id: Uuid) -> Option<JournalEntry> {
        match self.lookup_entry(organization_id, entry_id).await {
            Ok(found) => found.map(Found::into_entry),
            Err(err) => {
                tracing::warn!(%organization_id, %entry_id, error = %err, "journal lookup failed, degrading to none");
                None
            }
        }
    }

    /// Creates a journal entry, dispatching by what the schema supports.
    ///
    /// The payload is validated first; a valid entry is inserted into the
    /// ledger table when it exists, otherwise persisted as the invoice it
    /// describes (debit-only becomes a sales invoice, credit-only a purchase
    /// invoice). Either way the result is retrievable through the read path.
    ///
    /// # Errors
    ///
    /// Returns a validation error for malformed payloads and a database
    /// error when the insert itself fails.
    pub async fn create_entry(
        &self,
        organization_id: Uuid,
        input: &CreateEntryInput,
        today: NaiveDate,
    ) -> Result<JournalEntry, LedgerError> {
        let synth = validate_create(input, today)?;

        // The count doubles as the existence probe for the ledger table.
        let native_seq = QueryOutcome::classify(
            journal_entries::Entity::find()
                .filter(journal_entries::Column::OrganizationId.eq(organization_id))
                .count(&self.db)
                .await,
        )?;

        match native_seq {
            QueryOutcome::Ok(count) => {
                self.insert_native(organization_id, &synth, count + 1).await
            }
            QueryOutcome::SchemaAbsent => {
                self.insert_as_invoice(organization_id, &synth).await
            }
        }
    }

    /// Posts a draft entry.
    ///
    /// On the derived path there is no row to mutate; the request is
    /// accepted as a no-op with an explanatory note.
    ///
    /// # Errors
    ///
    /// Returns `EntryNotFound` for unknown ids, a business-rule error for
    /// non-draft entries, and a database error if the store fails.
    pub async fn post_entry(
        &self,
        organization_id: Uuid,
        entry_id: Uuid,
    ) -> Result<WriteOutcome, LedgerError> {
        match self.lookup_entry(organization_id, entry_id).await? {
            Some(Found::Native(model)) => {
                can_post(model.status.into())?;
                let updated = self.set_status(model, DbEntryStatus::Posted).await?;
                Ok(WriteOutcome::applied(updated.into()))
            }
            Some(Found::Derived(entry)) => Ok(WriteOutcome::noop(Some(entry), DERIVED_WRITE_NOTE)),
            None => Err(LedgerError::EntryNotFound(entry_id)),
        }
    }

    /// Reverses a posted entry. Same derived-path contract as posting.
    ///
    /// # Errors
    ///
    /// Returns `EntryNotFound` for unknown ids, a business-rule error for
    /// non-posted entries, and a database error if the store fails.
    pub async fn reverse_entry(
        &self,
        organization_id: Uuid,
        entry_id: Uuid,
    ) -> Result<WriteOutcome, LedgerError> {
        match self.lookup_entry(organization_id, entry_id).await? {
            Some(Found::Native(model)) => {
                can_reverse(model.status.into())?;
                let updated = self.set_status(model, DbEntryStatus::Reversed).await?;
                Ok(WriteOutcome::applied(updated.into()))
            }
            Some(Found::Derived(entry)) => Ok(WriteOutcome::noop(Some(entry), DERIVED_WRITE_NOTE)),
            None => Err(LedgerError::EntryNotFound(entry_id)),
        }
    }

    async fn lookup_entry(
        &self,
        organization_id: Uuid,
        entry_id: Uuid,
    ) -> Result<Option<Found>, DbErr> {
        let native = QueryOutcome::classify(
            journal_entries::Entity::find_by_id(entry_id)
                .filter(journal_entries::Column::OrganizationId.eq(organization_id))
                .one(&self.db)
                .await,
        )?;

        match native {
            QueryOutcome::Ok(Some(model)) => Ok(Some(Found::Native(model))),
            QueryOutcome::Ok(None) => Ok(None),
            QueryOutcome::SchemaAbsent => {
                let invoice = invoices::Entity::find_by_id(entry_id)
                    .filter(invoices::Column::OrganizationId.eq(organization_id))
                    .one(&self.db)
                    .await?;
                Ok(invoice
                    .and_then(|model| entry_from_invoice(model.into(), organization_id))
                    .map(Found::Derived))
            }
        }
    }

    async fn insert_native(
        &self,
        organization_id: Uuid,
        synth: &SynthesizedInvoice,
        seq: u64,
    ) -> Result<JournalEntry, LedgerError> {
        let (debit, credit) = match synth.direction {
            InvoiceDirection::Sale => (synth.total, rust_decimal::Decimal::ZERO),
            InvoiceDirection::Purchase => (rust_decimal::Decimal::ZERO, synth.total),
        };
        let status = if synth.paid {
            EntryStatus::Posted
        } else {
            EntryStatus::Draft
        };
        let now = Utc::now();

        let model = journal_entries::ActiveModel {
            id: Set(Uuid::new_v4()),
            organization_id: Set(organization_id),
            entry_number: Set(synth
                .document_number
                .clone()
                .unwrap_or_else(|| format!("JE-{seq:05}"))),
            entry_date: Set(synth.issued_on),
            description: Set(synth.description.clone()),
            kind: Set(synth.kind.into()),
            debit: Set(debit),
            credit: Set(credit),
            status: Set(status.into()),
            source_type: Set(None),
            source_id: Set(None),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        }
        .insert(&self.db)
        .await?;

        Ok(model.into())
    }

    async fn insert_as_invoice(
        &self,
        organization_id: Uuid,
        synth: &SynthesizedInvoice,
    ) -> Result<JournalEntry, LedgerError> {
        let direction: DbInvoiceDirection = synth.direction.into();
        let seq = invoices::Entity::find()
            .filter(invoices::Column::OrganizationId.eq(organization_id))
            .filter(invoices::Column::Direction.eq(direction))
            .count(&self.db)
            .await?
            + 1;
        let prefix = match synth.direction {
            InvoiceDirection::Sale => "INV",
            InvoiceDirection::Purchase => "BILL",
        };
        let status = if synth.paid {
            DbInvoiceStatus::Paid
        } else {
            DbInvoiceStatus::Draft
        };
        let now = Utc::now();

        let model = invoices::ActiveModel {
            id: Set(Uuid::new_v4()),
            organization_id: Set(organization_id),
            document_number: Set(synth
                .document_number
                .clone()
                .unwrap_or_else(|| format!("{prefix}-{seq:05}"))),
            direction: Set(direction),
            issued_on: Set(synth.issued_on),
            due_on: Set(None),
            paid_on: Set(synth.paid.then_some(synth.issued_on)),
            status: Set(status),
            total: Set(synth.total),
            notes: Set(Some(synth.description.clone())),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        }
        .insert(&self.db)
        .await?;

        entry_from_invoice(model.into(), organization_id)
            .ok_or_else(|| DbErr::RecordNotFound("inserted invoice did not project".to_string()))
            .map_err(LedgerError::from)
    }

    async fn set_status(
        &self,
        model: journal_entries::Model,
        status: DbEntryStatus,
    ) -> Result<journal_entries::Model, DbErr> {
        let mut active: journal_entries::ActiveModel = model.into();
        active.status = Set(status);
        active.updated_at = Set(Utc::now().into());
        active.update(&self.db).await
    }
}

/// Result of the two-tier entry lookup.
enum Found {
    Native(journal_entries::Model),
    Derived(JournalEntry),
}

impl Found {
    fn into_entry(self) -> JournalEntry {
        match self {
            Self::Native(model) => model.into(),
            Self::Derived(entry) => entry,
        }
    }
}

/// Fetches the journal for an organization, native table first.
///
/// The caller's filter is pushed into the native query ahead of the row
/// limit, so a date-range query reaches entries older than the newest page.
/// `native_status` is an extra native-only constraint (trial balance sums
/// posted rows); derived entries carry their own status semantics and are
/// filtered in the projection. When the ledger table is absent the sales and
/// purchase invoices are read concurrently and carried as
/// [`Journal::Derived`]; projection happens in the caller.
pub(crate) async fn fetch_journal(
    db: &DatabaseConnection,
    organization_id: Uuid,
    native_status: Option<DbEntryStatus>,
    filter: &JournalFilter,
) -> Result<Journal, DbErr> {
    let limit = u64::try_from(JOURNAL_PAGE_LIMIT).unwrap_or(u64::MAX);
    let mut query = journal_entries::Entity::find()
        .filter(journal_entries::Column::OrganizationId.eq(organization_id));
    if let Some(status) = native_status {
        query = query.filter(journal_entries::Column::Status.eq(status));
    }
    if let Some(status) = filter.status {
        query = query.filter(journal_entries::Column::Status.eq(DbEntryStatus::from(status)));
    }
    if let Some(from) = filter.from {
        query = query.filter(journal_entries::Column::EntryDate.gte(from));
    }
    if let Some(to) = filter.to {
        query = query.filter(journal_entries::Column::EntryDate.lte(to));
    }
    let native = QueryOutcome::classify(
        query
            .order_by_desc(journal_entries::Column::EntryDate)
            .limit(limit)
            .all(db)
            .await,
    )?;

    match native {
        QueryOutcome::Ok(rows) => Ok(Journal::Native(
            rows.into_iter().map(Into::into).collect(),
        )),
        QueryOutcome::SchemaAbsent => {
            let (sales, purchases) = tokio::try_join!(
                fetch_invoices(db, organization_id, DbInvoiceDirection::Sale),
                fetch_invoices(db, organization_id, DbInvoiceDirection::Purchase),
            )?;
            Ok(Journal::Derived { sales, purchases })
        }
    }
}

/// Fetches all invoices of one direction for an organization.
pub(crate) async fn fetch_invoices(
    db: &DatabaseConnection,
    organization_id: Uuid,
    direction: DbInvoiceDirection,
) -> Result<Vec<kontor_core::journal::Invoice>, DbErr> {
    let rows = invoices::Entity::find()
        .filter(invoices::Column::OrganizationId.eq(organization_id))
        .filter(invoices::Column::Direction.eq(direction))
        .all(db)
        .await?;
    Ok(rows.into_iter().map(Into::into).collect())
}
