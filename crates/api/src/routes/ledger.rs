//! Ledger routes: journal listing, creation, posting, and reversal.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::json;
use uuid::Uuid;

use crate::response::{ApiError, ApiResult, success};
use crate::{AppState, middleware::AuthUser};
use kontor_core::journal::{CreateEntryInput, JournalFilter};
use kontor_db::LedgerRepository;
use kontor_shared::AppError;

/// Creates the ledger routes (requires auth middleware to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/organizations/{org_id}/ledger/entries",
            get(list_entries).post(create_entry),
        )
        .route(
            "/organizations/{org_id}/ledger/entries/{entry_id}",
            get(get_entry),
        )
        .route(
            "/organizations/{org_id}/ledger/entries/{entry_id}/post",
            post(post_entry),
        )
        .route(
            "/organizations/{org_id}/ledger/entries/{entry_id}/reverse",
            post(reverse_entry),
        )
}

/// GET /organizations/{org_id}/ledger/entries
///
/// Lists the journal through the two-tier derivation; degrades to an empty
/// list rather than failing on an unprovisioned schema.
async fn list_entries(
    State(state): State<AppState>,
    Path(org_id): Path<Uuid>,
    Query(filter): Query<JournalFilter>,
    auth_user: AuthUser,
) -> ApiResult<impl IntoResponse> {
    auth_user.require_organization(org_id)?;

    let repo = LedgerRepository::new((*state.db).clone());
    let entries = repo.list_entries(org_id, &filter).await;
    let count = entries.len();
    Ok(success(json!({ "entries": entries, "count": count })))
}

/// GET /organizations/{org_id}/ledger/entries/{entry_id}
async fn get_entry(
    State(state): State<AppState>,
    Path((org_id, entry_id)): Path<(Uuid, Uuid)>,
    auth_user: AuthUser,
) -> ApiResult<impl IntoResponse> {
    auth_user.require_organization(org_id)?;

    let repo = LedgerRepository::new((*state.db).clone());
    let entry = repo
        .find_entry(org_id, entry_id)
        .await
        .ok_or_else(|| ApiError(AppError::NotFound(format!("journal entry {entry_id}"))))?;
    Ok(success(entry))
}

/// POST /organizations/{org_id}/ledger/entries
///
/// Validates the payload and creates the entry, either as a ledger row or
/// as the invoice it describes when no ledger table exists.
async fn create_entry(
    State(state): State<AppState>,
    Path(org_id): Path<Uuid>,
    auth_user: AuthUser,
    Json(input): Json<CreateEntryInput>,
) -> ApiResult<impl IntoResponse> {
    auth_user.require_organization(org_id)?;

    let repo = LedgerRepository::new((*state.db).clone());
    let today = chrono::Utc::now().date_naive();
    let entry = repo.create_entry(org_id, &input, today).await?;
    Ok((StatusCode::CREATED, success(entry)))
}

/// POST /organizations/{org_id}/ledger/entries/{entry_id}/post
async fn post_entry(
    State(state): State<AppState>,
    Path((org_id, entry_id)): Path<(Uuid, Uuid)>,
    auth_user: AuthUser,
) -> ApiResult<impl IntoResponse> {
    auth_user.require_organization(org_id)?;

    let repo = LedgerRepository::new((*state.db).clone());
    let outcome = repo.post_entry(org_id, entry_id).await?;
    Ok(success(outcome))
}

/// POST /organizations/{org_id}/ledger/entries/{entry_id}/reverse
async fn reverse_entry(
    State(state): State<AppState>,
    Path((org_id, entry_id)): Path<(Uuid, Uuid)>,
    auth_user: AuthUser,
) -> ApiResult<impl IntoResponse> {
    auth_user.require_organization(org_id)?;

    let repo = LedgerRepository::new((*state.db).clone());
    let outcome = repo.reverse_entry(org_id, entry_id).await?;
    Ok(success(outcome))
}
