//! Dashboard routes.

use axum::{
    Router,
    extract::{Path, Query, State},
    response::IntoResponse,
    routing::get,
};
use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;

use crate::response::{ApiError, ApiResult, success};
use crate::{AppState, middleware::AuthUser};
use kontor_db::ReportingRepository;
use kontor_shared::AppError;

/// Creates the dashboard routes (requires auth middleware to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/organizations/{org_id}/dashboard/financial-kpis",
        get(get_financial_kpis),
    )
}

/// Query parameters for the KPI bundle.
#[derive(Debug, Deserialize)]
pub struct KpiQuery {
    /// Reference date for month bucketing; defaults to today.
    pub as_of: Option<NaiveDate>,
}

/// GET /organizations/{org_id}/dashboard/financial-kpis
///
/// The one endpoint that prefers an explicit 500 over a degraded answer: a
/// partial KPI snapshot would be misleading.
async fn get_financial_kpis(
    State(state): State<AppState>,
    Path(org_id): Path<Uuid>,
    Query(query): Query<KpiQuery>,
    auth_user: AuthUser,
) -> ApiResult<impl IntoResponse> {
    auth_user.require_organization(org_id)?;

    let repo = ReportingRepository::new((*state.db).clone());
    let today = query
        .as_of
        .unwrap_or_else(|| chrono::Utc::now().date_naive());
    let kpis = repo.financial_kpis(org_id, today).await.map_err(|e| {
        tracing::error!(%org_id, error = %e, "Failed to compute financial KPIs");
        ApiError(AppError::Database(e.to_string()))
    })?;
    Ok(success(kpis))
}
