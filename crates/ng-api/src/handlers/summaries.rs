//! Digest summary handlers

use super::run_blocking;
use crate::error::{ApiError, AppError};
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use ng_core::DigestRecord;
use ng_sources::parse_date;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::IntoParams;

/// Query parameters for summaries
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SummariesQuery {
    /// Digest date (YYYY-MM-DD); defaults to the newest digest
    pub date: Option<String>,
}

/// Records of a digest; empty when no digest exists
#[utoipa::path(
    get,
    path = "/api/summaries",
    tag = "summaries",
    params(SummariesQuery),
    responses(
        (status = 200, description = "Digest records", body = [DigestRecord]),
        (status = 400, description = "Malformed date", body = ApiError)
    )
)]
pub async fn list_summaries(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SummariesQuery>,
) -> Result<impl IntoResponse, AppError> {
    state.increment_requests();

    let date = match params.date.as_deref() {
        Some(raw) => Some(parse_date(raw).ok_or_else(|| {
            AppError::BadRequest(format!("Invalid date '{raw}', expected YYYY-MM-DD"))
        })?),
        None => None,
    };

    let digests = state.digests.clone();
    let records: Vec<DigestRecord> = run_blocking(move || digests.load_or_latest(date)).await?;
    Ok(Json(records))
}
