//! Batch pipeline trigger

use crate::error::{ApiError, AppError};
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use ng_sources::PipelineOutcome;
use std::sync::Arc;

/// Run the external scrape/summarize pipeline and relay its outcome
#[utoipa::path(
    post,
    path = "/api/pipeline/run",
    tag = "pipeline",
    responses(
        (status = 200, description = "Pipeline finished (see `success`)", body = PipelineOutcome),
        (status = 409, description = "A run is already in progress", body = ApiError),
        (status = 502, description = "Pipeline could not start or timed out", body = ApiError)
    )
)]
pub async fn run_pipeline(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, AppError> {
    state.increment_requests();

    let _guard = state
        .try_begin_pipeline()
        .ok_or_else(|| AppError::Conflict("pipeline is already running".to_string()))?;

    let outcome = state.pipeline.run().await?;
    Ok(Json(outcome))
}
