//! API handlers

pub mod feeds;
pub mod graph;
pub mod health;
pub mod pipeline;
pub mod summaries;

use crate::error::AppError;

/// Run filesystem or CPU-bound work on the blocking pool
pub(crate) async fn run_blocking<T, F>(work: F) -> Result<T, AppError>
where
    F: FnOnce() -> ng_core::Result<T> + Send + 'static,
    T: Send + 'static,
{
    let result = tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| AppError::Internal(format!("Blocking task failed: {e}")))?;
    Ok(result?)
}
