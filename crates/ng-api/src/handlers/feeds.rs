//! Feed source handlers

use super::run_blocking;
use crate::error::{ApiError, AppError};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use ng_core::FeedSource;
use std::sync::Arc;

/// List configured feed sources
#[utoipa::path(
    get,
    path = "/api/feeds",
    tag = "feeds",
    responses(
        (status = 200, description = "Configured feeds", body = [FeedSource])
    )
)]
pub async fn list_feeds(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, AppError> {
    state.increment_requests();

    let store = state.feeds.read().await.clone();
    let feeds = run_blocking(move || store.list()).await?;
    Ok(Json(feeds))
}

/// Register a new feed source
#[utoipa::path(
    post,
    path = "/api/feeds",
    tag = "feeds",
    request_body = FeedSource,
    responses(
        (status = 201, description = "Feed added", body = FeedSource),
        (status = 400, description = "Missing name or url", body = ApiError),
        (status = 409, description = "Name or url already registered", body = ApiError)
    )
)]
pub async fn add_feed(
    State(state): State<Arc<AppState>>,
    Json(feed): Json<FeedSource>,
) -> Result<impl IntoResponse, AppError> {
    state.increment_requests();

    feed.validate().map_err(|e| AppError::BadRequest(e.to_string()))?;

    // The write guard is held until the file update completes
    let guard = state.feeds.write().await;
    let store = guard.clone();
    let added = run_blocking(move || store.add(feed)).await?;
    drop(guard);

    Ok((StatusCode::CREATED, Json(added)))
}

/// Remove a feed source by name
#[utoipa::path(
    delete,
    path = "/api/feeds/{name}",
    tag = "feeds",
    params(
        ("name" = String, Path, description = "Feed name")
    ),
    responses(
        (status = 204, description = "Feed removed"),
        (status = 404, description = "Feed not found", body = ApiError)
    )
)]
pub async fn delete_feed(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.increment_requests();

    let guard = state.feeds.write().await;
    let store = guard.clone();
    run_blocking(move || store.remove(&name)).await?;
    drop(guard);

    Ok(StatusCode::NO_CONTENT)
}
