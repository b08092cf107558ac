//! API route definitions

use crate::handlers::{feeds, graph, pipeline, summaries};
use crate::state::AppState;
use axum::{
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;

/// Create the `/api` routes
pub fn api_routes() -> Router<Arc<AppState>> {
    let graph_routes = Router::new()
        .route("/graph.json", get(graph::get_graph))
        .route("/extract", post(graph::extract))
        .route("/entities", post(graph::entities));

    Router::new()
        .nest("/graph", graph_routes)
        .route("/feeds", get(feeds::list_feeds).post(feeds::add_feed))
        .route("/feeds/:name", delete(feeds::delete_feed))
        .route("/summaries", get(summaries::list_summaries))
        .route("/pipeline/run", post(pipeline::run_pipeline))
}
