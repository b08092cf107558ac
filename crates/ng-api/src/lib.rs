//! newsgraph API - HTTP server for the entity co-occurrence graph
//!
//! Serves the visualization graph built from the latest news digest,
//! ad-hoc extraction, feed source management, digest summaries and the
//! batch pipeline trigger.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Json, Router,
};
use state::AppState;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::warn;
use utoipa::OpenApi;

/// OpenAPI document for every JSON endpoint
#[derive(OpenApi)]
#[openapi(
    info(title = "newsgraph API", description = "Entity co-occurrence graphs from news digests"),
    paths(
        handlers::health::health_check,
        handlers::health::metrics,
        handlers::graph::get_graph,
        handlers::graph::extract,
        handlers::graph::entities,
        handlers::feeds::list_feeds,
        handlers::feeds::add_feed,
        handlers::feeds::delete_feed,
        handlers::summaries::list_summaries,
        handlers::pipeline::run_pipeline,
    ),
    components(schemas(
        error::ApiError,
        handlers::health::HealthResponse,
        handlers::health::MetricsResponse,
        handlers::graph::ExtractRequest,
        handlers::graph::ExtractResponse,
        handlers::graph::EntitiesRequest,
        handlers::graph::EntitiesResponse,
        ng_core::Scope,
        ng_core::Triple,
        ng_core::FeedSource,
        ng_core::DigestRecord,
        ng_graph::GraphStats,
        ng_graph::VisualizationGraph,
        ng_graph::VisualizationNode,
        ng_graph::VisualizationLink,
        ng_sources::PipelineOutcome,
    )),
    tags(
        (name = "health", description = "Liveness and counters"),
        (name = "graph", description = "Entity extraction and graph export"),
        (name = "feeds", description = "News feed sources"),
        (name = "summaries", description = "Digest artifacts"),
        (name = "pipeline", description = "Batch pipeline trigger"),
    )
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the application router
pub fn create_router(state: Arc<AppState>) -> Router {
    let static_dir = state.config.server.static_dir.clone();
    let cors = cors_layer(&state.config.server.cors_origins);

    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/metrics", get(handlers::health::metrics))
        .route("/api-docs/openapi.json", get(openapi_json))
        .nest("/api", routes::api_routes())
        .route_service("/graph", ServeFile::new(static_dir.join("graph.html")))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// CORS policy; no configured origins allows any origin
fn cors_layer(origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    if origins.is_empty() {
        return cors.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    cors.allow_origin(AllowOrigin::list(allowed))
}

/// Router over the built-in gazetteer, for integration tests
#[cfg(feature = "test-utils")]
pub fn create_router_for_testing(config: ng_core::AppConfig) -> Router {
    let tagger = Arc::new(ng_extractor::GazetteerTagger::new());
    create_router(Arc::new(AppState::with_tagger(config, tagger)))
}
