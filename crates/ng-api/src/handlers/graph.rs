//! Entity graph handlers
//!
//! Extraction is CPU-bound, so it runs on the blocking pool.

use super::run_blocking;
use crate::error::{ApiError, AppError};
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use ng_core::{Scope, Triple};
use ng_extractor::TripleSet;
use ng_graph::{CoOccurrenceGraph, GraphStats, VisualizationGraph};
use ng_sources::{lead_summary, parse_date};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};
use utoipa::{IntoParams, ToSchema};

/// Query parameters for the graph view
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GraphQuery {
    /// Segmentation scope ("sentence" or "paragraph")
    pub scope: Option<String>,

    /// Digest date (YYYY-MM-DD); defaults to the newest digest
    pub date: Option<String>,
}

/// Ad-hoc extraction request
#[derive(Debug, Deserialize, ToSchema)]
pub struct ExtractRequest {
    /// Text to analyze
    #[schema(example = "Alice met Bob in Paris. Bob called Carol.")]
    pub text: String,

    /// Segmentation scope; the configured default when omitted
    #[schema(example = "sentence")]
    pub scope: Option<String>,
}

/// Extraction result in every export format
#[derive(Debug, Serialize, ToSchema)]
pub struct ExtractResponse {
    pub scope: Scope,
    pub graph: VisualizationGraph,
    pub triples: Vec<Triple>,
    pub statements: Vec<String>,
    pub stats: GraphStats,
}

/// Entity grouping request
#[derive(Debug, Deserialize, ToSchema)]
pub struct EntitiesRequest {
    #[schema(example = "Apple hired Tim Cook in Paris.")]
    pub text: String,
}

/// Named entities grouped by category
#[derive(Debug, Serialize, ToSchema)]
pub struct EntitiesResponse {
    pub people: Vec<String>,
    pub organizations: Vec<String>,
    pub locations: Vec<String>,
}

fn resolve_scope(state: &AppState, scope: Option<&str>) -> Result<Scope, AppError> {
    match scope {
        Some(scope) => Ok(scope.parse::<Scope>()?),
        None => Ok(state.extractor.scope()),
    }
}

async fn extract_blocking(
    state: &AppState,
    text: String,
    scope: Scope,
) -> Result<TripleSet, AppError> {
    let extractor = state.extractor.clone();
    let triples = run_blocking(move || extractor.extract_with_scope(&text, scope)).await?;

    state.record_extraction();
    Ok(triples)
}

/// Visualization graph of the lead digest summary
#[utoipa::path(
    get,
    path = "/api/graph/graph.json",
    tag = "graph",
    params(GraphQuery),
    responses(
        (status = 200, description = "Node/link graph", body = VisualizationGraph),
        (status = 400, description = "Unsupported scope or malformed date", body = ApiError)
    )
)]
pub async fn get_graph(
    State(state): State<Arc<AppState>>,
    Query(params): Query<GraphQuery>,
) -> Result<impl IntoResponse, AppError> {
    state.increment_requests();

    let scope = resolve_scope(&state, params.scope.as_deref())?;
    let date = match params.date.as_deref() {
        Some(raw) => Some(
            parse_date(raw).ok_or_else(|| {
                AppError::BadRequest(format!("Invalid date '{raw}', expected YYYY-MM-DD"))
            })?,
        ),
        None => None,
    };

    let digests = state.digests.clone();
    let records = run_blocking(move || digests.load_or_latest(date)).await?;
    let text = lead_summary(&records)
        .map(str::to_string)
        .or_else(|| state.config.extraction.fallback_text.clone());

    let Some(text) = text else {
        debug!("no digest summary or fallback text, returning empty graph");
        return Ok(Json(VisualizationGraph::default()));
    };

    let triples = extract_blocking(&state, text, scope).await?;
    let graph = CoOccurrenceGraph::assemble(&triples);

    Ok(Json(VisualizationGraph::from_graph(&graph)))
}

/// Extract triples, graph and statements from posted text
#[utoipa::path(
    post,
    path = "/api/graph/extract",
    tag = "graph",
    request_body = ExtractRequest,
    responses(
        (status = 200, description = "Extraction result", body = ExtractResponse),
        (status = 400, description = "Unsupported scope", body = ApiError)
    )
)]
pub async fn extract(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ExtractRequest>,
) -> Result<impl IntoResponse, AppError> {
    state.increment_requests();

    let scope = resolve_scope(&state, request.scope.as_deref())?;
    let triples = extract_blocking(&state, request.text, scope).await?;
    let graph = CoOccurrenceGraph::assemble(&triples);

    info!(
        scope = %scope,
        triples = triples.len(),
        nodes = graph.node_count(),
        "extraction completed"
    );

    let response = ExtractResponse {
        scope,
        graph: VisualizationGraph::from_graph(&graph),
        statements: state.exporter.statements(&triples),
        stats: graph.stats(),
        triples: triples.into_vec(),
    };

    Ok((StatusCode::OK, Json(response)))
}

/// Group the named entities of posted text
#[utoipa::path(
    post,
    path = "/api/graph/entities",
    tag = "graph",
    request_body = EntitiesRequest,
    responses(
        (status = 200, description = "Grouped entities", body = EntitiesResponse)
    )
)]
pub async fn entities(
    State(state): State<Arc<AppState>>,
    Json(request): Json<EntitiesRequest>,
) -> Result<impl IntoResponse, AppError> {
    state.increment_requests();

    let extractor = state.extractor.clone();
    let named = run_blocking(move || extractor.named_entities(&request.text)).await?;

    Ok(Json(EntitiesResponse {
        people: named.people,
        organizations: named.organizations,
        locations: named.locations,
    }))
}
