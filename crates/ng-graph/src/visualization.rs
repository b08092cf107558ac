//! Force-directed visualization export
//!
//! Produces the `{nodes: [{id}], links: [{source, target, label}]}` payload
//! consumed by D3-style graph views.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::CoOccurrenceGraph;

/// Graph node as seen by the visualization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct VisualizationNode {
    #[schema(example = "Joe Biden")]
    pub id: String,
}

/// Graph edge as seen by the visualization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct VisualizationLink {
    #[schema(example = "Apple")]
    pub source: String,
    #[schema(example = "Joe Biden")]
    pub target: String,
    #[schema(example = "co_occurs_with")]
    pub label: String,
}

/// Node/link payload for a force-directed layout
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct VisualizationGraph {
    pub nodes: Vec<VisualizationNode>,
    pub links: Vec<VisualizationLink>,
}

impl VisualizationGraph {
    /// Project every node and edge of `graph` exactly once
    pub fn from_graph(graph: &CoOccurrenceGraph) -> Self {
        let nodes = graph
            .nodes()
            .map(|id| VisualizationNode { id: id.to_string() })
            .collect();

        let links = graph
            .edges()
            .map(|(source, target, label)| VisualizationLink {
                source: source.to_string(),
                target: target.to_string(),
                label: label.to_string(),
            })
            .collect();

        Self { nodes, links }
    }
}

impl From<&CoOccurrenceGraph> for VisualizationGraph {
    fn from(graph: &CoOccurrenceGraph) -> Self {
        Self::from_graph(graph)
    }
}
