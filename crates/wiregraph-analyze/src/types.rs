//! Request and response types for connectivity queries.

use serde::{Deserialize, Serialize};

use wiregraph_core::{ComponentId, GraphSelector, ReferenceInput};

use crate::error::AnalyzeError;

/// Request to find the shortest path between two components.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindPathRequest {
    pub start_component: ReferenceInput,
    pub end_component: ReferenceInput,
    /// Graph to analyze: a number, a stem, or a file name.
    pub graph: GraphSelector,
}

/// Request to list the direct neighbors of a component.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindNeighborsRequest {
    pub component: ReferenceInput,
    pub graph: GraphSelector,
}

/// A component as shown to users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentSummary {
    pub component_id: ComponentId,
    pub component_name: String,
}

/// One component on a path. `position` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathStep {
    pub position: usize,
    pub component_id: ComponentId,
    pub component_name: String,
}

/// Statistics about a loaded graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStats {
    pub components: usize,
    pub connections: usize,
    /// Distinct wire ids.
    pub wires: usize,
    /// Undirected neighbor pairs.
    pub edges: usize,
    /// Components with no neighbors.
    pub isolated: usize,
}

/// Shortest-path answer from a single session, before envelope wrapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathReport {
    pub start: ComponentSummary,
    pub end: ComponentSummary,
    /// `None` when the components are not connected.
    pub steps: Option<Vec<PathStep>>,
}

/// Neighbor answer from a single session, before envelope wrapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NeighborReport {
    pub component: ComponentSummary,
    pub neighbors: Vec<ComponentSummary>,
}

/// Result envelope for a path query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathResult {
    pub success: bool,
    pub message: String,
    /// The references exactly as the caller supplied them.
    pub start_component: String,
    pub end_component: String,
    pub graph_file: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_length: Option<usize>,
    pub path: Option<Vec<PathStep>>,
    pub computation_ms: u64,
}

/// Result envelope for a neighbor query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NeighborsResult {
    pub success: bool,
    pub message: String,
    pub component: String,
    pub graph_file: String,
    pub neighbor_count: usize,
    pub neighbors: Vec<ComponentSummary>,
    pub computation_ms: u64,
}

/// One snapshot in the catalog listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphListing {
    pub name: String,
    pub file: String,
}

/// Result of listing the graph catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphsResult {
    pub graph_dir: String,
    pub graphs: Vec<GraphListing>,
}

/// Result of a `stats` query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsResult {
    pub graph_file: String,
    pub path_mode: Option<String>,
    pub stats: GraphStats,
}

/// Failure envelope shared by every front-end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub success: bool,
    pub error: String,
    pub message: String,
}

impl From<&AnalyzeError> for ErrorEnvelope {
    fn from(e: &AnalyzeError) -> Self {
        Self {
            success: false,
            error: e.kind().to_string(),
            message: e.to_string(),
        }
    }
}

impl PathResult {
    pub(crate) fn from_report(
        start_component: String,
        end_component: String,
        graph_file: String,
        report: PathReport,
        computation_ms: u64,
    ) -> Self {
        match report.steps {
            Some(steps) => Self {
                success: true,
                message: format!("Found shortest path with {} components", steps.len()),
                start_component,
                end_component,
                graph_file,
                path_length: Some(steps.len()),
                path: Some(steps),
                computation_ms,
            },
            None => Self {
                success: false,
                message: format!(
                    "No path found between '{start_component}' and '{end_component}'. \
                     Components are not connected."
                ),
                start_component,
                end_component,
                graph_file,
                path_length: None,
                path: None,
                computation_ms,
            },
        }
    }
}

impl NeighborsResult {
    pub(crate) fn from_report(
        component: String,
        graph_file: String,
        report: NeighborReport,
        computation_ms: u64,
    ) -> Self {
        Self {
            success: true,
            message: format!(
                "Found {} neighbor(s) for '{component}'",
                report.neighbors.len()
            ),
            component,
            graph_file,
            neighbor_count: report.neighbors.len(),
            neighbors: report.neighbors,
            computation_ms,
        }
    }
}
