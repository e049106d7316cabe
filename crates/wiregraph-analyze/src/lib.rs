//! wiregraph-analyze: Connectivity analysis for piping/wiring graphs.
//!
//! Loads a graph snapshot, derives wire-sharing adjacency, resolves
//! user-typed component references, and answers shortest-path and
//! neighbor queries. The CLI, HTTP and MCP front-ends all go through
//! [`AnalyzeEngine`].

pub mod adjacency;
pub mod algorithms;
pub mod error;
pub mod graph;
pub mod loader;
pub mod resolve;
pub mod session;
pub mod types;

pub use error::{AnalyzeError, Result};
pub use session::AnalysisSession;
pub use types::{
    ErrorEnvelope, FindNeighborsRequest, FindPathRequest, GraphsResult, NeighborsResult,
    PathResult, StatsResult,
};

use std::time::Instant;

use wiregraph_catalog::GraphCatalog;
use wiregraph_core::{GraphSelector, SelectorStrategy};

use crate::types::GraphListing;

/// Entry point shared by every front-end.
///
/// Holds only the catalog and selector strategy; each query opens its own
/// [`AnalysisSession`] so concurrent requests share nothing.
#[derive(Debug, Clone)]
pub struct AnalyzeEngine {
    catalog: GraphCatalog,
    strategy: SelectorStrategy,
}

impl AnalyzeEngine {
    pub fn new(catalog: GraphCatalog, strategy: SelectorStrategy) -> Self {
        Self { catalog, strategy }
    }

    pub fn catalog(&self) -> &GraphCatalog {
        &self.catalog
    }

    pub fn strategy(&self) -> SelectorStrategy {
        self.strategy
    }

    /// Resolve a graph selector, read the snapshot and open a session on it.
    pub async fn open_session(&self, selector: &GraphSelector) -> Result<AnalysisSession> {
        let entry = self.catalog.resolve(selector, self.strategy).await?;
        let document = self.catalog.read_document(&entry).await?;
        AnalysisSession::open(entry.path.display().to_string(), &document)
    }

    /// Shortest path between two components.
    ///
    /// A missing path is reported with `success = false`, not as an error.
    pub async fn find_path(&self, request: FindPathRequest) -> Result<PathResult> {
        let start = Instant::now();
        let session = self.open_session(&request.graph).await?;
        let report = session.shortest_path(&request.start_component, &request.end_component)?;
        let computation_ms = start.elapsed().as_millis() as u64;

        tracing::info!(
            session = %session.id,
            graph = %session.source_name,
            found = report.steps.is_some(),
            computation_ms,
            "Path query complete"
        );

        Ok(PathResult::from_report(
            request.start_component.to_string(),
            request.end_component.to_string(),
            session.source_name.clone(),
            report,
            computation_ms,
        ))
    }

    /// Direct neighbors of a component.
    pub async fn find_neighbors(&self, request: FindNeighborsRequest) -> Result<NeighborsResult> {
        let start = Instant::now();
        let session = self.open_session(&request.graph).await?;
        let report = session.neighbors(&request.component)?;
        let computation_ms = start.elapsed().as_millis() as u64;

        tracing::info!(
            session = %session.id,
            graph = %session.source_name,
            neighbors = report.neighbors.len(),
            computation_ms,
            "Neighbor query complete"
        );

        Ok(NeighborsResult::from_report(
            request.component.to_string(),
            session.source_name.clone(),
            report,
            computation_ms,
        ))
    }

    /// Size summary of one graph.
    pub async fn graph_stats(&self, selector: &GraphSelector) -> Result<StatsResult> {
        let session = self.open_session(selector).await?;
        Ok(StatsResult {
            graph_file: session.source_name.clone(),
            path_mode: session.graph().path_mode().map(str::to_string),
            stats: session.stats(),
        })
    }

    /// Every snapshot currently in the catalog.
    pub async fn list_graphs(&self) -> Result<GraphsResult> {
        let entries = self.catalog.list().await?;
        Ok(GraphsResult {
            graph_dir: self.catalog.graph_dir().display().to_string(),
            graphs: entries
                .into_iter()
                .map(|e| GraphListing {
                    name: e.name,
                    file: e.path.display().to_string(),
                })
                .collect(),
        })
    }
}
