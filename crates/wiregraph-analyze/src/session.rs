//! Analysis sessions.
//!
//! A session owns exactly one loaded [`Graph`] and the [`AdjacencyMap`]
//! derived from it. Nothing is cached between sessions; front-ends open a
//! new one per request.

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use wiregraph_core::{ComponentId, ReferenceInput, SessionId};

use crate::adjacency::AdjacencyMap;
use crate::algorithms::{self, PathOutcome};
use crate::error::Result;
use crate::graph::Graph;
use crate::loader;
use crate::resolve;
use crate::types::{ComponentSummary, GraphStats, NeighborReport, PathReport, PathStep};

/// One loaded graph, ready to answer queries.
#[derive(Debug)]
pub struct AnalysisSession {
    pub id: SessionId,
    /// Label of the snapshot this session was loaded from.
    pub source_name: String,
    pub loaded_at: DateTime<Utc>,
    graph: Graph,
    adjacency: AdjacencyMap,
    stats: GraphStats,
}

impl AnalysisSession {
    /// Load and validate a raw document, then build its adjacency.
    pub fn open(source_name: impl Into<String>, document: &serde_json::Value) -> Result<Self> {
        let source_name = source_name.into();
        let graph = loader::load(&source_name, document)?;
        Ok(Self::from_graph(source_name, graph))
    }

    /// Wrap an already loaded graph.
    pub fn from_graph(source_name: impl Into<String>, graph: Graph) -> Self {
        let adjacency = AdjacencyMap::build(&graph);
        let wires: HashSet<_> = graph.connections().iter().map(|c| &c.wire_id).collect();
        let stats = GraphStats {
            components: graph.component_count(),
            connections: graph.connection_count(),
            wires: wires.len(),
            edges: adjacency.edge_count(),
            isolated: adjacency.isolated_count(),
        };

        let session = Self {
            id: SessionId::new(),
            source_name: source_name.into(),
            loaded_at: Utc::now(),
            graph,
            adjacency,
            stats,
        };

        tracing::info!(
            session = %session.id,
            graph = %session.source_name,
            components = stats.components,
            edges = stats.edges,
            "Analysis session opened"
        );
        session
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn adjacency(&self) -> &AdjacencyMap {
        &self.adjacency
    }

    pub fn stats(&self) -> GraphStats {
        self.stats
    }

    /// Resolve a user reference to a canonical id.
    pub fn resolve(&self, reference: &ReferenceInput) -> Result<ComponentId> {
        resolve::resolve_to_id(&self.graph, reference)
    }

    /// Id and display name of a component.
    pub fn describe(&self, id: &ComponentId) -> Result<ComponentSummary> {
        let name = resolve::resolve_to_name(&self.graph, id)?;
        Ok(ComponentSummary {
            component_id: id.clone(),
            component_name: name.to_string(),
        })
    }

    /// Shortest path between two user references.
    pub fn shortest_path(
        &self,
        from: &ReferenceInput,
        to: &ReferenceInput,
    ) -> Result<PathReport> {
        let start = self.resolve(from)?;
        let end = self.resolve(to)?;

        let steps = match algorithms::shortest_path(&self.adjacency, &start, &end)? {
            PathOutcome::Found(ids) => Some(
                ids.iter()
                    .enumerate()
                    .map(|(i, id)| {
                        self.describe(id).map(|summary| PathStep {
                            position: i + 1,
                            component_id: summary.component_id,
                            component_name: summary.component_name,
                        })
                    })
                    .collect::<Result<Vec<_>>>()?,
            ),
            PathOutcome::NoPath => None,
        };

        tracing::debug!(
            session = %self.id,
            start = %start,
            end = %end,
            hops = steps.as_ref().map(|s| s.len().saturating_sub(1)),
            "Shortest path computed"
        );

        Ok(PathReport {
            start: self.describe(&start)?,
            end: self.describe(&end)?,
            steps,
        })
    }

    /// Direct neighbors of a user reference.
    pub fn neighbors(&self, of: &ReferenceInput) -> Result<NeighborReport> {
        let id = self.resolve(of)?;
        let neighbors = algorithms::neighbors(&self.adjacency, &id)?
            .iter()
            .map(|n| self.describe(n))
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(
            session = %self.id,
            component = %id,
            count = neighbors.len(),
            "Neighbors computed"
        );

        Ok(NeighborReport {
            component: self.describe(&id)?,
            neighbors,
        })
    }
}
