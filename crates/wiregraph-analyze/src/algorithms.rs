//! Core connectivity algorithms: BFS shortest path and direct neighbors.

use std::collections::VecDeque;

use serde::Serialize;

use wiregraph_core::ComponentId;

use crate::adjacency::AdjacencyMap;
use crate::error::{AnalyzeError, Result};

/// Result of a shortest-path query. `NoPath` is a normal outcome, not an
/// error: the two components sit in disconnected parts of the graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "path", rename_all = "snake_case")]
pub enum PathOutcome {
    Found(Vec<ComponentId>),
    NoPath,
}

impl PathOutcome {
    pub fn path(&self) -> Option<&[ComponentId]> {
        match self {
            Self::Found(path) => Some(path),
            Self::NoPath => None,
        }
    }
}

/// Shortest path between two components by hop count.
///
/// Both ids must be present in the map; a missing id fails with
/// `ComponentNotFound` even if the caller already resolved it.
pub fn shortest_path(
    adjacency: &AdjacencyMap,
    start: &ComponentId,
    end: &ComponentId,
) -> Result<PathOutcome> {
    let source = adjacency
        .index_of(start)
        .ok_or_else(|| AnalyzeError::not_found(start))?;
    let target = adjacency
        .index_of(end)
        .ok_or_else(|| AnalyzeError::not_found(end))?;

    Ok(match bfs_path(adjacency, source, target) {
        Some(indices) => PathOutcome::Found(
            indices
                .into_iter()
                .map(|i| adjacency.id_at(i).clone())
                .collect(),
        ),
        None => PathOutcome::NoPath,
    })
}

/// Direct neighbors of a component, in document order. An isolated
/// component yields an empty list.
pub fn neighbors(adjacency: &AdjacencyMap, id: &ComponentId) -> Result<Vec<ComponentId>> {
    adjacency
        .neighbors_of(id)
        .map(|iter| iter.cloned().collect())
        .ok_or_else(|| AnalyzeError::not_found(id))
}

/// Breadth-first search over dense indices.
///
/// Stops as soon as `target` is dequeued. Nodes leave the queue in
/// non-decreasing distance order, so the predecessor chain at that point is
/// a shortest path.
fn bfs_path(adjacency: &AdjacencyMap, source: usize, target: usize) -> Option<Vec<usize>> {
    let n = adjacency.node_count();
    let mut prev: Vec<Option<usize>> = vec![None; n];
    let mut visited = vec![false; n];
    let mut queue = VecDeque::new();

    visited[source] = true;
    queue.push_back(source);

    let mut reached = false;
    while let Some(node) = queue.pop_front() {
        if node == target {
            reached = true;
            break;
        }
        for &next in adjacency.neighbor_indices(node) {
            if !visited[next] {
                visited[next] = true;
                prev[next] = Some(node);
                queue.push_back(next);
            }
        }
    }

    if !reached {
        return None;
    }

    // Reconstruct path.
    let mut path = vec![target];
    let mut current = target;
    while let Some(parent) = prev[current] {
        path.push(parent);
        current = parent;
    }
    path.reverse();
    Some(path)
}
