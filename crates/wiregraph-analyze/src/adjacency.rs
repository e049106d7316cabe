//! Wire-sharing adjacency.
//!
//! Two components are neighbors iff they each have a connection on the same
//! wire. Every wire with k components contributes the full k-clique, not a
//! chain. Neighbor lists are sorted by dense index (document order), so the
//! same graph always produces the same map.

use std::collections::{BTreeSet, HashMap};

use wiregraph_core::{ComponentId, WireId};

use crate::graph::Graph;

/// Symmetric neighbor map over dense component indices.
#[derive(Debug, Clone)]
pub struct AdjacencyMap {
    /// Component id per dense index.
    ids: Vec<ComponentId>,
    /// Map from component id → dense index.
    index: HashMap<ComponentId, usize>,
    /// `neighbors[i]` = sorted, deduplicated neighbor indices of node `i`.
    neighbors: Vec<Vec<usize>>,
}

impl AdjacencyMap {
    /// Derive adjacency from a loaded graph. Components without
    /// connections are present with an empty neighbor list.
    pub fn build(graph: &Graph) -> Self {
        let ids: Vec<ComponentId> = graph.components().iter().map(|c| c.id.clone()).collect();
        let index: HashMap<ComponentId, usize> = ids
            .iter()
            .enumerate()
            .map(|(i, id)| (id.clone(), i))
            .collect();

        // Group by wire; a set per wire drops repeated connection records.
        let mut wires: HashMap<&WireId, BTreeSet<usize>> = HashMap::new();
        for conn in graph.connections() {
            if let Some(&i) = index.get(&conn.component_id) {
                wires.entry(&conn.wire_id).or_default().insert(i);
            }
        }

        let mut sets: Vec<BTreeSet<usize>> = vec![BTreeSet::new(); ids.len()];
        for members in wires.values() {
            if members.len() < 2 {
                continue;
            }
            let members: Vec<usize> = members.iter().copied().collect();
            for (pos, &a) in members.iter().enumerate() {
                for &b in &members[pos + 1..] {
                    sets[a].insert(b);
                    sets[b].insert(a);
                }
            }
        }

        let neighbors = sets
            .into_iter()
            .map(|set| set.into_iter().collect())
            .collect();

        tracing::debug!(
            nodes = ids.len(),
            wires = wires.len(),
            "Adjacency map built"
        );

        Self {
            ids,
            index,
            neighbors,
        }
    }

    pub fn contains(&self, id: &ComponentId) -> bool {
        self.index.contains_key(id)
    }

    pub fn index_of(&self, id: &ComponentId) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Component id at a dense index. Panics if `index` is out of range.
    pub fn id_at(&self, index: usize) -> &ComponentId {
        &self.ids[index]
    }

    /// Neighbor indices of a dense index. Panics if `index` is out of range.
    pub fn neighbor_indices(&self, index: usize) -> &[usize] {
        &self.neighbors[index]
    }

    /// Neighbor ids of a component, or `None` if it is not in the map.
    pub fn neighbors_of(&self, id: &ComponentId) -> Option<impl Iterator<Item = &ComponentId>> {
        let i = self.index_of(id)?;
        Some(self.neighbors[i].iter().map(|&n| &self.ids[n]))
    }

    pub fn node_count(&self) -> usize {
        self.ids.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.neighbors.iter().map(|n| n.len()).sum::<usize>() / 2
    }

    /// Number of components with no neighbors.
    pub fn isolated_count(&self) -> usize {
        self.neighbors.iter().filter(|n| n.is_empty()).count()
    }
}
