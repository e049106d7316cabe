//! In-memory graph model.
//!
//! Holds the validated components and connections of one snapshot, with
//! lookup tables for each way a component can be referenced. Built only by
//! the loader, never mutated afterwards.

use std::collections::HashMap;

use wiregraph_core::{Component, ComponentId, Connection};

/// A loaded piping/wiring graph.
#[derive(Debug, Clone)]
pub struct Graph {
    /// All components in document order; position is the dense index.
    components: Vec<Component>,
    connections: Vec<Connection>,
    /// Informational only, not used by any algorithm.
    path_mode: Option<String>,
    by_id: HashMap<ComponentId, usize>,
    by_name: HashMap<String, usize>,
    by_numeric_id: HashMap<u64, usize>,
}

impl Graph {
    /// Assemble a graph from records the loader has already validated:
    /// ids, names and numeric ids unique, every connection pointing at a
    /// known component.
    pub(crate) fn from_validated(
        components: Vec<Component>,
        connections: Vec<Connection>,
        path_mode: Option<String>,
    ) -> Self {
        let mut by_id = HashMap::with_capacity(components.len());
        let mut by_name = HashMap::with_capacity(components.len());
        let mut by_numeric_id = HashMap::with_capacity(components.len());

        for (i, component) in components.iter().enumerate() {
            by_id.insert(component.id.clone(), i);
            if let Some(name) = &component.instance_name {
                by_name.insert(name.clone(), i);
            }
            if let Some(n) = component.numeric_id {
                by_numeric_id.insert(n, i);
            }
        }

        Self {
            components,
            connections,
            path_mode,
            by_id,
            by_name,
            by_numeric_id,
        }
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn path_mode(&self) -> Option<&str> {
        self.path_mode.as_deref()
    }

    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    /// Dense index of a component by canonical id.
    pub fn index_of(&self, id: &ComponentId) -> Option<usize> {
        self.by_id.get(id).copied()
    }

    pub fn component(&self, id: &ComponentId) -> Option<&Component> {
        self.index_of(id).map(|i| &self.components[i])
    }

    /// Exact, case-sensitive instance-name lookup.
    pub fn by_name(&self, name: &str) -> Option<&Component> {
        self.by_name.get(name).map(|&i| &self.components[i])
    }

    pub fn by_numeric_id(&self, n: u64) -> Option<&Component> {
        self.by_numeric_id.get(&n).map(|&i| &self.components[i])
    }
}
