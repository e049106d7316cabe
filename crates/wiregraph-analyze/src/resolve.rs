//! Component reference resolution.
//!
//! A user reference is matched against the graph as canonical id, then
//! instance name, then numeric id. Matching is exact and case-sensitive.

use wiregraph_core::{Component, ComponentId, ComponentRef, ReferenceInput};

use crate::error::{AnalyzeError, Result};
use crate::graph::Graph;

/// Look up a single explicit interpretation.
pub fn resolve_ref<'g>(graph: &'g Graph, reference: &ComponentRef) -> Option<&'g Component> {
    match reference {
        ComponentRef::ById(id) => graph.component(id),
        ComponentRef::ByName(name) => graph.by_name(name),
        ComponentRef::ByNumericId(n) => graph.by_numeric_id(*n),
    }
}

/// Resolve a free-form reference to a canonical id. First candidate that
/// matches wins.
pub fn resolve_to_id(graph: &Graph, reference: &ReferenceInput) -> Result<ComponentId> {
    for candidate in reference.candidates() {
        if let Some(component) = resolve_ref(graph, &candidate) {
            tracing::trace!(reference = %reference, matched = %candidate, "Reference resolved");
            return Ok(component.id.clone());
        }
    }
    Err(AnalyzeError::not_found(reference))
}

/// Display name of a canonical id.
pub fn resolve_to_name<'g>(graph: &'g Graph, id: &ComponentId) -> Result<&'g str> {
    graph
        .component(id)
        .map(Component::display_name)
        .ok_or_else(|| AnalyzeError::not_found(id))
}
