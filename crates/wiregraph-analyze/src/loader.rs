//! Graph loading: raw JSON snapshot → validated [`Graph`].
//!
//! Accepts the snapshot layout produced by the schematic exporter
//! (`components[]`, `connections[]`, optional `path_mode`) plus camelCase
//! aliases. Any shape problem, duplicate key, or dangling connection fails
//! the whole load with `MalformedGraph`.

use std::collections::{HashMap, HashSet};

use serde::Deserialize;

use wiregraph_core::types::parse_numeric;
use wiregraph_core::{Component, ComponentId, Connection, WireId};

use crate::error::{AnalyzeError, Result};
use crate::graph::Graph;

#[derive(Debug, Deserialize)]
struct GraphDocument {
    components: Vec<ComponentEntry>,
    connections: Vec<ConnectionEntry>,
    #[serde(default, alias = "pathMode")]
    path_mode: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ComponentEntry {
    #[serde(default)]
    id: Option<KeyValue>,
    #[serde(default, alias = "numericId", alias = "number")]
    numeric_id: Option<u64>,
    #[serde(default, alias = "instanceName")]
    instance_name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ConnectionEntry {
    #[serde(alias = "componentId", alias = "component_id")]
    component: KeyValue,
    #[serde(alias = "wireId", alias = "wire_id")]
    wire: KeyValue,
}

/// Keys appear as strings in most exports and as bare integers in some.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum KeyValue {
    Text(String),
    Number(u64),
}

impl KeyValue {
    fn into_string(self) -> String {
        match self {
            Self::Text(s) => s,
            Self::Number(n) => n.to_string(),
        }
    }
}

/// Parse and validate a raw graph document.
///
/// `source_name` only labels errors and log lines; the document is not
/// modified.
pub fn load(source_name: &str, source: &serde_json::Value) -> Result<Graph> {
    let document = GraphDocument::deserialize(source)
        .map_err(|e| AnalyzeError::malformed(source_name, e.to_string()))?;

    let components = load_components(source_name, document.components)?;
    let known: HashSet<&ComponentId> = components.iter().map(|c| &c.id).collect();

    let mut connections = Vec::with_capacity(document.connections.len());
    for (i, entry) in document.connections.into_iter().enumerate() {
        let component_id = ComponentId(entry.component.into_string());
        let wire_id = WireId(entry.wire.into_string());

        if !known.contains(&component_id) {
            return Err(AnalyzeError::malformed(
                source_name,
                format!("connection #{i} references unknown component '{component_id}'"),
            ));
        }
        if wire_id.0.is_empty() {
            return Err(AnalyzeError::malformed(
                source_name,
                format!("connection #{i} has an empty wire id"),
            ));
        }

        connections.push(Connection {
            component_id,
            wire_id,
        });
    }

    let path_mode = document.path_mode;
    tracing::debug!(
        source = source_name,
        components = components.len(),
        connections = connections.len(),
        path_mode = path_mode.as_deref().unwrap_or("-"),
        "Graph document loaded"
    );

    Ok(Graph::from_validated(components, connections, path_mode))
}

fn load_components(source_name: &str, entries: Vec<ComponentEntry>) -> Result<Vec<Component>> {
    let mut components = Vec::with_capacity(entries.len());
    let mut seen_ids = HashSet::with_capacity(entries.len());
    let mut seen_names = HashSet::with_capacity(entries.len());
    let mut explicit_numeric = HashSet::new();
    let mut derived: Vec<(usize, u64)> = Vec::new();

    for (i, entry) in entries.into_iter().enumerate() {
        let id = match entry.id.map(KeyValue::into_string) {
            Some(id) if !id.is_empty() => ComponentId(id),
            _ => {
                return Err(AnalyzeError::malformed(
                    source_name,
                    format!("component #{i} has no usable id"),
                ))
            }
        };

        if !seen_ids.insert(id.clone()) {
            return Err(AnalyzeError::malformed(
                source_name,
                format!("duplicate component id '{id}'"),
            ));
        }

        let instance_name = entry.instance_name.filter(|name| !name.is_empty());
        if let Some(name) = &instance_name {
            if !seen_names.insert(name.clone()) {
                return Err(AnalyzeError::malformed(
                    source_name,
                    format!("duplicate instance name '{name}'"),
                ));
            }
        }

        let numeric_id = match entry.numeric_id {
            Some(n) => {
                if !explicit_numeric.insert(n) {
                    return Err(AnalyzeError::malformed(
                        source_name,
                        format!("duplicate numeric id {n}"),
                    ));
                }
                Some(n)
            }
            None => {
                if let Some(n) = derive_numeric_id(&id) {
                    derived.push((i, n));
                }
                None
            }
        };

        components.push(Component {
            id,
            numeric_id,
            instance_name,
        });
    }

    // A name that equals another component's id is shadowed by id lookup.
    for component in &components {
        if let Some(name) = &component.instance_name {
            let as_id = ComponentId(name.clone());
            if as_id != component.id && seen_ids.contains(&as_id) {
                return Err(AnalyzeError::malformed(
                    source_name,
                    format!("instance name '{name}' collides with component id '{name}'"),
                ));
            }
        }
    }

    assign_derived_numeric_ids(&mut components, &explicit_numeric, derived);
    Ok(components)
}

/// Numeric alias implied by a canonical id: the digits after its last `_`
/// (`comp_12` → 12), or the whole id when it is all digits.
fn derive_numeric_id(id: &ComponentId) -> Option<u64> {
    id.as_str().rsplit('_').next().and_then(parse_numeric)
}

/// Derived aliases are only kept when unambiguous. A derived value that
/// collides with an explicit one, or with another derived one, is dropped
/// for every component involved.
fn assign_derived_numeric_ids(
    components: &mut [Component],
    explicit: &HashSet<u64>,
    derived: Vec<(usize, u64)>,
) {
    let mut counts: HashMap<u64, usize> = HashMap::new();
    for &(_, n) in &derived {
        *counts.entry(n).or_default() += 1;
    }

    for (i, n) in derived {
        if explicit.contains(&n) || counts[&n] > 1 {
            tracing::warn!(
                component = %components[i].id,
                numeric_id = n,
                "Ambiguous derived numeric id dropped"
            );
            continue;
        }
        components[i].numeric_id = Some(n);
    }
}
