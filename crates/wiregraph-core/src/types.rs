//! Core domain types for wiregraph.
//!
//! These types describe the records of a piping/wiring graph snapshot and
//! the loosely typed inputs (component references, graph selectors) that
//! users hand to the front-ends.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ── Identifiers ───────────────────────────────────────────────────

/// Canonical component identifier, e.g. `comp_12`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct ComponentId(pub String);

impl ComponentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ComponentId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Wire grouping key. Every component with a connection on the same wire
/// is adjacent to every other one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct WireId(pub String);

impl WireId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for WireId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of one analysis session, carried on log lines.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct SessionId(pub Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── Graph Records ─────────────────────────────────────────────────

/// A physical component (pump, valve, tank, breaker, ...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Component {
    pub id: ComponentId,
    /// Integer alias, unique within one graph.
    pub numeric_id: Option<u64>,
    /// Human-friendly alias, unique within one graph.
    pub instance_name: Option<String>,
}

impl Component {
    /// Name shown to users: the instance name, or the canonical id when the
    /// snapshot carries no name.
    pub fn display_name(&self) -> &str {
        self.instance_name.as_deref().unwrap_or(self.id.as_str())
    }
}

/// A flat record attaching one component to one wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Connection {
    pub component_id: ComponentId,
    pub wire_id: WireId,
}

// ── References ────────────────────────────────────────────────────

/// One explicit interpretation of a component reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentRef {
    ById(ComponentId),
    ByName(String),
    ByNumericId(u64),
}

impl fmt::Display for ComponentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ById(id) => write!(f, "id '{id}'"),
            Self::ByName(name) => write!(f, "name '{name}'"),
            Self::ByNumericId(n) => write!(f, "numeric id {n}"),
        }
    }
}

/// A component reference exactly as a user supplied it: free text or a
/// bare JSON number. Negative and fractional numbers are kept as text and
/// simply fail to resolve.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged, from = "RawReference")]
pub enum ReferenceInput {
    Number(u64),
    Text(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawReference {
    Unsigned(u64),
    Signed(i64),
    Float(f64),
    Text(String),
}

impl From<RawReference> for ReferenceInput {
    fn from(raw: RawReference) -> Self {
        match raw {
            RawReference::Unsigned(n) => Self::Number(n),
            RawReference::Signed(n) => Self::Text(n.to_string()),
            RawReference::Float(f) => Self::Text(f.to_string()),
            RawReference::Text(t) => Self::Text(t),
        }
    }
}

impl ReferenceInput {
    /// Interpretations to try, in resolution order: canonical id, then
    /// instance name, then numeric id (only for all-digit text).
    pub fn candidates(&self) -> Vec<ComponentRef> {
        let text = self.to_string();
        let mut candidates = vec![
            ComponentRef::ById(ComponentId(text.clone())),
            ComponentRef::ByName(text.clone()),
        ];
        let numeric = match self {
            Self::Number(n) => Some(*n),
            Self::Text(t) => parse_numeric(t),
        };
        if let Some(n) = numeric {
            candidates.push(ComponentRef::ByNumericId(n));
        }
        candidates
    }
}

impl fmt::Display for ReferenceInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(t) => f.write_str(t),
        }
    }
}

impl From<&str> for ReferenceInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for ReferenceInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<u64> for ReferenceInput {
    fn from(n: u64) -> Self {
        Self::Number(n)
    }
}

/// Parse a strictly numeric reference: ASCII digits only, no sign, no
/// surrounding whitespace.
pub fn parse_numeric(text: &str) -> Option<u64> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

// ── Graph Selectors ───────────────────────────────────────────────

/// A user-typed reference to a graph snapshot: `2`, `"graph 1"`, `"gasolio.json"`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum GraphSelector {
    Number(u64),
    Name(String),
}

impl fmt::Display for GraphSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Name(name) => f.write_str(name),
        }
    }
}

impl From<&str> for GraphSelector {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for GraphSelector {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<u64> for GraphSelector {
    fn from(n: u64) -> Self {
        Self::Number(n)
    }
}
