//! Error types for the wiregraph-analyze crate.

use thiserror::Error;
use wiregraph_catalog::CatalogError;

#[derive(Error, Debug)]
pub enum AnalyzeError {
    #[error("Malformed graph '{source_name}': {reason}")]
    MalformedGraph { source_name: String, reason: String },

    #[error("Unknown component: '{reference}'")]
    ComponentNotFound { reference: String },

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl AnalyzeError {
    pub(crate) fn malformed(source_name: &str, reason: impl Into<String>) -> Self {
        Self::MalformedGraph {
            source_name: source_name.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn not_found(reference: impl ToString) -> Self {
        Self::ComponentNotFound {
            reference: reference.to_string(),
        }
    }

    /// Stable error kind reported to front-end clients.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MalformedGraph { .. } => "MalformedGraph",
            Self::ComponentNotFound { .. } => "ComponentNotFound",
            Self::Catalog(e) => e.kind(),
            Self::Serialization(_) => "SerializationError",
        }
    }
}

impl From<serde_json::Error> for AnalyzeError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AnalyzeError>;
