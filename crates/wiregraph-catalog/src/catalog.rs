//! Snapshot directory access and graph selector resolution.

use std::path::{Path, PathBuf};

use serde::Serialize;

use wiregraph_core::config::{CatalogConfig, SelectorStrategy};
use wiregraph_core::GraphSelector;

use crate::selector::{self, StemMatch};

/// Errors from catalog operations.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Missing graph reference")]
    MissingSelector,

    #[error("Could not find a graph number in '{selector}'")]
    NoGraphNumber { selector: String },

    #[error("Graph not found for '{selector}'. Available graphs: {available}")]
    NotFound { selector: String, available: String },

    #[error("Graph file not found for graph {number}: {path}")]
    MissingFile { number: u64, path: String },

    #[error("Graph name '{selector}' is ambiguous. Matches: {matches}. Please be more specific.")]
    Ambiguous { selector: String, matches: String },

    #[error("No graph snapshots found in: {dir}")]
    EmptyCatalog { dir: String },

    #[error("Invalid JSON in '{path}': {reason}")]
    InvalidJson { path: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CatalogError {
    /// Stable error kind reported to front-end clients.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingSelector => "MissingGraph",
            Self::NoGraphNumber { .. } | Self::Ambiguous { .. } => "InvalidGraph",
            Self::NotFound { .. } | Self::MissingFile { .. } | Self::EmptyCatalog { .. } => {
                "FileNotFoundError"
            }
            Self::InvalidJson { .. } => "JSONDecodeError",
            Self::Io(_) => "IoError",
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;

/// One snapshot file in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphEntry {
    /// File stem, e.g. `graph_1` or `schema completo`.
    pub name: String,
    /// Full path to the snapshot file.
    pub path: PathBuf,
}

/// Read-only view over a directory of graph snapshots.
///
/// Clone is cheap; the catalog holds only its configuration and touches the
/// filesystem on every call, so newly dropped snapshots are picked up without
/// a restart.
#[derive(Debug, Clone)]
pub struct GraphCatalog {
    config: CatalogConfig,
}

impl GraphCatalog {
    pub fn new(config: CatalogConfig) -> Self {
        Self { config }
    }

    pub fn graph_dir(&self) -> &Path {
        &self.config.graph_dir
    }

    /// List all snapshots, sorted by name.
    pub async fn list(&self) -> Result<Vec<GraphEntry>> {
        let mut dir = match tokio::fs::read_dir(&self.config.graph_dir).await {
            Ok(dir) => dir,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(self.empty_catalog());
            }
            Err(e) => return Err(e.into()),
        };

        let mut entries = Vec::new();
        while let Some(item) = dir.next_entry().await? {
            let path = item.path();
            let has_extension = path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case(&self.config.extension));
            if !has_extension || !item.file_type().await?.is_file() {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                entries.push(GraphEntry {
                    name: stem.to_string(),
                    path: path.clone(),
                });
            }
        }

        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    /// Resolve a user-typed selector to exactly one snapshot.
    pub async fn resolve(
        &self,
        selector: &GraphSelector,
        strategy: SelectorStrategy,
    ) -> Result<GraphEntry> {
        let entry = match strategy {
            SelectorStrategy::Numbered => self.resolve_numbered(selector).await?,
            SelectorStrategy::Stem => self.resolve_stem(selector).await?,
        };
        tracing::debug!(
            selector = %selector,
            strategy = %strategy,
            graph = %entry.path.display(),
            "Resolved graph selector"
        );
        Ok(entry)
    }

    /// Read and parse a snapshot file.
    pub async fn read_document(&self, entry: &GraphEntry) -> Result<serde_json::Value> {
        let raw = tokio::fs::read_to_string(&entry.path).await?;
        serde_json::from_str(&raw).map_err(|e| CatalogError::InvalidJson {
            path: entry.path.display().to_string(),
            reason: e.to_string(),
        })
    }

    async fn resolve_numbered(&self, selector: &GraphSelector) -> Result<GraphEntry> {
        let number = match selector {
            GraphSelector::Number(n) => *n,
            GraphSelector::Name(raw) => {
                if raw.trim().is_empty() {
                    return Err(CatalogError::MissingSelector);
                }
                selector::first_number(raw).ok_or_else(|| CatalogError::NoGraphNumber {
                    selector: raw.clone(),
                })?
            }
        };

        let name = format!("graph_{number}");
        let path = self
            .config
            .graph_dir
            .join(format!("{name}.{}", self.config.extension));

        if !tokio::fs::try_exists(&path).await? {
            return Err(CatalogError::MissingFile {
                number,
                path: path.display().to_string(),
            });
        }

        Ok(GraphEntry { name, path })
    }

    async fn resolve_stem(&self, selector: &GraphSelector) -> Result<GraphEntry> {
        let raw = selector.to_string();
        let needle = selector::normalize_selector(&raw, &self.config.extension);
        if needle.is_empty() {
            return Err(CatalogError::MissingSelector);
        }

        let entries = self.list().await?;
        if entries.is_empty() {
            return Err(self.empty_catalog());
        }

        match selector::match_stem(&needle, &entries) {
            StemMatch::Exact(entry) | StemMatch::Unique(entry) => Ok(entry.clone()),
            StemMatch::Ambiguous(found) => Err(CatalogError::Ambiguous {
                selector: raw,
                matches: join_names(found.into_iter()),
            }),
            StemMatch::None => Err(CatalogError::NotFound {
                selector: raw,
                available: join_names(entries.iter()),
            }),
        }
    }

    fn empty_catalog(&self) -> CatalogError {
        CatalogError::EmptyCatalog {
            dir: self.config.graph_dir.display().to_string(),
        }
    }
}

fn join_names<'a>(entries: impl Iterator<Item = &'a GraphEntry>) -> String {
    entries
        .map(|e| e.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
