//! Configuration management for wiregraph services.
//!
//! Configuration is loaded from (in priority order):
//! 1. Environment variables (`WIREGRAPH__` prefix, `__` between sections)
//! 2. Config file (`wiregraph.toml`, or the prefix passed via `--config`)
//! 3. Defaults

use std::fmt;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{Result, WiregraphError};

/// Top-level configuration shared by the CLI and both servers.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WiregraphConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub http: HttpConfig,

    #[serde(default)]
    pub mcp: McpConfig,
}

/// Where graph snapshots live on disk.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    /// Directory holding the JSON snapshots (default: "json").
    #[serde(default = "default_graph_dir")]
    pub graph_dir: PathBuf,

    /// Snapshot file extension, without the dot (default: "json").
    #[serde(default = "default_extension")]
    pub extension: String,
}

/// HTTP front-end settings.
#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    /// Listen address (default: "127.0.0.1:8000").
    #[serde(default = "default_bind")]
    pub bind: String,

    /// How graph selectors are matched to files (default: numbered).
    #[serde(default = "default_http_selector")]
    pub selector: SelectorStrategy,
}

/// MCP front-end settings.
#[derive(Debug, Clone, Deserialize)]
pub struct McpConfig {
    /// How graph selectors are matched to files (default: stem).
    #[serde(default)]
    pub selector: SelectorStrategy,
}

/// Strategy for turning a user-typed graph selector into a snapshot file.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SelectorStrategy {
    /// Normalized file-stem match: exact first, then a unique substring.
    #[default]
    Stem,
    /// First number in the selector picks `graph_<n>.<ext>`.
    Numbered,
}

impl fmt::Display for SelectorStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stem => f.write_str("stem"),
            Self::Numbered => f.write_str("numbered"),
        }
    }
}

impl FromStr for SelectorStrategy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "stem" => Ok(Self::Stem),
            "numbered" => Ok(Self::Numbered),
            _ => Err(format!("Invalid selector strategy: {s}. Choose: stem, numbered")),
        }
    }
}

impl HttpConfig {
    /// Parse the configured listen address.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.bind
            .parse()
            .map_err(|e: std::net::AddrParseError| WiregraphError::InvalidSetting {
                key: "http.bind".to_string(),
                reason: e.to_string(),
            })
    }
}

fn default_graph_dir() -> PathBuf {
    PathBuf::from("json")
}

fn default_extension() -> String {
    "json".to_string()
}

fn default_bind() -> String {
    "127.0.0.1:8000".to_string()
}

fn default_http_selector() -> SelectorStrategy {
    SelectorStrategy::Numbered
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            graph_dir: default_graph_dir(),
            extension: default_extension(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            selector: default_http_selector(),
        }
    }
}

impl Default for McpConfig {
    fn default() -> Self {
        Self {
            selector: SelectorStrategy::Stem,
        }
    }
}

/// Load configuration from an optional file named by `file_prefix` plus
/// `WIREGRAPH__*` environment variables.
pub fn load(file_prefix: &str) -> Result<WiregraphConfig> {
    let cfg = config::Config::builder()
        .add_source(config::File::with_name(file_prefix).required(false))
        .add_source(
            config::Environment::with_prefix("WIREGRAPH")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let loaded: WiregraphConfig = cfg.try_deserialize()?;
    tracing::debug!(
        graph_dir = %loaded.catalog.graph_dir.display(),
        http_bind = %loaded.http.bind,
        "Configuration loaded"
    );
    Ok(loaded)
}
