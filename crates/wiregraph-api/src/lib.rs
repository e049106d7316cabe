//! wiregraph-api: HTTP front-end for connectivity queries.
//!
//! Thin axum layer over [`AnalyzeEngine`]: each request resolves its graph,
//! opens a fresh session and returns the result envelope as JSON.

pub mod error;
pub mod routes;

pub use error::ApiError;

use std::sync::Arc;

use wiregraph_analyze::AnalyzeEngine;

/// Shared handler state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub engine: Arc<AnalyzeEngine>,
}

impl AppState {
    pub fn new(engine: AnalyzeEngine) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }
}
