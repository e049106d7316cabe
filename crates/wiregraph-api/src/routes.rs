//! Route handlers.

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;

use wiregraph_analyze::{
    FindNeighborsRequest, FindPathRequest, GraphsResult, NeighborsResult, PathResult,
};

use crate::{ApiError, AppState};

/// Service description returned from `/`.
#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub service: &'static str,
    pub version: &'static str,
    pub endpoints: Vec<&'static str>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/graphs", get(list_graphs))
        .route("/find_path", post(find_path))
        .route("/find_neighbors", post(find_neighbors))
        .with_state(state)
}

pub async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        service: "wiregraph-api",
        version: env!("CARGO_PKG_VERSION"),
        endpoints: vec![
            "GET /graphs",
            "POST /find_path",
            "POST /find_neighbors",
        ],
    })
}

pub async fn list_graphs(State(state): State<AppState>) -> Result<Json<GraphsResult>, ApiError> {
    Ok(Json(state.engine.list_graphs().await?))
}

pub async fn find_path(
    State(state): State<AppState>,
    Json(request): Json<FindPathRequest>,
) -> Result<Json<PathResult>, ApiError> {
    tracing::info!(
        from = %request.start_component,
        to = %request.end_component,
        graph = %request.graph,
        "find_path"
    );
    Ok(Json(state.engine.find_path(request).await?))
}

pub async fn find_neighbors(
    State(state): State<AppState>,
    Json(request): Json<FindNeighborsRequest>,
) -> Result<Json<NeighborsResult>, ApiError> {
    tracing::info!(
        component = %request.component,
        graph = %request.graph,
        "find_neighbors"
    );
    Ok(Json(state.engine.find_neighbors(request).await?))
}
