//! MCP server state and tool handlers.

use std::sync::Arc;

use rmcp::{
    handler::server::wrapper::Parameters, model::ServerInfo, tool, tool_handler, tool_router,
    ServerHandler,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use wiregraph_analyze::{
    AnalyzeEngine, ErrorEnvelope, FindNeighborsRequest, FindPathRequest, Result as AnalyzeResult,
};
use wiregraph_core::{GraphSelector, ReferenceInput};

const INSTRUCTIONS: &str = "Connectivity analysis for piping/wiring graph snapshots. \
Components are referenced by canonical id (comp_12), instance name (Pump_1) or numeric id (12). \
Graphs are referenced by file stem (gasolio), file name (gasolio.json) or number. \
Use list_graphs to see what is available.";

#[derive(Clone)]
pub struct WiregraphServer {
    engine: Arc<AnalyzeEngine>,
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
}

impl std::fmt::Debug for WiregraphServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WiregraphServer")
            .field("graph_dir", &self.engine.catalog().graph_dir())
            .field("selector", &self.engine.strategy())
            .finish()
    }
}

impl WiregraphServer {
    pub fn new(engine: AnalyzeEngine) -> Self {
        Self {
            engine: Arc::new(engine),
            tool_router: Self::tool_router(),
        }
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct FindPathParams {
    /// Start component: canonical id, instance name, or numeric id
    pub start_component: String,
    /// End component: canonical id, instance name, or numeric id
    pub end_component: String,
    /// Graph to analyze: file stem, file name, or graph number
    pub graph: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct FindNeighborsParams {
    /// Component whose direct neighbors to list
    pub component: String,
    /// Graph to analyze: file stem, file name, or graph number
    pub graph: String,
}

/// Tool results are always text so the client can read failures too.
fn render<T: Serialize>(result: AnalyzeResult<T>) -> Result<String, String> {
    let text = match &result {
        Ok(value) => serde_json::to_string_pretty(value),
        Err(e) => {
            tracing::warn!(error = %e, kind = e.kind(), "Tool call failed");
            serde_json::to_string_pretty(&ErrorEnvelope::from(e))
        }
    };
    text.map_err(|e| format!("Failed to serialize result: {e}"))
}

#[tool_router]
impl WiregraphServer {
    #[tool(
        description = "Find the shortest path between two components in a graph. Components are adjacent when they share a wire. Returns the ordered list of components, or success=false if they are not connected."
    )]
    async fn find_path(
        &self,
        Parameters(params): Parameters<FindPathParams>,
    ) -> Result<String, String> {
        tracing::info!(
            from = %params.start_component,
            to = %params.end_component,
            graph = %params.graph,
            "find_path"
        );
        let request = FindPathRequest {
            start_component: ReferenceInput::from(params.start_component),
            end_component: ReferenceInput::from(params.end_component),
            graph: GraphSelector::from(params.graph),
        };
        render(self.engine.find_path(request).await)
    }

    #[tool(
        description = "List the components directly connected to a component, i.e. every component sharing at least one wire with it."
    )]
    async fn find_neighbors(
        &self,
        Parameters(params): Parameters<FindNeighborsParams>,
    ) -> Result<String, String> {
        tracing::info!(component = %params.component, graph = %params.graph, "find_neighbors");
        let request = FindNeighborsRequest {
            component: ReferenceInput::from(params.component),
            graph: GraphSelector::from(params.graph),
        };
        render(self.engine.find_neighbors(request).await)
    }

    #[tool(description = "List the graph snapshots available for analysis.")]
    async fn list_graphs(&self) -> Result<String, String> {
        render(self.engine.list_graphs().await)
    }
}

#[tool_handler]
impl ServerHandler for WiregraphServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.into()),
            capabilities: rmcp::model::ServerCapabilities::builder()
                .enable_tools()
                .build(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use wiregraph_catalog::GraphCatalog;
    use wiregraph_core::config::{CatalogConfig, SelectorStrategy};

    fn server_in(dir: &std::path::Path) -> WiregraphServer {
        fs::write(
            dir.join("gasolio.json"),
            serde_json::json!({
                "components": [
                    {"id": "comp_1", "instance_name": "Pump_1"},
                    {"id": "comp_2", "instance_name": "Valve_1"},
                    {"id": "comp_3"}
                ],
                "connections": [
                    {"component": "comp_1", "wire": "W1"},
                    {"component": "comp_2", "wire": "W1"}
                ]
            })
            .to_string(),
        )
        .unwrap();
        let catalog = GraphCatalog::new(CatalogConfig {
            graph_dir: dir.to_path_buf(),
            ..Default::default()
        });
        WiregraphServer::new(AnalyzeEngine::new(catalog, SelectorStrategy::Stem))
    }

    fn parse(text: &str) -> serde_json::Value {
        serde_json::from_str(text).unwrap()
    }

    #[tokio::test]
    async fn test_find_path_tool() {
        let dir = tempfile::tempdir().unwrap();
        let server = server_in(dir.path());
        let text = server
            .find_path(Parameters(FindPathParams {
                start_component: "Pump_1".into(),
                end_component: "2".into(),
                graph: "Gasolio.json".into(),
            }))
            .await
            .unwrap();
        let value = parse(&text);
        assert_eq!(value["success"], true);
        assert_eq!(value["path_length"], 2);
        assert_eq!(value["path"][1]["component_name"], "Valve_1");
    }

    #[tokio::test]
    async fn test_find_neighbors_tool_isolated() {
        let dir = tempfile::tempdir().unwrap();
        let server = server_in(dir.path());
        let text = server
            .find_neighbors(Parameters(FindNeighborsParams {
                component: "comp_3".into(),
                graph: "gaso".into(),
            }))
            .await
            .unwrap();
        let value = parse(&text);
        assert_eq!(value["success"], true);
        assert_eq!(value["neighbor_count"], 0);
    }

    #[tokio::test]
    async fn test_errors_are_returned_as_envelopes() {
        let dir = tempfile::tempdir().unwrap();
        let server = server_in(dir.path());

        let text = server
            .find_neighbors(Parameters(FindNeighborsParams {
                component: "pump_1".into(),
                graph: "gasolio".into(),
            }))
            .await
            .unwrap();
        let value = parse(&text);
        assert_eq!(value["success"], false);
        assert_eq!(value["error"], "ComponentNotFound");

        let text = server
            .find_path(Parameters(FindPathParams {
                start_component: "Pump_1".into(),
                end_component: "Valve_1".into(),
                graph: "boiler".into(),
            }))
            .await
            .unwrap();
        assert_eq!(parse(&text)["error"], "FileNotFoundError");
    }

    #[tokio::test]
    async fn test_list_graphs_tool() {
        let dir = tempfile::tempdir().unwrap();
        let server = server_in(dir.path());
        let text = server.list_graphs().await.unwrap();
        assert_eq!(parse(&text)["graphs"][0]["name"], "gasolio");
    }
}
