//! wiregraph MCP server.
//! Exposes find_path, find_neighbors and list_graphs as MCP tools over stdio.

mod server;

use clap::Parser;
use rmcp::ServiceExt;
use tracing_subscriber::{fmt, EnvFilter};

use wiregraph_analyze::AnalyzeEngine;
use wiregraph_catalog::GraphCatalog;
use wiregraph_core::SelectorStrategy;

use crate::server::WiregraphServer;

#[derive(Parser)]
#[command(name = "wiregraph-mcp")]
#[command(about = "MCP stdio server for wiregraph connectivity queries")]
struct Cli {
    /// Config file prefix (default: wiregraph).
    #[arg(short, long, default_value = "wiregraph")]
    config: String,

    /// Override `mcp.selector`: stem or numbered.
    #[arg(long)]
    selector: Option<SelectorStrategy>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // stdout carries the MCP transport.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let cli = Cli::parse();
    let config = wiregraph_core::config::load(&cli.config)?;
    let selector = cli.selector.unwrap_or(config.mcp.selector);

    tracing::info!(
        graph_dir = %config.catalog.graph_dir.display(),
        selector = %selector,
        "wiregraph-mcp starting"
    );

    let engine = AnalyzeEngine::new(GraphCatalog::new(config.catalog), selector);
    let service = WiregraphServer::new(engine)
        .serve(rmcp::transport::io::stdio())
        .await
        .inspect_err(|e| tracing::error!(error = %e, "serve error"))
        .map_err(|e| anyhow::anyhow!("{}", e))?;
    service.waiting().await?;

    Ok(())
}
