//! HTTP server entry point for wiregraph.

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use wiregraph_analyze::AnalyzeEngine;
use wiregraph_api::{routes, AppState};
use wiregraph_catalog::GraphCatalog;

#[derive(Parser)]
#[command(name = "wiregraph-api")]
#[command(about = "HTTP API for wiregraph path and neighbor queries")]
struct Cli {
    /// Config file prefix (default: wiregraph).
    #[arg(short, long, default_value = "wiregraph")]
    config: String,

    /// Listen address, overrides `http.bind`.
    #[arg(long)]
    bind: Option<String>,

    /// Emit logs as JSON lines.
    #[arg(long)]
    log_json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if cli.log_json {
        fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
    }

    let mut config = wiregraph_core::config::load(&cli.config)?;
    if let Some(bind) = cli.bind {
        config.http.bind = bind;
    }
    let addr = config.http.socket_addr()?;

    let engine = AnalyzeEngine::new(GraphCatalog::new(config.catalog), config.http.selector);
    let app = routes::router(AppState::new(engine));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        addr = %listener.local_addr()?,
        selector = %config.http.selector,
        "wiregraph-api listening"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
