//! CLI entry point for the wiregraph connectivity analyzer.
//!
//! Writes JSON results to stdout; logs go to stderr. Failures print an
//! error envelope and exit with status 1.

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{fmt, EnvFilter};

use wiregraph_analyze::{
    AnalyzeEngine, AnalyzeError, ErrorEnvelope, FindNeighborsRequest, FindPathRequest,
};
use wiregraph_catalog::GraphCatalog;
use wiregraph_core::{GraphSelector, ReferenceInput, SelectorStrategy};

#[derive(Parser)]
#[command(name = "wiregraph")]
#[command(about = "Shortest paths and neighbors in piping/wiring graph snapshots")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Config file prefix (default: wiregraph).
    #[arg(short, long, default_value = "wiregraph", global = true)]
    config: String,

    /// How graph selectors map to snapshot files: stem or numbered.
    #[arg(long, default_value_t = SelectorStrategy::Stem, global = true)]
    selector: SelectorStrategy,
}

#[derive(Subcommand)]
enum Command {
    /// Find the shortest path between two components.
    Path {
        /// Graph number, name, or file name.
        #[arg(long)]
        graph: String,
        /// Start component: id, instance name, or numeric id.
        #[arg(long)]
        from: String,
        /// End component: id, instance name, or numeric id.
        #[arg(long)]
        to: String,
    },
    /// List the direct neighbors of a component.
    Neighbors {
        #[arg(long)]
        graph: String,
        #[arg(long)]
        component: String,
    },
    /// List the available graph snapshots.
    Graphs,
    /// Show size statistics for one graph.
    Stats {
        #[arg(long)]
        graph: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let config = wiregraph_core::config::load(&cli.config)?;
    let engine = AnalyzeEngine::new(GraphCatalog::new(config.catalog), cli.selector);

    let outcome = match cli.command {
        Command::Path { graph, from, to } => {
            let request = FindPathRequest {
                start_component: ReferenceInput::from(from),
                end_component: ReferenceInput::from(to),
                graph: GraphSelector::from(graph),
            };
            engine.find_path(request).await.and_then(|r| render(&r))
        }
        Command::Neighbors { graph, component } => {
            let request = FindNeighborsRequest {
                component: ReferenceInput::from(component),
                graph: GraphSelector::from(graph),
            };
            engine.find_neighbors(request).await.and_then(|r| render(&r))
        }
        Command::Graphs => engine.list_graphs().await.and_then(|r| render(&r)),
        Command::Stats { graph } => engine
            .graph_stats(&GraphSelector::from(graph))
            .await
            .and_then(|r| render(&r)),
    };

    match outcome {
        Ok(json) => println!("{json}"),
        Err(e) => {
            tracing::error!(error = %e, kind = e.kind(), "Query failed");
            println!("{}", serde_json::to_string_pretty(&ErrorEnvelope::from(&e))?);
            std::process::exit(1);
        }
    }

    Ok(())
}

fn render<T: Serialize>(value: &T) -> Result<String, AnalyzeError> {
    Ok(serde_json::to_string_pretty(value)?)
}
