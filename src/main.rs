// src/main.rs

use anyhow::{Context, Result};
use clap::Parser;
use pantry::server::{run_server, PantryConfig};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pantry")]
#[command(author, version, about = "In-memory recipe catalog with an HTTP API", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file (defaults used when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the bind address (e.g. 127.0.0.1:8080)
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let file_config = match &cli.config {
        Some(path) => PantryConfig::load(path)?,
        None => PantryConfig::default(),
    };

    let mut config = file_config.to_server_config()?;
    if let Some(bind) = cli.bind {
        config.bind_addr = bind
            .parse()
            .with_context(|| format!("Invalid bind address: {}", bind))?;
    }

    run_server(config).await
}
