// src/server/mod.rs
//! Pantry HTTP server
//!
//! This module provides an HTTP server that:
//! - Lists the recipe collection (`GET /recipes`)
//! - Creates recipes with server-assigned ids (`POST /recipes`)
//! - Replaces recipes in place (`PUT /recipes/{id}`)
//! - Removes recipes (`DELETE /recipes/{id}`)
//!
//! The collection lives in memory behind a single read/write lock; a restart
//! resets it to the configured seed set.

pub mod config;
mod handlers;
pub mod metrics;
mod routes;
pub mod store;

pub use config::{PantryConfig, SeedRecipe};
pub use metrics::{MetricsSnapshot, ServerMetrics};
pub use routes::create_router;
pub use store::{Recipe, RecipeId, RecipeStore, StoreError};

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to
    pub bind_addr: SocketAddr,
    /// Recipes loaded into the store at startup
    pub seed: Vec<SeedRecipe>,
    /// Expose request counters on /admin/stats
    pub request_stats: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".parse().unwrap(),
            seed: config::default_seed(),
            request_stats: true,
        }
    }
}

/// Shared server state
pub struct ServerState {
    pub config: ServerConfig,
    pub store: RecipeStore,
    /// Metrics collector
    pub metrics: Arc<ServerMetrics>,
}

impl ServerState {
    pub fn new(config: ServerConfig) -> Self {
        let mut store = RecipeStore::new();
        for seed in &config.seed {
            store.insert(seed.name.clone(), seed.ingredients.clone());
        }

        let metrics = Arc::new(ServerMetrics::new());

        Self {
            config,
            store,
            metrics,
        }
    }
}

/// Start the Pantry server
pub async fn run_server(config: ServerConfig) -> Result<()> {
    tracing::info!("Starting Pantry server on {}", config.bind_addr);
    tracing::info!("Seed recipes: {}", config.seed.len());
    if config.request_stats {
        tracing::info!("Stats endpoint: enabled");
    }

    let state = Arc::new(RwLock::new(ServerState::new(config.clone())));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Pantry is ready to serve");

    axum::serve(listener, app).await?;
    Ok(())
}
