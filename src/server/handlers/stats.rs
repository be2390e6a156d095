// src/server/handlers/stats.rs
//! Admin stats endpoint

use crate::server::metrics::MetricsSnapshot;
use crate::server::ServerState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Response for stats queries
#[derive(Serialize)]
pub struct StatsResponse {
    /// Current collection size
    pub recipes: usize,
    /// Request counters
    pub metrics: MetricsSnapshot,
}

/// GET /admin/stats
///
/// Returns request counters and the current collection size. Responds 404
/// when the stats endpoint is disabled in the configuration.
pub async fn server_stats(State(state): State<Arc<RwLock<ServerState>>>) -> Response {
    let state = state.read().await;

    if !state.config.request_stats {
        return (StatusCode::NOT_FOUND, "Stats endpoint disabled").into_response();
    }

    Json(StatsResponse {
        recipes: state.store.len(),
        metrics: state.metrics.snapshot(),
    })
    .into_response()
}
