// src/server/metrics.rs
//! Server metrics tracking
//!
//! Simple atomic counters for request/mutation statistics, exposed via the
//! admin stats endpoint.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Server metrics collector
#[derive(Default)]
pub struct ServerMetrics {
    /// Total requests to the recipe endpoints
    requests_total: AtomicU64,
    /// Recipes created
    recipes_created: AtomicU64,
    /// Recipes replaced in place
    recipes_updated: AtomicU64,
    /// Recipes removed
    recipes_deleted: AtomicU64,
    /// Lookups that missed (unknown id on PUT/DELETE)
    lookup_failures: AtomicU64,
    /// Server start time
    start_time: std::sync::OnceLock<Instant>,
}

impl ServerMetrics {
    /// Create new metrics collector
    pub fn new() -> Self {
        let metrics = Self::default();
        let _ = metrics.start_time.set(Instant::now());
        metrics
    }

    /// Record a request to a recipe endpoint
    pub fn record_request(&self) {
        self.requests_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a created recipe
    pub fn record_created(&self) {
        self.recipes_created.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a replaced recipe
    pub fn record_updated(&self) {
        self.recipes_updated.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a removed recipe
    pub fn record_deleted(&self) {
        self.recipes_deleted.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a lookup that found no recipe
    pub fn record_lookup_failure(&self) {
        self.lookup_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Get current metrics snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        let uptime = self
            .start_time
            .get()
            .map(|t| t.elapsed())
            .unwrap_or(Duration::ZERO);

        MetricsSnapshot {
            requests_total: self.requests_total.load(Ordering::Relaxed),
            recipes_created: self.recipes_created.load(Ordering::Relaxed),
            recipes_updated: self.recipes_updated.load(Ordering::Relaxed),
            recipes_deleted: self.recipes_deleted.load(Ordering::Relaxed),
            lookup_failures: self.lookup_failures.load(Ordering::Relaxed),
            uptime_secs: uptime.as_secs(),
        }
    }
}

/// Snapshot of current metrics
#[derive(Debug, Clone, Serialize)]
pub struct MetricsSnapshot {
    /// Total requests to the recipe endpoints
    pub requests_total: u64,
    /// Recipes created
    pub recipes_created: u64,
    /// Recipes replaced in place
    pub recipes_updated: u64,
    /// Recipes removed
    pub recipes_deleted: u64,
    /// Lookups that found no recipe
    pub lookup_failures: u64,
    /// Server uptime in seconds
    pub uptime_secs: u64,
}
