//! Per-operation request timing, reported through the health endpoint.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use parking_lot::RwLock;
use serde::Serialize;

use crate::state::AppState;

/// Operations slower than this are logged as they complete.
const SLOW_THRESHOLD_MS: f64 = 1000.0;

#[derive(Debug, Default)]
struct OpStats {
    count: u64,
    total_ms: f64,
}

/// Aggregated request timings keyed by "METHOD path".
#[derive(Clone, Default)]
pub struct RequestMetrics {
    inner: Arc<RwLock<HashMap<String, OpStats>>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlowOperation {
    pub operation: String,
    pub avg_ms: f64,
    pub count: u64,
}

impl RequestMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, operation: &str, elapsed_ms: f64) {
        if elapsed_ms > SLOW_THRESHOLD_MS {
            tracing::warn!(operation, elapsed_ms, "slow operation");
        }
        let mut map = self.inner.write();
        let stats = map.entry(operation.to_string()).or_default();
        stats.count += 1;
        stats.total_ms += elapsed_ms;
    }

    /// Number of distinct operations seen so far.
    pub fn operation_count(&self) -> usize {
        self.inner.read().len()
    }

    /// The `limit` operations with the highest average latency.
    pub fn slowest_operations(&self, limit: usize) -> Vec<SlowOperation> {
        let map = self.inner.read();
        let mut ops: Vec<SlowOperation> = map
            .iter()
            .map(|(operation, stats)| SlowOperation {
                operation: operation.clone(),
                avg_ms: if stats.count == 0 {
                    0.0
                } else {
                    stats.total_ms / stats.count as f64
                },
                count: stats.count,
            })
            .collect();
        ops.sort_by(|a, b| {
            b.avg_ms
                .partial_cmp(&a.avg_ms)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        ops.truncate(limit);
        ops
    }
}

/// Middleware that times every request into the shared metrics map.
pub async fn track(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    let operation = format!("{} {}", request.method(), request.uri().path());
    let start = Instant::now();
    let response = next.run(request).await;
    state
        .metrics
        .record(&operation, start.elapsed().as_secs_f64() * 1000.0);
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_counts_and_averages() {
        let metrics = RequestMetrics::new();
        metrics.record("GET /api/users", 10.0);
        metrics.record("GET /api/users", 30.0);
        metrics.record("GET /api/beacons", 5.0);

        assert_eq!(metrics.operation_count(), 2);

        let slowest = metrics.slowest_operations(5);
        assert_eq!(slowest[0].operation, "GET /api/users");
        assert_eq!(slowest[0].avg_ms, 20.0);
        assert_eq!(slowest[0].count, 2);
        assert_eq!(slowest[1].operation, "GET /api/beacons");
    }

    #[test]
    fn slowest_list_is_truncated() {
        let metrics = RequestMetrics::new();
        for i in 0..10 {
            metrics.record(&format!("GET /op/{i}"), f64::from(i));
        }
        assert_eq!(metrics.slowest_operations(3).len(), 3);
    }
}
