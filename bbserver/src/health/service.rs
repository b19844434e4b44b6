use std::sync::Arc;

use chrono::Utc;

use super::model::{HealthReport, MetricsReport, StoreCheck, StoreChecks};
use crate::state::AppState;

/// How many of the slowest operations the report includes.
const SLOWEST_LIMIT: usize = 5;

pub struct HealthService {
    state: Arc<AppState>,
}

impl HealthService {
    pub fn new(state: Arc<AppState>) -> Self {
        Self { state }
    }

    pub fn report(&self) -> HealthReport {
        let state = &self.state;
        let checks = StoreChecks {
            users: store_check(state.users.len()),
            beacons: store_check(state.beacons.len()),
            alerts: store_check(state.alerts.len()),
        };
        let healthy = checks.users.healthy && checks.beacons.healthy && checks.alerts.healthy;

        HealthReport {
            status: if healthy { "healthy" } else { "degraded" }.to_string(),
            checks,
            uptime_seconds: state.started_at.elapsed().as_secs(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: Utc::now(),
            metrics: MetricsReport {
                operation_count: state.metrics.operation_count(),
                slowest_operations: state.metrics.slowest_operations(SLOWEST_LIMIT),
            },
        }
    }
}

fn store_check(rows: usize) -> StoreCheck {
    StoreCheck {
        healthy: rows > 0,
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_state_reports_healthy() {
        let state = Arc::new(AppState::new(false));
        let report = HealthService::new(state).report();

        assert_eq!(report.status, "healthy");
        assert_eq!(report.checks.users.rows, 4);
        assert_eq!(report.checks.beacons.rows, 5);
        assert_eq!(report.checks.alerts.rows, 6);
    }
}
