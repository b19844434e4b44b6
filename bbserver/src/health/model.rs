use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::metrics::SlowOperation;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    pub status: String,
    pub checks: StoreChecks,
    pub uptime_seconds: u64,
    pub version: String,
    pub timestamp: DateTime<Utc>,
    pub metrics: MetricsReport,
}

#[derive(Debug, Serialize)]
pub struct StoreChecks {
    pub users: StoreCheck,
    pub beacons: StoreCheck,
    pub alerts: StoreCheck,
}

#[derive(Debug, Serialize)]
pub struct StoreCheck {
    pub healthy: bool,
    pub rows: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsReport {
    pub operation_count: usize,
    pub slowest_operations: Vec<SlowOperation>,
}
