use std::sync::Arc;
use std::time::Instant;

use crate::alert::model::Alert;
use crate::beacon::model::Beacon;
use crate::metrics::RequestMetrics;
use crate::seed;
use crate::user::model::User;

/// Shared application state. The row stores are immutable seeded snapshots;
/// everything mutable lives behind its own lock inside `RequestMetrics`.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<Vec<User>>,
    pub beacons: Arc<Vec<Beacon>>,
    pub alerts: Arc<Vec<Alert>>,
    pub metrics: RequestMetrics,
    pub started_at: Instant,
    pub latency_enabled: bool,
}

impl AppState {
    pub fn new(latency_enabled: bool) -> Self {
        Self {
            users: Arc::new(seed::users()),
            beacons: Arc::new(seed::beacons()),
            alerts: Arc::new(seed::alerts()),
            metrics: RequestMetrics::new(),
            started_at: Instant::now(),
            latency_enabled,
        }
    }
}
