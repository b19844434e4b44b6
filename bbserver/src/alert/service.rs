use std::sync::Arc;
use std::time::Duration;

use super::model::Alert;

/// Simulated network delay for the alert list endpoint.
const LIST_LATENCY: Duration = Duration::from_millis(120);

pub struct AlertService {
    store: Arc<Vec<Alert>>,
    latency: bool,
}

impl AlertService {
    pub fn new(store: Arc<Vec<Alert>>, latency: bool) -> Self {
        Self { store, latency }
    }

    /// Full snapshot of the alert feed.
    pub async fn list(&self) -> Vec<Alert> {
        if self.latency {
            tokio::time::sleep(LIST_LATENCY).await;
        }
        self.store.as_ref().clone()
    }
}
