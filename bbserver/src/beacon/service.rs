use std::sync::Arc;
use std::time::Duration;

use super::model::Beacon;

/// Simulated network delay for the beacon list endpoint.
const LIST_LATENCY: Duration = Duration::from_millis(150);

pub struct BeaconService {
    store: Arc<Vec<Beacon>>,
    latency: bool,
}

impl BeaconService {
    pub fn new(store: Arc<Vec<Beacon>>, latency: bool) -> Self {
        Self { store, latency }
    }

    /// Full snapshot of the beacon fleet.
    pub async fn list(&self) -> Vec<Beacon> {
        if self.latency {
            tokio::time::sleep(LIST_LATENCY).await;
        }
        self.store.as_ref().clone()
    }
}
