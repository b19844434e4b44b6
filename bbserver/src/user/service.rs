use std::sync::Arc;
use std::time::Duration;

use super::model::User;

/// Simulated network delay for the user list endpoint.
const LIST_LATENCY: Duration = Duration::from_millis(100);

pub struct UserService {
    store: Arc<Vec<User>>,
    latency: bool,
}

impl UserService {
    pub fn new(store: Arc<Vec<User>>, latency: bool) -> Self {
        Self { store, latency }
    }

    /// Full snapshot of the user directory.
    pub async fn list(&self) -> Vec<User> {
        if self.latency {
            tokio::time::sleep(LIST_LATENCY).await;
        }
        self.store.as_ref().clone()
    }
}
