use axum::{extract::State, Json};
use std::sync::Arc;

use super::{model::Beacon, service::BeaconService};
use crate::state::AppState;

/// GET /api/beacons. Returns the raw fixture array.
pub async fn list(State(state): State<Arc<AppState>>) -> Json<Vec<Beacon>> {
    let service = BeaconService::new(state.beacons.clone(), state.latency_enabled);
    Json(service.list().await)
}
