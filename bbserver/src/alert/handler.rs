use axum::{extract::State, Json};
use std::sync::Arc;

use super::{model::Alert, service::AlertService};
use crate::state::AppState;

/// GET /api/alerts. Returns the raw fixture array.
pub async fn list(State(state): State<Arc<AppState>>) -> Json<Vec<Alert>> {
    let service = AlertService::new(state.alerts.clone(), state.latency_enabled);
    Json(service.list().await)
}
