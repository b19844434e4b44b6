use axum::{extract::State, Json};
use std::sync::Arc;

use super::{model::User, service::UserService};
use crate::state::AppState;

/// GET /api/users. Returns the raw fixture array.
pub async fn list(State(state): State<Arc<AppState>>) -> Json<Vec<User>> {
    let service = UserService::new(state.users.clone(), state.latency_enabled);
    Json(service.list().await)
}
