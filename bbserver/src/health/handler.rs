use axum::extract::State;
use axum::Json;
use std::sync::Arc;

use super::model::HealthReport;
use super::service::HealthService;
use crate::response::ApiResponse;
use crate::state::AppState;

/// GET /api/health. Liveness plus store sizes and request timings.
pub async fn report(State(state): State<Arc<AppState>>) -> Json<ApiResponse<HealthReport>> {
    let service = HealthService::new(state);
    Json(ApiResponse::success(service.report()))
}
