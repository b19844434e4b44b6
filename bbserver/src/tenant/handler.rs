use axum::extract::{Path, State};
use axum::Json;
use std::sync::Arc;

use super::model::TenantDashboard;
use super::service::DashboardService;
use crate::response::ApiResponse;
use crate::state::AppState;

/// GET /api/tenants/:tenant_id/dashboard. Returns the aggregated tenant
/// view wrapped in the response envelope.
pub async fn dashboard(
    State(state): State<Arc<AppState>>,
    Path(tenant_id): Path<String>,
) -> Json<ApiResponse<TenantDashboard>> {
    let service = DashboardService::new(state);
    Json(ApiResponse::success(service.dashboard(&tenant_id).await))
}
