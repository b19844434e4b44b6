use axum::http::Uri;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::alert::handler as alert;
use crate::beacon::handler as beacon;
use crate::error::ApiError;
use crate::health::handler as health;
use crate::metrics;
use crate::state::AppState;
use crate::tenant::handler as tenant;
use crate::user::handler as user;

pub fn create_router(state: AppState) -> Router {
    let state = Arc::new(state);

    Router::new()
        // List routes return bare arrays; the clients consume them as-is.
        .route("/api/users", get(user::list))
        .route("/api/beacons", get(beacon::list))
        .route("/api/alerts", get(alert::list))
        // Aggregate routes use the response envelope.
        .route("/api/tenants/:tenant_id/dashboard", get(tenant::dashboard))
        .route("/api/health", get(health::report))
        .fallback(not_found)
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            metrics::track,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound {
        path: uri.path().to_string(),
    }
}
