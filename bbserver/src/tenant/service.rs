use std::sync::Arc;

use super::model::{TenantDashboard, TenantData, TenantInfo, TenantSummary};
use crate::alert::model::AlertStatus;
use crate::alert::service::AlertService;
use crate::beacon::model::BeaconStatus;
use crate::beacon::service::BeaconService;
use crate::state::AppState;
use crate::user::model::UserStatus;
use crate::user::service::UserService;

/// How many rows of each store the dashboard preview carries.
const USER_PREVIEW_LIMIT: usize = 10;
const BEACON_PREVIEW_LIMIT: usize = 10;
const ALERT_PREVIEW_LIMIT: usize = 5;

/// Rows with no tenant id belong to every tenant.
fn matches_tenant(row_tenant: Option<&str>, requested: &str) -> bool {
    row_tenant.map_or(true, |t| t == requested)
}

pub struct DashboardService {
    state: Arc<AppState>,
}

impl DashboardService {
    pub fn new(state: Arc<AppState>) -> Self {
        Self { state }
    }

    /// Aggregate the tenant's stores into summary counts plus preview
    /// slices. The three store reads run concurrently, so the simulated
    /// latency of the dashboard matches the slowest underlying fetch.
    pub async fn dashboard(&self, tenant_id: &str) -> TenantDashboard {
        let state = &self.state;
        let users = UserService::new(state.users.clone(), state.latency_enabled);
        let beacons = BeaconService::new(state.beacons.clone(), state.latency_enabled);
        let alerts = AlertService::new(state.alerts.clone(), state.latency_enabled);

        let (mut users, mut beacons, mut alerts) =
            tokio::join!(users.list(), beacons.list(), alerts.list());

        users.retain(|u| matches_tenant(u.tenant_id.as_deref(), tenant_id));
        beacons.retain(|b| matches_tenant(b.tenant_id.as_deref(), tenant_id));
        alerts.retain(|a| matches_tenant(a.tenant_id.as_deref(), tenant_id));

        let summary = TenantSummary {
            total_users: users.len(),
            active_users: users
                .iter()
                .filter(|u| u.status == UserStatus::Active)
                .count(),
            total_beacons: beacons.len(),
            online_beacons: beacons
                .iter()
                .filter(|b| b.status == BeaconStatus::Online)
                .count(),
            total_alerts: alerts.len(),
            active_alerts: alerts
                .iter()
                .filter(|a| a.status == AlertStatus::Active)
                .count(),
        };

        users.truncate(USER_PREVIEW_LIMIT);
        beacons.truncate(BEACON_PREVIEW_LIMIT);
        alerts.retain(|a| a.status == AlertStatus::Active);
        alerts.truncate(ALERT_PREVIEW_LIMIT);

        TenantDashboard {
            tenant: TenantInfo {
                id: tenant_id.to_string(),
                name: format!("Tenant {tenant_id}"),
            },
            summary,
            data: TenantData {
                users,
                beacons,
                alerts,
            },
        }
    }
}
