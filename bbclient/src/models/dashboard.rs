use serde::Deserialize;

use super::{Alert, Beacon, User};

/// Aggregated tenant view returned by the dashboard endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct TenantDashboard {
    pub tenant: TenantInfo,
    pub summary: TenantSummary,
    pub data: TenantData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TenantInfo {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantSummary {
    pub total_users: usize,
    pub active_users: usize,
    pub total_beacons: usize,
    pub online_beacons: usize,
    pub total_alerts: usize,
    pub active_alerts: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TenantData {
    pub users: Vec<User>,
    pub beacons: Vec<Beacon>,
    pub alerts: Vec<Alert>,
}
