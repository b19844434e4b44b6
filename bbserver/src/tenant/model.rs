use serde::Serialize;

use crate::alert::model::Alert;
use crate::beacon::model::Beacon;
use crate::user::model::User;

/// Aggregated tenant view: counts over the whole tenant data set plus a
/// bounded preview slice of each store.
#[derive(Debug, Serialize)]
pub struct TenantDashboard {
    pub tenant: TenantInfo,
    pub summary: TenantSummary,
    pub data: TenantData,
}

#[derive(Debug, Serialize)]
pub struct TenantInfo {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantSummary {
    pub total_users: usize,
    pub active_users: usize,
    pub total_beacons: usize,
    pub online_beacons: usize,
    pub total_alerts: usize,
    pub active_alerts: usize,
}

#[derive(Debug, Serialize)]
pub struct TenantData {
    pub users: Vec<User>,
    pub beacons: Vec<Beacon>,
    pub alerts: Vec<Alert>,
}
