use serde::Deserialize;

/// The slice of the server health report the CLI cares about.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthBrief {
    pub status: String,
    pub uptime_seconds: u64,
    pub version: String,
}
