use std::time::Duration;

use reqwest::blocking::{Client, ClientBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::models::{Alert, Beacon, HealthBrief, TenantDashboard, User};
use crate::utils::{ClientError, Result};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// ApiClient handles all server communication. Requests are blocking; the
/// GUI keeps them off its thread by calling through `RowStore::refresh`.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

#[derive(Default)]
pub struct ApiClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl ApiClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<ApiClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Config("Base URL must be provided".to_string()))?;

        let client = ClientBuilder::new()
            .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT))
            .build()
            .map_err(ClientError::Network)?;

        Ok(ApiClient { client, base_url })
    }
}

/// Envelope carried by the dashboard and health endpoints. The list
/// endpoints return bare arrays and skip this entirely.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    success: bool,
    data: Option<T>,
    error: Option<EnvelopeError>,
}

#[derive(Debug, Deserialize)]
struct EnvelopeError {
    code: String,
    message: String,
}

impl<T> Envelope<T> {
    fn into_data(self) -> Result<T> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            (_, _) => {
                let message = self
                    .error
                    .map(|e| format!("{}: {}", e.code, e.message))
                    .unwrap_or_else(|| String::from("response carried no data"));
                Err(ClientError::Parse(message))
            }
        }
    }
}

impl ApiClient {
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::new()
    }

    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::builder().base_url(base_url).build()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Handle error responses from the API
    fn check_status(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            let message = response
                .text()
                .unwrap_or_else(|_| String::from("Unknown error"));

            Err(ClientError::Server {
                status: status.as_u16(),
                message,
            })
        }
    }

    fn get_json<R: DeserializeOwned>(&self, path: &str) -> Result<R> {
        let response = self
            .client
            .get(format!("{}{}", self.base_url, path))
            .send()
            .map_err(ClientError::Network)?;

        let response = Self::check_status(response)?;
        response
            .json::<R>()
            .map_err(|e| ClientError::Parse(e.to_string()))
    }

    /// Get the full user directory
    pub fn get_users(&self) -> Result<Vec<User>> {
        self.get_json("/api/users")
    }

    /// Get the full beacon fleet
    pub fn get_beacons(&self) -> Result<Vec<Beacon>> {
        self.get_json("/api/beacons")
    }

    /// Get the full alert feed
    pub fn get_alerts(&self) -> Result<Vec<Alert>> {
        self.get_json("/api/alerts")
    }

    /// Get the aggregated dashboard for one tenant
    pub fn get_dashboard(&self, tenant_id: &str) -> Result<TenantDashboard> {
        let envelope: Envelope<TenantDashboard> =
            self.get_json(&format!("/api/tenants/{tenant_id}/dashboard"))?;
        envelope.into_data()
    }

    /// Check server health
    pub fn health(&self) -> Result<HealthBrief> {
        let envelope: Envelope<HealthBrief> = self.get_json("/api/health")?;
        envelope.into_data()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;
    use serde_json::json;

    use crate::models::{AlertSeverity, BeaconStatus, UserRole};

    #[test]
    fn fetches_the_user_list() {
        let mut server = Server::new();
        let mock = server
            .mock("GET", "/api/users")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!([
                    {
                        "id": "1",
                        "name": "John Doe",
                        "email": "john.doe@example.com",
                        "role": "admin",
                        "status": "active",
                        "lastLogin": "2024-01-15T10:30:00Z",
                        "createdAt": "2023-12-01T09:00:00Z",
                        "firmwareVersion": "v1.2.5"
                    }
                ])
                .to_string(),
            )
            .create();

        let client = ApiClient::new(server.url()).unwrap();
        let users = client.get_users().unwrap();

        assert_eq!(users.len(), 1);
        assert_eq!(users[0].role, UserRole::Admin);
        assert!(users[0].last_login.is_some());
        mock.assert();
    }

    #[test]
    fn fetches_the_beacon_list() {
        let mut server = Server::new();
        let mock = server
            .mock("GET", "/api/beacons")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!([
                    {
                        "id": "3",
                        "name": "Cafeteria Beacon",
                        "macAddress": "AA:BB:CC:DD:EE:03",
                        "location": "Cafeteria",
                        "status": "offline",
                        "batteryLevel": 23,
                        "lastSeen": "2024-01-14T18:45:00Z",
                        "signalStrength": -72,
                        "firmware": "v2.0.5"
                    }
                ])
                .to_string(),
            )
            .create();

        let client = ApiClient::new(server.url()).unwrap();
        let beacons = client.get_beacons().unwrap();

        assert_eq!(beacons.len(), 1);
        assert_eq!(beacons[0].status, BeaconStatus::Offline);
        assert_eq!(beacons[0].battery_level, 23);
        mock.assert();
    }

    #[test]
    fn unwraps_the_dashboard_envelope() {
        let mut server = Server::new();
        let mock = server
            .mock("GET", "/api/tenants/acme/dashboard")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "success": true,
                    "data": {
                        "tenant": { "id": "acme", "name": "Tenant acme" },
                        "summary": {
                            "totalUsers": 4,
                            "activeUsers": 2,
                            "totalBeacons": 5,
                            "onlineBeacons": 3,
                            "totalAlerts": 6,
                            "activeAlerts": 3
                        },
                        "data": { "users": [], "beacons": [], "alerts": [] }
                    },
                    "meta": {
                        "timestamp": "2024-01-15T10:30:00Z",
                        "requestId": "7c0443b5-6cb9-4bbb-8147-1c51e0b6d4e5",
                        "version": "0.1.0"
                    }
                })
                .to_string(),
            )
            .create();

        let client = ApiClient::new(server.url()).unwrap();
        let dashboard = client.get_dashboard("acme").unwrap();

        assert_eq!(dashboard.tenant.id, "acme");
        assert_eq!(dashboard.summary.active_alerts, 3);
        mock.assert();
    }

    #[test]
    fn surfaces_envelope_errors() {
        let mut server = Server::new();
        let _mock = server
            .mock("GET", "/api/health")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "success": false,
                    "error": { "code": "NOT_FOUND", "message": "nope" },
                    "meta": {
                        "timestamp": "2024-01-15T10:30:00Z",
                        "requestId": "7c0443b5-6cb9-4bbb-8147-1c51e0b6d4e5",
                        "version": "0.1.0"
                    }
                })
                .to_string(),
            )
            .create();

        let client = ApiClient::new(server.url()).unwrap();
        let err = client.health().unwrap_err();

        match err {
            ClientError::Parse(message) => assert!(message.contains("NOT_FOUND")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn maps_http_errors_to_server_errors() {
        let mut server = Server::new();
        let _mock = server
            .mock("GET", "/api/alerts")
            .with_status(500)
            .with_body("boom")
            .create();

        let client = ApiClient::new(server.url()).unwrap();
        let err = client.get_alerts().unwrap_err();

        match err {
            ClientError::Server { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "boom");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn rejects_malformed_bodies() {
        let mut server = Server::new();
        let _mock = server
            .mock("GET", "/api/alerts")
            .with_status(200)
            .with_body("not json")
            .create();

        let client = ApiClient::new(server.url()).unwrap();
        assert!(matches!(
            client.get_alerts(),
            Err(ClientError::Parse(_))
        ));
    }

    #[test]
    fn builder_requires_a_base_url() {
        assert!(matches!(
            ApiClient::builder().build(),
            Err(ClientError::Config(_))
        ));
    }

    #[test]
    fn alert_enums_round_trip_from_the_wire() {
        let mut server = Server::new();
        let _mock = server
            .mock("GET", "/api/alerts")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!([
                    {
                        "id": "4",
                        "title": "Security Breach Detected",
                        "message": "Unauthorized access attempt detected at Main Entrance",
                        "severity": "critical",
                        "status": "active",
                        "source": "Security System",
                        "timestamp": "2024-01-15T10:15:00Z"
                    }
                ])
                .to_string(),
            )
            .create();

        let client = ApiClient::new(server.url()).unwrap();
        let alerts = client.get_alerts().unwrap();

        assert_eq!(alerts[0].severity, AlertSeverity::Critical);
        assert!(alerts[0].resolved_at.is_none());
        assert!(alerts[0].assigned_to.is_none());
    }
}
