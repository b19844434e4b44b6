use axum_test::TestServer;
use serde_json::Value;

use bbserver::router::create_router;
use bbserver::state::AppState;

fn test_server() -> TestServer {
    // Latency off so the suite runs at full speed.
    let state = AppState::new(false);
    TestServer::new(create_router(state)).expect("failed to start test server")
}

#[tokio::test]
async fn lists_all_seeded_users() {
    let server = test_server();

    let response = server.get("/api/users").await;
    response.assert_status_ok();

    let users: Value = response.json();
    let users = users.as_array().expect("array body");
    assert_eq!(users.len(), 4);
    assert_eq!(users[0]["name"], "John Doe");
    assert_eq!(users[0]["role"], "admin");
    assert_eq!(users[3]["status"], "pending");
    assert!(users[3].get("lastLogin").is_none());
}

#[tokio::test]
async fn lists_all_seeded_beacons() {
    let server = test_server();

    let response = server.get("/api/beacons").await;
    response.assert_status_ok();

    let beacons: Value = response.json();
    let beacons = beacons.as_array().expect("array body");
    assert_eq!(beacons.len(), 5);
    assert_eq!(beacons[0]["macAddress"], "AA:BB:CC:DD:EE:01");
    assert_eq!(beacons[0]["batteryLevel"], 85);
    assert_eq!(beacons[2]["status"], "offline");
    assert_eq!(beacons[4]["status"], "maintenance");
}

#[tokio::test]
async fn lists_all_seeded_alerts() {
    let server = test_server();

    let response = server.get("/api/alerts").await;
    response.assert_status_ok();

    let alerts: Value = response.json();
    let alerts = alerts.as_array().expect("array body");
    assert_eq!(alerts.len(), 6);
    assert_eq!(alerts[3]["severity"], "critical");
    assert_eq!(alerts[2]["status"], "resolved");
    assert!(alerts[2].get("resolvedAt").is_some());
    assert_eq!(alerts[1]["assignedTo"], "John Doe");
}

#[tokio::test]
async fn timestamps_are_rfc3339() {
    let server = test_server();

    let response = server.get("/api/users").await;
    let users: Value = response.json();
    let last_login = users[0]["lastLogin"].as_str().expect("string timestamp");
    assert!(chrono::DateTime::parse_from_rfc3339(last_login).is_ok());
    assert!(last_login.starts_with("2024-01-15T10:30:00"));
}

#[tokio::test]
async fn dashboard_reports_summary_counts() {
    let server = test_server();

    let response = server.get("/api/tenants/demo-tenant/dashboard").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert!(body["meta"].get("requestId").is_some());

    let data = &body["data"];
    assert_eq!(data["tenant"]["id"], "demo-tenant");

    let summary = &data["summary"];
    assert_eq!(summary["totalUsers"], 4);
    assert_eq!(summary["activeUsers"], 2);
    assert_eq!(summary["totalBeacons"], 5);
    assert_eq!(summary["onlineBeacons"], 3);
    assert_eq!(summary["totalAlerts"], 6);
    assert_eq!(summary["activeAlerts"], 3);
}

#[tokio::test]
async fn dashboard_preview_carries_only_active_alerts() {
    let server = test_server();

    let response = server.get("/api/tenants/acme/dashboard").await;
    let body: Value = response.json();

    let alerts = body["data"]["data"]["alerts"]
        .as_array()
        .expect("alerts array");
    assert_eq!(alerts.len(), 3);
    assert!(alerts.iter().all(|a| a["status"] == "active"));
}

#[tokio::test]
async fn every_tenant_sees_unscoped_rows() {
    let server = test_server();

    let first: Value = server.get("/api/tenants/alpha/dashboard").await.json();
    let second: Value = server.get("/api/tenants/beta/dashboard").await.json();

    assert_eq!(first["data"]["summary"], second["data"]["summary"]);
    assert_eq!(first["data"]["data"]["users"], second["data"]["data"]["users"]);
}

#[tokio::test]
async fn health_reports_store_checks() {
    let server = test_server();

    // A prior request so the metrics section has something to report.
    server.get("/api/users").await.assert_status_ok();

    let response = server.get("/api/health").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["success"], true);

    let report = &body["data"];
    assert_eq!(report["status"], "healthy");
    assert_eq!(report["checks"]["users"]["rows"], 4);
    assert_eq!(report["checks"]["beacons"]["rows"], 5);
    assert_eq!(report["checks"]["alerts"]["rows"], 6);
    assert!(report["metrics"]["operationCount"].as_u64().unwrap() >= 1);
}

#[tokio::test]
async fn unknown_routes_return_the_error_envelope() {
    let server = test_server();

    let response = server.get("/api/nope").await;
    response.assert_status_not_found();

    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("/api/nope"));
    assert!(body["meta"].get("requestId").is_some());
}
