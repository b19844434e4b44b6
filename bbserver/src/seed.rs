//! Seeded fixture data served by every endpoint. Row identifiers are unique
//! per store; the client's selection model depends on that.

use chrono::{DateTime, TimeZone, Utc};

use crate::alert::model::{Alert, AlertSeverity, AlertStatus};
use crate::beacon::model::{Beacon, BeaconStatus};
use crate::user::model::{User, UserRole, UserStatus};

fn ts(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
}

pub fn users() -> Vec<User> {
    vec![
        User {
            id: "1".to_string(),
            name: "John Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            role: UserRole::Admin,
            status: UserStatus::Active,
            last_login: Some(ts(2024, 1, 15, 10, 30)),
            created_at: ts(2023, 12, 1, 9, 0),
            firmware_version: Some("v1.2.5".to_string()),
            tenant_id: None,
        },
        User {
            id: "2".to_string(),
            name: "Jane Smith".to_string(),
            email: "jane.smith@example.com".to_string(),
            role: UserRole::User,
            status: UserStatus::Active,
            last_login: Some(ts(2024, 1, 14, 16, 45)),
            created_at: ts(2023, 12, 2, 11, 30),
            firmware_version: Some("v1.2.3".to_string()),
            tenant_id: None,
        },
        User {
            id: "3".to_string(),
            name: "Bob Johnson".to_string(),
            email: "bob.johnson@example.com".to_string(),
            role: UserRole::Viewer,
            status: UserStatus::Inactive,
            last_login: Some(ts(2024, 1, 10, 8, 20)),
            created_at: ts(2023, 12, 3, 14, 15),
            firmware_version: Some("v1.1.9".to_string()),
            tenant_id: None,
        },
        User {
            id: "4".to_string(),
            name: "Alice Brown".to_string(),
            email: "alice.brown@example.com".to_string(),
            role: UserRole::User,
            status: UserStatus::Pending,
            last_login: None,
            created_at: ts(2023, 12, 4, 16, 45),
            firmware_version: Some("v1.2.4".to_string()),
            tenant_id: None,
        },
    ]
}

pub fn beacons() -> Vec<Beacon> {
    vec![
        Beacon {
            id: "1".to_string(),
            name: "Entrance Beacon".to_string(),
            mac_address: "AA:BB:CC:DD:EE:01".to_string(),
            location: "Main Entrance".to_string(),
            status: BeaconStatus::Online,
            battery_level: 85,
            last_seen: ts(2024, 1, 15, 10, 30),
            signal_strength: -45,
            firmware: "v2.1.0".to_string(),
            tenant_id: None,
        },
        Beacon {
            id: "2".to_string(),
            name: "Conference Room A".to_string(),
            mac_address: "AA:BB:CC:DD:EE:02".to_string(),
            location: "Conference Room A".to_string(),
            status: BeaconStatus::Online,
            battery_level: 92,
            last_seen: ts(2024, 1, 15, 10, 25),
            signal_strength: -38,
            firmware: "v2.1.0".to_string(),
            tenant_id: None,
        },
        Beacon {
            id: "3".to_string(),
            name: "Cafeteria Beacon".to_string(),
            mac_address: "AA:BB:CC:DD:EE:03".to_string(),
            location: "Cafeteria".to_string(),
            status: BeaconStatus::Offline,
            battery_level: 23,
            last_seen: ts(2024, 1, 14, 18, 45),
            signal_strength: -72,
            firmware: "v2.0.5".to_string(),
            tenant_id: None,
        },
        Beacon {
            id: "4".to_string(),
            name: "Parking Lot".to_string(),
            mac_address: "AA:BB:CC:DD:EE:04".to_string(),
            location: "North Parking".to_string(),
            status: BeaconStatus::Online,
            battery_level: 67,
            last_seen: ts(2024, 1, 15, 10, 20),
            signal_strength: -52,
            firmware: "v2.1.0".to_string(),
            tenant_id: None,
        },
        Beacon {
            id: "5".to_string(),
            name: "Emergency Exit".to_string(),
            mac_address: "AA:BB:CC:DD:EE:05".to_string(),
            location: "Emergency Exit B".to_string(),
            status: BeaconStatus::Maintenance,
            battery_level: 78,
            last_seen: ts(2024, 1, 15, 10, 28),
            signal_strength: -41,
            firmware: "v2.0.8".to_string(),
            tenant_id: None,
        },
    ]
}

pub fn alerts() -> Vec<Alert> {
    vec![
        Alert {
            id: "1".to_string(),
            title: "Low Battery Warning".to_string(),
            message: "Beacon in Cafeteria has low battery (23%)".to_string(),
            severity: AlertSeverity::Medium,
            status: AlertStatus::Active,
            source: "Beacon Monitor".to_string(),
            timestamp: ts(2024, 1, 15, 9, 30),
            resolved_at: None,
            assigned_to: None,
            tenant_id: None,
        },
        Alert {
            id: "2".to_string(),
            title: "Connection Lost".to_string(),
            message: "Lost connection to Parking Lot beacon".to_string(),
            severity: AlertSeverity::High,
            status: AlertStatus::Acknowledged,
            source: "Network Monitor".to_string(),
            timestamp: ts(2024, 1, 15, 8, 45),
            resolved_at: None,
            assigned_to: Some("John Doe".to_string()),
            tenant_id: None,
        },
        Alert {
            id: "3".to_string(),
            title: "Maintenance Required".to_string(),
            message: "Emergency Exit beacon scheduled for maintenance".to_string(),
            severity: AlertSeverity::Low,
            status: AlertStatus::Resolved,
            source: "Maintenance System".to_string(),
            timestamp: ts(2024, 1, 14, 16, 20),
            resolved_at: Some(ts(2024, 1, 15, 10, 0)),
            assigned_to: Some("Jane Smith".to_string()),
            tenant_id: None,
        },
        Alert {
            id: "4".to_string(),
            title: "Security Breach Detected".to_string(),
            message: "Unauthorized access attempt detected at Main Entrance".to_string(),
            severity: AlertSeverity::Critical,
            status: AlertStatus::Active,
            source: "Security System".to_string(),
            timestamp: ts(2024, 1, 15, 10, 15),
            resolved_at: None,
            assigned_to: None,
            tenant_id: None,
        },
        Alert {
            id: "5".to_string(),
            title: "Signal Strength Low".to_string(),
            message: "Conference Room A beacon signal strength below threshold".to_string(),
            severity: AlertSeverity::Medium,
            status: AlertStatus::Acknowledged,
            source: "Signal Monitor".to_string(),
            timestamp: ts(2024, 1, 15, 9, 50),
            resolved_at: None,
            assigned_to: Some("Bob Johnson".to_string()),
            tenant_id: None,
        },
        Alert {
            id: "6".to_string(),
            title: "System Update Available".to_string(),
            message: "Firmware update available for 3 beacons".to_string(),
            severity: AlertSeverity::Low,
            status: AlertStatus::Active,
            source: "Update Manager".to_string(),
            timestamp: ts(2024, 1, 15, 7, 30),
            resolved_at: None,
            assigned_to: None,
            tenant_id: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn assert_unique_ids<I: IntoIterator<Item = String>>(ids: I) {
        let ids: Vec<String> = ids.into_iter().collect();
        let unique: HashSet<&String> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn store_sizes() {
        assert_eq!(users().len(), 4);
        assert_eq!(beacons().len(), 5);
        assert_eq!(alerts().len(), 6);
    }

    #[test]
    fn ids_are_unique_within_each_store() {
        assert_unique_ids(users().into_iter().map(|u| u.id));
        assert_unique_ids(beacons().into_iter().map(|b| b.id));
        assert_unique_ids(alerts().into_iter().map(|a| a.id));
    }

    #[test]
    fn wire_format_is_camel_case() {
        let json = serde_json::to_value(&users()[0]).unwrap();
        assert_eq!(json["name"], "John Doe");
        assert_eq!(json["role"], "admin");
        assert!(json.get("lastLogin").is_some());
        assert!(json.get("last_login").is_none());

        let json = serde_json::to_value(&beacons()[0]).unwrap();
        assert_eq!(json["macAddress"], "AA:BB:CC:DD:EE:01");
        assert_eq!(json["batteryLevel"], 85);
    }

    #[test]
    fn absent_optionals_are_omitted() {
        let alice = &users()[3];
        let json = serde_json::to_value(alice).unwrap();
        assert!(json.get("lastLogin").is_none());
        assert!(json.get("tenantId").is_none());
    }
}
