use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::table::{SortKey, TableRow};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BeaconStatus {
    Online,
    Offline,
    Maintenance,
}

impl BeaconStatus {
    pub fn label(&self) -> &'static str {
        match self {
            BeaconStatus::Online => "online",
            BeaconStatus::Offline => "offline",
            BeaconStatus::Maintenance => "maintenance",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Beacon {
    pub id: String,
    pub name: String,
    pub mac_address: String,
    pub location: String,
    pub status: BeaconStatus,
    pub battery_level: u8,
    pub last_seen: DateTime<Utc>,
    pub signal_strength: i32,
    pub firmware: String,
    pub tenant_id: Option<String>,
}

/// Sortable columns of the beacons table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BeaconField {
    Name,
    Location,
    Status,
    Battery,
    LastSeen,
}

impl TableRow for Beacon {
    type Field = BeaconField;

    fn id(&self) -> &str {
        &self.id
    }

    fn sort_key(&self, field: BeaconField) -> SortKey {
        match field {
            BeaconField::Name => SortKey::text(&self.name),
            BeaconField::Location => SortKey::text(&self.location),
            BeaconField::Status => SortKey::text(self.status.label()),
            BeaconField::Battery => SortKey::Int(i64::from(self.battery_level)),
            BeaconField::LastSeen => SortKey::instant(Some(&self.last_seen)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{SortDirection, SortState};

    fn beacon(id: &str, name: &str, battery: u8, status: BeaconStatus) -> Beacon {
        Beacon {
            id: id.to_string(),
            name: name.to_string(),
            mac_address: format!("AA:BB:CC:DD:EE:0{id}"),
            location: name.to_string(),
            status,
            battery_level: battery,
            last_seen: "2024-01-15T10:30:00Z".parse().unwrap(),
            signal_strength: -45,
            firmware: "v2.1.0".to_string(),
            tenant_id: None,
        }
    }

    fn fleet() -> Vec<Beacon> {
        vec![
            beacon("1", "Entrance Beacon", 85, BeaconStatus::Online),
            beacon("2", "Conference Room A", 92, BeaconStatus::Online),
            beacon("3", "Cafeteria Beacon", 23, BeaconStatus::Offline),
            beacon("4", "Parking Lot", 67, BeaconStatus::Online),
            beacon("5", "Emergency Exit", 78, BeaconStatus::Maintenance),
        ]
    }

    #[test]
    fn battery_sorts_numerically() {
        let rows = fleet();
        let mut sort: SortState<BeaconField> = SortState::default();
        sort.toggle(BeaconField::Battery);

        let batteries: Vec<u8> = sort.apply(&rows).iter().map(|b| b.battery_level).collect();
        assert_eq!(batteries, vec![23, 67, 78, 85, 92]);
    }

    #[test]
    fn descending_battery_is_the_exact_reverse() {
        let rows = fleet();
        let mut sort: SortState<BeaconField> = SortState::default();
        sort.toggle(BeaconField::Battery);
        sort.toggle(BeaconField::Battery);
        assert_eq!(
            sort.direction_of(BeaconField::Battery),
            Some(SortDirection::Descending)
        );

        let batteries: Vec<u8> = sort.apply(&rows).iter().map(|b| b.battery_level).collect();
        assert_eq!(batteries, vec![92, 85, 78, 67, 23]);
    }

    #[test]
    fn name_sort_is_case_insensitive() {
        let mut rows = fleet();
        rows[0].name = "entrance beacon".to_string();
        let mut sort: SortState<BeaconField> = SortState::default();
        sort.toggle(BeaconField::Name);

        let names: Vec<&str> = sort.apply(&rows).iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names[0], "Cafeteria Beacon");
        assert_eq!(names[2], "entrance beacon");
    }

    #[test]
    fn status_sorts_as_text() {
        let rows = fleet();
        let mut sort: SortState<BeaconField> = SortState::default();
        sort.toggle(BeaconField::Status);

        let statuses: Vec<BeaconStatus> = sort.apply(&rows).iter().map(|b| b.status).collect();
        // maintenance < offline < online, alphabetically
        assert_eq!(statuses[0], BeaconStatus::Maintenance);
        assert_eq!(statuses[1], BeaconStatus::Offline);
        assert!(statuses[2..].iter().all(|s| *s == BeaconStatus::Online));
    }
}
