use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::table::{SortKey, TableRow};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl AlertSeverity {
    pub fn label(&self) -> &'static str {
        match self {
            AlertSeverity::Low => "low",
            AlertSeverity::Medium => "medium",
            AlertSeverity::High => "high",
            AlertSeverity::Critical => "critical",
        }
    }

    /// Fixed ordering used when sorting by severity: low < medium < high <
    /// critical, regardless of the labels' alphabetical order.
    pub fn rank(&self) -> u8 {
        match self {
            AlertSeverity::Low => 1,
            AlertSeverity::Medium => 2,
            AlertSeverity::High => 3,
            AlertSeverity::Critical => 4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertStatus {
    Active,
    Acknowledged,
    Resolved,
}

impl AlertStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AlertStatus::Active => "active",
            AlertStatus::Acknowledged => "acknowledged",
            AlertStatus::Resolved => "resolved",
        }
    }

    /// Fixed ordering used when sorting by status: resolved < acknowledged
    /// < active, so an ascending sort surfaces the settled alerts first.
    pub fn rank(&self) -> u8 {
        match self {
            AlertStatus::Resolved => 1,
            AlertStatus::Acknowledged => 2,
            AlertStatus::Active => 3,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: String,
    pub title: String,
    pub message: String,
    pub severity: AlertSeverity,
    pub status: AlertStatus,
    pub source: String,
    pub timestamp: DateTime<Utc>,
    pub resolved_at: Option<DateTime<Utc>>,
    pub assigned_to: Option<String>,
    pub tenant_id: Option<String>,
}

/// Sortable columns of the alerts table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertField {
    Title,
    Severity,
    Status,
    Source,
    Timestamp,
    ResolvedAt,
}

impl TableRow for Alert {
    type Field = AlertField;

    fn id(&self) -> &str {
        &self.id
    }

    fn sort_key(&self, field: AlertField) -> SortKey {
        match field {
            AlertField::Title => SortKey::text(&self.title),
            AlertField::Severity => SortKey::rank(self.severity.rank()),
            AlertField::Status => SortKey::rank(self.status.rank()),
            AlertField::Source => SortKey::text(&self.source),
            AlertField::Timestamp => SortKey::instant(Some(&self.timestamp)),
            AlertField::ResolvedAt => SortKey::instant(self.resolved_at.as_ref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::SortState;

    fn alert(id: &str, severity: AlertSeverity, status: AlertStatus) -> Alert {
        Alert {
            id: id.to_string(),
            title: format!("Alert {id}"),
            message: String::new(),
            severity,
            status,
            source: "Test".to_string(),
            timestamp: "2024-01-15T09:30:00Z".parse().unwrap(),
            resolved_at: None,
            assigned_to: None,
            tenant_id: None,
        }
    }

    #[test]
    fn severity_sorts_by_rank_not_alphabetically() {
        let rows = vec![
            alert("1", AlertSeverity::Critical, AlertStatus::Active),
            alert("2", AlertSeverity::Low, AlertStatus::Active),
            alert("3", AlertSeverity::High, AlertStatus::Active),
            alert("4", AlertSeverity::Medium, AlertStatus::Active),
        ];
        let mut sort: SortState<AlertField> = SortState::default();
        sort.toggle(AlertField::Severity);

        let order: Vec<AlertSeverity> = sort.apply(&rows).iter().map(|a| a.severity).collect();
        assert_eq!(
            order,
            vec![
                AlertSeverity::Low,
                AlertSeverity::Medium,
                AlertSeverity::High,
                AlertSeverity::Critical,
            ]
        );
    }

    #[test]
    fn status_sorts_resolved_before_active() {
        let rows = vec![
            alert("1", AlertSeverity::Low, AlertStatus::Active),
            alert("2", AlertSeverity::Low, AlertStatus::Resolved),
            alert("3", AlertSeverity::Low, AlertStatus::Acknowledged),
        ];
        let mut sort: SortState<AlertField> = SortState::default();
        sort.toggle(AlertField::Status);

        let order: Vec<AlertStatus> = sort.apply(&rows).iter().map(|a| a.status).collect();
        assert_eq!(
            order,
            vec![
                AlertStatus::Resolved,
                AlertStatus::Acknowledged,
                AlertStatus::Active,
            ]
        );
    }

    #[test]
    fn missing_resolved_at_sorts_first_ascending() {
        let mut resolved = alert("1", AlertSeverity::Low, AlertStatus::Resolved);
        resolved.resolved_at = Some("2024-01-15T10:00:00Z".parse().unwrap());
        let unresolved = alert("2", AlertSeverity::Low, AlertStatus::Active);

        let rows = vec![resolved, unresolved];
        let mut sort: SortState<AlertField> = SortState::default();
        sort.toggle(AlertField::ResolvedAt);

        let ids: Vec<&str> = sort.apply(&rows).iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1"]);
    }
}
