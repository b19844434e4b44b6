use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::table::{SortKey, TableRow};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    User,
    Viewer,
}

impl UserRole {
    pub fn label(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::User => "user",
            UserRole::Viewer => "viewer",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Inactive,
    Pending,
}

impl UserStatus {
    pub fn label(&self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Inactive => "inactive",
            UserStatus::Pending => "pending",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub status: UserStatus,
    /// Absent for accounts that have never signed in.
    pub last_login: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub firmware_version: Option<String>,
    pub tenant_id: Option<String>,
}

/// Sortable columns of the users table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserField {
    Name,
    Role,
    Status,
    LastLogin,
    Firmware,
    CreatedAt,
}

impl TableRow for User {
    type Field = UserField;

    fn id(&self) -> &str {
        &self.id
    }

    fn sort_key(&self, field: UserField) -> SortKey {
        match field {
            UserField::Name => SortKey::text(&self.name),
            UserField::Role => SortKey::text(self.role.label()),
            UserField::Status => SortKey::text(self.status.label()),
            UserField::LastLogin => SortKey::instant(self.last_login.as_ref()),
            UserField::Firmware => SortKey::text(self.firmware_version.as_deref().unwrap_or("")),
            UserField::CreatedAt => SortKey::instant(Some(&self.created_at)),
        }
    }
}
