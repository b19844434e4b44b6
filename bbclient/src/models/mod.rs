pub mod alert;
pub mod beacon;
pub mod dashboard;
pub mod health;
pub mod user;
pub mod view;

// Re-export common types for easier access
pub use alert::{Alert, AlertField, AlertSeverity, AlertStatus};
pub use beacon::{Beacon, BeaconField, BeaconStatus};
pub use dashboard::{TenantDashboard, TenantSummary};
pub use health::HealthBrief;
pub use user::{User, UserField, UserRole, UserStatus};
pub use view::View;
