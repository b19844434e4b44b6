pub mod alerts;
pub mod beacons;
pub mod dashboard;
pub mod settings;
pub mod users;
