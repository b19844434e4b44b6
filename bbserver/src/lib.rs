//! Mock management API for the BeaconBoard dashboard. Serves seeded fleet
//! data with simulated latency so the client can be developed and tested
//! without real infrastructure behind it.

pub mod alert;
pub mod beacon;
pub mod config;
pub mod error;
pub mod health;
pub mod metrics;
pub mod response;
pub mod router;
pub mod seed;
pub mod state;
pub mod tenant;
pub mod user;
