pub mod api;
pub mod error;
pub mod format;

// Re-export important items for easier access
pub use api::ApiClient;
pub use error::{ClientError, Result};
