pub mod app;
pub mod table;
pub mod views;

// Re-export main application type
pub use app::App;
