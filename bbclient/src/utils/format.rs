//! Cell formatting shared by the GUI tables and the CLI listings.

use chrono::{DateTime, Local, Utc};

/// Timestamp in the viewer's local timezone, minute precision.
pub fn timestamp(value: &DateTime<Utc>) -> String {
    value.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
}

/// Date-only rendering, used where the time of day is noise.
pub fn date(value: &DateTime<Utc>) -> String {
    value.with_timezone(&Local).format("%Y-%m-%d").to_string()
}

/// Optional timestamp with a fallback label ("Never", "-").
pub fn timestamp_or(value: Option<&DateTime<Utc>>, fallback: &str) -> String {
    value.map_or_else(|| fallback.to_string(), timestamp)
}

/// Optional date with a fallback label.
pub fn date_or(value: Option<&DateTime<Utc>>, fallback: &str) -> String {
    value.map_or_else(|| fallback.to_string(), date)
}

/// Positional reference number, zero-padded to three digits: row 1 renders
/// as "#001". Longer positions keep all their digits.
pub fn ref_number(position: usize) -> String {
    format!("#{position:03}")
}
