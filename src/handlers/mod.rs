pub mod health;
pub mod orders;
pub mod products;
pub mod spa;
pub mod users;

use chrono::{DateTime, SecondsFormat, Utc};

/// ISO-8601 with millisecond precision and a `Z` suffix, e.g.
/// `2026-01-01T12:00:00.000Z`.
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}
