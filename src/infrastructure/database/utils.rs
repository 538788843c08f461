//! Database utility functions.

use chrono::{DateTime, NaiveDateTime, Utc};

/// Parse a datetime from the formats found in the execution store.
///
/// The store writes RFC3339, but rows imported from other tooling may carry
/// SQLite's default format or a bare ISO 8601 timestamp, so parsing is
/// lenient:
/// - RFC3339: "2025-10-29T17:28:13Z", "2025-10-29T17:28:13+00:00"
/// - SQLite default: "2025-10-29 17:28:13"
/// - ISO 8601 without timezone: "2025-10-29T17:28:13"
///
/// Timestamps without a timezone are interpreted as UTC.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    if let Ok(naive_dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Ok(DateTime::<Utc>::from_naive_utc_and_offset(naive_dt, Utc));
    }

    if let Ok(naive_dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Ok(DateTime::<Utc>::from_naive_utc_and_offset(naive_dt, Utc));
    }

    // Surface the RFC3339 error if every format failed.
    DateTime::parse_from_rfc3339(s).map(|dt| dt.with_timezone(&Utc))
}
