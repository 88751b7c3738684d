//! Timestamp display.
//!
//! The backend sends ISO 8601 strings, sometimes without an offset
//! (naive UTC). All timestamps are rendered in the Asia/Kolkata zone in
//! `en-IN` style: `15/1/2024, 3:30:00 pm`. Kolkata has a fixed +05:30
//! offset and no DST, so a `FixedOffset` is exact.

use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};

/// Asia/Kolkata is UTC+05:30 year-round.
const IST_OFFSET_SECS: i32 = 5 * 3600 + 30 * 60;

fn ist() -> FixedOffset {
    FixedOffset::east_opt(IST_OFFSET_SECS).expect("valid IST offset")
}

/// Parses an ISO timestamp, accepting both offset-carrying RFC 3339
/// strings and the backend's naive form (interpreted as UTC).
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

/// Renders an ISO timestamp in Asia/Kolkata, `en-IN` style. Unparseable
/// input is returned as-is rather than dropped.
pub fn display_ist(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(dt) => dt
            .with_timezone(&ist())
            .format("%-d/%-m/%Y, %-I:%M:%S %P")
            .to_string(),
        None => raw.to_string(),
    }
}

/// Display form for optional timestamps; empty string when absent.
pub fn display_ist_opt(raw: Option<&str>) -> String {
    raw.map(display_ist).unwrap_or_default()
}

/// True when an `updated_at` value differs from `created_at`, i.e. the
/// record should carry an edited marker.
pub fn was_edited(created_at: Option<&str>, updated_at: Option<&str>) -> bool {
    match (created_at, updated_at) {
        (Some(c), Some(u)) => c != u,
        (None, Some(_)) => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests;
