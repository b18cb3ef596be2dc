//! UTC timestamps at second resolution.

use chrono::{DateTime, SubsecRound, Utc};

/// Output format for every recorded timestamp, e.g. `2026-01-15T10:30:00Z`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Returns the current UTC time truncated to whole seconds.
pub fn now_utc() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(0)
}

/// Formats a timestamp as `YYYY-MM-DDTHH:MM:SSZ`.
///
/// Fractional seconds are dropped, never rounded.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Returns the current UTC time formatted as `YYYY-MM-DDTHH:MM:SSZ`.
pub fn now_utc_iso8601() -> String {
    format_timestamp(now_utc())
}
