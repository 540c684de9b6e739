//! Clock access and countdown formatting.
//!
//! Everything downstream works in epoch milliseconds so persisted records stay
//! plain integers. [`now_millis`] is the only place the wall clock is read;
//! domain predicates take `now_ms` arguments instead of reading it themselves.

use chrono::Utc;

/// One second in milliseconds.
pub const SECOND_MS: i64 = 1_000;

/// One minute in milliseconds.
pub const MINUTE_MS: i64 = 60 * SECOND_MS;

/// One hour in milliseconds.
pub const HOUR_MS: i64 = 60 * MINUTE_MS;

/// Current time in milliseconds since the Unix epoch.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Format the time left until `expires_at` as a compact countdown.
///
/// The remainder is clamped at zero and decomposed into whole hours, minutes
/// within the hour, and seconds within the minute. Hours appear only when
/// nonzero; minutes appear when either hours or minutes are nonzero; seconds
/// always appear. `"1h 0m 5s"` keeps its zero minutes so the shape is stable
/// while an hour boundary passes.
pub fn format_remaining(expires_at: i64, now_ms: i64) -> String {
    let remaining = (expires_at - now_ms).max(0);
    let hours = remaining / HOUR_MS;
    let minutes = (remaining % HOUR_MS) / MINUTE_MS;
    let seconds = (remaining % MINUTE_MS) / SECOND_MS;

    let mut parts = Vec::with_capacity(3);
    if hours > 0 {
        parts.push(format!("{hours}h"));
    }
    if minutes > 0 || hours > 0 {
        parts.push(format!("{minutes}m"));
    }
    parts.push(format!("{seconds}s"));
    parts.join(" ")
}
