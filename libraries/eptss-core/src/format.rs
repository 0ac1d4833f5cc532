//! Human-readable durations
//!
//! Two renderings are used by playlist hosts: a clock style (`3:45`,
//! `1:02:09`) for track rows and the playlist header, and a short style
//! (`3m 45s`, `1h 23m`) for compact labels.

/// Placeholder shown when a duration is unknown or nonsensical
pub const UNKNOWN_DURATION: &str = "--:--";

/// Split whole seconds into (hours, minutes, seconds)
fn split(seconds: f64) -> (u64, u64, u64) {
    let total = seconds.floor() as u64;
    (total / 3600, (total % 3600) / 60, total % 60)
}

/// Format seconds as `m:ss`, or `h:mm:ss` once the duration reaches an hour
///
/// Non-finite or negative input renders as [`UNKNOWN_DURATION`].
pub fn format_duration(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return UNKNOWN_DURATION.to_string();
    }

    let (hours, minutes, secs) = split(seconds);
    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{}:{:02}", minutes, secs)
    }
}

/// Format seconds as a short label such as `3m 45s` or `1h 23m`
///
/// Zero components are skipped. With `include_seconds` off, anything under a
/// minute renders as `0m`. Non-finite or negative input is treated as zero.
pub fn format_duration_short(seconds: f64, include_seconds: bool) -> String {
    let seconds = if seconds.is_finite() && seconds > 0.0 {
        seconds
    } else {
        0.0
    };

    let (hours, minutes, secs) = split(seconds);
    let mut parts = Vec::with_capacity(3);

    if hours > 0 {
        parts.push(format!("{}h", hours));
    }
    if minutes > 0 {
        parts.push(format!("{}m", minutes));
    }
    if include_seconds && (secs > 0 || parts.is_empty()) {
        parts.push(format!("{}s", secs));
    }

    if parts.is_empty() {
        return "0m".to_string();
    }
    parts.join(" ")
}
