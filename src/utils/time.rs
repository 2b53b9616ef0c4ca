//! Time utilities: the current instant and duration formatting.

use chrono::{Local, NaiveDateTime};

/// Wall-clock "now" without timezone, the instant every operation stamps.
pub fn now_local() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Formats whole minutes as "HH:MM". Hours may exceed 24 for sessions
/// spanning more than a day.
pub fn format_duration(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{:02}:{:02}", sign, m / 60, m % 60)
}
