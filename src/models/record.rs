use super::session::Session;
use crate::utils::time::format_duration;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// A closed, immutable pair of clock-in/out events with computed duration.
/// Created only by closing a session; never edited afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AttendanceRecord {
    pub user_id: String,
    pub display_name: String,
    pub date: NaiveDate,
    pub time_in: NaiveTime,
    pub time_out: NaiveTime,
    pub duration: String, // "HH:MM", whole minutes
}

impl AttendanceRecord {
    /// Closes `session` at `closed_at`.
    ///
    /// The duration is computed on the date-aware pair (clock-in instant,
    /// clock-out instant): a session spanning midnight yields the true
    /// elapsed time rather than a negative wrapped value.
    pub fn close(session: &Session, closed_at: NaiveDateTime) -> Self {
        let elapsed = closed_at.signed_duration_since(session.opened_at());

        Self {
            user_id: session.user_id.clone(),
            display_name: session.display_name.clone(),
            date: session.date,
            time_in: session.time_in,
            time_out: closed_at.time(),
            duration: format_duration(elapsed.num_minutes()),
        }
    }
}
