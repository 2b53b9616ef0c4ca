use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// An open clock-in awaiting a matching clock-out.
///
/// Invariant (enforced by the ledger): at most one open session per user_id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub session_id: String,
    pub user_id: String,
    pub display_name: String,
    pub date: NaiveDate,    // "YYYY-MM-DD"
    pub time_in: NaiveTime, // "HH:MM:SS"
}

impl Session {
    /// Opens a session at `now`. The id is unique per (user_id, second).
    pub fn open(user_id: &str, display_name: &str, now: NaiveDateTime) -> Self {
        Self {
            session_id: generate_session_id(user_id, now),
            user_id: user_id.to_string(),
            display_name: display_name.to_string(),
            date: now.date(),
            time_in: now.time(),
        }
    }

    /// Clock-in instant with its date attached, used for duration math.
    pub fn opened_at(&self) -> NaiveDateTime {
        self.date.and_time(self.time_in)
    }

    /// Clock-out identity check is exact and case-sensitive, stricter than
    /// the case-insensitive login match.
    pub fn matches_exactly(&self, user_id: &str, display_name: &str) -> bool {
        self.user_id == user_id && self.display_name == display_name
    }
}

pub fn generate_session_id(user_id: &str, now: NaiveDateTime) -> String {
    format!("{}_{}", user_id, now.format("%Y%m%d%H%M%S"))
}
