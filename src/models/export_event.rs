use super::role::Role;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Append-only audit entry written after every successful export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportEvent {
    pub timestamp: NaiveDateTime,
    pub filepath: String,
    pub record_count: usize,
    pub user_id: String,
    pub role: Role,
}
