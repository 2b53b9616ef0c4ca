// src/export/model.rs

use crate::models::AttendanceRecord;
use serde::Serialize;

/// Flat row for export, one per attendance record. Column order is fixed
/// and shared by every output format.
#[derive(Serialize, Clone, Debug)]
pub struct RecordExport {
    pub user_id: String,
    pub display_name: String,
    pub date: String,
    pub time_in: String,
    pub time_out: String,
    pub duration: String,
}

impl From<&AttendanceRecord> for RecordExport {
    fn from(r: &AttendanceRecord) -> Self {
        Self {
            user_id: r.user_id.clone(),
            display_name: r.display_name.clone(),
            date: r.date.format("%Y-%m-%d").to_string(),
            time_in: r.time_in.format("%H:%M:%S").to_string(),
            time_out: r.time_out.format("%H:%M:%S").to_string(),
            duration: r.duration.clone(),
        }
    }
}

/// Header for CSV / JSON / XLSX
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "user_id",
        "display_name",
        "date",
        "time_in",
        "time_out",
        "duration",
    ]
}

pub(crate) fn record_to_row(r: &RecordExport) -> Vec<String> {
    vec![
        r.user_id.clone(),
        r.display_name.clone(),
        r.date.clone(),
        r.time_in.clone(),
        r.time_out.clone(),
        r.duration.clone(),
    ]
}
