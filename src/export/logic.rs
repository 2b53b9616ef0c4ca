// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::RecordExport;
use crate::export::xlsx::export_xlsx;
use crate::export::{ExportFormat, ExportSink};
use crate::models::AttendanceRecord;
use chrono::NaiveDateTime;
use std::path::{Path, PathBuf};

/// File-based export sink: flattens the records and writes them in the
/// selected format.
pub struct FileExportSink {
    format: ExportFormat,
    force: bool,
}

impl FileExportSink {
    pub fn new(format: ExportFormat, force: bool) -> Self {
        Self { format, force }
    }
}

impl ExportSink for FileExportSink {
    fn write(&self, records: &[AttendanceRecord], target: &Path) -> AppResult<()> {
        if !target.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {}",
                target.display()
            )));
        }

        ensure_writable(target, self.force)?;

        let rows: Vec<RecordExport> = records.iter().map(RecordExport::from).collect();

        match self.format {
            ExportFormat::Csv => export_csv(&rows, target),
            ExportFormat::Json => export_json(&rows, target),
            ExportFormat::Xlsx => export_xlsx(&rows, target),
        }
    }
}

/// Default target: a timestamped filename under the configured export
/// directory, falling back to the platform downloads folder.
pub fn default_target(export_dir: &str, format: ExportFormat, now: NaiveDateTime) -> PathBuf {
    let dir = if export_dir.trim().is_empty() {
        dirs::download_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    } else {
        PathBuf::from(export_dir)
    };

    let filename = format!(
        "wfh_attendance_{}.{}",
        now.format("%Y%m%d_%H%M%S"),
        format.as_str()
    );

    dir.join(filename)
}
