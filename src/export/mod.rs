// src/export/mod.rs

mod fs_utils;
mod json_csv;
pub mod logic;
mod model;
mod xlsx;

pub use logic::{FileExportSink, default_target};
pub use model::RecordExport;

use crate::errors::AppResult;
use crate::models::AttendanceRecord;
use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// The sink the ledger writes through when exporting. File-based in
/// production; tests substitute their own capturing implementation.
pub trait ExportSink {
    fn write(&self, records: &[AttendanceRecord], target: &Path) -> AppResult<()>;
}

/// Completion message shared by all formats.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ExportFormat {
    Xlsx,
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
