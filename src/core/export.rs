//! Role-gated export of attendance records.
//!
//! Policy: elevated users export the whole record set, after which the
//! retention policy decides what is cleared; administrators never export
//! live data, they only list and redistribute artifacts produced by
//! elevated users. Regular users cannot export at all.

use super::ledger::Ledger;
use crate::config::RetentionPolicy;
use crate::errors::{AppError, AppResult};
use crate::export::ExportSink;
use crate::models::{ExportEvent, Session};
use chrono::NaiveDateTime;
use std::fs;
use std::path::Path;

/// What an export produced, for the front-end to report.
#[derive(Debug, Clone)]
pub struct ExportOutcome {
    pub filepath: String,
    pub record_count: usize,
    /// Session opened for the exporter right after the export, if any.
    pub new_session: Option<Session>,
}

impl Ledger {
    /// Exports every current attendance record through `sink` to `target`.
    ///
    /// Elevated role only. On success an audit event is appended, the
    /// retention policy is applied, and a new session is opened for the
    /// caller if none is open (the exporter keeps working).
    pub fn export_records(
        &mut self,
        user_id: &str,
        sink: &dyn ExportSink,
        target: &Path,
        now: NaiveDateTime,
    ) -> AppResult<ExportOutcome> {
        let account = self
            .find_account(user_id)
            .ok_or_else(|| AppError::UnknownUser(user_id.to_string()))?;
        let role = account.role;
        let canonical_id = account.user_id.clone();
        let canonical_name = account.display_name.clone();

        if role.is_admin() {
            return Err(AppError::Forbidden(
                "administrators redistribute export artifacts instead of exporting live data".into(),
            ));
        }
        if !role.is_elevated() {
            return Err(AppError::Forbidden(
                "only elevated users can export attendance records".into(),
            ));
        }

        if self.records.is_empty() {
            return Err(AppError::NothingToExport);
        }

        sink.write(&self.records, target)?;
        let record_count = self.records.len();

        self.exports.push(ExportEvent {
            timestamp: now,
            filepath: target.to_string_lossy().to_string(),
            record_count,
            user_id: canonical_id.clone(),
            role,
        });
        self.save_exports()?;

        match self.retention {
            RetentionPolicy::ClearAll => self.records.clear(),
            RetentionPolicy::ClearOwn => self
                .records
                .retain(|r| !r.user_id.eq_ignore_ascii_case(&canonical_id)),
            RetentionPolicy::KeepAll => {}
        }
        self.save_records()?;

        let new_session = if self.open_session_for(&canonical_id).is_none() {
            Some(self.clock_in(&canonical_id, &canonical_name, now)?)
        } else {
            None
        };

        Ok(ExportOutcome {
            filepath: target.to_string_lossy().to_string(),
            record_count,
            new_session,
        })
    }

    /// Copies a previously exported artifact to `dest` (admin only).
    /// `index` is 1-based, as printed by the history listing.
    pub fn copy_artifact(&self, caller_id: &str, index: usize, dest: &Path) -> AppResult<ExportEvent> {
        if !self.resolve_role(caller_id).is_admin() {
            return Err(AppError::Forbidden(
                "only administrators can redistribute export artifacts".into(),
            ));
        }

        let event = index
            .checked_sub(1)
            .and_then(|i| self.exports.get(i))
            .ok_or_else(|| AppError::Export(format!("no export artifact #{index}")))?;

        fs::copy(&event.filepath, dest)
            .map_err(|e| AppError::Export(format!("copy {}: {e}", event.filepath)))?;

        Ok(event.clone())
    }
}
