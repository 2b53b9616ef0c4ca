//! Session lifecycle: NoSession -> Open -> Closed.
//! Closing a session is the only way an attendance record is created.

use super::ledger::Ledger;
use crate::errors::{AppError, AppResult};
use crate::models::{AttendanceRecord, Session};
use chrono::NaiveDateTime;

impl Ledger {
    /// Opens a session at `now`. The identity is validated like a login and
    /// the session stores the account's registered casing, which keeps the
    /// one-open-session-per-user invariant independent of how the id was
    /// typed.
    pub fn clock_in(
        &mut self,
        user_id: &str,
        display_name: &str,
        now: NaiveDateTime,
    ) -> AppResult<Session> {
        let account = self
            .find_account(user_id)
            .ok_or_else(|| AppError::UnknownUser(user_id.to_string()))?;

        if !account.matches_name(display_name) {
            return Err(AppError::CredentialMismatch(format!(
                "user ID '{}' is registered to a different display name",
                account.user_id
            )));
        }

        let canonical_id = account.user_id.clone();
        let canonical_name = account.display_name.clone();

        if self.open_session_for(&canonical_id).is_some() {
            return Err(AppError::AlreadyOpen(canonical_id));
        }

        let session = Session::open(&canonical_id, &canonical_name, now);
        self.sessions.push(session.clone());
        self.save_sessions()?;

        Ok(session)
    }

    /// Closes a session at `now` and appends the attendance record.
    ///
    /// The asserted identity must match the session exactly, including
    /// case. This is deliberately stricter than login: the punch belongs to
    /// whoever opened it, and a near-miss is treated as the wrong person.
    pub fn clock_out(
        &mut self,
        session_id: &str,
        asserted_user_id: &str,
        asserted_display_name: &str,
        now: NaiveDateTime,
    ) -> AppResult<AttendanceRecord> {
        let position = self
            .sessions
            .iter()
            .position(|s| s.session_id == session_id)
            .ok_or_else(|| AppError::SessionNotFound(session_id.to_string()))?;

        if !self.sessions[position].matches_exactly(asserted_user_id, asserted_display_name) {
            let s = &self.sessions[position];
            return Err(AppError::CredentialMismatch(format!(
                "session belongs to '{}' ({})",
                s.display_name, s.user_id
            )));
        }

        self.close_session(position, now)
    }

    /// Admin-initiated close of another user's session: same effect as
    /// `clock_out` without the identity assertion.
    pub fn force_clock_out(
        &mut self,
        caller_id: &str,
        session_id: &str,
        now: NaiveDateTime,
    ) -> AppResult<AttendanceRecord> {
        if !self.resolve_role(caller_id).is_admin() {
            return Err(AppError::Forbidden(
                "only administrators can force a time-out".into(),
            ));
        }

        let position = self
            .sessions
            .iter()
            .position(|s| s.session_id == session_id)
            .ok_or_else(|| AppError::SessionNotFound(session_id.to_string()))?;

        self.close_session(position, now)
    }

    /// Opens a fresh session without requiring a prior one to be closed by
    /// the same front-end run. Gated to the elevated role; otherwise it is
    /// exactly `clock_in`, not a new state.
    pub fn auto_new_session(
        &mut self,
        user_id: &str,
        display_name: &str,
        now: NaiveDateTime,
    ) -> AppResult<Session> {
        if !self.resolve_role(user_id).is_elevated() {
            return Err(AppError::Forbidden(
                "only elevated users can open auto sessions".into(),
            ));
        }

        self.clock_in(user_id, display_name, now)
    }

    fn close_session(&mut self, position: usize, now: NaiveDateTime) -> AppResult<AttendanceRecord> {
        let session = self.sessions.remove(position);
        let record = AttendanceRecord::close(&session, now);

        self.records.push(record.clone());
        self.save_records()?;
        self.save_sessions()?;

        Ok(record)
    }
}
