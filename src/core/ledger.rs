//! The attendance ledger: exclusive owner of the user, session, record and
//! export collections. Collections are loaded once at startup, mutated in
//! memory and written back through the store after every change.

use crate::config::RetentionPolicy;
use crate::errors::AppResult;
use crate::models::user::{RESERVED_ADMIN_ID, RESERVED_ADMIN_NAME};
use crate::models::{AttendanceRecord, ExportEvent, Role, Session, UserAccount};
use crate::store::{Store, collections};
use crate::utils::time::now_local;

/// The user currently logged in on this front-end, held in memory only.
#[derive(Debug, Clone)]
pub struct ActiveLogin {
    pub user_id: String,
    pub display_name: String,
    pub role: Role,
}

pub struct Ledger {
    pub(crate) store: Store,
    pub(crate) retention: RetentionPolicy,
    pub(crate) users: Vec<UserAccount>,
    pub(crate) sessions: Vec<Session>,
    pub(crate) records: Vec<AttendanceRecord>,
    pub(crate) exports: Vec<ExportEvent>,
    pub(crate) archive: Vec<UserAccount>,
    pub(crate) active_login: Option<ActiveLogin>,
}

impl Ledger {
    /// Loads every collection and seeds the reserved admin account if this
    /// is a fresh store.
    pub fn open(store: Store, retention: RetentionPolicy) -> AppResult<Self> {
        let users = store.load(collections::USERS);
        let sessions = store.load(collections::SESSIONS);
        let records = store.load(collections::RECORDS);
        let exports = store.load(collections::EXPORTS);
        let archive = store.load(collections::ARCHIVE);

        let mut ledger = Self {
            store,
            retention,
            users,
            sessions,
            records,
            exports,
            archive,
            active_login: None,
        };
        ledger.seed_reserved_admin()?;

        Ok(ledger)
    }

    /// The "admin"/"admin" account always exists and cannot be deleted.
    fn seed_reserved_admin(&mut self) -> AppResult<()> {
        if self.users.iter().any(|u| u.is_reserved_admin()) {
            return Ok(());
        }

        let admin = UserAccount::new(
            RESERVED_ADMIN_ID,
            RESERVED_ADMIN_NAME,
            Role::Admin,
            now_local(),
        )?;
        self.users.push(admin);
        self.save_users()
    }

    // ---------------------------
    // Read access
    // ---------------------------

    pub fn users(&self) -> &[UserAccount] {
        &self.users
    }

    pub fn open_sessions(&self) -> &[Session] {
        &self.sessions
    }

    pub fn records(&self) -> &[AttendanceRecord] {
        &self.records
    }

    pub fn export_history(&self) -> &[ExportEvent] {
        &self.exports
    }

    pub fn active_login(&self) -> Option<&ActiveLogin> {
        self.active_login.as_ref()
    }

    /// Records visible to a caller: admins see everything, everyone else
    /// sees only their own rows.
    pub fn records_for(&self, role: Role, user_id: &str) -> Vec<&AttendanceRecord> {
        self.records
            .iter()
            .filter(|r| role.is_admin() || r.user_id.eq_ignore_ascii_case(user_id))
            .collect()
    }

    /// The open session for a user, if any. Session identities are stored
    /// in the account's registered casing, so this lookup can stay
    /// case-insensitive without breaking the one-session invariant.
    pub fn open_session_for(&self, user_id: &str) -> Option<&Session> {
        self.sessions
            .iter()
            .find(|s| s.user_id.eq_ignore_ascii_case(user_id))
    }

    // ---------------------------
    // Persistence
    // ---------------------------

    pub(crate) fn save_users(&self) -> AppResult<()> {
        self.store.save(collections::USERS, &self.users)
    }

    pub(crate) fn save_sessions(&self) -> AppResult<()> {
        self.store.save(collections::SESSIONS, &self.sessions)
    }

    pub(crate) fn save_records(&self) -> AppResult<()> {
        self.store.save(collections::RECORDS, &self.records)
    }

    pub(crate) fn save_exports(&self) -> AppResult<()> {
        self.store.save(collections::EXPORTS, &self.exports)
    }

    pub(crate) fn save_archive(&self) -> AppResult<()> {
        self.store.save(collections::ARCHIVE, &self.archive)
    }
}
