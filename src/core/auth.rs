//! Registration, login and account management.

use super::ledger::{ActiveLogin, Ledger};
use crate::errors::{AppError, AppResult};
use crate::models::{Role, Session, UserAccount};
use crate::utils::time::now_local;

/// Result of a successful login: the resolved role plus the caller's open
/// session, if one survived a previous run.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub user_id: String,
    pub display_name: String,
    pub role: Role,
    pub open_session: Option<Session>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogoutOutcome {
    LoggedOut,
    /// The active user still holds an open session; the front-end must ask
    /// for confirmation before retrying with `confirm = true`. Logout never
    /// closes the session itself.
    ConfirmationRequired,
    NotLoggedIn,
}

impl Ledger {
    pub(crate) fn find_account(&self, user_id: &str) -> Option<&UserAccount> {
        self.users.iter().find(|u| u.matches_id(user_id))
    }

    /// Registers a new account. Both the id and the display name must be
    /// unique across all accounts, compared case-insensitively.
    pub fn register(&mut self, user_id: &str, display_name: &str, role: Role) -> AppResult<UserAccount> {
        let account = UserAccount::new(user_id, display_name, role, now_local())?;

        for user in &self.users {
            if user.matches_id(&account.user_id) {
                return Err(AppError::DuplicateUser(format!(
                    "user ID '{}' is already registered to '{}'",
                    account.user_id, user.display_name
                )));
            }
            if user.matches_name(&account.display_name) {
                return Err(AppError::DuplicateUser(format!(
                    "display name '{}' is already registered to user ID '{}'",
                    account.display_name, user.user_id
                )));
            }
        }

        self.users.push(account.clone());
        self.save_users()?;

        Ok(account)
    }

    /// Role lookup by user id; unregistered ids fall back to regular.
    pub fn resolve_role(&self, user_id: &str) -> Role {
        self.find_account(user_id)
            .map(|u| u.role)
            .unwrap_or(Role::Regular)
    }

    /// Validates an identity assertion. This is not a password check: the
    /// display name is compared case-insensitively, same as the id.
    pub fn login(&mut self, user_id: &str, display_name: &str) -> AppResult<LoginOutcome> {
        let account = self
            .find_account(user_id)
            .ok_or_else(|| AppError::UnknownUser(user_id.to_string()))?;

        if !account.matches_name(display_name) {
            return Err(AppError::CredentialMismatch(format!(
                "user ID '{}' is registered to a different display name",
                account.user_id
            )));
        }

        let outcome = LoginOutcome {
            user_id: account.user_id.clone(),
            display_name: account.display_name.clone(),
            role: account.role,
            open_session: self.open_session_for(&account.user_id).cloned(),
        };

        self.active_login = Some(ActiveLogin {
            user_id: outcome.user_id.clone(),
            display_name: outcome.display_name.clone(),
            role: outcome.role,
        });

        Ok(outcome)
    }

    /// Clears the active-login pointer. If the user holds an open session
    /// the caller has to confirm first; the session itself stays open.
    pub fn logout(&mut self, confirm: bool) -> LogoutOutcome {
        let Some(active) = &self.active_login else {
            return LogoutOutcome::NotLoggedIn;
        };

        if self.open_session_for(&active.user_id).is_some() && !confirm {
            return LogoutOutcome::ConfirmationRequired;
        }

        self.active_login = None;
        LogoutOutcome::LoggedOut
    }

    /// Deletes an account (admin only). The reserved admin and the caller's
    /// own account are protected. Deleted accounts go to the archive
    /// collection rather than vanishing.
    pub fn delete_user(&mut self, caller_id: &str, user_id: &str) -> AppResult<UserAccount> {
        if !self.resolve_role(caller_id).is_admin() {
            return Err(AppError::Forbidden(
                "only administrators can manage users".into(),
            ));
        }

        let position = self
            .users
            .iter()
            .position(|u| u.matches_id(user_id))
            .ok_or_else(|| AppError::UnknownUser(user_id.to_string()))?;

        if self.users[position].is_reserved_admin() {
            return Err(AppError::Forbidden(
                "the reserved admin account cannot be deleted".into(),
            ));
        }
        if self.users[position].matches_id(caller_id) {
            return Err(AppError::Forbidden(
                "you cannot delete your own account".into(),
            ));
        }

        let removed = self.users.remove(position);
        self.save_users()?;

        self.archive.push(removed.clone());
        self.save_archive()?;

        Ok(removed)
    }
}
