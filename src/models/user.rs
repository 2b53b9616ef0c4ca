use super::role::Role;
use crate::errors::{AppError, AppResult};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Reserved account seeded on first open; it can never be deleted.
pub const RESERVED_ADMIN_ID: &str = "admin";
pub const RESERVED_ADMIN_NAME: &str = "admin";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAccount {
    pub user_id: String,
    pub display_name: String,
    pub role: Role,
    pub registered_at: NaiveDateTime, // serialized ISO8601 ("%Y-%m-%dT%H:%M:%S")
}

impl UserAccount {
    /// Validating constructor: ids and names must be non-blank.
    pub fn new(
        user_id: &str,
        display_name: &str,
        role: Role,
        registered_at: NaiveDateTime,
    ) -> AppResult<Self> {
        let user_id = user_id.trim();
        let display_name = display_name.trim();

        if user_id.is_empty() {
            return Err(AppError::InvalidAccount("user_id must not be empty".into()));
        }
        if display_name.is_empty() {
            return Err(AppError::InvalidAccount(
                "display_name must not be empty".into(),
            ));
        }

        Ok(Self {
            user_id: user_id.to_string(),
            display_name: display_name.to_string(),
            role,
            registered_at,
        })
    }

    /// Identity matching for login is case-insensitive on both fields.
    pub fn matches_id(&self, user_id: &str) -> bool {
        self.user_id.eq_ignore_ascii_case(user_id)
    }

    pub fn matches_name(&self, display_name: &str) -> bool {
        self.display_name.eq_ignore_ascii_case(display_name)
    }

    pub fn is_reserved_admin(&self) -> bool {
        self.user_id.eq_ignore_ascii_case(RESERVED_ADMIN_ID)
    }
}
