use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Account role, assigned at registration only.
/// Replaces the parallel admin/elevated lookup lists of older data layouts
/// with a single field on the account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Elevated,
    Regular,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Elevated => "elevated",
            Role::Regular => "regular",
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }

    pub fn is_elevated(&self) -> bool {
        matches!(self, Role::Elevated)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
