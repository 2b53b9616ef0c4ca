//! Persistence gateway: one pretty-printed JSON file per collection under
//! the data directory. Collections are loaded once at startup and written
//! back whole after every mutation.

use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

pub mod collections {
    pub const USERS: &str = "registered_users";
    pub const SESSIONS: &str = "active_sessions";
    pub const RECORDS: &str = "attendance_records";
    pub const EXPORTS: &str = "export_history";
    pub const ARCHIVE: &str = "deleted_users_archive";
}

pub struct Store {
    dir: PathBuf,
}

impl Store {
    /// Opens the gateway, creating the data directory if needed.
    pub fn open(dir: &Path) -> AppResult<Self> {
        fs::create_dir_all(dir)?;
        Ok(Self {
            dir: dir.to_path_buf(),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn collection_file(&self, collection: &str) -> PathBuf {
        self.dir.join(format!("{collection}.json"))
    }

    /// Loads a collection. A missing file is a normal first run and yields
    /// an empty vec; an unreadable or unparsable file also degrades to
    /// empty, but with a warning, so a corrupted store never blocks login.
    pub fn load<T: DeserializeOwned>(&self, collection: &str) -> Vec<T> {
        let path = self.collection_file(collection);

        if !path.exists() {
            return Vec::new();
        }

        let content = match fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) => {
                warning(format!("Could not read {}: {e}", path.display()));
                return Vec::new();
            }
        };

        match serde_json::from_str(&content) {
            Ok(items) => items,
            Err(e) => {
                warning(format!("Could not parse {}: {e}", path.display()));
                Vec::new()
            }
        }
    }

    /// Saves a collection atomically: the JSON is written to a sibling temp
    /// file first and renamed over the target, so a crash mid-write never
    /// leaves a truncated collection behind. Failures surface as errors.
    pub fn save<T: Serialize>(&self, collection: &str, items: &[T]) -> AppResult<()> {
        let path = self.collection_file(collection);
        let tmp = self.dir.join(format!("{collection}.json.tmp"));

        let json = serde_json::to_string_pretty(items)
            .map_err(|e| AppError::Persistence(format!("serialize {collection}: {e}")))?;

        fs::write(&tmp, json)
            .map_err(|e| AppError::Persistence(format!("write {}: {e}", tmp.display())))?;
        fs::rename(&tmp, &path)
            .map_err(|e| AppError::Persistence(format!("replace {}: {e}", path.display())))?;

        Ok(())
    }
}
