//! File-backed login session.
//!
//! The session is a single JSON record under the app directory. The guard
//! only ever asks "is someone logged in right now?" through [`SessionStatus`];
//! writing the record is the job of the login and logout actions.

use crate::backend::paths::get_app_dir;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;

/// Capability the navigation guard consumes. Implementations must answer
/// from current state on every call, not from a cached snapshot.
pub trait SessionStatus {
    fn is_logged_in(&self) -> bool;
}

pub type SharedSession = Arc<dyn SessionStatus + Send + Sync>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecord {
    pub logged_in: bool,
    pub username: String,
    pub since: DateTime<Utc>,
}

/// Store for the session record, addressed by file path so tests can point
/// it at a scratch directory.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Store at the default location (`session.json` in the app directory).
    pub fn open_default() -> Self {
        let path = get_app_dir()
            .unwrap_or_else(|_| PathBuf::from("HRDesk"))
            .join("session.json");
        Self { path }
    }

    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    /// Validates if a username meets the requirements.
    pub fn is_valid_username(username: &str) -> bool {
        (3..=16).contains(&username.len())
            && username
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_')
    }

    /// Reads the current record. A missing or unreadable file means there is
    /// no session.
    pub fn read(&self) -> Option<SessionRecord> {
        let json = std::fs::read_to_string(&self.path).ok()?;
        serde_json::from_str(&json).ok()
    }

    /// Writes a fresh logged-in record for `username`.
    pub fn login(&self, username: &str) -> anyhow::Result<SessionRecord> {
        if !Self::is_valid_username(username) {
            anyhow::bail!(
                "Username must be 3-16 characters long and can only contain letters, numbers, and underscores"
            );
        }

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let record = SessionRecord {
            logged_in: true,
            username: username.to_string(),
            since: Utc::now(),
        };
        let json = serde_json::to_string_pretty(&record)?;
        std::fs::write(&self.path, json)?;

        log::info!("session opened for {username}");
        Ok(record)
    }

    /// Removes the session record.
    pub fn logout(&self) -> anyhow::Result<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
            log::info!("session closed");
        }
        Ok(())
    }
}

impl SessionStatus for SessionStore {
    fn is_logged_in(&self) -> bool {
        self.read().is_some_and(|record| record.logged_in)
    }
}
