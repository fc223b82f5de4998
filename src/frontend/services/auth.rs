//! Authentication context and state management.
//!
//! This is the collaborator that writes the session the guard reads; the
//! guard itself never touches session state.

use crate::backend::session::SessionStore;
use dioxus::prelude::*;

#[derive(Clone)]
pub struct AuthState {
    pub store: SessionStore,
    pub current_user: Signal<Option<String>>,
}

impl AuthState {
    /// Restores a persisted session from a previous run, if any.
    pub fn restore(&mut self) {
        if let Some(record) = self.store.read() {
            if record.logged_in {
                self.current_user.set(Some(record.username));
            }
        }
    }

    /// Logs in with a username and persists the session.
    pub fn login(&mut self, username: String) -> Result<(), String> {
        match self.store.login(&username) {
            Ok(record) => {
                self.current_user.set(Some(record.username));
                Ok(())
            }
            Err(e) => Err(e.to_string()),
        }
    }

    /// Logs out the current user and clears the persisted session.
    pub fn logout(&mut self) {
        self.current_user.set(None);
        if let Err(e) = self.store.logout() {
            log::warn!("failed to clear session: {e}");
        }
    }

    /// Gets the current username or returns "Guest" as default.
    pub fn username(&self) -> String {
        self.current_user
            .read()
            .clone()
            .unwrap_or_else(|| "Guest".to_string())
    }
}
