//! `localStorage` backed session store

use super::{SessionRecord, SessionStore};
use crate::config::ShellConfig;
use crate::error::SessionError;
use web_sys::Storage;

/// Finds the storage area, `None` when the browser denies access
type StorageLookup = fn() -> Option<Storage>;

/// Get localStorage
fn get_local_storage() -> Option<Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Reads and clears the session record in the browser's `localStorage`
#[derive(Clone, Debug)]
pub struct BrowserSessionStore {
    key: String,
    lookup: StorageLookup,
}

impl BrowserSessionStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            lookup: get_local_storage,
        }
    }

    #[cfg(test)]
    pub(crate) fn with_lookup(key: impl Into<String>, lookup: StorageLookup) -> Self {
        Self {
            key: key.into(),
            lookup,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    fn storage(&self) -> Result<Storage, SessionError> {
        (self.lookup)().ok_or_else(|| SessionError::Unavailable("localStorage is not accessible".into()))
    }

    /// Persist a record. Used by the login page; the shell itself only reads.
    pub fn save_session(&self, record: &SessionRecord) -> Result<(), SessionError> {
        let serialized = serde_json::to_string(record)?;
        self.storage()?
            .set_item(&self.key, &serialized)
            .map_err(|e| SessionError::Unavailable(format!("{e:?}")))
    }
}

impl Default for BrowserSessionStore {
    fn default() -> Self {
        Self::new(ShellConfig::SESSION_STORAGE_KEY)
    }
}

impl SessionStore for BrowserSessionStore {
    fn load_session(&self) -> Result<Option<SessionRecord>, SessionError> {
        let raw = self
            .storage()?
            .get_item(&self.key)
            .map_err(|e| SessionError::Unavailable(format!("{e:?}")))?;

        raw.as_deref().map(SessionRecord::parse).transpose()
    }

    fn clear_session(&self) {
        let storage = match self.storage() {
            Ok(storage) => storage,
            Err(e) => {
                tracing::warn!(error = %e, "Could not clear stored session");
                return;
            }
        };

        match storage.remove_item(&self.key) {
            Ok(()) => tracing::debug!(key = %self.key, "Cleared stored session"),
            Err(e) => tracing::warn!(key = %self.key, error = ?e, "Could not clear stored session"),
        }
    }
}
