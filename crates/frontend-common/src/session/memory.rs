//! In-memory session store

use super::{SessionRecord, SessionStore};
use crate::error::SessionError;
use std::cell::RefCell;

/// Keeps the raw serialized record in memory, like a single storage slot
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    raw: RefCell<Option<String>>,
}

impl MemorySessionStore {
    /// Store seeded with an arbitrary raw value, which may be malformed
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: RefCell::new(Some(raw.into())),
        }
    }

    pub fn with_record(record: &SessionRecord) -> Self {
        let store = Self::default();
        store.save_session(record);
        store
    }

    pub fn save_session(&self, record: &SessionRecord) {
        // Serializing a map of JSON values cannot fail
        let raw = serde_json::to_string(record).unwrap_or_default();
        *self.raw.borrow_mut() = Some(raw);
    }

    pub fn raw(&self) -> Option<String> {
        self.raw.borrow().clone()
    }
}

impl SessionStore for MemorySessionStore {
    fn load_session(&self) -> Result<Option<SessionRecord>, SessionError> {
        self.raw
            .borrow()
            .as_deref()
            .map(SessionRecord::parse)
            .transpose()
    }

    fn clear_session(&self) {
        self.raw.borrow_mut().take();
    }
}
