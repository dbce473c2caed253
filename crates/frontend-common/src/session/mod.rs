//! Session access for the application shell
//!
//! The shell never touches browser storage directly. It is handed a
//! [`SessionHandle`] wrapping some [`SessionStore`], so tests and alternative
//! hosts can substitute their own backing store.

mod browser;
mod memory;
mod record;

pub use browser::BrowserSessionStore;
pub use memory::MemorySessionStore;
pub use record::SessionRecord;

use crate::error::SessionError;
use std::rc::Rc;

/// Read/clear access to the persisted session record
pub trait SessionStore {
    /// Load the stored record, distinguishing absence from failure
    fn load_session(&self) -> Result<Option<SessionRecord>, SessionError>;

    /// Remove the stored record
    fn clear_session(&self);

    /// Stored record, with every failure treated as "no session"
    fn get_session(&self) -> Option<SessionRecord> {
        match self.load_session() {
            Ok(record) => record,
            Err(e) => {
                tracing::debug!(error = %e, "Discarding unreadable session record");
                None
            }
        }
    }
}

impl<T: SessionStore + ?Sized> SessionStore for Rc<T> {
    fn load_session(&self) -> Result<Option<SessionRecord>, SessionError> {
        (**self).load_session()
    }

    fn clear_session(&self) {
        (**self).clear_session();
    }
}

/// Shared, comparable handle to a session store for use in component props
#[derive(Clone)]
pub struct SessionHandle(Rc<dyn SessionStore>);

impl SessionHandle {
    pub fn new(store: impl SessionStore + 'static) -> Self {
        Self(Rc::new(store))
    }

    /// Handle backed by `localStorage` under the default key
    pub fn browser() -> Self {
        Self::new(BrowserSessionStore::default())
    }
}

impl std::ops::Deref for SessionHandle {
    type Target = dyn SessionStore;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

impl PartialEq for SessionHandle {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Rc::as_ptr(&self.0), Rc::as_ptr(&other.0))
    }
}

impl std::fmt::Debug for SessionHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("SessionHandle").finish_non_exhaustive()
    }
}
