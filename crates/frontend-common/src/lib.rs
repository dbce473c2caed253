//! Application shell for the Meowtrade web UI
//!
//! Session gating, navigation model and the protected layout shared by all
//! signed-in pages.

pub mod components;
pub mod config;
pub mod error;
pub mod nav;
pub mod routes;
pub mod session;
pub mod shell;
pub mod title;

pub use components::AppLayout;
pub use config::ShellConfig;
pub use error::SessionError;
pub use nav::{NavItem, NAV_ITEMS};
pub use routes::Route;
pub use session::{BrowserSessionStore, MemorySessionStore, SessionHandle, SessionRecord, SessionStore};
pub use shell::{ShellContext, ShellState, Verdict};
