//! Session errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    /// The browser refused access to persistent storage
    #[error("session storage unavailable: {0}")]
    Unavailable(String),

    #[error("malformed session record: {0}")]
    Malformed(#[from] serde_json::Error),
}
