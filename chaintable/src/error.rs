//! Errors reported by table operations. Both kinds are ordinary outcomes of a
//! precondition check and are never transient, so callers branch on them
//! instead of retrying.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("key already exists: {0}")]
    KeyAlreadyExists(String),
    #[error("key not found: {0}")]
    KeyNotFound(String),
}

impl TableError {
    /// The key the failed operation was addressed to.
    pub fn key(&self) -> &str {
        match self {
            TableError::KeyAlreadyExists(key) | TableError::KeyNotFound(key) => key,
        }
    }
}
