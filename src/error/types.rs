//! Error types
//!
//! Defines the failure taxonomy for the document store.

use std::fmt;
use std::io;

/// Document store errors
#[derive(Debug)]
pub enum StoreError {
    /// Bad or missing name, or wrong document extension
    InvalidName(String),
    /// Target file does not exist
    NotFound(String),
    /// Document decode or encode failure
    Codec(String),
    /// Filesystem failure other than not-found
    Io(io::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::InvalidName(msg) => write!(f, "Invalid name: {}", msg),
            StoreError::NotFound(name) => write!(f, "Not found: {}", name),
            StoreError::Codec(msg) => write!(f, "Document codec error: {}", msg),
            StoreError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<io::Error> for StoreError {
    fn from(error: io::Error) -> Self {
        StoreError::Io(error)
    }
}
