//! HTTP transport
//!
//! Thin adapter mapping HTTP verbs and paths to store operations.

pub mod handlers;
pub mod routes;

use crate::storage::{DirectoryManager, DocumentStore};

/// Shared state handed to every request handler.
pub struct AppState {
    pub store: DocumentStore,
    pub dirs: DirectoryManager,
}

pub use routes::build_router;
