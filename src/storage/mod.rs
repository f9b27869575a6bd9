//! Document storage
//!
//! Name resolution, document operations, and directory management over the
//! storage root.

pub mod dirs;
pub mod resolver;
pub mod store;

pub use dirs::DirectoryManager;
pub use resolver::{resolve_directory, resolve_document, DOC_EXTENSION};
pub use store::DocumentStore;
