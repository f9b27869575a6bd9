pub mod api;
pub mod codec;
pub mod config;
pub mod error;
pub mod storage;

pub use api::{build_router, AppState};
pub use storage::{DirectoryManager, DocumentStore};
