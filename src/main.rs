//! Document store server - entry point
//!
//! An HTTP API for managing .docx documents in a path-confined storage
//! directory.

use std::sync::Arc;

use log::{error, info, warn};

use docstore_server::api::{build_router, AppState};
use docstore_server::codec::DocxCodec;
use docstore_server::config::ServerConfig;
use docstore_server::storage::{DirectoryManager, DocumentStore};

#[tokio::main]
async fn main() {
    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    env_logger::init();

    let config = match ServerConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            panic!("Server startup failed: {}", e);
        }
    };

    let root = config.storage_root_path();
    if let Err(e) = std::fs::create_dir_all(&root) {
        warn!("Failed to create storage root {}: {}", root.display(), e);
    } else {
        info!("Storage root: {}", root.display());
    }

    let state = Arc::new(AppState {
        store: DocumentStore::new(root.clone(), Box::new(DocxCodec)),
        dirs: DirectoryManager::new(root),
    });

    let app = build_router(state);

    let addr = config.socket_addr();
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => {
            info!("Server bound to {}", addr);
            listener
        }
        Err(e) => {
            error!("Failed to bind to {}: {}", addr, e);
            panic!("Server startup failed on socket {}: {}", addr, e);
        }
    };

    info!("Listening on http://{}", addr);
    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
    }
}
