//! Route table
//!
//! Wires API paths to handlers and shared state.

use std::sync::Arc;

use axum::routing::{delete, get, post, put};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::api::{handlers, AppState};

/// Build the application router with all API routes under `/api`.
pub fn build_router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .route("/read", get(handlers::read_document))
        .route("/write", post(handlers::write_document))
        .route("/append", post(handlers::append_document))
        .route("/delete", delete(handlers::delete_document))
        .route("/rename", put(handlers::rename_document))
        .route("/create-dir", post(handlers::create_directory))
        .route("/delete-dir", delete(handlers::delete_directory))
        .with_state(state);

    Router::new().nest("/api", api).layer(CorsLayer::permissive())
}
