//! Error handlers
//!
//! Maps store errors to HTTP status codes and logs them.

use axum::http::StatusCode;
use log::error;

use crate::error::types::StoreError;

/// Log a store error before it is reported to the client
pub fn handle_error(err: &StoreError) {
    error!("Store error: {}", err);
}

/// Convert a store error to an HTTP status code
pub fn error_to_status(err: &StoreError) -> StatusCode {
    match err {
        StoreError::InvalidName(_) => StatusCode::BAD_REQUEST,
        StoreError::NotFound(_) => StatusCode::NOT_FOUND,
        StoreError::Codec(_) => StatusCode::INTERNAL_SERVER_ERROR,
        StoreError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
