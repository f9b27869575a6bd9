//! Request handlers
//!
//! Maps HTTP requests to document store and directory manager calls and
//! serializes results to JSON.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::api::AppState;
use crate::error::{error_to_status, handle_error, StoreError};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileQuery {
    pub file_name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WriteRequest {
    pub file_name: String,
    pub content: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenameRequest {
    pub old_name: String,
    pub new_name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirParams {
    pub dir_name: String,
}

/// Store error carried out of a handler as an HTTP response.
pub struct ApiError(StoreError);

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        handle_error(&self.0);
        let status = error_to_status(&self.0);
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

pub async fn read_document(
    State(state): State<Arc<AppState>>,
    Query(params): Query<FileQuery>,
) -> Result<Json<Value>, ApiError> {
    let content = state.store.read(&params.file_name).await?;
    Ok(Json(json!({ "content": content })))
}

pub async fn write_document(
    State(state): State<Arc<AppState>>,
    Json(request): Json<WriteRequest>,
) -> Result<Json<Value>, ApiError> {
    state.store.write(&request.file_name, &request.content).await?;
    Ok(Json(json!({ "message": "Word file created successfully" })))
}

pub async fn append_document(
    State(state): State<Arc<AppState>>,
    Json(request): Json<WriteRequest>,
) -> Result<Json<Value>, ApiError> {
    state.store.append(&request.file_name, &request.content).await?;
    Ok(Json(json!({ "message": "Content appended successfully" })))
}

pub async fn delete_document(
    State(state): State<Arc<AppState>>,
    Query(params): Query<FileQuery>,
) -> Result<Json<Value>, ApiError> {
    state.store.delete(&params.file_name).await?;
    Ok(Json(json!({ "message": "Word file deleted successfully" })))
}

pub async fn rename_document(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RenameRequest>,
) -> Result<Json<Value>, ApiError> {
    state.store.rename(&request.old_name, &request.new_name).await?;
    Ok(Json(json!({ "message": "Word file renamed successfully" })))
}

pub async fn create_directory(
    State(state): State<Arc<AppState>>,
    Json(request): Json<DirParams>,
) -> Result<Json<Value>, ApiError> {
    state.dirs.create(&request.dir_name).await?;
    Ok(Json(json!({ "message": "Directory created successfully" })))
}

pub async fn delete_directory(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DirParams>,
) -> Result<Json<Value>, ApiError> {
    state.dirs.remove(&params.dir_name).await?;
    Ok(Json(json!({ "message": "Directory deleted successfully" })))
}
