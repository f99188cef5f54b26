//! # REST Handlers
//!
//! Request handlers for the `/Tables` resource.
//!
//! Handlers validate the request shape, call the [`TableRepository`] port
//! and map the outcome to a response. Store faults are logged and then
//! returned to the caller as [`ApiError::Fault`].
//!
//! Request bodies are taken as raw bytes and decoded here rather than by
//! axum's `Json` extractor, so a missing body or content type is rejected
//! with `400` like every other failure.

use crate::api::rest::error::{ApiError, ApiResult, DATA_NOT_FOUND, ID_NOT_FOUND};
use crate::domain::entities::AoTable;
use crate::domain::value_objects::TableId;
use crate::infrastructure::persistence::{RepositoryError, TableRepository};
use axum::Json;
use axum::body::Bytes;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

/// Shared state for all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Store for table records.
    pub tables: Arc<dyn TableRepository>,
}

impl AppState {
    /// Creates handler state over the given repository.
    #[must_use]
    pub fn new(tables: Arc<dyn TableRepository>) -> Self {
        Self { tables }
    }
}

/// Body returned by successful update and delete calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusResponse {
    /// Outcome marker: `"Success"` or `"Deleted"`.
    pub status: &'static str,
}

impl StatusResponse {
    /// Marker for a completed update.
    pub const SUCCESS: Self = Self { status: "Success" };
    /// Marker for a completed delete.
    pub const DELETED: Self = Self { status: "Deleted" };
}

/// Health check response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    /// Always `"ok"` when the store answered.
    pub status: &'static str,
    /// Number of stored records.
    pub tables: u64,
}

fn fault(operation: &'static str) -> impl FnOnce(RepositoryError) -> ApiError {
    move |err| {
        tracing::warn!(operation, error = %err, "table repository fault");
        ApiError::from(err)
    }
}

fn route_id(path: Result<Path<TableId>, PathRejection>) -> ApiResult<TableId> {
    path.map(|Path(id)| id)
        .map_err(|rejection| ApiError::invalid_request(rejection.body_text()))
}

fn decode_table(body: &Bytes) -> ApiResult<AoTable> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(ApiError::MissingBody);
    }
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Null) => Err(ApiError::MissingBody),
        Ok(value) => AoTable::from_json_value(value)
            .map_err(|err| ApiError::invalid_request(err.to_string())),
        Err(err) => Err(ApiError::invalid_request(err.to_string())),
    }
}

/// `GET /Tables`
///
/// # Errors
///
/// Returns [`ApiError::Fault`] if the store fails.
pub async fn list_tables(State(state): State<AppState>) -> ApiResult<Json<Vec<AoTable>>> {
    let tables = state.tables.get_all().await.map_err(fault("list"))?;
    Ok(Json(tables))
}

/// `GET /Tables/{id}`
///
/// # Errors
///
/// Returns [`ApiError::NotFound`] if no record has this id.
pub async fn get_table(
    State(state): State<AppState>,
    path: Result<Path<TableId>, PathRejection>,
) -> ApiResult<Json<AoTable>> {
    let id = route_id(path)?;
    match state.tables.get(&id).await.map_err(fault("get"))? {
        Some(table) => Ok(Json(table)),
        None => Err(ApiError::NotFound(DATA_NOT_FOUND)),
    }
}

/// `POST /Tables`
///
/// The store assigns the id; any id in the body is ignored.
///
/// # Errors
///
/// Returns [`ApiError::MissingBody`] for an empty or `null` body.
pub async fn create_table(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<Json<AoTable>> {
    let table = decode_table(&body)?;
    let stored = state.tables.insert(table).await.map_err(fault("create"))?;

    tracing::info!(id = %stored.id, "table created");
    Ok(Json(stored))
}

/// `PUT /Tables/{id}`
///
/// The body may omit its id; if present it must match the route.
///
/// # Errors
///
/// Returns [`ApiError::IdMismatch`], [`ApiError::NotFound`] or
/// [`ApiError::UpdateFailed`], checked in that order.
pub async fn update_table(
    State(state): State<AppState>,
    path: Result<Path<TableId>, PathRejection>,
    body: Bytes,
) -> ApiResult<Json<StatusResponse>> {
    let id = route_id(path)?;
    let table = decode_table(&body)?;

    if !table.id.is_nil() && table.id != id {
        return Err(ApiError::IdMismatch);
    }

    if !state.tables.exists(&id).await.map_err(fault("update"))? {
        return Err(ApiError::NotFound(ID_NOT_FOUND));
    }

    if !state
        .tables
        .update(&id, &table)
        .await
        .map_err(fault("update"))?
    {
        return Err(ApiError::UpdateFailed);
    }

    tracing::info!(%id, "table updated");
    Ok(Json(StatusResponse::SUCCESS))
}

/// `DELETE /Tables/{id}`
///
/// # Errors
///
/// Returns [`ApiError::NotFound`] if no record has this id.
pub async fn delete_table(
    State(state): State<AppState>,
    path: Result<Path<TableId>, PathRejection>,
) -> ApiResult<Json<StatusResponse>> {
    let id = route_id(path)?;

    if !state.tables.exists(&id).await.map_err(fault("delete"))? {
        return Err(ApiError::NotFound(ID_NOT_FOUND));
    }
    state.tables.delete(&id).await.map_err(fault("delete"))?;

    tracing::info!(%id, "table deleted");
    Ok(Json(StatusResponse::DELETED))
}

/// `GET /health`
///
/// # Errors
///
/// Returns [`ApiError::Fault`] if the store cannot be reached.
pub async fn health(State(state): State<AppState>) -> ApiResult<Json<HealthResponse>> {
    let tables = state.tables.count().await.map_err(fault("health"))?;
    Ok(Json(HealthResponse {
        status: "ok",
        tables,
    }))
}
