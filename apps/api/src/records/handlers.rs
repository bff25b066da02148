//! Axum route handlers for the record store.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::content::ContentRecord;
use crate::osmu::converter::transform;
use crate::osmu::handlers::{finish_variant, parse_target};
use crate::records::StoredRecord;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RecordTransformRequest {
    pub target: String,
    #[serde(default)]
    pub humanize: bool,
}

/// POST /api/v1/records
pub async fn handle_create_record(
    State(state): State<AppState>,
    Json(record): Json<ContentRecord>,
) -> (StatusCode, Json<StoredRecord>) {
    let stored = state.records.save(record).await;
    (StatusCode::CREATED, Json(stored))
}

/// GET /api/v1/records
pub async fn handle_list_records(State(state): State<AppState>) -> Json<Vec<StoredRecord>> {
    Json(state.records.list().await)
}

/// GET /api/v1/records/:id
pub async fn handle_get_record(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<StoredRecord>, AppError> {
    state
        .records
        .get(id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Record {id} not found")))
}

/// DELETE /api/v1/records/:id
pub async fn handle_delete_record(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if state.records.delete(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Record {id} not found")))
    }
}

/// POST /api/v1/records/:id/transform
///
/// Derives a variant of a stored record. The variant itself is not stored.
pub async fn handle_transform_record(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<RecordTransformRequest>,
) -> Result<Json<ContentRecord>, AppError> {
    let target = parse_target(&request.target)?;
    let stored = state
        .records
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Record {id} not found")))?;

    let variant = transform(&stored.record, &target);
    Ok(Json(finish_variant(variant, request.humanize, &mut state.rng())))
}
