//! Axum route handlers for the transform API.

use axum::{extract::State, Json};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::humanize::humanize_record;
use crate::models::content::{ContentRecord, Platform};
use crate::osmu::converter::{default_targets, derive_variants, transform};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct TransformRequest {
    pub record: ContentRecord,
    pub target: String,
    #[serde(default)]
    pub humanize: bool,
}

#[derive(Debug, Deserialize)]
pub struct OsmuRequest {
    pub record: ContentRecord,
    /// Empty means every derivable platform except the record's own.
    #[serde(default)]
    pub targets: Vec<String>,
    #[serde(default)]
    pub humanize: bool,
}

#[derive(Debug, Serialize)]
pub struct OsmuResponse {
    pub source: ContentRecord,
    pub variants: Vec<ContentRecord>,
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers shared with the record handlers
// ────────────────────────────────────────────────────────────────────────────

pub fn parse_target(raw: &str) -> Result<Platform, AppError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(AppError::Validation("target cannot be empty".to_string()));
    }
    Ok(Platform::from(raw))
}

/// Applies the humanize pass to a variant when requested.
pub fn finish_variant<R: Rng + ?Sized>(
    variant: ContentRecord,
    humanize: bool,
    rng: &mut R,
) -> ContentRecord {
    if humanize {
        humanize_record(&variant, rng)
    } else {
        variant
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/transform
///
/// Converts one record into the shape of `target`.
pub async fn handle_transform(
    State(state): State<AppState>,
    Json(request): Json<TransformRequest>,
) -> Result<Json<ContentRecord>, AppError> {
    let target = parse_target(&request.target)?;
    let variant = transform(&request.record, &target);
    Ok(Json(finish_variant(variant, request.humanize, &mut state.rng())))
}

/// POST /api/v1/osmu
///
/// Derives several platform variants from one source record.
pub async fn handle_osmu(
    State(state): State<AppState>,
    Json(request): Json<OsmuRequest>,
) -> Result<Json<OsmuResponse>, AppError> {
    let targets = if request.targets.is_empty() {
        default_targets(&request.record)
    } else {
        request
            .targets
            .iter()
            .map(|t| parse_target(t))
            .collect::<Result<Vec<_>, _>>()?
    };

    let mut rng = state.rng();
    let variants = derive_variants(&request.record, &targets)
        .into_iter()
        .map(|v| finish_variant(v, request.humanize, &mut rng))
        .collect();

    Ok(Json(OsmuResponse {
        source: request.record,
        variants,
    }))
}
