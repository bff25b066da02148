use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::content::{ContentRecord, Platform};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub topic: String,
    /// Defaults to Naver Blog, the long-form source most variants derive from.
    #[serde(default)]
    pub platform: Option<String>,
}

/// POST /api/v1/generate
///
/// Asks the configured generator for a canonical record.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<ContentRecord>, AppError> {
    let topic = request.topic.trim();
    if topic.is_empty() {
        return Err(AppError::Validation("topic cannot be empty".to_string()));
    }

    let generator = state
        .generator
        .as_ref()
        .ok_or(AppError::GeneratorUnavailable)?;

    let platform = request
        .platform
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map_or(Platform::NaverBlog, Platform::from);

    let record = generator.generate(topic, &platform).await?;
    Ok(Json(record))
}
