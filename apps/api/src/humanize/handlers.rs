use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::humanize::{humanize_opt, humanize_with};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct HumanizeRequest {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HumanizeResponse {
    pub text: Option<String>,
    pub changed: bool,
}

/// POST /api/v1/humanize
///
/// `null` text comes back `null`; empty text comes back empty.
pub async fn handle_humanize(
    State(state): State<AppState>,
    Json(request): Json<HumanizeRequest>,
) -> Json<HumanizeResponse> {
    let input = request.text.as_deref();
    let text = match state.config.humanize_seed {
        Some(_) => input.map(|t| humanize_with(t, &mut state.rng())),
        None => humanize_opt(input),
    };
    let changed = text.as_deref() != input;

    Json(HumanizeResponse { text, changed })
}
