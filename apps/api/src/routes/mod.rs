pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generator::handlers as generator_handlers;
use crate::humanize::handlers as humanize_handlers;
use crate::osmu::handlers as osmu_handlers;
use crate::records::handlers as record_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Transform API
        .route("/api/v1/transform", post(osmu_handlers::handle_transform))
        .route("/api/v1/osmu", post(osmu_handlers::handle_osmu))
        .route("/api/v1/humanize", post(humanize_handlers::handle_humanize))
        .route("/api/v1/generate", post(generator_handlers::handle_generate))
        // Record store
        .route(
            "/api/v1/records",
            get(record_handlers::handle_list_records).post(record_handlers::handle_create_record),
        )
        .route(
            "/api/v1/records/:id",
            get(record_handlers::handle_get_record).delete(record_handlers::handle_delete_record),
        )
        .route(
            "/api/v1/records/:id/transform",
            post(record_handlers::handle_transform_record),
        )
        .with_state(state)
}
