mod config;
mod errors;
mod generator;
mod humanize;
mod llm_client;
mod models;
mod osmu;
mod records;
mod routes;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::generator::{ContentGenerator, LlmGenerator};
use crate::llm_client::LlmClient;
use crate::records::MemoryStore;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting OSMU API v{}", env!("CARGO_PKG_VERSION"));

    let generator = build_generator(&config)?;
    if config.humanize_seed.is_some() {
        info!("Humanize pass seeded from HUMANIZE_SEED");
    }

    let state = AppState {
        config: config.clone(),
        generator,
        records: Arc::new(MemoryStore::new()),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// The LLM generator is optional; without an API key the generate endpoint answers 503.
fn build_generator(config: &Config) -> Result<Option<Arc<dyn ContentGenerator>>> {
    let Some(api_key) = config.anthropic_api_key.clone() else {
        warn!("ANTHROPIC_API_KEY not set; content generation disabled");
        return Ok(None);
    };

    let llm = LlmClient::new(api_key, config.anthropic_model.clone())
        .context("failed to build LLM HTTP client")?;
    info!("LLM client initialized (model: {})", llm.model());

    let generator: Arc<dyn ContentGenerator> = Arc::new(LlmGenerator::new(llm));
    Ok(Some(generator))
}
