use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::Config;
use crate::generator::ContentGenerator;
use crate::records::RecordStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Absent when no API key is configured.
    pub generator: Option<Arc<dyn ContentGenerator>>,
    pub records: Arc<dyn RecordStore>,
}

impl AppState {
    /// A fresh random source for one request. Seeded from `HUMANIZE_SEED`
    /// when set, so every request humanizes identically.
    pub fn rng(&self) -> StdRng {
        match self.config.humanize_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
