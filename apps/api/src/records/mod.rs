//! Record store — persists content records by an opaque id.
//!
//! The converter never touches the store; only the HTTP handlers do.
//! `MemoryStore` keeps records for the lifetime of the process.

pub mod handlers;

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use crate::models::content::ContentRecord;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredRecord {
    pub id: Uuid,
    pub record: ContentRecord,
    pub created_at: DateTime<Utc>,
}

#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn save(&self, record: ContentRecord) -> StoredRecord;
    async fn get(&self, id: Uuid) -> Option<StoredRecord>;
    /// Oldest first.
    async fn list(&self) -> Vec<StoredRecord>;
    /// Returns false when nothing was stored under `id`.
    async fn delete(&self, id: Uuid) -> bool;
}

#[derive(Default)]
pub struct MemoryStore {
    records: RwLock<HashMap<Uuid, StoredRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn save(&self, record: ContentRecord) -> StoredRecord {
        let stored = StoredRecord {
            id: Uuid::new_v4(),
            record,
            created_at: Utc::now(),
        };
        self.records.write().await.insert(stored.id, stored.clone());
        info!("Stored {} record {}", stored.record.platform, stored.id);
        stored
    }

    async fn get(&self, id: Uuid) -> Option<StoredRecord> {
        self.records.read().await.get(&id).cloned()
    }

    async fn list(&self) -> Vec<StoredRecord> {
        let mut all: Vec<StoredRecord> = self.records.read().await.values().cloned().collect();
        all.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        all
    }

    async fn delete(&self, id: Uuid) -> bool {
        let removed = self.records.write().await.remove(&id).is_some();
        if removed {
            info!("Deleted record {id}");
        }
        removed
    }
}
