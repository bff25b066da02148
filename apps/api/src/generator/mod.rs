//! Content generator — the upstream collaborator that produces canonical records.
//!
//! The service only depends on the `ContentGenerator` trait; the LLM-backed
//! implementation is constructed in `main` when an API key is configured.

pub mod handlers;

use async_trait::async_trait;
use tracing::info;

use crate::errors::AppError;
use crate::llm_client::prompts::{CONTENT_GENERATION_PROMPT_TEMPLATE, JSON_ONLY_SYSTEM};
use crate::llm_client::LlmClient;
use crate::models::content::{ContentRecord, Platform};

#[async_trait]
pub trait ContentGenerator: Send + Sync {
    async fn generate(&self, topic: &str, platform: &Platform) -> Result<ContentRecord, AppError>;
}

/// Generates records through the Anthropic Messages API.
pub struct LlmGenerator {
    llm: LlmClient,
}

impl LlmGenerator {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl ContentGenerator for LlmGenerator {
    async fn generate(&self, topic: &str, platform: &Platform) -> Result<ContentRecord, AppError> {
        let prompt = build_prompt(topic, platform);
        let record = self
            .llm
            .call_json::<ContentRecord>(&prompt, JSON_ONLY_SYSTEM)
            .await
            .map_err(|e| AppError::Llm(format!("Content generation failed: {e}")))?;

        let record = finalize(record, topic, platform);
        info!(
            "Generated {} record for '{}' ({} sections, {} script lines)",
            record.platform,
            record.topic,
            record.sections.len(),
            record.script.len()
        );
        Ok(record)
    }
}

fn build_prompt(topic: &str, platform: &Platform) -> String {
    CONTENT_GENERATION_PROMPT_TEMPLATE
        .replace("{topic}", topic)
        .replace("{platform}", platform.display_name())
}

/// The model doesn't get to choose the topic or platform.
fn finalize(record: ContentRecord, topic: &str, platform: &Platform) -> ContentRecord {
    ContentRecord {
        topic: topic.to_string(),
        platform: platform.clone(),
        ..record
    }
}
