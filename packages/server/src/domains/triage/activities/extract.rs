//! Extraction of structured emergency details from raw messages
//!
//! The model is a black box: one attempt per message, and any failure
//! (transport, API, non-JSON or off-contract answer) is absorbed into
//! [`ExtractionResult::fallback`]. Nothing here returns an error.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, instrument, warn};

use crate::domains::triage::models::ExtractionResult;
use crate::kernel::BaseAI;

/// Capability: turn one raw message into an [`ExtractionResult`].
#[async_trait]
pub trait Extractor: Send + Sync {
    async fn extract(&self, message: &str) -> ExtractionResult;

    /// Short label for logs and health output
    fn name(&self) -> &'static str;
}

/// Build the prompt sent to the model for one message.
pub fn build_extraction_prompt(message: &str) -> String {
    format!(
        r#"Extract emergency details from the message below.
Respond with a single JSON object and nothing else, with exactly these keys:
- "need": the kind of help required (one of Ambulance, Shelter, Food, Police, Fire, General)
- "quantity": how much or how many, as a string, or null if not stated
- "location": where help is needed, as free text
- "urgency_level": one of "low", "medium", "high"
- "urgency_reason": one sentence explaining the urgency level

Message: "{}""#,
        message.replace('"', "\\\"")
    )
}

/// Parse a model answer into an [`ExtractionResult`].
pub fn parse_extraction(raw: &str) -> serde_json::Result<ExtractionResult> {
    serde_json::from_str(openai_client::strip_code_blocks(raw))
}

/// Model-backed extractor.
pub struct LlmExtractor {
    ai: Arc<dyn BaseAI>,
}

impl LlmExtractor {
    pub fn new(ai: Arc<dyn BaseAI>) -> Self {
        Self { ai }
    }
}

#[async_trait]
impl Extractor for LlmExtractor {
    #[instrument(skip_all, fields(message_len = message.len()))]
    async fn extract(&self, message: &str) -> ExtractionResult {
        let prompt = build_extraction_prompt(message);

        let raw = match self.ai.complete_json(&prompt).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!(error = %e, "AI extraction call failed, using fallback");
                return ExtractionResult::fallback();
            }
        };

        match parse_extraction(&raw) {
            Ok(extraction) => {
                debug!(
                    need = %extraction.need,
                    urgency_level = %extraction.urgency_level,
                    "Extracted emergency details"
                );
                extraction
            }
            Err(e) => {
                warn!(error = %e, response_preview = %preview(&raw), "Unparsable AI extraction, using fallback");
                ExtractionResult::fallback()
            }
        }
    }

    fn name(&self) -> &'static str {
        "llm"
    }
}

/// Extractor that never calls a model. Used when no model is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct FallbackExtractor;

#[async_trait]
impl Extractor for FallbackExtractor {
    async fn extract(&self, _message: &str) -> ExtractionResult {
        ExtractionResult::fallback()
    }

    fn name(&self) -> &'static str {
        "fallback"
    }
}

fn preview(raw: &str) -> &str {
    match raw.char_indices().nth(200) {
        Some((end, _)) => &raw[..end],
        None => raw,
    }
}
