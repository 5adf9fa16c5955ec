// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// What to prompt for, and what to do with the answer, lives in domains/.
//
// Naming convention: Base* for external service traits (e.g., BaseAI)

use anyhow::Result;
use async_trait::async_trait;

use crate::domains::triage::models::{AnalyzedMessage, Resource};

// =============================================================================
// AI Trait (Infrastructure - Generic LLM capabilities)
// =============================================================================

#[async_trait]
pub trait BaseAI: Send + Sync {
    /// Complete a prompt with an LLM (returns raw text response)
    async fn complete(&self, prompt: &str) -> Result<String>;

    /// Complete a prompt expecting a single JSON object (returns raw JSON string)
    /// Parse with serde_json::from_str in calling code
    async fn complete_json(&self, prompt: &str) -> Result<String> {
        self.complete(prompt).await
    }
}

// =============================================================================
// Triage Store Trait (Infrastructure - resource registry + results log)
// =============================================================================

/// Resource registry and append-only log of analyzed messages.
///
/// Implementations must serialize concurrent `record_result` calls.
#[async_trait]
pub trait TriageStore: Send + Sync {
    /// Current resource list (read-only snapshot)
    async fn list_resources(&self) -> Result<Vec<Resource>>;

    /// Append one analyzed message to the log
    async fn record_result(&self, result: &AnalyzedMessage) -> Result<()>;

    /// Every analyzed message recorded since startup, oldest first
    async fn list_results(&self) -> Result<Vec<AnalyzedMessage>>;
}
