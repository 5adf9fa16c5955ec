//! Server dependencies (using traits for testability)
//!
//! The central dependency container handed to the triage pipeline and the
//! HTTP handlers. External collaborators sit behind trait objects so tests can
//! swap them for mocks.

use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::domains::triage::activities::{Extractor, FallbackExtractor, LlmExtractor};
use crate::domains::triage::utils::LocationResolver;
use crate::kernel::{MemoryStore, OpenAIBackend, TriageStore};

#[derive(Clone)]
pub struct ServerDeps {
    /// Resource registry + results log
    pub store: Arc<dyn TriageStore>,
    /// Message -> structured extraction
    pub extractor: Arc<dyn Extractor>,
    pub resolver: LocationResolver,
}

impl ServerDeps {
    pub fn new(
        store: Arc<dyn TriageStore>,
        extractor: Arc<dyn Extractor>,
        resolver: LocationResolver,
    ) -> Self {
        Self {
            store,
            extractor,
            resolver,
        }
    }

    /// Production wiring: seeded in-memory store, and the OpenAI-backed
    /// extractor when an API key is configured (fallback extractor otherwise).
    pub fn from_config(config: &Config) -> Result<Self> {
        let extractor: Arc<dyn Extractor> = match &config.openai_api_key {
            Some(api_key) => {
                let backend = OpenAIBackend::from_settings(
                    api_key,
                    config.openai_base_url.as_deref(),
                    &config.openai_model,
                    Duration::from_secs(config.openai_timeout_secs),
                )?;
                tracing::info!(model = %config.openai_model, "Using OpenAI extractor");
                Arc::new(LlmExtractor::new(Arc::new(backend)))
            }
            None => {
                tracing::warn!("OPENAI_API_KEY not set, every message gets the fallback extraction");
                Arc::new(FallbackExtractor)
            }
        };

        Ok(Self::new(
            Arc::new(MemoryStore::new()),
            extractor,
            LocationResolver::new(config.landmark_jitter_deg, config.fallback_jitter_deg),
        ))
    }
}
