//! In-memory triage store.
//!
//! Holds the fixed resource list and an append-only results log. Nothing is
//! persisted; the log is lost on restart and never evicted.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::sync::RwLock;

use super::TriageStore;
use crate::domains::triage::models::{AnalyzedMessage, Resource};

pub struct MemoryStore {
    resources: Vec<Resource>,
    results: RwLock<Vec<AnalyzedMessage>>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Store seeded with the built-in resource list.
    pub fn new() -> Self {
        Self::with_resources(Resource::seed())
    }

    pub fn with_resources(resources: Vec<Resource>) -> Self {
        Self {
            resources,
            results: RwLock::new(Vec::new()),
        }
    }
}

#[async_trait]
impl TriageStore for MemoryStore {
    async fn list_resources(&self) -> Result<Vec<Resource>> {
        Ok(self.resources.clone())
    }

    async fn record_result(&self, result: &AnalyzedMessage) -> Result<()> {
        self.results
            .write()
            .map_err(|_| anyhow!("results log lock poisoned"))?
            .push(result.clone());
        Ok(())
    }

    async fn list_results(&self) -> Result<Vec<AnalyzedMessage>> {
        Ok(self
            .results
            .read()
            .map_err(|_| anyhow!("results log lock poisoned"))?
            .clone())
    }
}
