// TestDependencies - mock implementations for testing
//
// Provides mock services that can be injected into ServerDeps for tests.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use super::{BaseAI, MemoryStore, ServerDeps, TriageStore};
use crate::domains::triage::activities::{Extractor, LlmExtractor};
use crate::domains::triage::models::{AnalyzedMessage, Resource};
use crate::domains::triage::utils::LocationResolver;

// Mocks keep working after a panicking test thread poisoned a lock.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

// =============================================================================
// Mock AI
// =============================================================================

type MockReply = std::result::Result<String, String>;

/// Scripted AI: answers from per-pattern responses first, then from a FIFO
/// queue, then with a non-JSON default.
pub struct MockAI {
    responses: Mutex<VecDeque<MockReply>>,
    pattern_responses: Mutex<Vec<(String, String)>>,
    calls: Mutex<Vec<String>>,
}

impl Default for MockAI {
    fn default() -> Self {
        Self::new()
    }
}

impl MockAI {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            pattern_responses: Mutex::new(Vec::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Add a text response to the queue
    pub fn with_response(self, response: impl Into<String>) -> Self {
        lock(&self.responses).push_back(Ok(response.into()));
        self
    }

    /// Queue a failed call
    pub fn with_error(self, message: impl Into<String>) -> Self {
        lock(&self.responses).push_back(Err(message.into()));
        self
    }

    /// Answer `response` whenever the prompt contains `pattern`
    pub fn with_response_for(self, pattern: impl Into<String>, response: impl Into<String>) -> Self {
        lock(&self.pattern_responses).push((pattern.into(), response.into()));
        self
    }

    /// Get all prompts that were sent to the AI
    pub fn calls(&self) -> Vec<String> {
        lock(&self.calls).clone()
    }

    /// Check if a prompt containing the given text was sent
    pub fn was_called_with(&self, text: &str) -> bool {
        lock(&self.calls).iter().any(|p| p.contains(text))
    }

    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }
}

#[async_trait]
impl BaseAI for MockAI {
    async fn complete(&self, prompt: &str) -> Result<String> {
        lock(&self.calls).push(prompt.to_string());

        if let Some((_, response)) = lock(&self.pattern_responses)
            .iter()
            .find(|(pattern, _)| prompt.contains(pattern.as_str()))
        {
            return Ok(response.clone());
        }

        match lock(&self.responses).pop_front() {
            Some(Ok(response)) => Ok(response),
            Some(Err(message)) => Err(anyhow!(message)),
            None => Ok("Mock AI response".to_string()),
        }
    }
}

// =============================================================================
// Failing Store
// =============================================================================

/// Store whose `record_result` starts failing after a number of successes.
pub struct FailingStore {
    inner: MemoryStore,
    remaining: AtomicUsize,
}

impl FailingStore {
    pub fn failing_after(successes: usize) -> Self {
        Self {
            inner: MemoryStore::new(),
            remaining: AtomicUsize::new(successes),
        }
    }
}

#[async_trait]
impl TriageStore for FailingStore {
    async fn list_resources(&self) -> Result<Vec<Resource>> {
        self.inner.list_resources().await
    }

    async fn record_result(&self, result: &AnalyzedMessage) -> Result<()> {
        let allowed = self
            .remaining
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if !allowed {
            return Err(anyhow!("store unavailable"));
        }
        self.inner.record_result(result).await
    }

    async fn list_results(&self) -> Result<Vec<AnalyzedMessage>> {
        self.inner.list_results().await
    }
}

// =============================================================================
// TestDependencies
// =============================================================================

pub struct TestDependencies {
    pub ai: Arc<MockAI>,
    pub extractor: Option<Arc<dyn Extractor>>,
    pub store: Arc<dyn TriageStore>,
    pub resolver: LocationResolver,
}

impl TestDependencies {
    /// Mock AI, seeded memory store, jitter-free resolver.
    pub fn new() -> Self {
        Self {
            ai: Arc::new(MockAI::new()),
            extractor: None,
            store: Arc::new(MemoryStore::new()),
            resolver: LocationResolver::deterministic(),
        }
    }

    /// Set a mock AI (wrapped in the model-backed extractor)
    pub fn mock_ai(mut self, ai: MockAI) -> Self {
        self.ai = Arc::new(ai);
        self
    }

    /// Use a specific extractor instead of the mock AI
    pub fn with_extractor(mut self, extractor: Arc<dyn Extractor>) -> Self {
        self.extractor = Some(extractor);
        self
    }

    pub fn with_store(mut self, store: Arc<dyn TriageStore>) -> Self {
        self.store = store;
        self
    }

    pub fn with_resolver(mut self, resolver: LocationResolver) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn into_server_deps(self) -> ServerDeps {
        let ai: Arc<dyn BaseAI> = self.ai;
        let extractor = self
            .extractor
            .unwrap_or_else(|| Arc::new(LlmExtractor::new(ai)) as Arc<dyn Extractor>);
        ServerDeps::new(self.store, extractor, self.resolver)
    }
}

impl Default for TestDependencies {
    fn default() -> Self {
        Self::new()
    }
}
