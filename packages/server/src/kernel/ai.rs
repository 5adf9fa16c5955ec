// AI implementation using OpenAI
//
// This is the infrastructure implementation of BaseAI.
// Business logic (what to prompt for) lives in domain layers.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use openai_client::{ChatRequest, Message, OpenAIClient};

use super::BaseAI;

/// OpenAI implementation of AI capabilities
#[derive(Clone)]
pub struct OpenAIBackend {
    client: OpenAIClient,
    model: String,
}

impl OpenAIBackend {
    pub fn new(client: OpenAIClient, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    /// Build a backend from an API key, optional base URL and request timeout.
    pub fn from_settings(
        api_key: &str,
        base_url: Option<&str>,
        model: &str,
        timeout: Duration,
    ) -> Result<Self> {
        let mut client = OpenAIClient::new(api_key)
            .with_timeout(timeout)
            .context("Failed to configure OpenAI client")?;
        if let Some(url) = base_url {
            client = client.with_base_url(url);
        }
        Ok(Self::new(client, model))
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl BaseAI for OpenAIBackend {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let request = ChatRequest::new(&self.model).message(Message::user(prompt));

        let response = self
            .client
            .chat_completion(request)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, model = %self.model, "OpenAI API call failed");
                e
            })
            .context("Failed to call OpenAI API")?;

        Ok(response.content)
    }

    async fn complete_json(&self, prompt: &str) -> Result<String> {
        tracing::debug!(
            prompt_length = prompt.len(),
            model = %self.model,
            "Requesting JSON completion"
        );

        let json = self
            .client
            .complete_json(&self.model, prompt)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, model = %self.model, "OpenAI JSON completion failed");
                e
            })
            .context("Failed to call OpenAI API")?;

        tracing::debug!(response_length = json.len(), "OpenAI JSON response received");

        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_settings_applies_model() {
        let backend = OpenAIBackend::from_settings(
            "sk-test",
            Some("http://localhost:1234/v1"),
            "gpt-4o-mini",
            Duration::from_secs(5),
        )
        .unwrap();

        assert_eq!(backend.model(), "gpt-4o-mini");
        assert_eq!(backend.client.base_url(), "http://localhost:1234/v1");
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_an_error() {
        let backend = OpenAIBackend::from_settings(
            "sk-test",
            Some("http://127.0.0.1:9"),
            "gpt-4o-mini",
            Duration::from_secs(2),
        )
        .unwrap();

        assert!(backend.complete_json("{}").await.is_err());
    }
}
