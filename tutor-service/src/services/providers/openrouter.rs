//! OpenRouter completion provider.
//!
//! One synchronous chat-completion call per request against the OpenRouter
//! API, with fixed sampling parameters. No retry; timeout behavior is
//! whatever the transport default provides.

use super::{CompletionProvider, ProviderError};
use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

/// OpenRouter API base URL.
const OPENROUTER_API_BASE: &str = "https://openrouter.ai/api/v1";

/// Fixed sampling parameters: slightly lowered temperature keeps the
/// output focused enough to follow the prompt's format instructions.
const TEMPERATURE: f32 = 0.7;
const TOP_P: f32 = 0.9;

/// OpenRouter provider configuration.
#[derive(Debug, Clone)]
pub struct OpenRouterConfig {
    pub api_key: Secret<String>,
    pub model: String,
}

/// Chat-completion client for OpenRouter-hosted models.
pub struct OpenRouterProvider {
    config: OpenRouterConfig,
    client: Client,
}

impl OpenRouterProvider {
    pub fn new(config: OpenRouterConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }
}

#[async_trait]
impl CompletionProvider for OpenRouterProvider {
    async fn complete(&self, prompt: &str, max_tokens: u32) -> Result<String, ProviderError> {
        let request = ChatCompletionRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            max_tokens,
            temperature: TEMPERATURE,
            top_p: TOP_P,
            stream: false,
        };

        tracing::debug!(
            model = %self.config.model,
            prompt_len = prompt.len(),
            max_tokens,
            "Sending chat completion request"
        );

        let response = self
            .client
            .post(format!("{}/chat/completions", OPENROUTER_API_BASE))
            .bearer_auth(self.config.api_key.expose_secret())
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::NetworkError(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let status_text = status.canonical_reason().unwrap_or(status.as_str());
            return Err(ProviderError::ApiError(format!(
                "OpenRouter API error: {}",
                status_text
            )));
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            ProviderError::MalformedResponse(format!("failed to decode body: {}", e))
        })?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| ProviderError::MalformedResponse("no choices in response".to_string()))
    }
}

// ============================================================================
// OpenRouter API Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
    top_p: f32,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: String,
}
