//! Completion provider abstraction.
//!
//! A provider issues one chat-completion request per call and hands back the
//! raw generated text. Handlers own all interpretation of that text.

pub mod mock;
pub mod openrouter;

use async_trait::async_trait;
use thiserror::Error;

/// Error type for provider operations. Every variant is an upstream
/// failure from the handlers' point of view.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The provider answered with a non-success HTTP status.
    #[error("{0}")]
    ApiError(String),

    /// The response body could not be decoded, or held no choices.
    #[error("malformed completion response: {0}")]
    MalformedResponse(String),

    /// The request never completed.
    #[error("network error: {0}")]
    NetworkError(String),
}

/// Trait for chat-completion providers.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Issue a single completion request for `prompt`, allowing the
    /// provider to generate at most `max_tokens` output tokens, and
    /// return the first choice's message content.
    async fn complete(&self, prompt: &str, max_tokens: u32) -> Result<String, ProviderError>;
}
