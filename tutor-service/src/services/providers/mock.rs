//! Mock completion provider for tests.

use super::{CompletionProvider, ProviderError};
use async_trait::async_trait;
use std::sync::Mutex;

/// One recorded call to [`MockCompletionProvider::complete`].
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub prompt: String,
    pub max_tokens: u32,
}

/// Canned-response provider that records every request it receives, so
/// tests can assert on the outbound prompt and token budget.
pub struct MockCompletionProvider {
    response: Option<String>,
    calls: Mutex<Vec<CapturedRequest>>,
}

impl MockCompletionProvider {
    /// Provider that answers every request with `text`.
    pub fn returning(text: impl Into<String>) -> Self {
        Self {
            response: Some(text.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Provider that fails every request with an upstream API error.
    pub fn failing() -> Self {
        Self {
            response: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Requests received so far, in order.
    pub fn captured(&self) -> Vec<CapturedRequest> {
        self.calls.lock().expect("mock call log poisoned").clone()
    }
}

#[async_trait]
impl CompletionProvider for MockCompletionProvider {
    async fn complete(&self, prompt: &str, max_tokens: u32) -> Result<String, ProviderError> {
        self.calls
            .lock()
            .expect("mock call log poisoned")
            .push(CapturedRequest {
                prompt: prompt.to_string(),
                max_tokens,
            });

        match &self.response {
            Some(text) => Ok(text.clone()),
            None => Err(ProviderError::ApiError(
                "OpenRouter API error: Internal Server Error".to_string(),
            )),
        }
    }
}
