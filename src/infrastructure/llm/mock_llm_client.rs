use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crate::application::ports::{LlmClient, LlmClientError};

const CANNED_RESPONSE: &str = r#"[
  {"front": "Photosynthesis", "back": "Process by which plants turn light, water and carbon dioxide into glucose and oxygen"},
  {"front": "Chlorophyll", "back": "Green pigment that absorbs light energy in plant cells"},
  {"front": "Stomata", "back": "Pores on leaf surfaces that regulate gas exchange"}
]"#;

/// Returns a fixed completion. Used in scaffold mode and tests.
pub struct MockLlmClient {
    response: Result<String, String>,
    delay: Duration,
    calls: AtomicUsize,
}

impl MockLlmClient {
    pub fn new() -> Self {
        Self::with_response(CANNED_RESPONSE)
    }

    pub fn with_response(response: impl Into<String>) -> Self {
        Self {
            response: Ok(response.into()),
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
        }
    }

    /// Every call fails with [`LlmClientError::ApiRequestFailed`].
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            response: Err(reason.into()),
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockLlmClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl LlmClient for MockLlmClient {
    async fn complete(&self, _prompt: &str) -> Result<String, LlmClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.response
            .clone()
            .map_err(LlmClientError::ApiRequestFailed)
    }
}
