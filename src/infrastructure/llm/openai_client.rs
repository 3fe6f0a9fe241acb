use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{LlmClient, LlmClientError};
use crate::infrastructure::observability::log_preview;
use crate::presentation::config::{LlmProvider, LlmSettings};

/// Chat-completions client for OpenAI and API-compatible servers (LM Studio, Azure OpenAI).
pub struct OpenAiClient {
    client: Client,
    provider: LlmProvider,
    base_url: String,
    api_key: String,
    model: String,
    max_tokens: usize,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    max_tokens: usize,
    temperature: f32,
}

#[derive(Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

impl OpenAiClient {
    pub fn new(settings: &LlmSettings) -> Result<Self, LlmClientError> {
        if settings.provider != LlmProvider::LmStudio && settings.api_key.trim().is_empty() {
            return Err(LlmClientError::Configuration(format!(
                "api_key is required for provider {}",
                settings.provider
            )));
        }

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| LlmClientError::Configuration(e.to_string()))?;

        Ok(Self {
            client,
            provider: settings.provider,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            api_key: settings.api_key.clone(),
            model: settings.chat_model.clone(),
            max_tokens: settings.max_tokens,
            temperature: settings.temperature,
        })
    }

    fn apply_auth(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.provider {
            LlmProvider::Azure => request.header("api-key", &self.api_key),
            LlmProvider::LmStudio if self.api_key.is_empty() => request,
            _ => request.header("Authorization", format!("Bearer {}", self.api_key)),
        }
    }
}

#[async_trait]
impl LlmClient for OpenAiClient {
    #[tracing::instrument(skip(self, prompt), fields(provider = %self.provider, model = %self.model, prompt_chars = prompt.len()))]
    async fn complete(&self, prompt: &str) -> Result<String, LlmClientError> {
        let request_body = ChatCompletionRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        let request = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .json(&request_body);
        let response = self
            .apply_auth(request)
            .send()
            .await
            .map_err(|e| LlmClientError::ApiRequestFailed(e.to_string()))?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(LlmClientError::RateLimited);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(LlmClientError::ApiRequestFailed(format!(
                "HTTP {}: {}",
                status,
                log_preview(&body, 500)
            )));
        }

        let completion_response: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| LlmClientError::InvalidResponse(e.to_string()))?;

        let content = completion_response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| LlmClientError::InvalidResponse("empty choices".to_string()))?;

        tracing::debug!(
            response_chars = content.len(),
            preview = %log_preview(&content, 500),
            "Chat completion received"
        );

        Ok(content)
    }
}
