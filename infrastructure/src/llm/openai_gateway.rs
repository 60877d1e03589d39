//! OpenAI-compatible chat completions gateway
//!
//! Works against any endpoint speaking the `/chat/completions` protocol
//! (OpenAI, OpenRouter, Ollama, vLLM). One HTTP request per `send`; sessions
//! are stateless apart from their model and system prompt.

use super::protocol::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};
use arena_application::ports::llm_gateway::{GatewayError, LlmGateway, LlmSession};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Connection settings for [`OpenAiCompatGateway`].
#[derive(Debug, Clone)]
pub struct OpenAiSettings {
    pub base_url: String,
    /// Environment variable holding the key; empty for keyless local servers
    pub api_key_env: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub timeout: Duration,
}

struct Inner {
    http: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
    api_key_env: String,
    temperature: f32,
    max_tokens: u32,
}

pub struct OpenAiCompatGateway {
    inner: Arc<Inner>,
}

impl OpenAiCompatGateway {
    /// Build the gateway. The API key is read now but only required when a
    /// session is created.
    pub fn new(settings: OpenAiSettings) -> Result<Self, GatewayError> {
        let http = reqwest::Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;

        let api_key = if settings.api_key_env.is_empty() {
            None
        } else {
            std::env::var(&settings.api_key_env)
                .ok()
                .filter(|k| !k.trim().is_empty())
        };

        Ok(Self {
            inner: Arc::new(Inner {
                http,
                endpoint: completions_endpoint(&settings.base_url),
                api_key,
                api_key_env: settings.api_key_env,
                temperature: settings.temperature,
                max_tokens: settings.max_tokens,
            }),
        })
    }
}

fn completions_endpoint(base_url: &str) -> String {
    format!("{}/chat/completions", base_url.trim_end_matches('/'))
}

#[async_trait]
impl LlmGateway for OpenAiCompatGateway {
    async fn create_session(
        &self,
        model: &str,
        system_prompt: &str,
    ) -> Result<Box<dyn LlmSession>, GatewayError> {
        if self.inner.api_key.is_none() && !self.inner.api_key_env.is_empty() {
            return Err(GatewayError::MissingApiKey(self.inner.api_key_env.clone()));
        }
        if model.trim().is_empty() {
            return Err(GatewayError::ModelNotAvailable("(empty)".to_string()));
        }
        Ok(Box::new(OpenAiSession {
            inner: Arc::clone(&self.inner),
            model: model.to_string(),
            system_prompt: system_prompt.to_string(),
        }))
    }
}

pub struct OpenAiSession {
    inner: Arc<Inner>,
    model: String,
    system_prompt: String,
}

#[async_trait]
impl LlmSession for OpenAiSession {
    fn model(&self) -> &str {
        &self.model
    }

    async fn send(&self, content: &str) -> Result<String, GatewayError> {
        let request = ChatCompletionRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &self.system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content,
                },
            ],
            temperature: Some(self.inner.temperature),
            max_tokens: Some(self.inner.max_tokens),
        };

        let mut http_req = self.inner.http.post(&self.inner.endpoint).json(&request);
        if let Some(key) = &self.inner.api_key {
            http_req = http_req.bearer_auth(key);
        }

        let response = http_req.send().await.map_err(|e| {
            if e.is_timeout() {
                GatewayError::Timeout
            } else {
                GatewayError::ConnectionError(e.to_string())
            }
        })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GatewayError::RequestFailed(e.to_string()))?;

        if status.as_u16() == 404 {
            return Err(GatewayError::ModelNotAvailable(self.model.clone()));
        }
        if !status.is_success() {
            let snippet: String = body.chars().take(400).collect();
            return Err(GatewayError::RequestFailed(format!(
                "{} {}: {}",
                self.model,
                status.as_u16(),
                snippet
            )));
        }

        let parsed: ChatCompletionResponse = serde_json::from_str(&body)
            .map_err(|e| GatewayError::RequestFailed(format!("invalid response JSON: {}", e)))?;
        let text = parsed
            .first_content()
            .ok_or_else(|| GatewayError::EmptyResponse(self.model.clone()))?;

        debug!("{} answered with {} chars", self.model, text.chars().count());
        Ok(text)
    }
}
