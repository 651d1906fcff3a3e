//! OpenAI-compatible chat completions provider (feature `openai`).

use crate::config::FileProviderConfig;
use async_trait::async_trait;
use concord_application::{CompletionError, TextCompletion};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}

/// Provider backed by any OpenAI-compatible `/chat/completions` endpoint.
pub struct OpenAiCompletion {
    client: reqwest::Client,
    api_base: String,
    model: String,
    api_key: String,
}

impl OpenAiCompletion {
    /// Build the provider from config, reading the API key from the
    /// configured environment variable.
    pub fn from_config(config: &FileProviderConfig) -> Result<Self, CompletionError> {
        let api_key = std::env::var(&config.api_key_env).map_err(|_| {
            CompletionError::NotConfigured(format!(
                "environment variable {} is not set",
                config.api_key_env
            ))
        })?;

        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| CompletionError::ConnectionError(e.to_string()))?;

        Ok(Self {
            client,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key,
        })
    }
}

#[async_trait]
impl TextCompletion for OpenAiCompletion {
    async fn complete(
        &self,
        system_prompt: &str,
        prompt: &str,
    ) -> Result<String, CompletionError> {
        let url = format!("{}/chat/completions", self.api_base);
        debug!(model = %self.model, "Requesting chat completion");

        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    CompletionError::Timeout
                } else if e.is_connect() {
                    CompletionError::ConnectionError(e.to_string())
                } else {
                    CompletionError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CompletionError::RequestFailed(format!(
                "HTTP {status}: {body}"
            )));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| CompletionError::RequestFailed(format!("invalid response body: {e}")))?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| {
                CompletionError::RequestFailed("response contained no choices".to_string())
            })
    }
}
