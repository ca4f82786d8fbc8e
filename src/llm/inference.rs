//! Text-generation endpoints that take `{"inputs": ...}`: the hosted
//! Inference API or a self-hosted text-generation-inference server.

use crate::config::BackendConfig;
use crate::engine::{Backend, BackendError};
use crate::llm::{credential::Credential, send};
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::instrument;

#[derive(Serialize, Debug, PartialEq)]
pub struct InferenceRequest<'a> {
    pub inputs: &'a str,
    pub parameters: InferenceParameters,
}

#[derive(Serialize, Debug, PartialEq)]
pub struct InferenceParameters {
    pub max_new_tokens: u32,
    pub temperature: f32,
    pub do_sample: bool,
    pub return_full_text: bool,
}

pub struct InferenceBackend {
    name: String,
    url: String,
    client: Client,
    credential: Credential,
    temperature: f32,
    timeout: Duration,
}

impl InferenceBackend {
    pub fn new(name: String, url: String, client: Client, credential: Credential, temperature: f32, timeout: Duration) -> Self {
        Self {
            name,
            url,
            client,
            credential,
            temperature,
            timeout,
        }
    }

    pub fn from_config(config: &BackendConfig, client: Client, credential: Credential) -> Self {
        Self::new(
            config.display_name(),
            config.url.clone(),
            client,
            credential,
            config.temperature,
            config.timeout(),
        )
    }

    pub fn request<'a>(&self, prompt: &'a str, max_tokens: u32) -> InferenceRequest<'a> {
        InferenceRequest {
            inputs: prompt,
            parameters: InferenceParameters {
                max_new_tokens: max_tokens,
                temperature: self.temperature,
                do_sample: true,
                return_full_text: false,
            },
        }
    }
}

/// Accepts `[{"generated_text": ..}]` or a bare `{"generated_text": ..}`.
pub fn extract_generated_text(body: &Value) -> Result<String, BackendError> {
    let first = match body {
        Value::Array(items) => items.first(),
        other => Some(other),
    };

    if let Some(text) = first.and_then(|item| item.get("generated_text")).and_then(Value::as_str) {
        return Ok(text.to_string());
    }

    let reason = body
        .get("error")
        .and_then(Value::as_str)
        .map(|e| format!("API reported an error: {}", e))
        .unwrap_or_else(|| "API response has no generated_text".to_string());
    Err(BackendError::Transport { reason })
}

#[async_trait::async_trait]
impl Backend for InferenceBackend {
    fn name(&self) -> &str {
        &self.name
    }

    fn timeout(&self) -> Duration {
        self.timeout
    }

    #[instrument(skip(self, prompt), fields(backend = %self.name))]
    async fn complete(&self, prompt: &str, max_tokens: u32) -> Result<String, BackendError> {
        let body = self.request(prompt, max_tokens);
        let response = send::post_json(&self.client, &self.url, &self.credential, &body, self.timeout).await?;
        extract_generated_text(&response)
    }
}
