//! Chat-completion endpoints (`{"model", "messages"}` in,
//! `choices[0].message.content` out).

use crate::config::BackendConfig;
use crate::engine::{Backend, BackendError};
use crate::llm::{credential::Credential, send};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::instrument;

pub const DEFAULT_SYSTEM_PROMPT: &str =
    "You are StudyMate, a patient study assistant. Answer clearly and concisely, one idea per line.";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Message {
    pub role: String,
    pub content: String,
}

#[derive(Serialize, Debug, PartialEq)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
}

#[derive(Deserialize, Debug)]
pub struct ChatResponse {
    pub choices: Vec<Choice>,
}

#[derive(Deserialize, Debug)]
pub struct Choice {
    pub message: Message,
}

pub struct ChatBackend {
    name: String,
    url: String,
    model: String,
    system_prompt: String,
    client: Client,
    credential: Credential,
    temperature: f32,
    timeout: Duration,
}

impl ChatBackend {
    pub fn from_config(config: &BackendConfig, client: Client, credential: Credential) -> Self {
        Self {
            name: config.display_name(),
            url: config.url.clone(),
            model: config.model.clone().unwrap_or_default(),
            system_prompt: config
                .system_prompt
                .clone()
                .unwrap_or_else(|| DEFAULT_SYSTEM_PROMPT.to_string()),
            client,
            credential,
            temperature: config.temperature,
            timeout: config.timeout(),
        }
    }

    pub fn request(&self, prompt: &str, max_tokens: u32) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            messages: vec![
                Message {
                    role: "system".to_string(),
                    content: self.system_prompt.clone(),
                },
                Message {
                    role: "user".to_string(),
                    content: prompt.to_string(),
                },
            ],
            max_tokens: Some(max_tokens),
            temperature: Some(self.temperature),
        }
    }
}

pub fn extract_content(body: serde_json::Value) -> Result<String, BackendError> {
    let response: ChatResponse = serde_json::from_value(body).map_err(|e| BackendError::Transport {
        reason: format!("Failed to parse API response as JSON: {}", e),
    })?;

    let choice = response.choices.into_iter().next().ok_or_else(|| BackendError::Transport {
        reason: "API returned empty response".to_string(),
    })?;

    if choice.message.content.trim().is_empty() {
        return Err(BackendError::Transport {
            reason: "API returned empty content".to_string(),
        });
    }

    Ok(choice.message.content)
}

#[async_trait::async_trait]
impl Backend for ChatBackend {
    fn name(&self) -> &str {
        &self.name
    }

    fn timeout(&self) -> Duration {
        self.timeout
    }

    #[instrument(skip(self, prompt), fields(backend = %self.name, model = %self.model))]
    async fn complete(&self, prompt: &str, max_tokens: u32) -> Result<String, BackendError> {
        let body = self.request(prompt, max_tokens);
        let response = send::post_json(&self.client, &self.url, &self.credential, &body, self.timeout).await?;
        extract_content(response)
    }
}
