// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client for an OpenAI-compatible chat completion API.

use crate::auth::{AuthStrategy, BearerToken};
use crate::config::Config;
use crate::error::{AppError, Result};
use crate::services::api_client::decode_body;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

/// Chat completions can take a while for long answers.
const CHAT_TIMEOUT: Duration = Duration::from_secs(120);

/// One message of a chat conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Body of `POST /chat/completions`.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}

/// Chat completion client.
#[derive(Clone)]
pub struct ChatClient {
    http: reqwest::Client,
    base_url: String,
    auth: Arc<dyn AuthStrategy>,
}

impl ChatClient {
    pub fn new(base_url: &str, auth: Arc<dyn AuthStrategy>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(CHAT_TIMEOUT)
            .build()
            .map_err(|e| AppError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            auth,
        })
    }

    /// Create a client from configuration; fails when no API key is set.
    pub fn from_config(config: &Config) -> Result<Self> {
        let key = config.require_openai_key()?;
        Self::new(&config.openai_base_url, Arc::new(BearerToken::new(key)))
    }

    /// Send a chat request and return the text of the first choice.
    pub async fn complete(&self, request: &ChatRequest) -> Result<String> {
        let url = format!("{}/chat/completions", self.base_url);

        tracing::info!(
            model = %request.model,
            messages = request.messages.len(),
            "Requesting chat completion"
        );

        let response = self
            .auth
            .authorize(self.http.post(&url).json(request))
            .send()
            .await
            .map_err(|e| AppError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Http {
                status: status.as_u16(),
                url,
                body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| AppError::Transport(e.to_string()))?;
        let parsed: ChatResponse = decode_body(&url, &body)?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(AppError::EmptyCompletion)
    }
}
