//! OpenAI-compatible API provider.
//!
//! Works with OpenAI's API and any compatible endpoint. One request per
//! call, no retry, no timeout: every failure mode maps to a
//! [`CompletionOutcome`] variant the caller renders as a degraded reply.

use async_trait::async_trait;
use kairo_core::{
    completion::CompletionOutcome,
    config::OpenAiConfig,
    context::{ApiMessage, Context},
    traits::Provider,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Sampling temperature for the planning persona.
const TEMPERATURE: f32 = 0.3;

/// OpenAI-compatible completion provider.
pub struct OpenAiProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl OpenAiProvider {
    /// Create from config values.
    pub fn from_config(config: &OpenAiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        }
    }
}

/// Build OpenAI-format messages from context (system as a message role).
pub(crate) fn build_messages(system: &str, api_messages: &[ApiMessage]) -> Vec<ChatMessage> {
    let mut messages = Vec::with_capacity(api_messages.len() + 1);
    if !system.is_empty() {
        messages.push(ChatMessage {
            role: "system".to_string(),
            content: system.to_string(),
        });
    }
    for m in api_messages {
        messages.push(ChatMessage {
            role: m.role.clone(),
            content: m.content.clone(),
        });
    }
    messages
}

#[derive(Serialize, Deserialize, Clone)]
pub(crate) struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Serialize)]
pub(crate) struct ChatCompletionRequest {
    pub model: String,
    pub temperature: f32,
    pub messages: Vec<ChatMessage>,
}

#[derive(Deserialize)]
pub(crate) struct ChatCompletionResponse {
    pub choices: Option<Vec<ChatChoice>>,
}

#[derive(Deserialize)]
pub(crate) struct ChatChoice {
    pub message: Option<ChatMessage>,
}

/// Pull the best reply string out of a decoded response, if any.
pub(crate) fn extract_reply_text(resp: &ChatCompletionResponse) -> Option<String> {
    let text = resp
        .choices
        .as_ref()?
        .first()?
        .message
        .as_ref()
        .map(|m| m.content.clone())?;
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

#[async_trait]
impl Provider for OpenAiProvider {
    fn name(&self) -> &str {
        "openai"
    }

    fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }

    async fn complete(&self, context: &Context) -> CompletionOutcome {
        if !self.is_configured() {
            return CompletionOutcome::Unavailable;
        }

        let (system, api_messages) = context.to_api_messages();
        let body = ChatCompletionRequest {
            model: self.model.clone(),
            temperature: TEMPERATURE,
            messages: build_messages(&system, &api_messages),
        };

        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));
        debug!("openai: POST {url} model={}", self.model);

        let resp = match self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await
        {
            Ok(r) => r,
            Err(e) => {
                warn!("openai request failed: {e}");
                return CompletionOutcome::NetworkFailure;
            }
        };

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            warn!("openai returned {status}: {text}");
            return CompletionOutcome::NetworkFailure;
        }

        let parsed: ChatCompletionResponse = match resp.json().await {
            Ok(p) => p,
            Err(e) => {
                warn!("openai: failed to decode response: {e}");
                return CompletionOutcome::NetworkFailure;
            }
        };

        match extract_reply_text(&parsed) {
            Some(text) => CompletionOutcome::Text(text),
            None => CompletionOutcome::EmptyResponse,
        }
    }
}
