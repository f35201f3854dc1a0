// Copyright (c) 2026 - present The scribe developers
// SPDX-License-Identifier: MIT

//! Model invocation
//!
//! The [`ChatModel`] trait is the seam between the conversation loop and
//! the remote model, so tests can script responses. [`GroqModel`] is the
//! production implementation: one POST to an OpenAI-compatible
//! chat-completions endpoint per invocation, temperature fixed at 0.
//! Failures here are fatal to the run; there is no retry layer.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::AgentError;
use crate::message::ChatMessage;

/// Default model served by the Groq endpoint
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

/// Default OpenAI-compatible API root
pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// A remote model that can be invoked with the conversation so far
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Send the message sequence and tool schemas, await one assistant turn
    ///
    /// # Errors
    ///
    /// Returns `AgentError` on network, HTTP, or decode failure.
    async fn invoke(
        &self,
        messages: &[ChatMessage],
        tools: &[Value],
    ) -> Result<ChatMessage, AgentError>;
}

/// Chat-completions client for the Groq API
pub struct GroqModel {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    temperature: f32,
    messages: &'a [ChatMessage],
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    tools: &'a [Value],
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChatMessage,
}

impl GroqModel {
    /// Create a client for the given endpoint, key, and model name
    #[must_use]
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    /// The model name this client invokes
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }

    fn parse_response(body: ChatResponse) -> Result<ChatMessage, AgentError> {
        body.choices
            .into_iter()
            .next()
            .map(|c| c.message)
            .ok_or(AgentError::EmptyResponse)
    }
}

#[async_trait]
impl ChatModel for GroqModel {
    async fn invoke(
        &self,
        messages: &[ChatMessage],
        tools: &[Value],
    ) -> Result<ChatMessage, AgentError> {
        let request = ChatRequest {
            model: &self.model,
            // Deterministic sampling
            temperature: 0.0,
            messages,
            tools,
        };

        debug!(model = %self.model, messages = messages.len(), "Invoking model");
        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AgentError::Model {
                status: status.as_u16(),
                body,
            });
        }

        let body: ChatResponse = response.json().await?;
        Self::parse_response(body)
    }
}
