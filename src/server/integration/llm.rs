//! Hosted language model client for the shopping assistant.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::server::{config::LlmConfig, error::internal::InternalError};

const MESSAGES_API_URL: &str = "https://api.anthropic.com/v1/messages";
const API_VERSION: &str = "2023-06-01";
const MAX_TOKENS: u32 = 512;

/// One conversation turn sent to the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatTurn {
    /// `user` or `assistant`.
    pub role: String,
    pub content: String,
}

#[async_trait::async_trait]
pub trait ChatModel: Send + Sync {
    /// Returns the model's reply to `messages` under the `system` prompt.
    async fn complete(&self, system: &str, messages: &[ChatTurn]) -> Result<String, InternalError>;
}

pub type DynChatModel = Arc<dyn ChatModel>;

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: &'a [ChatTurn],
}

#[derive(Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

pub struct HttpChatModel {
    client: reqwest::Client,
    config: LlmConfig,
}

impl HttpChatModel {
    pub fn new(client: reqwest::Client, config: LlmConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait::async_trait]
impl ChatModel for HttpChatModel {
    async fn complete(&self, system: &str, messages: &[ChatTurn]) -> Result<String, InternalError> {
        let response = self
            .client
            .post(MESSAGES_API_URL)
            .header("x-api-key", &self.config.api_key)
            .header("anthropic-version", API_VERSION)
            .json(&MessagesRequest {
                model: &self.config.model,
                max_tokens: MAX_TOKENS,
                system,
                messages,
            })
            .send()
            .await
            .map_err(|e| InternalError::ChatModel(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(InternalError::ChatModel(format!("{}: {}", status, body)));
        }

        let body: MessagesResponse = response
            .json()
            .await
            .map_err(|e| InternalError::ChatModel(e.to_string()))?;

        let text: String = body
            .content
            .into_iter()
            .filter(|block| block.kind == "text")
            .filter_map(|block| block.text)
            .collect::<Vec<_>>()
            .join("");

        if text.trim().is_empty() {
            return Err(InternalError::ChatModel("empty reply".to_string()));
        }

        Ok(text)
    }
}
