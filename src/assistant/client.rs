use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::config::AssistantConfig;

#[derive(Debug, Error)]
pub enum AssistantError {
    #[error("request to model service failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("model service returned {0}")]
    Status(StatusCode),
    #[error("model service returned no choices")]
    EmptyResponse,
}

/// Boundary to the external language-model service. One method: a role-tagged
/// system/user message pair in, generated text out.
#[async_trait]
pub trait AssistantClient: Send + Sync {
    async fn complete(&self, system: &str, user: &str) -> Result<String, AssistantError>;
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: String,
}

/// Chat-completions client for OpenAI-compatible endpoints.
pub struct OpenAiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl OpenAiClient {
    pub fn new(config: &AssistantConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        })
    }
}

#[async_trait]
impl AssistantClient for OpenAiClient {
    async fn complete(&self, system: &str, user: &str) -> Result<String, AssistantError> {
        let body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
        };

        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AssistantError::Status(status));
        }

        let parsed: ChatResponse = response.json().await?;
        let answer = parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or(AssistantError::EmptyResponse)?;
        debug!(answer_len = answer.len(), "model answered");
        Ok(answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_request_has_role_tagged_message_pair() {
        let body = ChatRequest {
            model: "gpt-4o",
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: "You are a helpful personal finance assistant.",
                },
                ChatMessage {
                    role: "user",
                    content: "How much did I spend?",
                },
            ],
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["model"], "gpt-4o");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["role"], "user");
    }

    #[test]
    fn chat_response_parses_first_choice() {
        let raw = r#"{
            "choices": [
                {"message": {"role": "assistant", "content": "You spent 12.50."}}
            ]
        }"#;
        let parsed: ChatResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.choices[0].message.content, "You spent 12.50.");
    }

    #[test]
    fn chat_response_tolerates_no_choices() {
        let parsed: ChatResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert!(parsed.choices.is_empty());
    }
}
