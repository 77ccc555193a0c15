//! Chat-completion client: one request, one response.
//!
//! This module is intentionally thin. It owns the wire types for an
//! OpenAI-compatible `/chat/completions` exchange and a [`CompletionClient`]
//! that issues exactly one POST — no retry, no streaming, no backoff. Any
//! failure (transport, non-2xx status, unusable body) maps to a
//! [`DocAskError`] completion variant; the caller decides how to display it.

use crate::config::AskConfig;
use crate::error::DocAskError;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// A single chat message on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    /// A `user`-role message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Token counts reported by the API for one exchange.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// A successful completion: the assistant's text plus usage, when reported.
#[derive(Debug, Clone)]
pub struct Completion {
    pub content: String,
    pub usage: Option<TokenUsage>,
}

// ── Wire types ───────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f64,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
    #[serde(default)]
    usage: Option<TokenUsage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Standard OpenAI error envelope: `{"error":{"message":…}}`.
#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

// ── Client ───────────────────────────────────────────────────────────────

/// Client for one OpenAI-compatible completion endpoint.
///
/// Holds the user-supplied key for the lifetime of a single request cycle;
/// nothing is persisted.
pub struct CompletionClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl CompletionClient {
    /// Create a client for the endpoint named in `config`.
    ///
    /// Fails with [`DocAskError::MissingApiKey`] when the key is blank —
    /// better caught here than as a confusing 401 from the API.
    pub fn new(api_key: impl Into<String>, config: &AskConfig) -> Result<Self, DocAskError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(DocAskError::MissingApiKey);
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.api_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    /// Issue one completion request and return the assistant's text.
    ///
    /// The message list is sent as-is (this tool always sends a single user
    /// turn). Sampling parameters come from `config`.
    pub async fn complete(
        &self,
        messages: &[ChatMessage],
        config: &AskConfig,
    ) -> Result<Completion, DocAskError> {
        let request = ChatCompletionRequest {
            model: &config.model,
            messages,
            temperature: f64::from(config.temperature),
            max_tokens: config.max_tokens,
        };

        let url = format!("{}/chat/completions", self.base_url);
        debug!(model = %config.model, url = %url, "sending completion request");

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Prefer the server's own message when the body is the standard
            // error envelope; otherwise show the raw body.
            let message = serde_json::from_str::<ApiErrorEnvelope>(&body)
                .map(|envelope| envelope.error.message)
                .unwrap_or(body);
            return Err(DocAskError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: ChatCompletionResponse =
            response
                .json()
                .await
                .map_err(|e| DocAskError::MalformedResponse {
                    detail: e.to_string(),
                })?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| DocAskError::MalformedResponse {
                detail: "response contained no message content".to_string(),
            })?;

        Ok(Completion {
            content,
            usage: parsed.usage,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_api_key_is_rejected() {
        let config = AskConfig::default();
        assert!(matches!(
            CompletionClient::new("  ", &config),
            Err(DocAskError::MissingApiKey)
        ));
        assert!(CompletionClient::new("sk-test", &config).is_ok());
    }

    #[test]
    fn request_serialises_fixed_parameters() {
        let messages = [ChatMessage::user("hello")];
        let request = ChatCompletionRequest {
            model: "gpt-3.5-turbo",
            messages: &messages,
            temperature: 0.2,
            max_tokens: 1000,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "gpt-3.5-turbo");
        assert_eq!(json["temperature"], 0.2);
        assert_eq!(json["max_tokens"], 1000);
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "hello");
    }

    #[test]
    fn response_deserialises_content_and_usage() {
        let body = r#"{
            "choices": [{"message": {"role": "assistant", "content": "the answer"}}],
            "usage": {"prompt_tokens": 12, "completion_tokens": 3, "total_tokens": 15}
        }"#;
        let parsed: ChatCompletionResponse = serde_json::from_str(body).unwrap();
        assert_eq!(
            parsed.choices[0].message.content.as_deref(),
            Some("the answer")
        );
        assert_eq!(parsed.usage.unwrap().total_tokens, 15);
    }

    #[test]
    fn error_envelope_extracts_server_message() {
        let body = r#"{"error": {"message": "Incorrect API key provided", "type": "invalid_request_error"}}"#;
        let envelope: ApiErrorEnvelope = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.error.message, "Incorrect API key provided");
    }
}
