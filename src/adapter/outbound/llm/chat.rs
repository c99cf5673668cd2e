//! Chat-completions LLM client.
//!
//! Provides an implementation of the [`Llm`] trait for OpenAI-compatible
//! chat-completion endpoints (the report generator points it at the x.ai
//! API). The model identifier is supplied per call so the composer can walk
//! its candidate list over one client.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::port::outbound::llm::Llm;

/// Chat-completions API client.
#[derive(Debug)]
pub struct ChatCompletions {
    /// HTTP client for API requests.
    client: Client,
    /// Completion endpoint URL.
    api_url: String,
    /// Bearer token for authentication.
    api_key: String,
    /// Maximum tokens to generate in the response.
    max_tokens: usize,
    /// Sampling temperature.
    temperature: f64,
}

impl ChatCompletions {
    /// Create a new client with explicit configuration.
    #[must_use]
    pub fn new(
        api_url: impl Into<String>,
        api_key: impl Into<String>,
        max_tokens: usize,
        temperature: f64,
    ) -> Self {
        Self {
            client: Client::new(),
            api_url: api_url.into(),
            api_key: api_key.into(),
            max_tokens,
            temperature,
        }
    }
}

#[derive(Serialize)]
struct Request {
    model: String,
    max_tokens: usize,
    temperature: f64,
    messages: Vec<Message>,
}

#[derive(Serialize)]
struct Message {
    role: &'static str,
    content: String,
}

#[derive(Deserialize)]
struct Response {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

#[async_trait]
impl Llm for ChatCompletions {
    fn name(&self) -> &'static str {
        "chat-completions"
    }

    async fn complete(&self, model: &str, prompt: &str) -> Result<String> {
        let request = Request {
            model: model.to_string(),
            max_tokens: self.max_tokens,
            temperature: self.temperature,
            messages: vec![Message {
                role: "user",
                content: prompt.to_string(),
            }],
        };

        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?
            .error_for_status()
            .map_err(|e| Error::Connection(e.to_string()))?
            .json::<Response>()
            .await?;

        Ok(response
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serialization() {
        let request = Request {
            model: "grok-3-mini".to_string(),
            max_tokens: 8000,
            temperature: 0.5,
            messages: vec![Message {
                role: "user",
                content: "Complete the table.".to_string(),
            }],
        };

        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["model"], "grok-3-mini");
        assert_eq!(json["max_tokens"], 8000);
        assert_eq!(json["temperature"], 0.5);
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "Complete the table.");
    }

    #[test]
    fn response_deserialization_single_choice() {
        let json = r#"{
            "id": "chatcmpl-123",
            "object": "chat.completion",
            "model": "grok-3-mini",
            "choices": [{
                "index": 0,
                "message": {
                    "role": "assistant",
                    "content": "| Coin | Current Price |"
                },
                "finish_reason": "stop"
            }],
            "usage": {"prompt_tokens": 10, "completion_tokens": 8, "total_tokens": 18}
        }"#;

        let response: Response = serde_json::from_str(json).unwrap();
        assert_eq!(response.choices.len(), 1);
        assert_eq!(response.choices[0].message.content, "| Coin | Current Price |");
    }

    #[test]
    fn empty_choices_returns_empty_string() {
        let response = Response { choices: vec![] };
        let result: String = response
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .unwrap_or_default();
        assert_eq!(result, "");
    }

    #[test]
    fn malformed_response_missing_choices() {
        let json = r#"{"id": "chatcmpl-123", "model": "grok-3-mini"}"#;
        let result: std::result::Result<Response, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}

/// Integration tests that require real API access.
/// Run with: `cargo test --features integration-tests -- --ignored`
#[cfg(all(test, feature = "integration-tests"))]
mod integration_tests {
    use super::*;
    use std::time::Duration;

    fn create_test_client() -> Option<ChatCompletions> {
        let api_key = std::env::var("GROK_API_KEY").ok()?;
        Some(ChatCompletions::new(
            "https://api.x.ai/v1/chat/completions",
            api_key,
            256,
            0.1,
        ))
    }

    #[tokio::test]
    #[ignore = "requires GROK_API_KEY and network access"]
    async fn simple_completion() {
        let Some(client) = create_test_client() else {
            return;
        };

        let result = tokio::time::timeout(
            Duration::from_secs(30),
            client.complete("grok-3-mini", "Say 'hello' and nothing else."),
        )
        .await
        .expect("Request timed out")
        .expect("API call failed");

        assert!(
            result.to_lowercase().contains("hello"),
            "Expected 'hello' in response: {result}"
        );
    }
}
