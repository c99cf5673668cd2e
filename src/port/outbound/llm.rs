//! LLM completion port.

use async_trait::async_trait;

use crate::error::Result;

/// Client for large language model text completion.
///
/// The model identifier is a call parameter rather than client state so the
/// composer can walk an ordered candidate list over a single client.
///
/// # Thread Safety
///
/// Implementations must be thread-safe (`Send + Sync`).
///
/// # Errors
///
/// The [`complete`](Self::complete) method returns an error for API
/// failures, rate limits, or invalid responses.
#[async_trait]
pub trait Llm: Send + Sync {
    /// Return the provider name for logging.
    fn name(&self) -> &'static str;

    /// Send a completion request for `model` and return the generated text.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or the response is invalid.
    async fn complete(&self, model: &str, prompt: &str) -> Result<String>;
}
