//! LLM provider abstraction for preference interpretation.
//!
//! This module provides a trait-based abstraction over the generative-text
//! service, with a fake implementation for testing.

mod fake;
mod gemini;

pub use fake::FakeProvider;
pub use gemini::GeminiProvider;

use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

use crate::types::ChatMessage;

/// Error type for LLM operations.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("API returned error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("Provider not configured: {0}")]
    NotConfigured(String),
}

/// Trait for generative-text providers.
///
/// Implementations should be stateless and thread-safe. Each call is
/// independent: no retries, no caching, and the same prompt may yield
/// different text between calls.
#[async_trait]
pub trait LlmProvider: Send + Sync + fmt::Debug {
    /// Send a single prompt and get a text response.
    async fn complete(&self, prompt: &str) -> Result<String, LlmError>;

    /// Replay a full conversation and get the next assistant response.
    async fn chat(&self, messages: &[ChatMessage]) -> Result<String, LlmError>;

    /// Get the provider name (e.g., "gemini", "fake").
    fn provider_name(&self) -> &'static str;

    /// Get the model name (e.g., "gemini-1.5-pro-latest").
    fn model_name(&self) -> &str;
}

/// Registry of available providers.
///
/// Use environment variables to configure:
/// - DISHDECODER_PROVIDER: "gemini" | "fake" (default: "gemini" when
///   GEMINI_API_KEY is set, "fake" otherwise)
/// - DISHDECODER_MODEL: Model name
/// - GEMINI_API_KEY: API key for Gemini
pub fn create_provider_from_env() -> Result<Box<dyn LlmProvider>, LlmError> {
    let provider = std::env::var("DISHDECODER_PROVIDER").unwrap_or_else(|_| {
        if std::env::var("GEMINI_API_KEY").is_ok() {
            "gemini".to_string()
        } else {
            "fake".to_string()
        }
    });

    match provider.as_str() {
        "fake" => Ok(Box::new(FakeProvider::default())),
        "gemini" => {
            let config = crate::config::LlmConfig::from_env()
                .map_err(|e| LlmError::NotConfigured(e.to_string()))?;
            Ok(Box::new(GeminiProvider::new(config)))
        }
        other => Err(LlmError::NotConfigured(format!(
            "Unknown provider: {}",
            other
        ))),
    }
}
