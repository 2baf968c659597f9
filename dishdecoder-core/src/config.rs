//! Configuration from environment variables.

use std::env;

use crate::error::ConfigError;

/// Default Gemini API base URL.
pub const DEFAULT_LLM_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default generative model.
pub const DEFAULT_MODEL: &str = "gemini-1.5-pro-latest";

/// Default Spoonacular API base URL.
pub const DEFAULT_CATALOG_BASE_URL: &str = "https://api.spoonacular.com";

/// Generative-text service configuration.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// API key for the Gemini API.
    pub api_key: String,
    /// Model name (e.g., "gemini-1.5-pro-latest").
    pub model: String,
    /// Base URL for the API.
    pub base_url: String,
}

impl LlmConfig {
    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - `GEMINI_API_KEY`: API key for the Gemini API
    ///
    /// Optional:
    /// - `DISHDECODER_MODEL`: Model name (default: "gemini-1.5-pro-latest")
    /// - `DISHDECODER_LLM_BASE_URL`: API base URL
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = env::var("GEMINI_API_KEY")
            .map_err(|_| ConfigError::MissingEnvVar("GEMINI_API_KEY".to_string()))?;

        let model = env::var("DISHDECODER_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let base_url = env::var("DISHDECODER_LLM_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_LLM_BASE_URL.to_string());

        Ok(Self {
            api_key,
            model,
            base_url,
        })
    }
}

/// Recipe catalog configuration.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// API key for Spoonacular.
    pub api_key: String,
    /// Base URL for the API.
    pub base_url: String,
}

impl CatalogConfig {
    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - `SPOONACULAR_API_KEY`: API key for Spoonacular
    ///
    /// Optional:
    /// - `DISHDECODER_CATALOG_BASE_URL`: API base URL
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = env::var("SPOONACULAR_API_KEY")
            .map_err(|_| ConfigError::MissingEnvVar("SPOONACULAR_API_KEY".to_string()))?;

        let base_url = env::var("DISHDECODER_CATALOG_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_CATALOG_BASE_URL.to_string());

        Ok(Self { api_key, base_url })
    }
}
