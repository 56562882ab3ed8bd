//! Configuration for OpenAI connector

use serde::{Deserialize, Serialize};

/// OpenAI API configuration
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenAiConfig {
    /// OpenAI API key
    pub api_key: String,
    /// Model to use (e.g., "gpt-4", "gpt-4o")
    pub model: String,
    /// API base URL
    pub api_base: String,
    /// Maximum tokens to generate, provider default when unset
    pub max_tokens: Option<u32>,
    /// Temperature for generation (0.0 to 2.0), provider default when unset
    pub temperature: Option<f32>,
    /// Request timeout in milliseconds
    pub timeout_ms: u64,
}

impl OpenAiConfig {
    /// Create a new OpenAI config with the given API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: "gpt-4".to_string(),
            api_base: "https://api.openai.com/v1".to_string(),
            max_tokens: None,
            temperature: None,
            timeout_ms: 30_000,
        }
    }

    /// Set the model to use
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the API base URL (for Azure OpenAI or other compatible services)
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Set maximum tokens
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Set temperature
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature.clamp(0.0, 2.0));
        self
    }

    /// Set request timeout
    pub fn with_timeout(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Chat completions endpoint
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.api_base.trim_end_matches('/'))
    }
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self::new("") // Empty API key - the provider rejects calls until one is set
    }
}

impl std::fmt::Debug for OpenAiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("api_base", &self.api_base)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}
