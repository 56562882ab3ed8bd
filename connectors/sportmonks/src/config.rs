//! Configuration for Sportmonks connector

use serde::{Deserialize, Serialize};

/// Sportmonks soccer API configuration
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SportmonksConfig {
    /// API token, sent as the `api_token` query parameter
    pub api_token: String,
    /// API base URL
    pub api_base: String,
    /// Relations requested through the `include` query parameter
    pub include: String,
    /// Request timeout in milliseconds
    pub timeout_ms: u64,
}

impl SportmonksConfig {
    /// Create a new Sportmonks config with the given API token
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            api_token: api_token.into(),
            api_base: "https://soccer.sportmonks.com/api/v2.0".to_string(),
            include: "standings".to_string(),
            timeout_ms: 30_000,
        }
    }

    /// Set the API base URL
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Set request timeout
    pub fn with_timeout(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Today's fixtures endpoint, without the query string
    pub fn fixtures_today_url(&self) -> String {
        format!("{}/fixtures/today", self.api_base.trim_end_matches('/'))
    }
}

impl Default for SportmonksConfig {
    fn default() -> Self {
        Self::new("")
    }
}

impl std::fmt::Debug for SportmonksConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SportmonksConfig")
            .field("api_token", &"<redacted>")
            .field("api_base", &self.api_base)
            .field("include", &self.include)
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}
