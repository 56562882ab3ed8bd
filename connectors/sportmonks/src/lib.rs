//! Sportmonks connector for the Matchday fixture summaries

use async_trait::async_trait;
use matchday_core::prelude::*;
use reqwest::Client;
use std::time::Instant;
use tracing::{debug, error, info, warn};

mod config;
mod models;

pub use config::SportmonksConfig;
use models::*;

/// Sportmonks implementation of FixtureSource
pub struct SportmonksConnector {
    client: Client,
    config: SportmonksConfig,
}

impl SportmonksConnector {
    /// Create a new Sportmonks connector
    pub fn new(config: SportmonksConfig) -> Result<Self, FixtureError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| {
                FixtureError::ConfigError(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { client, config })
    }

    /// Map a transport error, stripping the URL since it carries the API token
    fn transport_error(&self, e: reqwest::Error) -> FixtureError {
        if e.is_timeout() {
            warn!("Sportmonks request timed out after {}ms", self.config.timeout_ms);
            FixtureError::Timeout
        } else {
            let e = e.without_url();
            error!("Sportmonks request failed: {}", e);
            FixtureError::NetworkError(format!("HTTP request failed: {}", e))
        }
    }

    fn api_error(status: reqwest::StatusCode, body: &str) -> FixtureError {
        match serde_json::from_str::<SportmonksError>(body) {
            Ok(parsed) => FixtureError::ApiError(format!(
                "Sportmonks API error {} (code {:?}): {}",
                status, parsed.error.code, parsed.error.message
            )),
            Err(_) => FixtureError::ApiError(format!("Sportmonks API error {}: {}", status, body)),
        }
    }

    /// Parse the response body into fixture records, failing on the first bad record
    fn parse_fixtures(body: &str) -> Result<Vec<FixtureRecord>, FixtureError> {
        let envelope: FixturesEnvelope = serde_json::from_str(body).map_err(|e| {
            FixtureError::MalformedPayload(format!("Failed to parse response: {}", e))
        })?;

        if let Some(pagination) = envelope.pagination() {
            if pagination.total_pages > pagination.current_page {
                warn!(
                    "Only page {} of {} fetched ({:?} fixtures in total)",
                    pagination.current_page, pagination.total_pages, pagination.total
                );
            }
        }

        envelope
            .data
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(index, value)| {
                serde_json::from_value::<FixtureRecord>(value).map_err(|e| {
                    FixtureError::MalformedPayload(format!("fixture {}: {}", index, e))
                })
            })
            .collect()
    }
}

#[async_trait]
impl FixtureSource for SportmonksConnector {
    async fn fixtures_today(&self) -> Result<Vec<FixtureRecord>, FixtureError> {
        let url = self.config.fixtures_today_url();
        debug!("GET {} include={}", url, self.config.include);
        let start_time = Instant::now();

        let response = self
            .client
            .get(&url)
            .query(&[
                ("api_token", self.config.api_token.as_str()),
                ("include", self.config.include.as_str()),
            ])
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| self.transport_error(e))?;

        if !status.is_success() {
            warn!("Sportmonks returned {}", status);
            return Err(Self::api_error(status, &body));
        }

        let fixtures = Self::parse_fixtures(&body)?;

        info!(
            "Fetched {} fixtures from Sportmonks in {}ms",
            fixtures.len(),
            start_time.elapsed().as_millis()
        );

        Ok(fixtures)
    }
}
