//! Configuration management for matchdayd

use crate::cli::Cli;
use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use matchday_connector_openai::OpenAiConfig;
use matchday_connector_sportmonks::SportmonksConfig;
use matchday_core::errors::CoreError;
use matchday_http::HttpServerConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level server configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchdayConfig {
    pub server: HttpServerConfig,
    pub openai: OpenAiConfig,
    pub sportmonks: SportmonksConfig,
}

const DEFAULT_CONFIG_PATHS: [&str; 4] = [
    "matchday.yaml",
    "matchday.yml",
    ".matchday.yaml",
    ".matchday.yml",
];

impl MatchdayConfig {
    /// Load configuration from defaults, YAML files and environment
    ///
    /// Later layers win: built-in defaults, the first default config file
    /// found in the working directory, `config_path`, `MATCHDAY_*` variables
    /// (`__` separates nested keys), then the provider credentials
    /// `OPENAI_API_KEY` and `SPORTMONKS_API_KEY`.
    pub fn load(config_path: Option<&Path>) -> Result<Self, CoreError> {
        let mut figment = Figment::from(Serialized::defaults(MatchdayConfig::default()));

        if let Some(path) = DEFAULT_CONFIG_PATHS.iter().find(|p| Path::new(p).exists()) {
            figment = figment.merge(Yaml::file(path));
        }

        if let Some(path) = config_path {
            if !path.exists() {
                return Err(CoreError::Configuration(format!(
                    "Configuration file not found: {}",
                    path.display()
                )));
            }
            figment = figment.merge(Yaml::file(path));
        }

        figment = figment
            .merge(Env::prefixed("MATCHDAY_").split("__"))
            .merge(Env::raw().only(&["OPENAI_API_KEY"]).map(|_| "openai.api_key".into()))
            .merge(Env::raw().only(&["SPORTMONKS_API_KEY"]).map(|_| "sportmonks.api_token".into()));

        figment
            .extract()
            .map_err(|e| CoreError::Configuration(format!("Failed to parse configuration: {}", e)))
    }

    /// Apply CLI argument overrides to the configuration
    pub fn with_overrides(mut self, args: &Cli) -> Self {
        if let Some(bind) = args.bind {
            self.server.bind_address = bind;
        }
        self
    }
}
