//! Matchday relay server

use clap::Parser;
use matchday_connector_openai::OpenAiConnector;
use matchday_connector_sportmonks::SportmonksConnector;
use matchday_core::errors::CoreError;
use matchday_http::{AppState, HttpServer};
use std::process;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

mod cli;
mod config;

use cli::Cli;
use config::MatchdayConfig;

#[tokio::main]
async fn main() {
    let args = Cli::parse();

    // Initialize logging
    let default_level = match args.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    // Load configuration
    let config = match MatchdayConfig::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Override config with CLI args
    let config = config.with_overrides(&args);

    if let Err(e) = run(config).await {
        error!("Server failed: {}", e);
        process::exit(1);
    }
}

async fn run(config: MatchdayConfig) -> Result<(), CoreError> {
    if config.openai.api_key.is_empty() {
        warn!("OPENAI_API_KEY is not set; /chat calls will be rejected by the provider");
    }
    if config.sportmonks.api_token.is_empty() {
        warn!(
            "SPORTMONKS_API_KEY is not set; /predict-today calls will be rejected by the provider"
        );
    }

    info!(
        "Using OpenAI model {} at {} and Sportmonks at {}",
        config.openai.model, config.openai.api_base, config.sportmonks.api_base
    );

    let llm = OpenAiConnector::new(config.openai)?;
    let fixtures = SportmonksConnector::new(config.sportmonks)?;
    let state = AppState::new(Arc::new(llm), Arc::new(fixtures));

    HttpServer::new(config.server)
        .serve(state, shutdown_signal())
        .await
        .map_err(|e| CoreError::Internal(e.to_string()))
}

/// Resolves on Ctrl-C or, on Unix, SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
