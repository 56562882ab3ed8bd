//! HTTP presentation layer for Matchday
//!
//! Exposes the chat relay and the fixture summaries over axum. Handlers talk
//! to upstream providers only through the connector traits held in
//! [`AppState`], and every connector failure is translated to an explicit
//! status code and JSON error body here, at the boundary.

use axum::{
    http::StatusCode,
    middleware::from_fn,
    response::Json,
    routing::{get, post},
    Router,
};
use matchday_core::prelude::*;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info, warn};

mod handlers;
mod middleware;

pub use handlers::health::HealthStatus;

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpServerConfig {
    /// Server bind address
    pub bind_address: SocketAddr,
    /// Enable permissive CORS for browser clients
    pub enable_cors: bool,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            bind_address: SocketAddr::from(([0, 0, 0, 0], 3000)),
            enable_cors: true,
        }
    }
}

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub llm: Arc<dyn LlmConnector>,
    pub fixtures: Arc<dyn FixtureSource>,
}

impl AppState {
    pub fn new(llm: Arc<dyn LlmConnector>, fixtures: Arc<dyn FixtureSource>) -> Self {
        Self { llm, fixtures }
    }
}

/// Axum-based HTTP server
pub struct HttpServer {
    config: HttpServerConfig,
}

impl HttpServer {
    pub fn new(config: HttpServerConfig) -> Self {
        Self { config }
    }

    /// Build the Axum router with all routes
    pub fn router(&self, state: AppState) -> Router {
        let mut router = Router::new()
            .route("/health", get(handlers::health::health_check))
            .route("/chat", post(handlers::chat::chat))
            .route("/predict-today", get(handlers::predict::predict_today))
            .with_state(state);

        if self.config.enable_cors {
            router = router.layer(CorsLayer::permissive());
        }

        router.layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(from_fn(middleware::request_logging)),
        )
    }

    /// Bind and serve until `shutdown` resolves
    pub async fn serve<F>(&self, state: AppState, shutdown: F) -> Result<(), PresentationError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let router = self.router(state);

        let listener = tokio::net::TcpListener::bind(&self.config.bind_address)
            .await
            .map_err(|e| {
                PresentationError::StartupFailed(format!(
                    "Failed to bind to {}: {}",
                    self.config.bind_address, e
                ))
            })?;

        info!("Matchday HTTP server listening on {}", self.config.bind_address);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| PresentationError::ServerFailed(e.to_string()))?;

        info!("Matchday HTTP server stopped");
        Ok(())
    }
}

/// Standard API response wrapper, used for health and error bodies
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<&'static str>,
    pub timestamp: String,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            kind: None,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

impl ApiResponse<()> {
    pub fn error(kind: &'static str, message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
            kind: Some(kind),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error half of every handler's return type
pub type ApiError = (StatusCode, Json<ApiResponse<()>>);

/// Convert core errors to HTTP status codes and responses
pub fn handle_core_error(error: CoreError) -> ApiError {
    let (status, kind) = match &error {
        CoreError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, "invalid_request"),
        CoreError::Llm(LlmError::Timeout) | CoreError::Fixtures(FixtureError::Timeout) => {
            (StatusCode::GATEWAY_TIMEOUT, "upstream_timeout")
        }
        CoreError::Llm(LlmError::NetworkError(_) | LlmError::ApiError(_))
        | CoreError::Fixtures(FixtureError::NetworkError(_) | FixtureError::ApiError(_)) => {
            (StatusCode::BAD_GATEWAY, "upstream_unavailable")
        }
        CoreError::Llm(LlmError::ResponseParseError(_))
        | CoreError::Fixtures(FixtureError::MalformedPayload(_)) => {
            (StatusCode::BAD_GATEWAY, "malformed_upstream_payload")
        }
        CoreError::Llm(LlmError::ConfigError(_))
        | CoreError::Fixtures(FixtureError::ConfigError(_))
        | CoreError::Configuration(_) => (StatusCode::INTERNAL_SERVER_ERROR, "configuration"),
        CoreError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal"),
    };

    if status.is_client_error() {
        warn!("API error: {} - {}", status, error);
    } else {
        error!("API error: {} - {}", status, error);
    }
    (status, Json(ApiResponse::error(kind, error.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = HttpServerConfig::default();
        assert_eq!(config.bind_address.port(), 3000);
        assert!(config.enable_cors);
    }

    #[test]
    fn test_api_response_success() {
        let response = ApiResponse::success("test data");
        assert!(response.success);
        assert_eq!(response.data, Some("test data"));
        assert!(response.error.is_none());
        assert!(response.kind.is_none());
    }

    #[test]
    fn test_api_response_error() {
        let response = ApiResponse::error("internal", "test error");
        assert!(!response.success);
        assert!(response.data.is_none());
        assert_eq!(response.error, Some("test error".to_string()));
        assert_eq!(response.kind, Some("internal"));
    }

    #[test]
    fn test_error_status_mapping() {
        let cases = [
            (CoreError::InvalidRequest("bad".into()), StatusCode::BAD_REQUEST, "invalid_request"),
            (LlmError::Timeout.into(), StatusCode::GATEWAY_TIMEOUT, "upstream_timeout"),
            (FixtureError::Timeout.into(), StatusCode::GATEWAY_TIMEOUT, "upstream_timeout"),
            (
                LlmError::ApiError("500".into()).into(),
                StatusCode::BAD_GATEWAY,
                "upstream_unavailable",
            ),
            (
                FixtureError::NetworkError("refused".into()).into(),
                StatusCode::BAD_GATEWAY,
                "upstream_unavailable",
            ),
            (
                FixtureError::MalformedPayload("fixture 0".into()).into(),
                StatusCode::BAD_GATEWAY,
                "malformed_upstream_payload",
            ),
            (
                LlmError::ResponseParseError("no choices".into()).into(),
                StatusCode::BAD_GATEWAY,
                "malformed_upstream_payload",
            ),
            (
                LlmError::ConfigError("tls".into()).into(),
                StatusCode::INTERNAL_SERVER_ERROR,
                "configuration",
            ),
        ];

        for (error, expected_status, expected_kind) in cases {
            let (status, Json(body)) = handle_core_error(error);
            assert_eq!(status, expected_status);
            assert_eq!(body.kind, Some(expected_kind));
        }
    }
}
