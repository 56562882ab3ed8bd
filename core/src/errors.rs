//! Error types for Matchday core operations

use thiserror::Error;

/// Main error type surfaced to the presentation layer
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("LLM connector error: {0}")]
    Llm(#[from] LlmError),

    #[error("Fixture source error: {0}")]
    Fixtures(#[from] FixtureError),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Invalid configuration: {0}")]
    Configuration(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Errors related to LLM connector operations
#[derive(Error, Debug)]
pub enum LlmError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("API error from LLM provider: {0}")]
    ApiError(String),

    #[error("Timeout during LLM call")]
    Timeout,

    #[error("Failed to parse LLM response: {0}")]
    ResponseParseError(String),
}

/// Errors related to the sports-data fixture source
#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("API error from sports-data provider: {0}")]
    ApiError(String),

    #[error("Timeout during fixtures call")]
    Timeout,

    #[error("Malformed fixtures payload: {0}")]
    MalformedPayload(String),
}

/// Errors related to presentation adapters
#[derive(Error, Debug)]
pub enum PresentationError {
    #[error("Server startup failed: {0}")]
    StartupFailed(String),

    #[error("Server error: {0}")]
    ServerFailed(String),
}

/// Result type alias for core operations
pub type CoreResult<T> = Result<T, CoreError>;

/// Result type alias for LLM operations
pub type LlmResult<T> = Result<T, LlmError>;

/// Result type alias for fixture operations
pub type FixtureResult<T> = Result<T, FixtureError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_llm_error_converts_into_core_error() {
        let err: CoreError = LlmError::Timeout.into();
        assert!(matches!(err, CoreError::Llm(LlmError::Timeout)));
        assert_eq!(err.to_string(), "LLM connector error: Timeout during LLM call");
    }

    #[test]
    fn test_fixture_error_message() {
        let err: CoreError =
            FixtureError::MalformedPayload("fixture 3: missing field `scores`".to_string()).into();
        assert!(err.to_string().contains("missing field `scores`"));
    }
}
