//! OpenAI connector for the Matchday chat relay

use async_trait::async_trait;
use matchday_core::prelude::*;
use reqwest::Client;
use std::time::Instant;
use tracing::{debug, error, info, warn};

mod config;
mod models;

pub use config::OpenAiConfig;
use models::*;

/// OpenAI implementation of LlmConnector
pub struct OpenAiConnector {
    client: Client,
    config: OpenAiConfig,
}

impl OpenAiConnector {
    /// Create a new OpenAI connector
    pub fn new(config: OpenAiConfig) -> Result<Self, LlmError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| LlmError::ConfigError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// Model identifier sent with every request
    pub fn model(&self) -> &str {
        &self.config.model
    }

    fn build_request(&self, request: CompletionRequest) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.config.model.clone(),
            messages: request.messages.into_iter().map(OpenAiMessage::from).collect(),
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        }
    }

    /// Turn a non-success reply into an `ApiError`, preferring the provider's own message
    fn api_error(status: reqwest::StatusCode, body: &str) -> LlmError {
        match serde_json::from_str::<OpenAiError>(body) {
            Ok(parsed) => LlmError::ApiError(format!(
                "OpenAI API error {} ({}): {}",
                status,
                parsed.error.r#type.as_deref().unwrap_or("unknown"),
                parsed.error.message
            )),
            Err(_) => LlmError::ApiError(format!("OpenAI API error {}: {}", status, body)),
        }
    }

    /// Pull the text of the first choice out of a completion response
    fn extract_text(response: &ChatCompletionResponse) -> Result<String, LlmError> {
        let choice = response
            .choices
            .first()
            .ok_or_else(|| LlmError::ResponseParseError("No choices in response".to_string()))?;

        debug!(
            "First choice role={:?} finish_reason={:?}",
            choice.message.role, choice.finish_reason
        );

        choice
            .message
            .content
            .clone()
            .ok_or_else(|| LlmError::ResponseParseError("No content in response".to_string()))
    }
}

#[async_trait]
impl LlmConnector for OpenAiConnector {
    async fn complete(&self, request: CompletionRequest) -> Result<Completion, LlmError> {
        debug!(
            "Starting OpenAI completion with model {} ({} messages)",
            self.config.model,
            request.messages.len()
        );
        let start_time = Instant::now();

        let chat_request = self.build_request(request);

        let response = self
            .client
            .post(self.config.completions_url())
            .bearer_auth(&self.config.api_key)
            .json(&chat_request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    warn!("OpenAI request timed out after {}ms", self.config.timeout_ms);
                    LlmError::Timeout
                } else {
                    error!("OpenAI request failed: {}", e);
                    LlmError::NetworkError(format!("HTTP request failed: {}", e))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            warn!("OpenAI returned {}", status);
            return Err(Self::api_error(status, &error_text));
        }

        let chat_response: ChatCompletionResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                LlmError::Timeout
            } else {
                LlmError::ResponseParseError(format!("Failed to parse response: {}", e))
            }
        })?;

        let text = Self::extract_text(&chat_response)?;

        let latency = start_time.elapsed();
        let metadata = CompletionMetadata {
            provider: "openai".to_string(),
            model_name: chat_response
                .model
                .clone()
                .unwrap_or_else(|| self.config.model.clone()),
            latency_ms: Some(latency.as_millis() as u64),
            input_tokens: chat_response.usage.as_ref().map(|u| u.prompt_tokens),
            output_tokens: chat_response.usage.as_ref().map(|u| u.completion_tokens),
        };

        info!(
            "OpenAI completion finished in {}ms (model {}, tokens in/out {:?}/{:?})",
            latency.as_millis(),
            metadata.model_name,
            metadata.input_tokens,
            metadata.output_tokens
        );

        Ok(Completion {
            text,
            metadata: Some(metadata),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn connector_for(server: &MockServer) -> OpenAiConnector {
        let config = OpenAiConfig::new("test-key").with_api_base(format!("{}/v1", server.uri()));
        OpenAiConnector::new(config).unwrap()
    }

    fn completion_body(content: &str) -> serde_json::Value {
        json!({
            "id": "chatcmpl-123",
            "object": "chat.completion",
            "created": 1700000000,
            "model": "gpt-4-0613",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": content},
                "finish_reason": "stop"
            }],
            "usage": {"prompt_tokens": 20, "completion_tokens": 5, "total_tokens": 25}
        })
    }

    #[tokio::test]
    async fn test_openai_connector_creation() {
        let config = OpenAiConfig::new("test-key");
        let connector = OpenAiConnector::new(config);
        assert!(connector.is_ok());
        assert_eq!(connector.unwrap().model(), "gpt-4");
    }

    #[tokio::test]
    async fn test_complete_sends_conversation_and_returns_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(header("authorization", "Bearer test-key"))
            .and(body_partial_json(json!({
                "model": "gpt-4",
                "messages": [
                    {"role": "system", "content": "You are a helpful assistant."},
                    {"role": "user", "content": "Say hi"}
                ]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("Hi there!")))
            .expect(1)
            .mount(&server)
            .await;

        let request = ChatRequest::new("Say hi").into_completion_request();
        let completion = connector_for(&server).complete(request).await.unwrap();

        assert_eq!(completion.text, "Hi there!");
        let metadata = completion.metadata.unwrap();
        assert_eq!(metadata.provider, "openai");
        assert_eq!(metadata.model_name, "gpt-4-0613");
        assert_eq!(metadata.input_tokens, Some(20));
        assert_eq!(metadata.output_tokens, Some(5));
    }

    #[tokio::test]
    async fn test_optional_parameters_are_omitted() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("ok")))
            .mount(&server)
            .await;

        connector_for(&server)
            .complete(ChatRequest::default().into_completion_request())
            .await
            .unwrap();

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
        assert!(body.get("max_tokens").is_none());
        assert!(body.get("temperature").is_none());
        assert_eq!(body["messages"][1]["content"], "Write a message");
    }

    #[tokio::test]
    async fn test_api_error_uses_provider_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "error": {"message": "Incorrect API key provided", "type": "invalid_request_error"}
            })))
            .mount(&server)
            .await;

        let result = connector_for(&server)
            .complete(ChatRequest::default().into_completion_request())
            .await;

        match result {
            Err(LlmError::ApiError(msg)) => {
                assert!(msg.contains("401"));
                assert!(msg.contains("Incorrect API key provided"));
            }
            other => panic!("expected ApiError, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_empty_choices_is_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
            .mount(&server)
            .await;

        let result = connector_for(&server)
            .complete(ChatRequest::default().into_completion_request())
            .await;
        assert!(matches!(result, Err(LlmError::ResponseParseError(_))));
    }

    #[tokio::test]
    async fn test_non_json_body_is_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
            .mount(&server)
            .await;

        let result = connector_for(&server)
            .complete(ChatRequest::default().into_completion_request())
            .await;
        assert!(matches!(result, Err(LlmError::ResponseParseError(_))));
    }

    #[tokio::test]
    async fn test_slow_upstream_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(completion_body("late"))
                    .set_delay(std::time::Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let config = OpenAiConfig::new("test-key")
            .with_api_base(format!("{}/v1", server.uri()))
            .with_timeout(50);
        let connector = OpenAiConnector::new(config).unwrap();

        let result = connector
            .complete(ChatRequest::default().into_completion_request())
            .await;
        assert!(matches!(result, Err(LlmError::Timeout)));
    }

    #[tokio::test]
    async fn test_unreachable_upstream_is_network_error() {
        let config = OpenAiConfig::new("test-key").with_api_base("http://127.0.0.1:1/v1");
        let connector = OpenAiConnector::new(config).unwrap();

        let result = connector
            .complete(ChatRequest::default().into_completion_request())
            .await;
        assert!(matches!(result, Err(LlmError::NetworkError(_))));
    }
}
