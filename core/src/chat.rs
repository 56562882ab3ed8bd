//! Chat relay types

use serde::{Deserialize, Serialize};

/// Prompt used when the caller sends no `prompt` field
pub const DEFAULT_PROMPT: &str = "Write a message";

/// System instruction prepended to every relayed conversation
pub const SYSTEM_INSTRUCTION: &str = "You are a helpful assistant.";

/// Inbound body of `POST /chat`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub prompt: Option<String>,
}

impl ChatRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self { prompt: Some(prompt.into()) }
    }

    /// The prompt to relay, falling back to [`DEFAULT_PROMPT`]
    pub fn prompt_or_default(&self) -> &str {
        self.prompt.as_deref().unwrap_or(DEFAULT_PROMPT)
    }

    /// Build the system + user conversation sent upstream
    pub fn into_completion_request(self) -> CompletionRequest {
        let prompt = self.prompt.unwrap_or_else(|| DEFAULT_PROMPT.to_string());
        CompletionRequest {
            messages: vec![ChatMessage::system(SYSTEM_INSTRUCTION), ChatMessage::user(prompt)],
        }
    }
}

/// Outbound body of `POST /chat`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

/// A message in the LLM conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role of the message sender ("system", "user", "assistant")
    pub role: String,
    /// Content of the message
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: "system".to_string(), content: content.into() }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self { role: "user".to_string(), content: content.into() }
    }
}

/// Conversation handed to an [`LlmConnector`](crate::traits::LlmConnector)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub messages: Vec<ChatMessage>,
}

/// Text produced by the upstream model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Completion {
    pub text: String,
    pub metadata: Option<CompletionMetadata>,
}

/// Metadata about a completion call, used for logging
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompletionMetadata {
    /// LLM provider used
    pub provider: String,
    /// Model name reported by the provider
    pub model_name: String,
    /// Latency in milliseconds
    pub latency_ms: Option<u64>,
    /// Input tokens consumed
    pub input_tokens: Option<u32>,
    /// Output tokens generated
    pub output_tokens: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_prompt_uses_default() {
        let request: ChatRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.prompt_or_default(), "Write a message");

        let request: ChatRequest = serde_json::from_str(r#"{"prompt": null}"#).unwrap();
        assert_eq!(request.prompt_or_default(), "Write a message");
    }

    #[test]
    fn test_conversation_shape() {
        let request = ChatRequest::new("Who won the 1998 World Cup?").into_completion_request();

        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, "system");
        assert_eq!(request.messages[0].content, "You are a helpful assistant.");
        assert_eq!(request.messages[1].role, "user");
        assert_eq!(request.messages[1].content, "Who won the 1998 World Cup?");
    }

    #[test]
    fn test_empty_string_prompt_is_kept() {
        let request = ChatRequest::new("").into_completion_request();
        assert_eq!(request.messages[1].content, "");
    }

    #[test]
    fn test_chat_response_serialization() {
        let body = serde_json::to_value(ChatResponse { response: "hi".to_string() }).unwrap();
        assert_eq!(body, serde_json::json!({"response": "hi"}));
    }
}
