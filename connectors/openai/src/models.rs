//! OpenAI API data models

use matchday_core::ChatMessage;
use serde::{Deserialize, Serialize};

/// OpenAI Chat Completion Request
#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<OpenAiMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

/// OpenAI message format
#[derive(Debug, Serialize, Deserialize)]
pub struct OpenAiMessage {
    pub role: String,
    pub content: String,
}

impl From<ChatMessage> for OpenAiMessage {
    fn from(message: ChatMessage) -> Self {
        Self {
            role: message.role,
            content: message.content,
        }
    }
}

/// OpenAI Chat Completion Response
///
/// Only the fields we read are required; compatible servers often omit the rest.
#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub model: Option<String>,
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

/// Individual choice in the response
#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Message in a choice
#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub role: Option<String>,
    pub content: Option<String>,
}

/// Token usage information
#[derive(Debug, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

/// OpenAI Error Response
#[derive(Debug, Deserialize)]
pub struct OpenAiError {
    pub error: ErrorDetails,
}

/// Error details
#[derive(Debug, Deserialize)]
pub struct ErrorDetails {
    pub message: String,
    #[serde(default)]
    pub r#type: Option<String>,
}
