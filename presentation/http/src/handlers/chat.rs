//! Chat relay handler

use crate::{handle_core_error, ApiError, AppState};
use axum::{body::Bytes, extract::State, response::Json};
use matchday_core::prelude::*;
use tracing::{debug, info};

/// Relay a prompt to the LLM connector and return its completion text
pub async fn chat(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ChatResponse>, ApiError> {
    let request = parse_chat_request(&body).map_err(handle_core_error)?;
    debug!("Relaying chat prompt ({} chars)", request.prompt_or_default().len());

    let completion = state
        .llm
        .complete(request.into_completion_request())
        .await
        .map_err(|e| handle_core_error(CoreError::Llm(e)))?;

    info!("Chat relay returned {} chars", completion.text.len());
    Ok(Json(ChatResponse { response: completion.text }))
}

/// An empty or whitespace-only body counts as a request with no prompt
fn parse_chat_request(body: &[u8]) -> CoreResult<ChatRequest> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(ChatRequest::default());
    }

    serde_json::from_slice(body)
        .map_err(|e| CoreError::InvalidRequest(format!("Invalid chat request body: {}", e)))
}
