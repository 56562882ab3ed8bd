//! Fixture summary handler

use crate::{handle_core_error, ApiError, AppState};
use axum::{extract::State, response::Json};
use matchday_core::prelude::*;
use tracing::info;

/// Summarize today's fixtures as `{match, score}` pairs in provider order
pub async fn predict_today(
    State(state): State<AppState>,
) -> Result<Json<Vec<MatchPrediction>>, ApiError> {
    let fixtures = state
        .fixtures
        .fixtures_today()
        .await
        .map_err(|e| handle_core_error(CoreError::Fixtures(e)))?;

    let predictions = summarize(&fixtures);
    info!("Summarized {} fixtures for today", predictions.len());
    Ok(Json(predictions))
}
