//! Spell-check handler
//!
//! Author: hephaex@gmail.com

use crate::error::{ApiError, AppError};
use crate::handlers::required;
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SpellcheckQuery {
    /// Text to correct
    pub sentence: Option<String>,
}

/// Spell-check result
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SpellcheckResponse {
    /// Text as received
    pub original: String,
    /// Corrected text
    pub corrected: String,
    /// Whether no correction was needed
    pub correct: bool,
}

/// Correct the spelling of a sentence
#[utoipa::path(
    get,
    path = "/nlp/spellcheck",
    tag = "nlp",
    params(SpellcheckQuery),
    responses(
        (status = 200, description = "Original and corrected text", body = SpellcheckResponse),
        (status = 400, description = "Missing sentence", body = ApiError)
    )
)]
pub async fn spellcheck_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SpellcheckQuery>,
) -> Result<Json<SpellcheckResponse>, AppError> {
    state.increment_requests();

    let original = required(params.sentence, "sentence")?;
    let speller = state.speller.clone();
    let text = original.clone();
    let corrected = tokio::task::spawn_blocking(move || speller.correct(&text))
        .await
        .map_err(|e| AppError::Internal(format!("spellcheck task failed: {e}")))?;
    debug!("spellcheck {original:?} -> {corrected:?}");

    Ok(Json(SpellcheckResponse {
        correct: corrected == original,
        original,
        corrected,
    }))
}
