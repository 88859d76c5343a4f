//! Sentence analysis handler
//!
//! Author: hephaex@gmail.com

use crate::error::{ApiError, AppError};
use crate::handlers::required;
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    Json,
};
use lingo_extractor::{analyze, Analysis};
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;
use utoipa::IntoParams;

/// Query parameters for sentence analysis
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ParseQuery {
    /// Text to analyse; may hold several sentences
    pub sentence: Option<String>,
}

/// Parse a sentence and extract relations, sentence breakdowns and entities
#[utoipa::path(
    get,
    path = "/nlp/parse",
    tag = "nlp",
    params(ParseQuery),
    responses(
        (status = 200, description = "Relations, sentences and entities"),
        (status = 400, description = "Missing sentence", body = ApiError),
        (status = 502, description = "Parser failure", body = ApiError)
    )
)]
pub async fn parse_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ParseQuery>,
) -> Result<Json<Analysis>, AppError> {
    state.increment_requests();

    let sentence = required(params.sentence, "sentence")?;
    info!("parse sentence {sentence}");

    let doc = state.parser.parse(&sentence).await?;
    let analysis = analyze(&doc, state.extractor.as_ref(), state.sentiment.as_ref());

    Ok(Json(analysis))
}
