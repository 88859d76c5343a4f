//! Word lookup handler
//!
//! Author: hephaex@gmail.com

use crate::cache::WordCache;
use crate::error::{ApiError, AppError};
use crate::handlers::required;
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    Json,
};
use lingo_core::PartOfSpeech;
use lingo_lexicon::lookup_word;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, info};
use utoipa::IntoParams;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct WordQuery {
    /// Word or multi-word expression
    pub word: Option<String>,

    /// Part of speech filter: n, v, a, s or r
    pub pos: Option<String>,
}

/// Look up every sense of a word
#[utoipa::path(
    get,
    path = "/nlp/word",
    tag = "nlp",
    params(WordQuery),
    responses(
        (status = 200, description = "Senses with related synsets and lemmas"),
        (status = 400, description = "Missing word or unknown part of speech", body = ApiError)
    )
)]
pub async fn word_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<WordQuery>,
) -> Result<Response, AppError> {
    state.increment_requests();

    let word = required(params.word, "word")?;
    let pos_param = params.pos.filter(|p| !p.trim().is_empty());
    info!("lookup word {word} -- {}", pos_param.as_deref().unwrap_or("any"));

    let pos = pos_param
        .as_deref()
        .map(str::parse::<PartOfSpeech>)
        .transpose()?;

    let key = WordCache::key(&word, pos_param.as_deref());
    if let Some(cached) = state.word_cache.get(&key).await {
        debug!("word cache hit for {key}");
        return Ok(Json(cached.as_ref()).into_response());
    }

    let lookup = Arc::new(lookup_word(state.lexicon.as_ref(), &word, pos));
    state.word_cache.put(key, Arc::clone(&lookup)).await;

    Ok(Json(lookup.as_ref()).into_response())
}
