//! API route definitions
//!
//! Author: hephaex@gmail.com

use crate::handlers::{parse, spellcheck, word};
use crate::state::AppState;
use axum::{routing::get, Router};
use std::sync::Arc;

/// Routes nested under `/nlp`
pub fn nlp_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/parse", get(parse::parse_handler))
        .route("/spellcheck", get(spellcheck::spellcheck_handler))
        .route("/word", get(word::word_handler))
}
