//! Fixture backends for router tests
//!
//! Builds application state from the bundled sample data and canned parses,
//! so no parser service is needed.

use std::sync::Arc;

use lingo_core::config::AppConfig;
use lingo_lexicon::{FrequencySpeller, LexiconSentiment, WordNet};
use lingo_parser::FixtureParser;

use crate::state::AppState;

const PARSES: &str = include_str!("../../../data/parses.json");
const WORDNET: &str = include_str!("../../../data/wordnet.json");
const SPELLING: &str = include_str!("../../../data/spelling.txt");
const SENTIMENT: &str = include_str!("../../../data/sentiment.tsv");

pub fn fixture_parser() -> FixtureParser {
    FixtureParser::from_json(PARSES).expect("bundled parses are valid")
}

pub fn fixture_wordnet() -> WordNet {
    WordNet::from_json(WORDNET).expect("bundled wordnet is valid")
}

pub fn fixture_speller() -> FrequencySpeller {
    FrequencySpeller::from_frequency_list(SPELLING).expect("bundled word list is valid")
}

pub fn fixture_sentiment() -> LexiconSentiment {
    LexiconSentiment::from_tsv(SENTIMENT).expect("bundled sentiment lexicon is valid")
}

/// Application state over every fixture backend
pub fn fixture_state() -> AppState {
    AppState::new(
        AppConfig::default(),
        Arc::new(fixture_parser()),
        Arc::new(fixture_wordnet()),
        Arc::new(fixture_speller()),
        Arc::new(fixture_sentiment()),
    )
}
