//! Application state management
//!
//! Author: hephaex@gmail.com

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

use tracing::info;

use lingo_core::config::AppConfig;
use lingo_core::{LexicalDatabase, Result, SentenceParser, SentimentAnalyzer, SpellChecker};
use lingo_extractor::{DependencyPatternRe, RelationExtractor};
use lingo_lexicon::{FrequencySpeller, LexiconSentiment, WordNet};
use lingo_parser::RemoteParser;

use crate::cache::WordCache;

/// Application state shared across handlers
///
/// Every backend is immutable after startup; only the word cache and the
/// request counter change while serving.
pub struct AppState {
    /// Application configuration
    pub config: AppConfig,
    /// Server start time
    pub start_time: Instant,
    /// Request counter
    pub request_count: AtomicU64,
    /// Sentence parser
    pub parser: Arc<dyn SentenceParser>,
    /// Relation extractor run on merged parses
    pub extractor: Arc<dyn RelationExtractor>,
    /// Sentence sentiment scorer
    pub sentiment: Arc<dyn SentimentAnalyzer>,
    /// Spelling corrector
    pub speller: Arc<dyn SpellChecker>,
    /// Lexical database for word lookups
    pub lexicon: Arc<dyn LexicalDatabase>,
    /// Word lookup responses
    pub word_cache: WordCache,
}

impl AppState {
    /// Create state from explicit backends
    pub fn new(
        config: AppConfig,
        parser: Arc<dyn SentenceParser>,
        lexicon: Arc<dyn LexicalDatabase>,
        speller: Arc<dyn SpellChecker>,
        sentiment: Arc<dyn SentimentAnalyzer>,
    ) -> Self {
        let word_cache = WordCache::with_config(&config.cache);
        Self {
            config,
            start_time: Instant::now(),
            request_count: AtomicU64::new(0),
            parser,
            extractor: Arc::new(DependencyPatternRe),
            sentiment,
            speller,
            lexicon,
            word_cache,
        }
    }

    /// Replace the relation extractor
    pub fn with_extractor(mut self, extractor: Arc<dyn RelationExtractor>) -> Self {
        self.extractor = extractor;
        self
    }

    /// Connect to the parser service and load every lexical resource
    ///
    /// Fails if the parser is unreachable or any data file cannot be read.
    pub async fn load(config: AppConfig) -> Result<Self> {
        let parser = RemoteParser::connect(&config.parser).await?;
        let lexicon = WordNet::from_path(&config.lexicon.wordnet_path)?;
        let speller = FrequencySpeller::from_path(&config.lexicon.spelling_path)?;
        let sentiment = LexiconSentiment::from_path(&config.lexicon.sentiment_path)?;

        info!("All resources loaded");

        Ok(Self::new(
            config,
            Arc::new(parser),
            Arc::new(lexicon),
            Arc::new(speller),
            Arc::new(sentiment),
        ))
    }

    /// Increment request counter
    pub fn increment_requests(&self) -> u64 {
        self.request_count.fetch_add(1, Ordering::SeqCst)
    }

    /// Get total request count
    pub fn get_request_count(&self) -> u64 {
        self.request_count.load(Ordering::SeqCst)
    }

    /// Get uptime in seconds
    pub fn uptime_secs(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
