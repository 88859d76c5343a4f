//! Lingo Core - Domain models, traits, and shared types
//!
//! This crate defines the core abstractions used throughout Lingo:
//! - Parsed documents (tokens, dependency heads, sentence/entity/chunk spans)
//! - The fixed entity-type vocabulary
//! - Lexical database records (synsets, lemmas)
//! - Boundary traits for the sentence parser and the lexical backends
//! - Common error types
//! - Configuration management

pub mod config;
pub mod document;
pub mod entity;
pub mod lexical;

pub use config::{
    AppConfig, CacheConfig, ConfigError, LexiconConfig, LoggingConfig, ParserConfig, ServerConfig,
};
pub use document::{Document, EntitySpan, Span, Token, WireDocument};
pub use entity::EntityType;
pub use lexical::{Lemma, PartOfSpeech, Synset};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Core error types for Lingo operations
#[derive(Error, Debug)]
pub enum LingoError {
    #[error("Parser error: {0}")]
    ParserError(String),

    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    #[error("Lexicon error: {0}")]
    LexiconError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, LingoError>;

// ============================================================================
// Sentiment
// ============================================================================

/// Sentiment score of a piece of text
///
/// Serialized as a `[polarity, subjectivity]` pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(into = "(f64, f64)", from = "(f64, f64)")]
pub struct Sentiment {
    /// Polarity in `[-1.0, 1.0]`
    pub polarity: f64,
    /// Subjectivity in `[0.0, 1.0]`
    pub subjectivity: f64,
}

impl Sentiment {
    pub fn new(polarity: f64, subjectivity: f64) -> Self {
        Self {
            polarity,
            subjectivity,
        }
    }
}

impl From<Sentiment> for (f64, f64) {
    fn from(s: Sentiment) -> Self {
        (s.polarity, s.subjectivity)
    }
}

impl From<(f64, f64)> for Sentiment {
    fn from((polarity, subjectivity): (f64, f64)) -> Self {
        Self::new(polarity, subjectivity)
    }
}

// ============================================================================
// Boundary Traits
// ============================================================================

/// External sentence parser (tokenizer, tagger, dependency parser, NER)
#[async_trait]
pub trait SentenceParser: Send + Sync {
    /// Parse text into a validated document
    async fn parse(&self, text: &str) -> Result<Document>;

    /// Name of the language model behind the parser
    fn model(&self) -> &str;
}

/// Sentence-level sentiment scorer
pub trait SentimentAnalyzer: Send + Sync {
    fn analyze(&self, text: &str) -> Sentiment;
}

/// Spelling corrector
pub trait SpellChecker: Send + Sync {
    /// Return the corrected form of `text`
    fn correct(&self, text: &str) -> String;
}

/// WordNet-style lexical database
pub trait LexicalDatabase: Send + Sync {
    /// Synsets containing `word`, optionally restricted to one part of speech
    fn synsets(&self, word: &str, pos: Option<PartOfSpeech>) -> Vec<&Synset>;

    /// Synset by identifier (e.g. `dog.n.01`)
    fn synset(&self, id: &str) -> Option<&Synset>;

    /// Render a verb frame template for a lemma
    fn frame_string(&self, frame_id: u32, lemma: &str) -> Option<String>;
}
