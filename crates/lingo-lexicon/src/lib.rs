//! Lingo Lexicon - File-backed lexical resources
//!
//! - [`WordNet`]: synset lookup with morphological base forms
//! - [`lookup_word`]: word senses expanded with related synsets and frames
//! - [`FrequencySpeller`]: frequency-dictionary spelling correction
//! - [`LexiconSentiment`]: word-lexicon polarity/subjectivity scoring

pub mod lookup;
pub mod sentiment;
pub mod spelling;
pub mod wordnet;

pub use lookup::{lookup_word, LemmaResult, SynsetSummary, WordLookup, WordResult};
pub use sentiment::{LexiconEntry, LexiconSentiment};
pub use spelling::FrequencySpeller;
pub use wordnet::WordNet;
