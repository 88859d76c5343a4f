//! Lexical database records
//!
//! WordNet-style synsets and lemmas as stored in the lexicon file.

use serde::{Deserialize, Serialize};

use crate::LingoError;

/// WordNet part of speech
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartOfSpeech {
    #[serde(rename = "n")]
    Noun,
    #[serde(rename = "v")]
    Verb,
    #[serde(rename = "a")]
    Adjective,
    #[serde(rename = "s")]
    AdjectiveSatellite,
    #[serde(rename = "r")]
    Adverb,
}

impl PartOfSpeech {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Noun => "n",
            Self::Verb => "v",
            Self::Adjective => "a",
            Self::AdjectiveSatellite => "s",
            Self::Adverb => "r",
        }
    }

    /// Whether a synset of part of speech `other` satisfies a query for `self`
    ///
    /// Adjective queries also match adjective satellites.
    pub fn accepts(&self, other: PartOfSpeech) -> bool {
        *self == other || (*self == Self::Adjective && other == Self::AdjectiveSatellite)
    }
}

impl std::fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PartOfSpeech {
    type Err = LingoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "n" | "noun" => Ok(Self::Noun),
            "v" | "verb" => Ok(Self::Verb),
            "a" | "adj" | "adjective" => Ok(Self::Adjective),
            "s" => Ok(Self::AdjectiveSatellite),
            "r" | "adv" | "adverb" => Ok(Self::Adverb),
            _ => Err(LingoError::ValidationError(format!(
                "unknown part of speech: {s}"
            ))),
        }
    }
}

/// A word sense inside a synset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lemma {
    pub name: String,

    /// Verb frame identifiers
    #[serde(default)]
    pub frame_ids: Vec<u32>,

    /// Lemma-level hypernym pointers (synset ids)
    #[serde(default)]
    pub hypernyms: Vec<String>,

    /// Lemma-level hyponym pointers (synset ids)
    #[serde(default)]
    pub hyponyms: Vec<String>,
}

/// A set of synonymous lemmas sharing one definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Synset {
    /// Identifier such as `dog.n.01`
    pub id: String,
    pub pos: PartOfSpeech,
    pub definition: String,
    #[serde(default)]
    pub examples: Vec<String>,
    pub lemmas: Vec<Lemma>,
    #[serde(default)]
    pub hypernyms: Vec<String>,
    #[serde(default)]
    pub hyponyms: Vec<String>,
}

impl Synset {
    pub fn lemma_names(&self) -> Vec<String> {
        self.lemmas.iter().map(|l| l.name.clone()).collect()
    }
}
