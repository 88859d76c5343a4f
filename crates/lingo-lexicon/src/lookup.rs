//! Word lookup rendering
//!
//! Expands the synsets of a word together with their hypernym and hyponym
//! neighbourhood and every lemma's verb frames.

use serde::{Deserialize, Serialize};

use lingo_core::{LexicalDatabase, Lemma, PartOfSpeech, Synset};

/// Definition, examples and lemma names of a related synset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynsetSummary {
    pub definition: String,
    pub examples: Vec<String>,
    pub lemma_names: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LemmaResult {
    pub frame_strings: Vec<String>,
    pub name: String,
    pub frame_ids: Vec<u32>,
    pub hypernyms: Vec<SynsetSummary>,
    pub hyponyms: Vec<SynsetSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordResult {
    pub definition: String,
    pub examples: Vec<String>,
    pub lemma_names: Vec<String>,
    pub hypernyms: Vec<SynsetSummary>,
    pub lemmas: Vec<LemmaResult>,
    pub hyponyms: Vec<SynsetSummary>,
}

/// Every sense of a word
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WordLookup {
    pub results: Vec<WordResult>,
}

impl WordLookup {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

impl From<&Synset> for SynsetSummary {
    fn from(synset: &Synset) -> Self {
        Self {
            definition: synset.definition.clone(),
            examples: synset.examples.clone(),
            lemma_names: synset.lemma_names(),
        }
    }
}

/// Look `word` up in `db` and expand each sense
pub fn lookup_word(db: &dyn LexicalDatabase, word: &str, pos: Option<PartOfSpeech>) -> WordLookup {
    let results = db
        .synsets(word, pos)
        .into_iter()
        .map(|synset| WordResult {
            definition: synset.definition.clone(),
            examples: synset.examples.clone(),
            lemma_names: synset.lemma_names(),
            hypernyms: summaries(db, &synset.hypernyms),
            lemmas: synset.lemmas.iter().map(|l| lemma_result(db, l)).collect(),
            hyponyms: summaries(db, &synset.hyponyms),
        })
        .collect();

    WordLookup { results }
}

/// Summaries of the synsets named by `ids`; dangling pointers are dropped
fn summaries(db: &dyn LexicalDatabase, ids: &[String]) -> Vec<SynsetSummary> {
    ids.iter()
        .filter_map(|id| db.synset(id))
        .map(SynsetSummary::from)
        .collect()
}

fn lemma_result(db: &dyn LexicalDatabase, lemma: &Lemma) -> LemmaResult {
    LemmaResult {
        frame_strings: lemma
            .frame_ids
            .iter()
            .filter_map(|&id| db.frame_string(id, &lemma.name))
            .collect(),
        name: lemma.name.clone(),
        frame_ids: lemma.frame_ids.clone(),
        hypernyms: summaries(db, &lemma.hypernyms),
        hyponyms: summaries(db, &lemma.hyponyms),
    }
}
