//! WordNet-style lexical database
//!
//! Synsets are loaded from a JSON file:
//!
//! ```json
//! {
//!   "frames": {"8": "Somebody %s something"},
//!   "synsets": [
//!     {"id": "dog.n.01", "pos": "n", "definition": "...",
//!      "lemmas": [{"name": "dog"}], "hypernyms": ["canine.n.02"]}
//!   ]
//! }
//! ```
//!
//! Lookups try the word itself and then its base forms obtained with the
//! WordNet detachment rules (`dogs` -> `dog`, `chased` -> `chase`).

use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use lingo_core::{LexicalDatabase, LingoError, PartOfSpeech, Result, Synset};

const NOUN_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ses", "s"),
    ("ves", "f"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ies", "y"),
];

const VERB_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ies", "y"),
    ("es", "e"),
    ("es", ""),
    ("ed", "e"),
    ("ed", ""),
    ("ing", "e"),
    ("ing", ""),
];

const ADJECTIVE_RULES: &[(&str, &str)] = &[("er", ""), ("est", ""), ("er", "e"), ("est", "e")];

/// Parts of speech searched when no filter is given, in result order
const SEARCH_ORDER: [PartOfSpeech; 4] = [
    PartOfSpeech::Noun,
    PartOfSpeech::Verb,
    PartOfSpeech::Adjective,
    PartOfSpeech::Adverb,
];

#[derive(Debug, Deserialize)]
struct LexiconFile {
    #[serde(default)]
    frames: HashMap<u32, String>,
    synsets: Vec<Synset>,
}

/// In-memory synset database
#[derive(Debug, Clone, Default)]
pub struct WordNet {
    synsets: Vec<Synset>,
    by_id: HashMap<String, usize>,
    /// Lowercase lemma name -> synset positions, in file order
    by_lemma: HashMap<String, Vec<usize>>,
    frames: HashMap<u32, String>,
}

impl WordNet {
    pub fn new(synsets: Vec<Synset>, frames: HashMap<u32, String>) -> Self {
        let mut by_id = HashMap::with_capacity(synsets.len());
        let mut by_lemma: HashMap<String, Vec<usize>> = HashMap::new();

        for (position, synset) in synsets.iter().enumerate() {
            by_id.insert(synset.id.clone(), position);
            for lemma in &synset.lemmas {
                let entry = by_lemma.entry(lemma.name.to_lowercase()).or_default();
                if !entry.contains(&position) {
                    entry.push(position);
                }
            }
        }

        Self {
            synsets,
            by_id,
            by_lemma,
            frames,
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let file: LexiconFile = serde_json::from_str(json)?;
        Ok(Self::new(file.synsets, file.frames))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            LingoError::LexiconError(format!("failed to read {}: {e}", path.display()))
        })?;
        let wordnet = Self::from_json(&json)?;
        info!(
            "Loaded {} synsets ({} lemmas) from {}",
            wordnet.synsets.len(),
            wordnet.by_lemma.len(),
            path.display()
        );
        Ok(wordnet)
    }

    pub fn len(&self) -> usize {
        self.synsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.synsets.is_empty()
    }
}

/// Lowercase, spaces to underscores
fn normalize(word: &str) -> String {
    word.trim().to_lowercase().replace(' ', "_")
}

/// The form itself followed by every detachment-rule base form
fn base_forms(form: &str, pos: PartOfSpeech) -> Vec<String> {
    let rules = match pos {
        PartOfSpeech::Noun => NOUN_RULES,
        PartOfSpeech::Verb => VERB_RULES,
        PartOfSpeech::Adjective | PartOfSpeech::AdjectiveSatellite => ADJECTIVE_RULES,
        PartOfSpeech::Adverb => &[],
    };

    let mut forms = vec![form.to_string()];
    for (suffix, replacement) in rules {
        if let Some(stem) = form.strip_suffix(suffix) {
            if stem.is_empty() {
                continue;
            }
            let candidate = format!("{stem}{replacement}");
            if !forms.contains(&candidate) {
                forms.push(candidate);
            }
        }
    }
    forms
}

impl LexicalDatabase for WordNet {
    fn synsets(&self, word: &str, pos: Option<PartOfSpeech>) -> Vec<&Synset> {
        let lemma = normalize(word);
        if lemma.is_empty() {
            return Vec::new();
        }

        let pos_list = match pos {
            Some(pos) => vec![pos],
            None => SEARCH_ORDER.to_vec(),
        };

        let mut seen = HashSet::new();
        let mut results = Vec::new();

        for pos in pos_list {
            for form in base_forms(&lemma, pos) {
                let Some(positions) = self.by_lemma.get(&form) else {
                    continue;
                };
                for &position in positions {
                    let synset = &self.synsets[position];
                    if pos.accepts(synset.pos) && seen.insert(position) {
                        results.push(synset);
                    }
                }
            }
        }

        results
    }

    fn synset(&self, id: &str) -> Option<&Synset> {
        self.by_id.get(id).map(|&position| &self.synsets[position])
    }

    fn frame_string(&self, frame_id: u32, lemma: &str) -> Option<String> {
        self.frames
            .get(&frame_id)
            .map(|template| template.replace("%s", lemma))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"{
        "frames": {"8": "Somebody %s something", "2": "Somebody %s"},
        "synsets": [
            {"id": "dog.n.01", "pos": "n", "definition": "a domesticated canid",
             "examples": ["the dog barked all night"],
             "lemmas": [{"name": "dog"}, {"name": "domestic_dog"}],
             "hypernyms": ["canine.n.02"], "hyponyms": ["puppy.n.01"]},
            {"id": "canine.n.02", "pos": "n", "definition": "a flesh-eating mammal",
             "lemmas": [{"name": "canine"}], "hyponyms": ["dog.n.01"]},
            {"id": "puppy.n.01", "pos": "n", "definition": "a young dog",
             "lemmas": [{"name": "puppy"}], "hypernyms": ["dog.n.01"]},
            {"id": "chase.v.01", "pos": "v", "definition": "go after with the intent to catch",
             "lemmas": [{"name": "chase", "frame_ids": [8]}, {"name": "dog", "frame_ids": [8]}]},
            {"id": "running.n.01", "pos": "n", "definition": "the act of running",
             "lemmas": [{"name": "running"}]},
            {"id": "run.v.01", "pos": "v", "definition": "move fast on foot",
             "lemmas": [{"name": "run", "frame_ids": [2]}]},
            {"id": "big.a.01", "pos": "a", "definition": "above average in size",
             "lemmas": [{"name": "big"}]},
            {"id": "large.s.01", "pos": "s", "definition": "of considerable size",
             "lemmas": [{"name": "large"}, {"name": "big"}]},
            {"id": "ice_cream.n.01", "pos": "n", "definition": "frozen dessert",
             "lemmas": [{"name": "ice_cream"}]}
        ]
    }"#;

    fn wordnet() -> WordNet {
        WordNet::from_json(SAMPLE).unwrap()
    }

    fn ids(synsets: Vec<&Synset>) -> Vec<&str> {
        synsets.into_iter().map(|s| s.id.as_str()).collect()
    }

    #[test]
    fn test_lookup_all_parts_of_speech() {
        let wn = wordnet();
        assert_eq!(ids(wn.synsets("dog", None)), vec!["dog.n.01", "chase.v.01"]);
    }

    #[test]
    fn test_lookup_with_pos_filter() {
        let wn = wordnet();
        assert_eq!(ids(wn.synsets("dog", Some(PartOfSpeech::Verb))), vec!["chase.v.01"]);
        assert!(wn.synsets("dog", Some(PartOfSpeech::Adverb)).is_empty());
    }

    #[test]
    fn test_base_forms() {
        let wn = wordnet();
        assert_eq!(ids(wn.synsets("dogs", Some(PartOfSpeech::Noun))), vec!["dog.n.01"]);
        assert_eq!(ids(wn.synsets("Puppies", None)), vec!["puppy.n.01"]);
        assert_eq!(ids(wn.synsets("chased", None)), vec!["chase.v.01"]);
        assert_eq!(ids(wn.synsets("running", None)), vec!["running.n.01"]);
    }

    #[test]
    fn test_adjective_includes_satellites() {
        let wn = wordnet();
        assert_eq!(
            ids(wn.synsets("big", Some(PartOfSpeech::Adjective))),
            vec!["big.a.01", "large.s.01"]
        );
        assert_eq!(
            ids(wn.synsets("larger", Some(PartOfSpeech::AdjectiveSatellite))),
            vec!["large.s.01"]
        );
    }

    #[test]
    fn test_multiword_lookup() {
        let wn = wordnet();
        assert_eq!(ids(wn.synsets("ice cream", None)), vec!["ice_cream.n.01"]);
    }

    #[test]
    fn test_unknown_and_empty() {
        let wn = wordnet();
        assert!(wn.synsets("zyzzyva", None).is_empty());
        assert!(wn.synsets("  ", None).is_empty());
    }

    #[test]
    fn test_synset_by_id_and_frames() {
        let wn = wordnet();
        let dog = wn.synset("dog.n.01").unwrap();
        assert_eq!(dog.hypernyms, vec!["canine.n.02"]);
        assert!(wn.synset("cat.n.01").is_none());

        assert_eq!(
            wn.frame_string(8, "chase"),
            Some("Somebody chase something".to_string())
        );
        assert_eq!(wn.frame_string(99, "chase"), None);
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let wn = WordNet::from_path(file.path()).unwrap();
        assert_eq!(wn.len(), 9);
        assert!(WordNet::from_path("/nonexistent/wordnet.json").is_err());
    }
}
