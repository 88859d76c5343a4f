//! Sentence type classification
//!
//! Rule based: terminal punctuation first, then the shape of the root verb.

use serde::{Deserialize, Serialize};

use lingo_core::{Document, Span};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentenceType {
    Declarative,
    Interrogative,
    Exclamatory,
    Imperative,
}

impl SentenceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Declarative => "declarative",
            Self::Interrogative => "interrogative",
            Self::Exclamatory => "exclamatory",
            Self::Imperative => "imperative",
        }
    }
}

impl std::fmt::Display for SentenceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classify one sentence of a document
pub fn classify_sentence(doc: &Document, sentence: &Span) -> SentenceType {
    let last = sentence
        .indices()
        .rev()
        .map(|i| doc.token(i).text.trim())
        .find(|t| !t.is_empty());

    match last {
        Some(t) if t.ends_with('?') => return SentenceType::Interrogative,
        Some(t) if t.ends_with('!') => return SentenceType::Exclamatory,
        _ => {}
    }

    if let Some(root) = doc.sentence_root(sentence) {
        let token = doc.token(root);
        let base_form_verb = token.pos == "VERB" && token.tag == "VB";
        let has_subject = doc
            .children(root)
            .iter()
            .any(|&c| doc.token(c).dep.starts_with("nsubj") || doc.token(c).dep == "expl");
        let has_aux = doc
            .lefts(root)
            .any(|c| matches!(doc.token(c).dep.as_str(), "aux" | "auxpass"));

        if base_form_verb && !has_subject && !has_aux {
            return SentenceType::Imperative;
        }
    }

    SentenceType::Declarative
}
