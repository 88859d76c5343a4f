//! Sentence breakdown
//!
//! Renders each sentence of a document with its sentiment, root, sentence
//! type and a full per-token annotation list. Tokens refer to each other by
//! their [`TokenIds`] position.

use serde::{Deserialize, Serialize};

use lingo_core::{Document, Sentiment, SentimentAnalyzer, Span};

use crate::classify::{classify_sentence, SentenceType};
use crate::identity::TokenIds;

/// Reference to another token of the document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRef {
    pub text: String,
    pub orth: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenAnnotation {
    pub text: String,
    pub lemma: String,
    pub pos: String,
    pub tag: String,
    pub dep: String,
    pub ent: String,
    pub orth: Option<u32>,
    pub is_oov: bool,
    pub conjuncts: Vec<TokenRef>,
    pub shape: String,
    pub left: Vec<TokenRef>,
    pub right: Vec<TokenRef>,
    pub is_alpha: bool,
    pub is_stop: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentenceAnnotation {
    /// Sentence text with trailing whitespace
    pub sentence: String,
    pub sentiment: Sentiment,
    pub root: Option<TokenRef>,
    pub pos: Vec<TokenAnnotation>,
    pub sentence_type: SentenceType,
}

/// Entity span as listed in the parse response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityAnnotation {
    pub text: String,
    pub label: String,
}

/// Annotate every sentence of `doc`
pub fn annotate_sentences(
    doc: &Document,
    ids: &TokenIds,
    sentiment: &dyn SentimentAnalyzer,
) -> Vec<SentenceAnnotation> {
    doc.sentences()
        .iter()
        .map(|sentence| annotate_sentence(doc, ids, sentiment, sentence))
        .collect()
}

fn annotate_sentence(
    doc: &Document,
    ids: &TokenIds,
    sentiment: &dyn SentimentAnalyzer,
    sentence: &Span,
) -> SentenceAnnotation {
    let text = doc.span_text_with_ws(sentence);

    let root = doc.sentence_root(sentence).map(|root| TokenRef {
        text: doc.token(root).text_with_ws(),
        orth: ids.get(root),
    });

    let pos = sentence
        .indices()
        .map(|index| annotate_token(doc, ids, index))
        .collect();

    SentenceAnnotation {
        sentiment: sentiment.analyze(&text),
        sentence: text,
        root,
        pos,
        sentence_type: classify_sentence(doc, sentence),
    }
}

fn annotate_token(doc: &Document, ids: &TokenIds, index: usize) -> TokenAnnotation {
    let token = doc.token(index);
    let refer = |i: usize| TokenRef {
        text: doc.token(i).text.clone(),
        orth: ids.get(i),
    };

    TokenAnnotation {
        text: token.text.clone(),
        lemma: token.lemma.clone(),
        pos: token.pos.clone(),
        tag: token.tag.clone(),
        dep: token.dep.clone(),
        ent: token.ent_type.clone(),
        orth: ids.get(index),
        is_oov: token.is_oov,
        conjuncts: doc.conjuncts(index).into_iter().map(refer).collect(),
        shape: token.shape.clone(),
        left: doc.lefts(index).map(refer).collect(),
        right: doc.rights(index).map(refer).collect(),
        is_alpha: token.is_alpha,
        is_stop: token.is_stop,
    }
}

/// Entity spans with their text and raw label
pub fn annotate_entities(doc: &Document) -> Vec<EntityAnnotation> {
    doc.entities()
        .iter()
        .map(|e| EntityAnnotation {
            text: doc.span_text(&e.span()),
            label: e.label.clone(),
        })
        .collect()
}
