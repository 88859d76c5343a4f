//! Full parse analysis
//!
//! Merge, extract, number and annotate in one pass. Relations, sentences and
//! entities are all rendered from the merged document.

use serde::{Deserialize, Serialize};

use lingo_core::{Document, SentimentAnalyzer};

use crate::annotate::{annotate_entities, annotate_sentences, EntityAnnotation, SentenceAnnotation};
use crate::identity::TokenIds;
use crate::merge::merge_spans;
use crate::{Relation, RelationExtractor};

/// Result of analysing one parsed document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub relations: Vec<Relation>,
    pub sentences: Vec<SentenceAnnotation>,
    pub entities: Vec<EntityAnnotation>,
}

pub fn analyze(
    doc: &Document,
    extractor: &dyn RelationExtractor,
    sentiment: &dyn SentimentAnalyzer,
) -> Analysis {
    let merged = merge_spans(doc);
    let ids = TokenIds::assign(&merged);

    Analysis {
        relations: extractor.extract(&merged),
        sentences: annotate_sentences(&merged, &ids, sentiment),
        entities: annotate_entities(&merged),
    }
}
