//! Lingo Extractor - Relation extraction over dependency parses
//!
//! Collapses entity and noun-chunk spans into single nodes, walks the merged
//! dependency tree for subject/object/entity relations, and renders the
//! per-sentence breakdown served by the `/nlp/parse` endpoint.

use serde::{Deserialize, Serialize};

use lingo_core::{Document, EntityType};

pub mod analysis;
pub mod annotate;
pub mod classify;
pub mod identity;
pub mod merge;
pub mod relation;

#[cfg(test)]
pub(crate) mod fixtures;

pub use analysis::{analyze, Analysis};
pub use annotate::{EntityAnnotation, SentenceAnnotation, TokenAnnotation, TokenRef};
pub use classify::SentenceType;
pub use identity::TokenIds;
pub use merge::merge_spans;
pub use relation::{extract_semantic_relations, DependencyPatternRe, NO_SUBJECT};

/// Relation between a subject and an entity-typed object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relation {
    /// Subject text, or [`NO_SUBJECT`]
    pub subject: String,
    pub object: String,
    /// Entity type of the object
    pub relation: EntityType,
}

/// Trait for relation extractors
pub trait RelationExtractor: Send + Sync {
    /// Extract relations from a document whose spans are already merged
    fn extract(&self, doc: &Document) -> Vec<Relation>;
}
