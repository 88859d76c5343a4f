//! Relation Extraction (RE) module
//!
//! Infers subject/object relations for entity tokens from dependency labels:
//!
//! - an entity that is an attribute, direct object or adjectival complement
//!   (`attr`, `dobj`, `acomp`) takes the first nominal subject to the left of
//!   its head as subject, or [`NO_SUBJECT`] when there is none;
//! - an entity that is the object of a preposition (`pobj` under `prep`)
//!   takes the word the preposition attaches to as subject.

use lingo_core::{Document, EntityType};

use crate::{Relation, RelationExtractor};

/// Subject text used when no nominal subject is found
pub const NO_SUBJECT: &str = "N/A";

/// Dependency labels of entity objects attached directly to a predicate
const OBJECT_DEPS: [&str; 3] = ["attr", "dobj", "acomp"];

/// Rule-based extractor over dependency-label patterns
#[derive(Debug, Clone, Copy, Default)]
pub struct DependencyPatternRe;

impl DependencyPatternRe {
    pub fn new() -> Self {
        Self
    }

    /// Subject text for an entity token, if one of the patterns applies
    fn subject_for(&self, doc: &Document, index: usize) -> Option<String> {
        let token = doc.token(index);
        let head = token.head;

        if OBJECT_DEPS.contains(&token.dep.as_str()) {
            let subject = doc
                .lefts(head)
                .find(|&left| doc.token(left).dep == "nsubj")
                .map(|left| doc.token(left).text.trim().to_string())
                .unwrap_or_else(|| NO_SUBJECT.to_string());
            return Some(subject);
        }

        if token.dep == "pobj" && doc.token(head).dep == "prep" {
            let governor = doc.head(head);
            return Some(doc.token(governor).text.trim().to_string());
        }

        None
    }
}

impl RelationExtractor for DependencyPatternRe {
    fn extract(&self, doc: &Document) -> Vec<Relation> {
        let mut relations = Vec::new();

        for entity_type in EntityType::ALL {
            let candidates = doc
                .tokens()
                .iter()
                .enumerate()
                .filter(|(_, t)| entity_type.matches(&t.ent_type));

            for (index, token) in candidates {
                if let Some(subject) = self.subject_for(doc, index) {
                    relations.push(Relation {
                        subject,
                        object: token.text.trim().to_string(),
                        relation: entity_type,
                    });
                }
            }
        }

        relations
    }
}

/// Extract relations from a merged document with the default patterns
pub fn extract_semantic_relations(doc: &Document) -> Vec<Relation> {
    DependencyPatternRe::new().extract(doc)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{apple_hired_john, tim_cook_leads, word};
    use crate::merge_spans;
    use lingo_core::{EntitySpan, Span, Token};
    use proptest::prelude::*;

    fn relation(subject: &str, object: &str, relation: EntityType) -> Relation {
        Relation {
            subject: subject.to_string(),
            object: object.to_string(),
            relation,
        }
    }

    #[test]
    fn test_apple_hired_john() {
        let doc = merge_spans(&apple_hired_john());
        let relations = extract_semantic_relations(&doc);

        assert_eq!(
            relations,
            vec![
                relation("Apple", "John", EntityType::Person),
                relation("hired", "California", EntityType::Gpe),
            ]
        );
    }

    #[test]
    fn test_merged_multi_token_entities() {
        let doc = merge_spans(&tim_cook_leads());
        let relations = extract_semantic_relations(&doc);

        assert_eq!(
            relations,
            vec![relation("leads", "Apple Park", EntityType::Facility)]
        );
    }

    #[test]
    fn test_missing_subject_uses_sentinel() {
        // "Call John ."
        let tokens = vec![
            word("Call", 0, "ROOT"),
            word("John", 0, "dobj"),
            Token::new(".", 0).with_dep("punct"),
        ];
        let doc = Document::new(tokens, vec![], vec![EntitySpan::new(1, 2, "PERSON")], vec![])
            .unwrap();

        let relations = extract_semantic_relations(&doc);
        assert_eq!(relations, vec![relation(NO_SUBJECT, "John", EntityType::Person)]);
    }

    #[test]
    fn test_first_nsubj_wins() {
        // Two nsubj dependents on the left of the head (malformed but possible)
        let tokens = vec![
            word("Alice", 2, "nsubj"),
            word("Bob", 2, "nsubj"),
            word("is", 2, "ROOT"),
            Token::new("French", 2).with_dep("attr"),
        ];
        let doc = Document::new(tokens, vec![], vec![EntitySpan::new(3, 4, "NORP")], vec![])
            .unwrap();

        let relations = extract_semantic_relations(&doc);
        assert_eq!(relations, vec![relation("Alice", "French", EntityType::Norp)]);
    }

    #[test]
    fn test_pobj_without_prep_head_ignored() {
        let tokens = vec![
            word("go", 0, "ROOT"),
            word("to", 0, "dative"),
            Token::new("Paris", 1).with_dep("pobj"),
        ];
        let doc = Document::new(tokens, vec![], vec![EntitySpan::new(2, 3, "GPE")], vec![])
            .unwrap();

        assert!(extract_semantic_relations(&doc).is_empty());
    }

    #[test]
    fn test_order_follows_vocabulary_then_position() {
        // "Bob paid $5 to Ann on Monday ." with MONEY before PERSON in the text
        let tokens = vec![
            word("Bob", 1, "nsubj"),
            word("paid", 1, "ROOT"),
            word("$5", 1, "dobj"),
            word("to", 1, "prep"),
            word("Ann", 3, "pobj"),
            word("on", 1, "prep"),
            word("Monday", 5, "pobj"),
            Token::new(".", 1).with_dep("punct"),
        ];
        let doc = Document::new(
            tokens,
            vec![],
            vec![
                EntitySpan::new(0, 1, "PERSON"),
                EntitySpan::new(2, 3, "MONEY"),
                EntitySpan::new(4, 5, "PERSON"),
                EntitySpan::new(6, 7, "DATE"),
            ],
            vec![],
        )
        .unwrap();

        let relations = extract_semantic_relations(&doc);
        assert_eq!(
            relations,
            vec![
                relation("paid", "Ann", EntityType::Person),
                relation("paid", "Monday", EntityType::Date),
                relation("Bob", "$5", EntityType::Money),
            ]
        );
    }

    #[test]
    fn test_unknown_labels_ignored() {
        let tokens = vec![word("Bob", 1, "nsubj"), Token::new("saw", 1).with_dep("ROOT")];
        let doc = Document::new(tokens, vec![], vec![EntitySpan::new(0, 1, "MISC")], vec![])
            .unwrap();
        assert!(extract_semantic_relations(&doc).is_empty());
    }

    #[test]
    fn test_empty_document() {
        assert!(extract_semantic_relations(&Document::empty()).is_empty());
    }

    // ------------------------------------------------------------------------
    // Properties
    // ------------------------------------------------------------------------

    const DEPS: [&str; 8] = ["nsubj", "attr", "dobj", "acomp", "pobj", "prep", "det", "amod"];
    const LABELS: [&str; 5] = ["", "PERSON", "ORG", "GPE", "MONEY"];

    /// Random single-sentence parse: token `i > 0` hangs off some earlier
    /// token, token 0 is the root.
    fn arb_document() -> impl Strategy<Value = Document> {
        (1usize..12)
            .prop_flat_map(|len| {
                (
                    proptest::collection::vec(0usize..DEPS.len(), len),
                    proptest::collection::vec(0usize..LABELS.len(), len),
                    proptest::collection::vec(any::<prop::sample::Index>(), len),
                )
            })
            .prop_map(|(deps, labels, heads)| {
                let tokens = deps
                    .iter()
                    .zip(&labels)
                    .zip(&heads)
                    .enumerate()
                    .map(|(i, ((&dep, &label), head))| {
                        let head = if i == 0 { 0 } else { head.index(i) };
                        word(&format!("w{i}"), head, DEPS[dep]).with_ent(LABELS[label])
                    })
                    .collect();
                Document::new(tokens, vec![], vec![], vec![]).unwrap()
            })
    }

    proptest! {
        #[test]
        fn prop_no_entities_no_relations(doc in arb_document()) {
            let labels_stripped: Vec<Token> = doc
                .tokens()
                .iter()
                .cloned()
                .map(|t| t.with_ent(""))
                .collect();
            let doc = Document::new(labels_stripped, vec![], vec![], vec![]).unwrap();
            prop_assert!(extract_semantic_relations(&doc).is_empty());
        }

        #[test]
        fn prop_object_patterns(doc in arb_document()) {
            let relations = extract_semantic_relations(&doc);

            for rel in &relations {
                let index = doc
                    .tokens()
                    .iter()
                    .position(|t| t.text == rel.object)
                    .unwrap();
                let token = doc.token(index);
                prop_assert_eq!(token.entity_type(), Some(rel.relation));

                if OBJECT_DEPS.contains(&token.dep.as_str()) {
                    let expected = doc
                        .lefts(token.head)
                        .find(|&l| doc.token(l).dep == "nsubj")
                        .map(|l| doc.token(l).text.clone())
                        .unwrap_or_else(|| NO_SUBJECT.to_string());
                    prop_assert_eq!(&rel.subject, &expected);
                } else {
                    prop_assert_eq!(token.dep.as_str(), "pobj");
                    prop_assert_eq!(doc.token(token.head).dep.as_str(), "prep");
                    prop_assert_eq!(&rel.subject, &doc.token(doc.head(token.head)).text);
                }
            }
        }

        #[test]
        fn prop_every_matching_token_emits(doc in arb_document()) {
            let expected = doc
                .tokens()
                .iter()
                .filter(|t| t.entity_type().is_some())
                .filter(|t| {
                    OBJECT_DEPS.contains(&t.dep.as_str())
                        || (t.dep == "pobj" && doc.token(t.head).dep == "prep")
                })
                .count();
            prop_assert_eq!(extract_semantic_relations(&doc).len(), expected);
        }

        #[test]
        fn prop_order_by_vocabulary_then_position(doc in arb_document()) {
            let relations = extract_semantic_relations(&doc);
            let keys: Vec<(usize, usize)> = relations
                .iter()
                .map(|rel| {
                    let vocab = EntityType::ALL.iter().position(|t| *t == rel.relation).unwrap();
                    let index = doc.tokens().iter().position(|t| t.text == rel.object).unwrap();
                    (vocab, index)
                })
                .collect();
            let mut sorted = keys.clone();
            sorted.sort_unstable();
            prop_assert_eq!(keys, sorted);
        }
    }

    #[test]
    fn test_merged_spans_are_single_nodes() {
        let merged = merge_spans(&tim_cook_leads());
        for ent in merged.entities() {
            assert_eq!(ent.span(), Span::new(ent.start, ent.start + 1));
        }
    }
}
