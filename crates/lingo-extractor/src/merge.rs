//! Span merging
//!
//! Collapses every entity span, then every noun chunk, into a single token and
//! re-links dependency edges to the merged nodes. The input document is left
//! untouched; a new document is returned.
//!
//! Noun chunks that overlap an entity span are not merged, so an entity is
//! never absorbed into or split by a chunk. Spans crossing a sentence boundary
//! are not merged either. Spans left unmerged are dropped from the merged
//! document, so every entity and chunk it lists is exactly one token.

use lingo_core::document::{is_alpha, word_shape};
use lingo_core::{Document, EntitySpan, Span, Token};
use tracing::{debug, warn};

/// A span selected for merging
#[derive(Debug, Clone)]
struct MergeGroup {
    span: Span,
    /// Entity label for entity spans, `None` for noun chunks
    label: Option<String>,
}

/// Merge entity spans, then noun chunks, into single tokens
pub fn merge_spans(doc: &Document) -> Document {
    if doc.is_empty() {
        return doc.clone();
    }
    let groups = plan_groups(doc);

    let index_map = build_index_map(doc.len(), &groups);
    let tokens = merged_tokens(doc, &groups, &index_map);

    let remap = |span: Span| Span::new(index_map[span.start], index_map[span.end - 1] + 1);
    let sentences = doc.sentences().iter().map(|s| remap(*s)).collect();
    let entities = doc
        .entities()
        .iter()
        .filter_map(|e| {
            let span = remap(e.span());
            if span.len() != 1 {
                debug!("Entity {:?} not merged, dropped from merged document", e.span());
                return None;
            }
            Some(EntitySpan::new(span.start, span.end, e.label.clone()))
        })
        .collect();
    let noun_chunks = doc
        .noun_chunks()
        .iter()
        .map(|c| remap(*c))
        .filter(|c| c.len() == 1)
        .collect();

    Document::new(tokens, sentences, entities, noun_chunks).unwrap_or_else(|e| {
        warn!("Merged document failed validation, keeping original: {}", e);
        doc.clone()
    })
}

/// Select non-overlapping spans: entities first, then noun chunks
fn plan_groups(doc: &Document) -> Vec<MergeGroup> {
    let mut claimed = vec![false; doc.len()];
    let mut groups = Vec::new();

    let within_sentence = |span: &Span| doc.sentences().iter().any(|s| s.covers(span));

    for ent in doc.entities() {
        let span = ent.span();
        if !within_sentence(&span) {
            debug!("Entity {:?} crosses a sentence boundary, not merged", span);
            continue;
        }
        if span.indices().any(|i| claimed[i]) {
            debug!("Entity {:?} overlaps an earlier entity, not merged", span);
            continue;
        }
        span.indices().for_each(|i| claimed[i] = true);
        groups.push(MergeGroup {
            span,
            label: Some(ent.label.clone()),
        });
    }

    for chunk in doc.noun_chunks() {
        if doc.entities().iter().any(|e| e.span().overlaps(chunk)) {
            continue;
        }
        if !within_sentence(chunk) || chunk.indices().any(|i| claimed[i]) {
            debug!("Noun chunk {:?} not merged", chunk);
            continue;
        }
        chunk.indices().for_each(|i| claimed[i] = true);
        groups.push(MergeGroup {
            span: *chunk,
            label: None,
        });
    }

    groups.sort_by_key(|g| g.span.start);
    groups
}

/// Map each original token index to its index in the merged document
fn build_index_map(len: usize, groups: &[MergeGroup]) -> Vec<usize> {
    let mut index_map = vec![0; len];
    let mut groups = groups.iter().peekable();
    let mut next = 0;
    let mut i = 0;

    while i < len {
        match groups.peek() {
            Some(group) if group.span.start == i => {
                for j in group.span.indices() {
                    index_map[j] = next;
                }
                i = group.span.end;
                groups.next();
            }
            _ => {
                index_map[i] = next;
                i += 1;
            }
        }
        next += 1;
    }

    index_map
}

fn merged_tokens(doc: &Document, groups: &[MergeGroup], index_map: &[usize]) -> Vec<Token> {
    let mut tokens = Vec::with_capacity(doc.len());
    let mut groups = groups.iter().peekable();
    let mut i = 0;

    while i < doc.len() {
        match groups.peek() {
            Some(group) if group.span.start == i => {
                tokens.push(merge_group(doc, group, index_map));
                i = group.span.end;
                groups.next();
            }
            _ => {
                let mut token = doc.token(i).clone();
                token.head = index_map[token.head];
                tokens.push(token);
                i += 1;
            }
        }
    }

    tokens
}

/// Build the single token replacing a span
///
/// Grammatical attributes and the head come from the span root; text and
/// lemma cover the whole span.
fn merge_group(doc: &Document, group: &MergeGroup, index_map: &[usize]) -> Token {
    let span = group.span;
    let root = span_root(doc, &span);
    let root_token = doc.token(root);

    if span.len() == 1 {
        let mut token = root_token.clone();
        token.head = index_map[token.head];
        if let Some(label) = &group.label {
            token.ent_type = label.clone();
        }
        return token;
    }

    let members = &doc.tokens()[span.start..span.end];
    let text = doc.span_text(&span);
    let lemma = join_with_whitespace(members.iter().map(|t| (t.lemma.as_str(), t.whitespace.as_str())));
    let whitespace = members
        .last()
        .map(|t| t.whitespace.clone())
        .unwrap_or_default();

    Token {
        lemma,
        whitespace,
        pos: root_token.pos.clone(),
        tag: root_token.tag.clone(),
        dep: root_token.dep.clone(),
        ent_type: group
            .label
            .clone()
            .unwrap_or_else(|| root_token.ent_type.clone()),
        head: index_map[root_token.head],
        is_oov: members.iter().all(|t| t.is_oov),
        is_alpha: is_alpha(&text),
        is_stop: false,
        shape: word_shape(&text),
        text,
    }
}

/// Token of the span whose head lies outside it (or is itself), nearest to
/// the sentence root when there are several
fn span_root(doc: &Document, span: &Span) -> usize {
    span.indices()
        .filter(|&i| {
            let head = doc.head(i);
            head == i || !span.contains(head)
        })
        .min_by_key(|&i| depth(doc, i))
        .unwrap_or(span.start)
}

/// Number of head hops to a root, bounded by the document length
fn depth(doc: &Document, mut index: usize) -> usize {
    let mut hops = 0;
    while !doc.is_root(index) && hops < doc.len() {
        index = doc.head(index);
        hops += 1;
    }
    hops
}

fn join_with_whitespace<'a>(parts: impl Iterator<Item = (&'a str, &'a str)>) -> String {
    let parts: Vec<_> = parts.collect();
    let mut joined = String::new();
    for (n, (text, whitespace)) in parts.iter().enumerate() {
        joined.push_str(text);
        if n + 1 < parts.len() {
            joined.push_str(whitespace);
        }
    }
    joined
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{apple_hired_john, tim_cook_leads, word};

    #[test]
    fn test_single_token_spans_keep_structure() {
        let doc = apple_hired_john();
        let merged = merge_spans(&doc);

        assert_eq!(merged.len(), doc.len());
        assert_eq!(merged.tokens(), doc.tokens());
    }

    #[test]
    fn test_multi_token_merge() {
        let doc = tim_cook_leads();
        let merged = merge_spans(&doc);

        let texts: Vec<&str> = merged.tokens().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["Tim Cook", "leads", "the new team", "at", "Apple Park", "."]);

        let tim = merged.token(0);
        assert_eq!(tim.dep, "nsubj");
        assert_eq!(tim.head, 1);
        assert_eq!(tim.ent_type, "PERSON");
        assert_eq!(tim.shape, "Xxx Xxxx");
        assert!(!tim.is_alpha);

        let team = merged.token(2);
        assert_eq!(team.dep, "dobj");
        assert_eq!(team.head, 1);
        assert_eq!(team.pos, "NOUN");
        assert_eq!(team.ent_type, "");

        let park = merged.token(4);
        assert_eq!(park.dep, "pobj");
        assert_eq!(park.head, 3);
        assert_eq!(park.ent_type, "FAC");
        assert_eq!(park.whitespace, "");

        assert_eq!(merged.token(5).head, 1);
        assert!(merged.is_root(1));
    }

    #[test]
    fn test_merge_remaps_spans() {
        let merged = merge_spans(&tim_cook_leads());

        assert_eq!(merged.sentences(), &[Span::new(0, 6)]);
        assert_eq!(merged.entities()[0].span(), Span::new(0, 1));
        assert_eq!(merged.entities()[1].span(), Span::new(4, 5));
        assert!(merged.entities().iter().all(|e| e.span().len() == 1));
        assert_eq!(merged.noun_chunks()[1], Span::new(2, 3));
    }

    #[test]
    fn test_merge_leaves_input_untouched() {
        let doc = tim_cook_leads();
        let before = doc.clone();
        let _ = merge_spans(&doc);
        assert_eq!(doc, before);
    }

    #[test]
    fn test_dependents_relinked_to_merged_node() {
        let merged = merge_spans(&tim_cook_leads());
        assert_eq!(merged.lefts(1).collect::<Vec<_>>(), vec![0]);
        assert_eq!(merged.rights(1).collect::<Vec<_>>(), vec![2, 3, 5]);
        assert_eq!(merged.rights(3).collect::<Vec<_>>(), vec![4]);
    }

    #[test]
    fn test_chunk_overlapping_entity_not_merged() {
        // "the company Apple grew": chunk 0..3 contains entity 2..3
        let tokens = vec![
            word("the", 1, "det"),
            word("company", 3, "nsubj"),
            word("Apple", 1, "appos"),
            Token::new("grew", 3).with_dep("ROOT"),
        ];
        let doc = Document::new(
            tokens,
            vec![],
            vec![EntitySpan::new(2, 3, "ORG")],
            vec![Span::new(0, 3)],
        )
        .unwrap();

        let merged = merge_spans(&doc);
        assert_eq!(merged.len(), 4);
        assert_eq!(merged.token(2).text, "Apple");
        assert_eq!(merged.token(2).ent_type, "ORG");
    }

    #[test]
    fn test_span_crossing_sentences_not_merged() {
        let tokens = vec![
            word("Hi", 0, "ROOT"),
            word("New", 2, "compound"),
            Token::new("York", 2).with_dep("ROOT"),
        ];
        let doc = Document::new(
            tokens,
            vec![Span::new(0, 2), Span::new(2, 3)],
            vec![EntitySpan::new(1, 3, "GPE")],
            vec![],
        )
        .unwrap();

        let merged = merge_spans(&doc);
        assert_eq!(merged.len(), 3);
        assert_eq!(merged.sentences().len(), 2);
        assert!(merged.entities().is_empty());
    }

    #[test]
    fn test_overlapping_entity_dropped() {
        // "New York Times grew": GPE 0..2 wins over ORG 1..3
        let tokens = vec![
            word("New", 1, "compound"),
            word("York", 2, "compound"),
            word("Times", 3, "nsubj"),
            Token::new("grew", 3).with_dep("ROOT"),
        ];
        let doc = Document::new(
            tokens,
            vec![Span::new(0, 4)],
            vec![EntitySpan::new(0, 2, "GPE"), EntitySpan::new(1, 3, "ORG")],
            vec![],
        )
        .unwrap();

        let merged = merge_spans(&doc);
        assert_eq!(merged.len(), 3);
        assert_eq!(merged.token(0).text, "New York");
        assert_eq!(merged.entities(), &[EntitySpan::new(0, 1, "GPE")]);
    }

    #[test]
    fn test_unmerged_chunk_dropped() {
        let doc = Document::new(
            vec![
                word("the", 1, "det"),
                word("company", 3, "nsubj"),
                word("Apple", 1, "appos"),
                Token::new("grew", 3).with_dep("ROOT"),
            ],
            vec![Span::new(0, 4)],
            vec![EntitySpan::new(2, 3, "ORG")],
            vec![Span::new(0, 3)],
        )
        .unwrap();

        let merged = merge_spans(&doc);
        assert!(merged.noun_chunks().is_empty());
        assert_eq!(merged.entities().len(), 1);
    }

    #[test]
    fn test_empty_document() {
        let merged = merge_spans(&Document::empty());
        assert!(merged.is_empty());
    }
}
