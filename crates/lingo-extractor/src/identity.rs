//! Token ID assignment
//!
//! Every token gets a 1-based position in document order so that responses
//! can refer to a token (a sentence root, a conjunct, a dependent) by number.
//! IDs are keyed by token index, so tokens with identical text and identical
//! dependents still get distinct IDs.

use lingo_core::Document;

/// Document-order token IDs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenIds {
    ids: Vec<Option<u32>>,
}

impl TokenIds {
    /// Assign IDs walking sentences in order, tokens within each sentence in
    /// order, with one counter for the whole document
    ///
    /// Tokens outside every sentence get no ID.
    pub fn assign(doc: &Document) -> Self {
        let mut ids = vec![None; doc.len()];
        let mut counter = 0u32;

        for sentence in doc.sentences() {
            for index in sentence.indices() {
                counter += 1;
                ids[index] = Some(counter);
            }
        }

        Self { ids }
    }

    /// ID of the token at `index`
    pub fn get(&self, index: usize) -> Option<u32> {
        self.ids.get(index).copied().flatten()
    }

    /// Number of tokens that received an ID
    pub fn assigned(&self) -> usize {
        self.ids.iter().filter(|id| id.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{apple_hired_john, word};
    use lingo_core::{Span, Token};

    #[test]
    fn test_ids_are_one_based_document_order() {
        let doc = apple_hired_john();
        let ids = TokenIds::assign(&doc);

        let all: Vec<Option<u32>> = (0..doc.len()).map(|i| ids.get(i)).collect();
        assert_eq!(all, (1..=6).map(Some).collect::<Vec<_>>());
        assert_eq!(ids.get(6), None);
    }

    #[test]
    fn test_counter_shared_across_sentences() {
        let tokens = vec![
            word("Go", 0, "ROOT"),
            Token::new("!", 0).with_whitespace(" "),
            word("Go", 2, "ROOT"),
            Token::new("!", 2),
        ];
        let doc = Document::new(
            tokens,
            vec![Span::new(0, 2), Span::new(2, 4)],
            vec![],
            vec![],
        )
        .unwrap();

        let ids = TokenIds::assign(&doc);
        assert_eq!(ids.get(2), Some(3));
        assert_eq!(ids.get(3), Some(4));
    }

    #[test]
    fn test_identical_tokens_get_distinct_ids() {
        // Two "Go !" sentences: same text, same dependents
        let tokens = vec![
            word("Go", 0, "ROOT"),
            word("!", 0, "punct"),
            word("Go", 2, "ROOT"),
            Token::new("!", 2).with_dep("punct"),
        ];
        let doc = Document::new(
            tokens,
            vec![Span::new(0, 2), Span::new(2, 4)],
            vec![],
            vec![],
        )
        .unwrap();

        let ids = TokenIds::assign(&doc);
        assert_ne!(ids.get(0), ids.get(2));
        assert_ne!(ids.get(1), ids.get(3));
        assert_eq!(ids.assigned(), 4);
    }

    #[test]
    fn test_tokens_outside_sentences_have_no_id() {
        let tokens = vec![word("a", 0, "ROOT"), word("b", 1, "ROOT"), Token::new("c", 1)];
        let doc = Document::new(tokens, vec![Span::new(0, 1), Span::new(2, 3)], vec![], vec![])
            .unwrap();

        let ids = TokenIds::assign(&doc);
        assert_eq!(ids.get(0), Some(1));
        assert_eq!(ids.get(1), None);
        assert_eq!(ids.get(2), Some(2));
    }
}
