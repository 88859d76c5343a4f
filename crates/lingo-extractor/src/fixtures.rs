//! Hand-built parses shared by the unit tests

use lingo_core::{Document, EntitySpan, Span, Token};

/// Token followed by a single space
pub fn word(text: &str, head: usize, dep: &str) -> Token {
    Token::new(text, head).with_dep(dep).with_whitespace(" ")
}

/// "Apple hired John in California."
///
/// ```text
/// hired --nsubj--> Apple
///       --dobj---> John
///       --prep---> in --pobj--> California
///       --punct--> .
/// ```
pub fn apple_hired_john() -> Document {
    let tokens = vec![
        word("Apple", 1, "nsubj").with_pos("PROPN", "NNP"),
        word("hired", 1, "ROOT").with_pos("VERB", "VBD").with_lemma("hire"),
        word("John", 1, "dobj").with_pos("PROPN", "NNP"),
        word("in", 1, "prep").with_pos("ADP", "IN"),
        word("California", 3, "pobj")
            .with_pos("PROPN", "NNP")
            .with_whitespace(""),
        Token::new(".", 1).with_dep("punct").with_pos("PUNCT", "."),
    ];
    Document::new(
        tokens,
        vec![Span::new(0, 6)],
        vec![
            EntitySpan::new(0, 1, "ORG"),
            EntitySpan::new(2, 3, "PERSON"),
            EntitySpan::new(4, 5, "GPE"),
        ],
        vec![Span::new(0, 1), Span::new(2, 3), Span::new(4, 5)],
    )
    .unwrap()
}

/// "Tim Cook leads the new team at Apple Park."
///
/// Multi-token entity (`Tim Cook`, PERSON), a multi-token noun chunk
/// (`the new team`) and a multi-token facility (`Apple Park`, FAC).
pub fn tim_cook_leads() -> Document {
    let tokens = vec![
        word("Tim", 1, "compound").with_pos("PROPN", "NNP"),
        word("Cook", 2, "nsubj").with_pos("PROPN", "NNP"),
        word("leads", 2, "ROOT").with_pos("VERB", "VBZ").with_lemma("lead"),
        word("the", 5, "det").with_pos("DET", "DT"),
        word("new", 5, "amod").with_pos("ADJ", "JJ"),
        word("team", 2, "dobj").with_pos("NOUN", "NN"),
        word("at", 2, "prep").with_pos("ADP", "IN"),
        word("Apple", 8, "compound").with_pos("PROPN", "NNP"),
        word("Park", 6, "pobj")
            .with_pos("PROPN", "NNP")
            .with_whitespace(""),
        Token::new(".", 2).with_dep("punct").with_pos("PUNCT", "."),
    ];
    Document::new(
        tokens,
        vec![Span::new(0, 10)],
        vec![EntitySpan::new(0, 2, "PERSON"), EntitySpan::new(7, 9, "FAC")],
        vec![Span::new(0, 2), Span::new(3, 6), Span::new(7, 9)],
    )
    .unwrap()
}
