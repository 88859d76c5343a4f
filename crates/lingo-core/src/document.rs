//! Parsed documents
//!
//! A [`Document`] is an immutable arena of tokens in surface order. Dependency
//! heads are token indices into the same arena; a sentence root is its own
//! head. Left/right dependents are derived from the heads once, when the
//! document is built.
//!
//! [`WireDocument`] is the JSON shape exchanged with the parser service.

use serde::{Deserialize, Serialize};

use crate::{EntityType, LingoError, Result};

// ============================================================================
// Spans
// ============================================================================

/// Half-open token range `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, index: usize) -> bool {
        self.start <= index && index < self.end
    }

    pub fn overlaps(&self, other: &Span) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Whether `other` lies entirely inside this span
    pub fn covers(&self, other: &Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    pub fn indices(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}

/// Token range tagged with an entity label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySpan {
    pub start: usize,
    pub end: usize,
    pub label: String,
}

impl EntitySpan {
    pub fn new(start: usize, end: usize, label: impl Into<String>) -> Self {
        Self {
            start,
            end,
            label: label.into(),
        }
    }

    pub fn span(&self) -> Span {
        Span::new(self.start, self.end)
    }
}

// ============================================================================
// Tokens
// ============================================================================

/// A single parsed token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// Surface text
    pub text: String,

    /// Whitespace following the token in the source text
    #[serde(default)]
    pub whitespace: String,

    #[serde(default)]
    pub lemma: String,

    /// Coarse part-of-speech tag (e.g. `PROPN`)
    #[serde(default)]
    pub pos: String,

    /// Fine-grained tag (e.g. `NNP`)
    #[serde(default)]
    pub tag: String,

    /// Dependency label (e.g. `nsubj`)
    #[serde(default)]
    pub dep: String,

    /// Entity label, empty outside an entity
    #[serde(default, rename = "ent")]
    pub ent_type: String,

    /// Index of the governing token; roots point at themselves
    pub head: usize,

    #[serde(default)]
    pub is_oov: bool,

    #[serde(default)]
    pub is_alpha: bool,

    #[serde(default)]
    pub is_stop: bool,

    #[serde(default)]
    pub shape: String,
}

impl Token {
    /// Create a token with lexical attributes derived from its text
    pub fn new(text: impl Into<String>, head: usize) -> Self {
        let text = text.into();
        Self {
            lemma: text.clone(),
            is_alpha: is_alpha(&text),
            shape: word_shape(&text),
            text,
            whitespace: String::new(),
            pos: String::new(),
            tag: String::new(),
            dep: String::new(),
            ent_type: String::new(),
            head,
            is_oov: false,
            is_stop: false,
        }
    }

    pub fn with_dep(mut self, dep: impl Into<String>) -> Self {
        self.dep = dep.into();
        self
    }

    pub fn with_pos(mut self, pos: impl Into<String>, tag: impl Into<String>) -> Self {
        self.pos = pos.into();
        self.tag = tag.into();
        self
    }

    pub fn with_ent(mut self, label: impl Into<String>) -> Self {
        self.ent_type = label.into();
        self
    }

    pub fn with_lemma(mut self, lemma: impl Into<String>) -> Self {
        self.lemma = lemma.into();
        self
    }

    pub fn with_whitespace(mut self, whitespace: impl Into<String>) -> Self {
        self.whitespace = whitespace.into();
        self
    }

    /// Text followed by its trailing whitespace
    pub fn text_with_ws(&self) -> String {
        format!("{}{}", self.text, self.whitespace)
    }

    /// Entity type, when the label is in the fixed vocabulary
    pub fn entity_type(&self) -> Option<EntityType> {
        EntityType::from_label(&self.ent_type)
    }
}

/// Whether every character of a non-empty string is alphabetic
pub fn is_alpha(text: &str) -> bool {
    !text.is_empty() && text.chars().all(char::is_alphabetic)
}

/// Orthographic shape: `Apple` -> `Xxxxx`, `2024` -> `dddd`
///
/// Runs of the same shape character are cut after four.
pub fn word_shape(text: &str) -> String {
    let mut shape = String::with_capacity(text.len());
    let mut last: Option<char> = None;
    let mut run = 0;

    for c in text.chars() {
        let shaped = if c.is_alphabetic() {
            if c.is_uppercase() {
                'X'
            } else {
                'x'
            }
        } else if c.is_ascii_digit() {
            'd'
        } else {
            c
        };

        if Some(shaped) == last {
            run += 1;
        } else {
            run = 1;
            last = Some(shaped);
        }

        if run <= 4 {
            shape.push(shaped);
        }
    }

    shape
}

// ============================================================================
// Wire format
// ============================================================================

/// Document as returned by the parser service
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WireDocument {
    #[serde(default)]
    pub text: String,
    pub tokens: Vec<Token>,
    #[serde(default)]
    pub sents: Vec<Span>,
    #[serde(default)]
    pub ents: Vec<EntitySpan>,
    #[serde(default)]
    pub noun_chunks: Vec<Span>,
}

// ============================================================================
// Document
// ============================================================================

/// Validated, immutable parse of one or more sentences
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    tokens: Vec<Token>,
    sentences: Vec<Span>,
    entities: Vec<EntitySpan>,
    noun_chunks: Vec<Span>,
    /// Dependents of each token in surface order
    children: Vec<Vec<usize>>,
}

impl Document {
    /// Build a document, validating heads and spans
    ///
    /// An empty sentence list means the whole token sequence is one sentence.
    /// Tokens inside an entity span without their own label inherit the
    /// span's label.
    pub fn new(
        mut tokens: Vec<Token>,
        mut sentences: Vec<Span>,
        entities: Vec<EntitySpan>,
        noun_chunks: Vec<Span>,
    ) -> Result<Self> {
        let len = tokens.len();

        for (i, token) in tokens.iter().enumerate() {
            if token.head >= len {
                return Err(LingoError::InvalidDocument(format!(
                    "token {i} ({}) has head {} outside {len} tokens",
                    token.text, token.head
                )));
            }
        }

        if sentences.is_empty() && len > 0 {
            sentences.push(Span::new(0, len));
        }

        let mut previous_end = 0;
        for sent in &sentences {
            check_span(sent, len, "sentence")?;
            if sent.start < previous_end {
                return Err(LingoError::InvalidDocument(format!(
                    "sentence {}..{} overlaps the previous sentence",
                    sent.start, sent.end
                )));
            }
            previous_end = sent.end;
        }

        for ent in &entities {
            check_span(&ent.span(), len, "entity")?;
            for token in &mut tokens[ent.start..ent.end] {
                if token.ent_type.is_empty() {
                    token.ent_type = ent.label.clone();
                }
            }
        }

        for chunk in &noun_chunks {
            check_span(chunk, len, "noun chunk")?;
        }

        let mut children = vec![Vec::new(); len];
        for (i, token) in tokens.iter().enumerate() {
            if token.head != i {
                children[token.head].push(i);
            }
        }

        Ok(Self {
            tokens,
            sentences,
            entities,
            noun_chunks,
            children,
        })
    }

    /// Document with no tokens
    pub fn empty() -> Self {
        Self {
            tokens: Vec::new(),
            sentences: Vec::new(),
            entities: Vec::new(),
            noun_chunks: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Token at `index`
    ///
    /// Panics if `index` is out of bounds, like slice indexing.
    pub fn token(&self, index: usize) -> &Token {
        &self.tokens[index]
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn sentences(&self) -> &[Span] {
        &self.sentences
    }

    pub fn entities(&self) -> &[EntitySpan] {
        &self.entities
    }

    pub fn noun_chunks(&self) -> &[Span] {
        &self.noun_chunks
    }

    pub fn head(&self, index: usize) -> usize {
        self.tokens[index].head
    }

    pub fn is_root(&self, index: usize) -> bool {
        self.tokens[index].head == index
    }

    /// All dependents of a token, in surface order
    pub fn children(&self, index: usize) -> &[usize] {
        &self.children[index]
    }

    /// Dependents preceding the token
    pub fn lefts(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        self.children[index]
            .iter()
            .copied()
            .filter(move |&c| c < index)
    }

    /// Dependents following the token
    pub fn rights(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        self.children[index]
            .iter()
            .copied()
            .filter(move |&c| c > index)
    }

    /// Root of a sentence: the first token whose head is itself or lies
    /// outside the sentence
    pub fn sentence_root(&self, sentence: &Span) -> Option<usize> {
        sentence.indices().find(|&i| {
            let head = self.tokens[i].head;
            head == i || !sentence.contains(head)
        })
    }

    /// Tokens coordinated with `index` through `conj` edges
    ///
    /// Walks up to the first conjunct of the chain, then collects every
    /// token reachable from it over `conj` edges, excluding `index`.
    pub fn conjuncts(&self, index: usize) -> Vec<usize> {
        let mut start = index;
        let mut steps = 0;
        while self.tokens[start].dep == "conj" && !self.is_root(start) && steps < self.len() {
            start = self.tokens[start].head;
            steps += 1;
        }

        let mut found = vec![start];
        let mut stack = vec![start];
        while let Some(current) = stack.pop() {
            for &child in &self.children[current] {
                if self.tokens[child].dep == "conj" && !found.contains(&child) {
                    found.push(child);
                    stack.push(child);
                }
            }
        }

        found.retain(|&i| i != index);
        found.sort_unstable();
        found
    }

    /// Span text, tokens joined with their whitespace, without the trailing
    /// whitespace of the last token
    pub fn span_text(&self, span: &Span) -> String {
        if span.is_empty() {
            return String::new();
        }
        let mut text = self.span_text_with_ws(span);
        text.truncate(text.len() - self.tokens[span.end - 1].whitespace.len());
        text
    }

    /// Span text including the trailing whitespace of the last token
    pub fn span_text_with_ws(&self, span: &Span) -> String {
        self.tokens[span.start..span.end]
            .iter()
            .map(Token::text_with_ws)
            .collect()
    }

    /// Full document text
    pub fn text(&self) -> String {
        self.span_text_with_ws(&Span::new(0, self.len()))
    }
}

impl TryFrom<WireDocument> for Document {
    type Error = LingoError;

    fn try_from(wire: WireDocument) -> Result<Self> {
        Document::new(wire.tokens, wire.sents, wire.ents, wire.noun_chunks)
    }
}

impl From<&Document> for WireDocument {
    fn from(doc: &Document) -> Self {
        Self {
            text: doc.text(),
            tokens: doc.tokens.clone(),
            sents: doc.sentences.clone(),
            ents: doc.entities.clone(),
            noun_chunks: doc.noun_chunks.clone(),
        }
    }
}

fn check_span(span: &Span, len: usize, kind: &str) -> Result<()> {
    if span.start >= span.end || span.end > len {
        return Err(LingoError::InvalidDocument(format!(
            "{kind} span {}..{} is empty or outside {len} tokens",
            span.start, span.end
        )));
    }
    Ok(())
}
