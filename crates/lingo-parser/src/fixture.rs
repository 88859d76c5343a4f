//! Canned parses
//!
//! Answers with pre-built documents looked up by their exact input text.
//! Documents keep their registration order.
//! Used for offline runs over saved parser output and for tests.

use std::path::Path;

use async_trait::async_trait;
use tracing::info;

use lingo_core::{Document, LingoError, Result, SentenceParser, WireDocument};

#[derive(Debug, Clone, Default)]
pub struct FixtureParser {
    documents: Vec<(String, Document)>,
}

impl FixtureParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the parse returned for `text`
    pub fn with_document(mut self, text: impl Into<String>, doc: Document) -> Self {
        let text = text.into();
        match self.documents.iter().position(|(t, _)| *t == text) {
            Some(i) => self.documents[i].1 = doc,
            None => self.documents.push((text, doc)),
        }
        self
    }

    fn find(&self, text: &str) -> Option<&Document> {
        self.documents
            .iter()
            .find(|(t, _)| t == text)
            .map(|(_, doc)| doc)
    }

    /// Register a wire document under its own `text`, or the text rebuilt
    /// from its tokens when that field is empty
    pub fn with_wire(self, wire: WireDocument) -> Result<Self> {
        let text = wire.text.clone();
        let doc = Document::try_from(wire)?;
        let text = if text.is_empty() { doc.text() } else { text };
        Ok(self.with_document(text, doc))
    }

    /// Load one saved wire document, or a JSON array of them
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            LingoError::ParserError(format!("failed to read {}: {e}", path.display()))
        })?;

        let parser = Self::from_json(&json)?;
        info!("Loaded {} fixture parses from {}", parser.len(), path.display());
        Ok(parser)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let wires: Vec<WireDocument> = if value.is_array() {
            serde_json::from_value(value)?
        } else {
            vec![serde_json::from_value(value)?]
        };

        wires
            .into_iter()
            .try_fold(Self::new(), |parser, wire| parser.with_wire(wire))
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Registered documents in registration order
    pub fn documents(&self) -> impl Iterator<Item = (&str, &Document)> {
        self.documents.iter().map(|(text, doc)| (text.as_str(), doc))
    }
}

#[async_trait]
impl SentenceParser for FixtureParser {
    async fn parse(&self, text: &str) -> Result<Document> {
        self.find(text)
            .or_else(|| self.find(text.trim()))
            .cloned()
            .ok_or_else(|| LingoError::ParserError(format!("no fixture parse for {text:?}")))
    }

    fn model(&self) -> &str {
        "fixture"
    }
}
