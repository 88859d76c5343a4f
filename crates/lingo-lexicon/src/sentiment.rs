//! Lexicon-based sentiment scoring
//!
//! The lexicon is a tab-separated file:
//!
//! ```text
//! # word  polarity  subjectivity  [intensity]
//! good    0.7       0.6
//! very    0.0       0.3           1.3
//! ```
//!
//! A text scores the average of its known words. A negator flips and halves
//! the next scored word. A word with zero polarity and an intensity other
//! than 1 scales the next scored word instead of being scored itself.

use std::collections::HashMap;
use std::path::Path;

use regex::Regex;
use tracing::info;

use lingo_core::{LingoError, Result, Sentiment, SentimentAnalyzer};

const NEGATORS: &[&str] = &["not", "never", "no", "nor", "without"];
const NEGATION_FACTOR: f64 = -0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LexiconEntry {
    pub polarity: f64,
    pub subjectivity: f64,
    pub intensity: f64,
}

impl LexiconEntry {
    pub fn new(polarity: f64, subjectivity: f64) -> Self {
        Self {
            polarity,
            subjectivity,
            intensity: 1.0,
        }
    }

    pub fn intensifier(intensity: f64) -> Self {
        Self {
            polarity: 0.0,
            subjectivity: 0.0,
            intensity,
        }
    }

    fn is_intensifier(&self) -> bool {
        self.polarity == 0.0 && self.intensity != 1.0
    }
}

/// Sentiment analyzer over a word lexicon
#[derive(Debug, Clone)]
pub struct LexiconSentiment {
    entries: HashMap<String, LexiconEntry>,
    word_pattern: Regex,
}

impl LexiconSentiment {
    pub fn from_entries(entries: impl IntoIterator<Item = (String, LexiconEntry)>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(word, entry)| (word.to_lowercase(), entry))
                .collect(),
            word_pattern: Regex::new(r"[\w']+").expect("valid word pattern"),
        }
    }

    pub fn from_tsv(content: &str) -> Result<Self> {
        let mut entries = Vec::new();

        for (number, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let fields: Vec<&str> = line.split('\t').map(str::trim).collect();
            if fields.len() < 3 {
                return Err(LingoError::LexiconError(format!(
                    "line {}: expected word, polarity and subjectivity",
                    number + 1
                )));
            }

            let number_at = |i: usize| -> Result<f64> {
                fields[i].parse::<f64>().map_err(|_| {
                    LingoError::LexiconError(format!(
                        "line {}: invalid number {:?}",
                        number + 1,
                        fields[i]
                    ))
                })
            };

            let entry = LexiconEntry {
                polarity: number_at(1)?,
                subjectivity: number_at(2)?,
                intensity: if fields.len() > 3 { number_at(3)? } else { 1.0 },
            };
            entries.push((fields[0].to_string(), entry));
        }

        Ok(Self::from_entries(entries))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            LingoError::LexiconError(format!("failed to read {}: {e}", path.display()))
        })?;
        let analyzer = Self::from_tsv(&content)?;
        info!(
            "Loaded {} sentiment entries from {}",
            analyzer.entries.len(),
            path.display()
        );
        Ok(analyzer)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn is_negator(word: &str) -> bool {
    NEGATORS.contains(&word) || word.ends_with("n't")
}

impl SentimentAnalyzer for LexiconSentiment {
    fn analyze(&self, text: &str) -> Sentiment {
        let mut scores: Vec<(f64, f64)> = Vec::new();
        let mut modifier = 1.0;
        let mut negated = false;

        for word in self.word_pattern.find_iter(text) {
            let word = word.as_str().to_lowercase();

            if is_negator(&word) {
                negated = true;
                continue;
            }

            match self.entries.get(&word) {
                Some(entry) if entry.is_intensifier() => {
                    modifier *= entry.intensity;
                }
                Some(entry) => {
                    let mut polarity = entry.polarity * modifier;
                    if negated {
                        polarity *= NEGATION_FACTOR;
                    }
                    let subjectivity = entry.subjectivity * modifier;
                    scores.push((polarity, subjectivity));
                    modifier = 1.0;
                    negated = false;
                }
                None => modifier = 1.0,
            }
        }

        if scores.is_empty() {
            return Sentiment::default();
        }

        let count = scores.len() as f64;
        let polarity = scores.iter().map(|(p, _)| p).sum::<f64>() / count;
        let subjectivity = scores.iter().map(|(_, s)| s).sum::<f64>() / count;

        Sentiment::new(polarity.clamp(-1.0, 1.0), subjectivity.clamp(0.0, 1.0))
    }
}
