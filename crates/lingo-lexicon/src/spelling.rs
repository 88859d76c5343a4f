//! Frequency-dictionary spelling correction
//!
//! Each word is kept when the dictionary knows it. Otherwise it is replaced by
//! the most frequent known word one edit away, then two edits away. Words
//! with no known candidate are kept as typed.
//!
//! Candidate generation grows with word length, so long words get fewer
//! passes: two edits up to [`MAX_SECOND_EDIT_CHARS`], one edit up to
//! [`MAX_CORRECTION_CHARS`], and none beyond.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use regex::Regex;
use tracing::info;

use lingo_core::{LingoError, Result, SpellChecker};

const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// Longest word that is searched two edits away
pub const MAX_SECOND_EDIT_CHARS: usize = 12;

/// Longest word that is corrected at all
pub const MAX_CORRECTION_CHARS: usize = 40;

/// Spelling corrector backed by word counts
#[derive(Debug, Clone)]
pub struct FrequencySpeller {
    counts: HashMap<String, u64>,
    word_pattern: Regex,
}

impl FrequencySpeller {
    pub fn new(counts: HashMap<String, u64>) -> Self {
        let counts = counts
            .into_iter()
            .map(|(word, count)| (word.to_lowercase(), count))
            .collect();
        Self {
            counts,
            word_pattern: Regex::new(r"\w+").expect("valid word pattern"),
        }
    }

    /// Parse a frequency list: one `word count` pair per line
    ///
    /// A line with only a word counts once. Blank lines and lines starting
    /// with `#` are skipped.
    pub fn from_frequency_list(content: &str) -> Result<Self> {
        let mut counts: HashMap<String, u64> = HashMap::new();

        for (number, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let mut fields = line.split_whitespace();
            let word = fields.next().unwrap_or_default();
            let count = match fields.next() {
                Some(count) => count.parse::<u64>().map_err(|_| {
                    LingoError::LexiconError(format!(
                        "line {}: invalid count {count:?} for {word:?}",
                        number + 1
                    ))
                })?,
                None => 1,
            };
            *counts.entry(word.to_lowercase()).or_default() += count;
        }

        Ok(Self::new(counts))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            LingoError::LexiconError(format!("failed to read {}: {e}", path.display()))
        })?;
        let speller = Self::from_frequency_list(&content)?;
        info!("Loaded {} spelling entries from {}", speller.len(), path.display());
        Ok(speller)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    fn is_known(&self, word: &str) -> bool {
        self.counts.contains_key(word)
    }

    /// Most frequent known word among `candidates`; ties go to the later word
    /// in alphabetical order
    fn best<'a>(&self, candidates: impl Iterator<Item = &'a String>) -> Option<&'a String> {
        candidates
            .filter_map(|c| self.counts.get(c).map(|&count| (count, c)))
            .max()
            .map(|(_, c)| c)
    }

    /// Correct a single lowercase word
    fn correct_word(&self, word: &str) -> Option<String> {
        let length = word.chars().count();
        if length <= 1 || length > MAX_CORRECTION_CHARS || self.is_known(word) {
            return None;
        }
        if word.chars().any(|c| c.is_ascii_digit()) {
            return None;
        }

        let first = edits1(word);
        if let Some(best) = self.best(first.iter()) {
            return Some(best.clone());
        }
        if length > MAX_SECOND_EDIT_CHARS {
            return None;
        }

        let second: HashSet<String> = first
            .iter()
            .flat_map(|e| edits1(e))
            .filter(|e| self.is_known(e))
            .collect();
        self.best(second.iter()).cloned()
    }
}

/// Every string one delete, transpose, replace or insert away
fn edits1(word: &str) -> HashSet<String> {
    let chars: Vec<char> = word.chars().collect();
    let mut edits = HashSet::new();

    for i in 0..=chars.len() {
        let (left, right) = chars.split_at(i);
        let left: String = left.iter().collect();

        if !right.is_empty() {
            edits.insert(format!("{left}{}", right[1..].iter().collect::<String>()));
        }
        if right.len() > 1 {
            edits.insert(format!(
                "{left}{}{}{}",
                right[1],
                right[0],
                right[2..].iter().collect::<String>()
            ));
        }
        for c in ALPHABET.chars() {
            if !right.is_empty() {
                edits.insert(format!("{left}{c}{}", right[1..].iter().collect::<String>()));
            }
            edits.insert(format!("{left}{c}{}", right.iter().collect::<String>()));
        }
    }

    edits
}

/// Re-apply the capitalisation of `original` to `corrected`
fn match_case(original: &str, corrected: &str) -> String {
    let mut chars = original.chars();
    let first_upper = chars.next().is_some_and(char::is_uppercase);
    let rest: Vec<char> = chars.collect();

    if first_upper && !rest.is_empty() && rest.iter().all(|c| c.is_uppercase()) {
        return corrected.to_uppercase();
    }
    if first_upper && rest.iter().all(|c| !c.is_uppercase()) {
        let mut out = corrected.chars();
        return match out.next() {
            Some(c) => c.to_uppercase().chain(out).collect(),
            None => String::new(),
        };
    }
    corrected.to_string()
}

impl SpellChecker for FrequencySpeller {
    fn correct(&self, text: &str) -> String {
        let mut corrected = String::with_capacity(text.len());
        let mut last = 0;

        for word in self.word_pattern.find_iter(text) {
            corrected.push_str(&text[last..word.start()]);
            let original = word.as_str();
            match self.correct_word(&original.to_lowercase()) {
                Some(replacement) => corrected.push_str(&match_case(original, &replacement)),
                None => corrected.push_str(original),
            }
            last = word.end();
        }
        corrected.push_str(&text[last..]);

        corrected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORDS: &str = "
# word count
the 500
is 300
sky 40
blue 30
spelling 12
speling 0
hello 25
world 20
help 22
";

    fn speller() -> FrequencySpeller {
        FrequencySpeller::from_frequency_list(WORDS).unwrap()
    }

    #[test]
    fn test_correct_sentence_unchanged() {
        let s = speller();
        assert_eq!(s.correct("the sky is blue"), "the sky is blue");
    }

    #[test]
    fn test_single_edit() {
        let s = speller();
        assert_eq!(s.correct("teh sky is bleu"), "the sky is blue");
    }

    #[test]
    fn test_two_edits() {
        let s = speller();
        assert_eq!(s.correct("hellllo"), "hello");
        assert_eq!(s.correct("wrld"), "world");
        assert_eq!(s.correct("hlelo"), "hello");
    }

    #[test]
    fn test_preserves_case_and_punctuation() {
        let s = speller();
        assert_eq!(s.correct("Teh SKY, is bleu!"), "The SKY, is blue!");
        assert_eq!(s.correct("HELO world"), "HELLO world");
    }

    #[test]
    fn test_unknown_words_and_digits_kept() {
        let s = speller();
        assert_eq!(s.correct("qqqqqqq"), "qqqqqqq");
        assert_eq!(s.correct("b4 x"), "b4 x");
    }

    #[test]
    fn test_known_zero_count_word_kept() {
        let s = speller();
        assert_eq!(s.correct("speling"), "speling");
    }

    #[test]
    fn test_invalid_count() {
        let err = FrequencySpeller::from_frequency_list("the many").unwrap_err();
        assert!(matches!(err, LingoError::LexiconError(_)));
    }

    #[test]
    fn test_long_words_bounded() {
        let s = FrequencySpeller::from_frequency_list(
            "the 5\nsky 4\nresponsibilities 3\nantidisestablishmentarianism 2\n",
        )
        .unwrap();

        let long = "q".repeat(400);
        let started = std::time::Instant::now();
        assert_eq!(s.correct(&long), long);
        assert_eq!(s.correct(&"q".repeat(30)), "q".repeat(30));
        assert!(started.elapsed() < std::time::Duration::from_secs(2));

        // One edit is still tried past the two-edit limit
        assert_eq!(
            s.correct("antidisestablishmentarianims"),
            "antidisestablishmentarianism"
        );
        // Two edits are not
        assert_eq!(s.correct("respnsibilites"), "respnsibilites");
    }

    #[test]
    fn test_edits1_contains_all_kinds() {
        let edits = edits1("ab");
        assert!(edits.contains("b"));
        assert!(edits.contains("ba"));
        assert!(edits.contains("cb"));
        assert!(edits.contains("abc"));
    }
}
