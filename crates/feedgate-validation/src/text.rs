//! Shared tokenization of a post body.
//!
//! Every check reads words, sentences and the closing line from one
//! [`TextProfile`] so they all agree on how the body was split.

use std::collections::HashSet;

/// Words, sentences, and closing line of a trimmed body.
#[derive(Debug, Clone)]
pub struct TextProfile<'a> {
    body: &'a str,
    words: Vec<&'a str>,
    sentences: Vec<&'a str>,
    closing_line: Option<&'a str>,
}

impl<'a> TextProfile<'a> {
    pub fn new(body: &'a str) -> Self {
        let body = body.trim();
        Self {
            body,
            words: body.split_whitespace().collect(),
            sentences: split_sentences(body),
            closing_line: last_non_empty_line(body),
        }
    }

    pub fn body(&self) -> &'a str {
        self.body
    }

    pub fn words(&self) -> &[&'a str] {
        &self.words
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn sentences(&self) -> &[&'a str] {
        &self.sentences
    }

    pub fn sentence_count(&self) -> usize {
        self.sentences.len()
    }

    /// Word count of the longest sentence, 0 when there are none.
    pub fn longest_sentence_words(&self) -> usize {
        self.sentences
            .iter()
            .map(|s| count_words(s))
            .max()
            .unwrap_or(0)
    }

    /// Body words divided by sentence count. A body with no sentence
    /// terminators still counts as one sentence.
    pub fn average_words_per_sentence(&self) -> f64 {
        self.word_count() as f64 / self.sentence_count().max(1) as f64
    }

    /// The first `n` words joined by single spaces.
    pub fn opening(&self, n: usize) -> String {
        self.words
            .iter()
            .take(n)
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Last non-empty line, trimmed.
    pub fn closing_line(&self) -> Option<&'a str> {
        self.closing_line
    }

    /// Whether two sentences normalize to the same text.
    pub fn has_duplicate_sentence(&self) -> bool {
        let mut seen = HashSet::new();
        self.sentences
            .iter()
            .map(|s| normalize_sentence(s))
            .filter(|s| !s.is_empty())
            .any(|s| !seen.insert(s))
    }
}

/// Whitespace-run tokenization.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Split on runs of `.`, `!` and `?`, trimming and dropping empty pieces.
pub fn split_sentences(text: &str) -> Vec<&str> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Lowercase, strip everything but alphanumerics and whitespace, collapse
/// whitespace runs.
pub fn normalize_sentence(sentence: &str) -> String {
    let kept: String = sentence
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect();
    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub fn last_non_empty_line(text: &str) -> Option<&str> {
    text.lines().rev().map(str::trim).find(|l| !l.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentences_split_on_terminator_runs() {
        let got = split_sentences("One. Two!! Three?! ... Four");
        assert_eq!(got, vec!["One", "Two", "Three", "Four"]);
    }

    #[test]
    fn decimal_points_split_sentences() {
        // Tokenization is deliberately naive: "$1.2" breaks a sentence.
        assert_eq!(split_sentences("It cost $1.2 billion.").len(), 2);
    }

    #[test]
    fn normalization_ignores_case_and_punctuation() {
        assert_eq!(
            normalize_sentence("  The  DEAL, closed; "),
            normalize_sentence("the deal closed")
        );
    }

    #[test]
    fn duplicate_detection_uses_normalized_form() {
        let profile = TextProfile::new("The deal closed. Nobody slept. THE DEAL, CLOSED!");
        assert!(profile.has_duplicate_sentence());
        let profile = TextProfile::new("The deal closed. Nobody slept. The deal stalled.");
        assert!(!profile.has_duplicate_sentence());
    }

    #[test]
    fn closing_line_skips_trailing_blank_lines() {
        let profile = TextProfile::new("First line.\n\n  Last line here.  \n\n   \n");
        assert_eq!(profile.closing_line(), Some("Last line here."));
    }

    #[test]
    fn opening_takes_first_n_words() {
        let profile = TextProfile::new("a  b\tc\nd e");
        assert_eq!(profile.opening(3), "a b c");
        assert_eq!(profile.opening(99), "a b c d e");
    }

    #[test]
    fn average_handles_missing_terminators() {
        let profile = TextProfile::new("no terminators at all here");
        assert_eq!(profile.sentence_count(), 1);
        assert_eq!(profile.average_words_per_sentence(), 5.0);
        let empty = TextProfile::new("   ");
        assert_eq!(empty.average_words_per_sentence(), 0.0);
    }
}
