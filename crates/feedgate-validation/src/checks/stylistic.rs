//! Filler phrasing, sentence length and budget, repetition.

use feedgate_core::config::LengthProfile;
use feedgate_core::constants::MAX_WORDS_PER_SENTENCE;
use feedgate_core::{CheckId, PostLength};

use crate::patterns::style::FILLER_RE;
use crate::report::Report;
use crate::text::TextProfile;

pub fn check(
    text: &TextProfile<'_>,
    length: PostLength,
    profile: &LengthProfile,
    report: &mut Report,
) {
    if FILLER_RE.is_match(text.body()) {
        report.fail(
            CheckId::Filler,
            "Body contains filler phrasing; cut it and state the fact directly.",
        );
    }

    let longest = text.longest_sentence_words();
    if longest > MAX_WORDS_PER_SENTENCE {
        report.fail(
            CheckId::SentenceLength,
            format!(
                "Sentences must be {MAX_WORDS_PER_SENTENCE} words or fewer. Longest has {longest}."
            ),
        );
    }

    let sentences = text.sentence_count();
    if sentences > profile.max_sentences {
        report.fail(
            CheckId::SentenceBudget,
            format!(
                "{} posts must use at most {} sentences. Got {sentences}.",
                length.label(),
                profile.max_sentences
            ),
        );
    }

    if text.has_duplicate_sentence() {
        report.fail(CheckId::DuplicateSentence, "Body repeats the same sentence.");
    }
}
