//! Word range, tag bounds, and the low-confidence note pairing.

use feedgate_core::config::LengthProfile;
use feedgate_core::constants::{TAGS_MAX, TAG_MAX_CHARS};
use feedgate_core::{CandidatePost, CheckId, Confidence};

use crate::report::Report;
use crate::text::TextProfile;

pub fn check(
    post: &CandidatePost,
    text: &TextProfile<'_>,
    profile: &LengthProfile,
    report: &mut Report,
) {
    let words = text.word_count();
    if !profile.contains_word_count(words) {
        report.fail(
            CheckId::WordCount,
            format!(
                "Body must be {}-{} words. Got {words}.",
                profile.min_words, profile.max_words
            ),
        );
    }

    // Schema parsing already bounds tags; posts built by hand may not be parsed.
    if post.tags.len() > TAGS_MAX {
        report.fail(
            CheckId::TagCount,
            format!("Use at most {TAGS_MAX} tags. Got {}.", post.tags.len()),
        );
    }

    if let Some(tag) = post
        .tags
        .iter()
        .find(|t| t.trim().chars().count() > TAG_MAX_CHARS)
    {
        report.fail(
            CheckId::TagLength,
            format!(
                "Tags must be {TAG_MAX_CHARS} characters or fewer (\"{}\" is too long).",
                tag.trim()
            ),
        );
    }

    if post.confidence == Confidence::Low && !post.has_uncertainty_note() {
        report.fail(
            CheckId::UncertaintyNote,
            "Low-confidence posts must include an uncertainty note.",
        );
    }
}
