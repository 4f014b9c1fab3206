//! Biography posts read as a mini-story: a concrete high-stakes hook, a
//! turn, a consequence beat, and a separate closing insight.

use feedgate_core::constants::*;
use feedgate_core::{CandidatePost, CheckId, FeedMode};

use crate::modes::ModeRules;
use crate::patterns::narrative::*;
use crate::report::Report;
use crate::text::{count_words, TextProfile};

/// Narrative rules for [`FeedMode::Biography`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BiographyRules;

impl ModeRules for BiographyRules {
    fn mode(&self) -> FeedMode {
        FeedMode::Biography
    }

    fn name(&self) -> &'static str {
        "biography"
    }

    fn check(&self, post: &CandidatePost, text: &TextProfile<'_>, report: &mut Report) {
        let body = text.body();
        let title_and_body = format!("{}\n{}", post.title, body);

        if SPECULATION_RE.is_match(&title_and_body) {
            report.fail(
                CheckId::Speculation,
                "Biography posts must not use speculative language (probably, maybe, might have, could have, perhaps, possibly).",
            );
        }

        if has_invented_dialogue(body) {
            report.fail(
                CheckId::Dialogue,
                "Biography posts must not invent dialogue, transcripts, or attributed quotes.",
            );
        }

        check_opening(text, report);

        if text.sentence_count() < MIN_STORY_SENTENCES {
            report.fail(
                CheckId::MiniStory,
                format!(
                    "Biography post should read like a mini-story with at least {MIN_STORY_SENTENCES} sentences."
                ),
            );
        }

        if !PROGRESSION_RE.is_match(&text.opening(PROGRESSION_WINDOW_WORDS)) {
            report.fail(
                CheckId::Progression,
                format!(
                    "Biography post needs story progression (a cause, turn, or contrast) in the first {PROGRESSION_WINDOW_WORDS} words."
                ),
            );
        }

        if !CONSEQUENCE_RE.is_match(body) {
            report.fail(
                CheckId::Consequence,
                "Biography post must include a consequence beat (e.g. \"That meant...\" or \"As a result...\").",
            );
        }

        let average = text.average_words_per_sentence();
        if average > MAX_AVG_WORDS_PER_SENTENCE {
            report.fail(
                CheckId::Density,
                format!(
                    "Biography post is too dense: {average:.1} words per sentence on average (max {MAX_AVG_WORDS_PER_SENTENCE})."
                ),
            );
        }

        if !EMOTIONAL_RE.is_match(body) {
            report.fail(
                CheckId::EmotionalStakes,
                "Biography post feels emotionally flat; show the pressure, risk, or near-miss.",
            );
        }

        if LABELED_INSIGHT_RE.is_match(body) {
            report.fail(
                CheckId::LabeledInsight,
                "Biography post must not label its insight with \"Lesson:\" or \"Takeaway:\".",
            );
        }

        check_closing(text, report);
    }
}

/// Generic opener, then hook strength, then high stakes. Only the first
/// failure is reported.
fn check_opening(text: &TextProfile<'_>, report: &mut Report) {
    if GENERIC_OPENING_RE.is_match(text.body()) {
        report.fail(
            CheckId::GenericOpening,
            "Biography opening is too generic; lead with the moment, not the reputation.",
        );
    } else if !HOOK_RE.is_match(&text.opening(HOOK_WINDOW_WORDS)) {
        report.fail(
            CheckId::WeakHook,
            format!(
                "Biography opening needs a stronger hook (a year, dollar figure, percentage, or stakes) in the first {HOOK_WINDOW_WORDS} words."
            ),
        );
    } else if !HIGH_STAKES_RE.is_match(&text.opening(HIGH_STAKES_WINDOW_WORDS)) {
        report.fail(
            CheckId::LowStakesOpening,
            format!(
                "Biography opening must surface a high-stakes moment in the first {HIGH_STAKES_WINDOW_WORDS} words."
            ),
        );
    }
}

/// The last line is a separate insight, not the consequence beat itself.
fn check_closing(text: &TextProfile<'_>, report: &mut Report) {
    let closing = text.closing_line().unwrap_or("");

    if CONSEQUENCE_CLOSER_RE.is_match(closing) {
        report.fail(
            CheckId::ClosingShape,
            "Biography post must end with a separate insight line after the consequence beat.",
        );
    }

    let words = count_words(closing);
    if !(CLOSING_LINE_MIN_WORDS..=CLOSING_LINE_MAX_WORDS).contains(&words) {
        report.fail(
            CheckId::ClosingLength,
            format!(
                "Biography closing insight line must be {CLOSING_LINE_MIN_WORDS}-{CLOSING_LINE_MAX_WORDS} words. Got {words}."
            ),
        );
    }
}
