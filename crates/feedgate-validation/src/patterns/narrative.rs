//! Biography narrative detectors.

use super::{pattern, NamedPattern};

pattern!(
    /// Hedging markers that signal invented detail.
    SPECULATION_RE,
    r"(?i)\b(?:probably|maybe|might have|could have|perhaps|possibly)\b"
);

pattern!(
    /// Transcript cue: two or three proper-case words, a colon, a space,
    /// at the start of a line. Single labels like `Result:` do not match.
    DIALOGUE_CUE_RE,
    r"(?m)^[ \t]*[A-Z][a-z]+(?:[ \t]+[A-Z][a-z]+){1,2}:[ \t]"
);

pattern!(
    /// A quote followed by an attribution verb.
    QUOTE_THEN_SPEAKER_RE,
    r#"(?i)["“][^"“”\n]+["”],?\s+(?:[a-z]+\s+){0,2}(?:said|asked|replied|told|emailed|wrote)\b"#
);

pattern!(
    /// An attribution verb followed by a quote.
    SPEAKER_THEN_QUOTE_RE,
    r#"(?i)\b(?:said|asked|replied|told|emailed|wrote)\b[,:]?\s+["“]"#
);

pattern!(
    /// Bland "<Name> is/was widely known" opener.
    GENERIC_OPENING_RE,
    r"^[A-Z][A-Za-z.'-]*(?:\s+[A-Z][A-Za-z.'-]*){0,3}\s+(?:is|was)\s+widely\s+known\b"
);

pattern!(
    /// Concrete hook: year, money, percentage, scale, or a stakes/contrast word.
    HOOK_RE,
    r"(?i)\b(?:1[0-9]{3}|20[0-9]{2})\b|\$\s?\d|\d(?:\.\d+)?\s?(?:%|percent\b)|\b(?:million|billion|deadline|cliff|crisis|near-miss|pivot|bet|turning point|reversal|tradeoff|constraint|however|but|yet|while|instead)\b"
);

pattern!(
    /// Crisis vocabulary or a large concrete figure.
    HIGH_STAKES_RE,
    r"(?i)\b(?:collapse[ds]?|collapsing|bankrupt|bankruptcy|insolvent|insolvency|crisis|lawsuits?|sued|regulators?|investigations?|indicted|fraud|scandal|recall|layoffs?|fired|ousted|default(?:ed)?|debt|near-death|shutdown|crash(?:ed)?)\b|\$\s?\d[\d,.]*\s*(?:million|billion|trillion|mn|bn|m|b)\b|\$\s?\d{1,3}(?:,\d{3})+|\b\d[\d,.]*\s*(?:million|billion|trillion)\b|\b\d{1,3}(?:,\d{3})+\b|\d(?:\.\d+)?\s?(?:%|percent\b)"
);

pattern!(
    /// Causal or contrastive connective that moves a story forward.
    PROGRESSION_RE,
    r"(?i)\b(?:because|which forced|forcing|so|then|after|until|yet|but|however|instead|as a result|while|when|which led to|so that)\b"
);

pattern!(
    /// Consequence beat.
    CONSEQUENCE_RE,
    r"(?i)\b(?:it mattered|which changed|as a result|this (?:reset|reshaped|rewired)|that shift|the consequence|the result|that meant|it meant|which meant|it set (?:up|the stage)|it opened the door|it locked in)\b|\bresult:"
);

pattern!(
    /// Emotional or pressure vocabulary.
    EMOTIONAL_RE,
    r"(?i)\b(?:almost|nearly|panic|collapse|survive|survival|shock|crash|scramble|desperate|forced|risk|pressure|lawsuit|deadline|backlash|fallout|humiliation|all-in|last-minute|brutal|threatened)\b"
);

pattern!(
    /// Explicit "Lesson:" / "Takeaway:" labels.
    LABELED_INSIGHT_RE,
    r"(?i)\b(?:lesson|takeaway)s?\s*:"
);

pattern!(
    /// Closing line that is itself the consequence beat.
    CONSEQUENCE_CLOSER_RE,
    r"(?i)^(?:that|it) meant\b"
);

pub fn all_patterns() -> Vec<NamedPattern> {
    vec![
        NamedPattern { name: "speculation", regex: &SPECULATION_RE },
        NamedPattern { name: "dialogue_cue", regex: &DIALOGUE_CUE_RE },
        NamedPattern { name: "quote_then_speaker", regex: &QUOTE_THEN_SPEAKER_RE },
        NamedPattern { name: "speaker_then_quote", regex: &SPEAKER_THEN_QUOTE_RE },
        NamedPattern { name: "generic_opening", regex: &GENERIC_OPENING_RE },
        NamedPattern { name: "hook", regex: &HOOK_RE },
        NamedPattern { name: "high_stakes", regex: &HIGH_STAKES_RE },
        NamedPattern { name: "progression", regex: &PROGRESSION_RE },
        NamedPattern { name: "consequence", regex: &CONSEQUENCE_RE },
        NamedPattern { name: "emotional", regex: &EMOTIONAL_RE },
        NamedPattern { name: "labeled_insight", regex: &LABELED_INSIGHT_RE },
        NamedPattern { name: "consequence_closer", regex: &CONSEQUENCE_CLOSER_RE },
    ]
}

/// Invented dialogue: a transcript cue or an attributed quote.
pub fn has_invented_dialogue(body: &str) -> bool {
    DIALOGUE_CUE_RE.is_match(body)
        || QUOTE_THEN_SPEAKER_RE.is_match(body)
        || SPEAKER_THEN_QUOTE_RE.is_match(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speculation_needs_whole_words() {
        assert!(SPECULATION_RE.is_match("He might have known."));
        assert!(SPECULATION_RE.is_match("Probably the best year."));
        assert!(!SPECULATION_RE.is_match("Mighty haves and have-nots."));
        assert!(!SPECULATION_RE.is_match("The maybelline account."));
    }

    #[test]
    fn dialogue_cue_requires_a_name_shaped_prefix() {
        assert!(has_invented_dialogue("Intro line.\nSteve Jobs: we ship tonight."));
        assert!(has_invented_dialogue("Mary Ann Smith: no deal."));
        assert!(!has_invented_dialogue(
            "Intro line.\nResult: the company bought time and stabilized."
        ));
        assert!(!has_invented_dialogue("Intro line.\nSteve Jobs:no space after colon."));
    }

    #[test]
    fn two_word_labels_read_as_transcript_cues() {
        // The cue only looks at shape, so a title-cased label is indistinguishable
        // from a speaker name.
        assert!(has_invented_dialogue("Intro.\nBottom Line: they survived."));
        assert!(!has_invented_dialogue("Intro.\nBottom line: they survived."));
    }

    #[test]
    fn attributed_quotes_fire_in_either_order() {
        assert!(has_invented_dialogue(r#""We are out of cash," she said."#));
        assert!(has_invented_dialogue(r#"He replied, "Ship it anyway.""#));
        assert!(has_invented_dialogue("“Not today” he wrote back."));
        assert!(!has_invented_dialogue(r#"The memo was titled "Plan B" and went nowhere."#));
    }

    #[test]
    fn generic_opening_anchors_at_start() {
        assert!(GENERIC_OPENING_RE.is_match("Steve Jobs is widely known for the iPhone."));
        assert!(GENERIC_OPENING_RE.is_match("Marie Curie was widely known as a pioneer."));
        assert!(!GENERIC_OPENING_RE.is_match("In 1997 Steve Jobs was widely known as a has-been."));
    }

    #[test]
    fn hook_accepts_each_signal_family() {
        for text in [
            "In 1985 he left",
            "a $40 check",
            "sales fell 30% overnight",
            "a million users",
            "the deadline loomed",
            "a turning point arrived",
            "he chose instead to wait",
        ] {
            assert!(HOOK_RE.is_match(text), "expected hook in {text:?}");
        }
        assert!(!HOOK_RE.is_match("He liked gardens and long walks"));
    }

    #[test]
    fn high_stakes_wants_crisis_or_large_figures() {
        assert!(HIGH_STAKES_RE.is_match("the company faced bankruptcy"));
        assert!(HIGH_STAKES_RE.is_match("a $2 billion hole"));
        assert!(HIGH_STAKES_RE.is_match("owed $400,000 to suppliers"));
        assert!(HIGH_STAKES_RE.is_match("regulators opened an investigation"));
        assert!(!HIGH_STAKES_RE.is_match("in 1985 he paid $40 for a desk"));
    }

    #[test]
    fn consequence_markers() {
        assert!(CONSEQUENCE_RE.is_match("That meant every store closed."));
        assert!(CONSEQUENCE_RE.is_match("Result: the company bought time."));
        assert!(CONSEQUENCE_RE.is_match("It set the stage for a comeback."));
        assert!(!CONSEQUENCE_RE.is_match("The results were mixed."));
    }

    #[test]
    fn emotional_lexicon_and_labels() {
        assert!(EMOTIONAL_RE.is_match("a last-minute rescue"));
        assert!(EMOTIONAL_RE.is_match("they nearly quit"));
        assert!(!EMOTIONAL_RE.is_match("a calm, steady quarter"));
        for inflected in ["risky", "scrambled", "panicked", "survived", "deadlines"] {
            assert!(!EMOTIONAL_RE.is_match(inflected), "{inflected}");
        }
        for listed in ["risk", "scramble", "panic", "survival", "deadline", "all-in"] {
            assert!(EMOTIONAL_RE.is_match(listed), "{listed}");
        }
        assert!(LABELED_INSIGHT_RE.is_match("Lesson: ship early."));
        assert!(LABELED_INSIGHT_RE.is_match("Key takeaway : focus."));
    }

    #[test]
    fn closer_detects_meant_openers_only() {
        assert!(CONSEQUENCE_CLOSER_RE.is_match("That meant the factory stayed open."));
        assert!(CONSEQUENCE_CLOSER_RE.is_match("it meant nothing"));
        assert!(!CONSEQUENCE_CLOSER_RE.is_match("Nobody knew what that meant."));
    }
}
