use feedgate_core::{Confidence, FeedMode, FeedgateError, PostLength, Verdict};
use proptest::prelude::*;

proptest! {
    #[test]
    fn feed_mode_display_parses_back_in_any_case(
        mode in prop::sample::select(FeedMode::ALL.to_vec()),
        lower in any::<bool>(),
        pad in " {0,3}",
    ) {
        let shown = mode.to_string();
        let input = if lower { shown.to_lowercase() } else { shown };
        prop_assert_eq!(format!("{pad}{input}{pad}").parse::<FeedMode>().unwrap(), mode);
    }

    #[test]
    fn post_length_display_parses_back(length in prop::sample::select(PostLength::ALL.to_vec())) {
        prop_assert_eq!(length.to_string().parse::<PostLength>().unwrap(), length);
    }

    #[test]
    fn confidence_display_parses_back(confidence in prop::sample::select(Confidence::ALL.to_vec())) {
        prop_assert_eq!(confidence.to_string().parse::<Confidence>().unwrap(), confidence);
    }

    #[test]
    fn unknown_words_are_rejected_with_input(s in "[a-z]{1,12}") {
        prop_assume!(!["high", "medium", "low"].contains(&s.as_str()));
        match s.parse::<Confidence>() {
            Err(FeedgateError::UnknownConfidence { confidence }) => prop_assert_eq!(confidence, s),
            other => prop_assert!(false, "unexpected {:?}", other),
        }
    }

    #[test]
    fn verdict_ok_iff_no_errors(errors in prop::collection::vec("[a-z ]{1,20}", 0..5)) {
        let verdict = Verdict::from_errors(errors.clone());
        prop_assert_eq!(verdict.ok(), errors.is_empty());
        let back: Verdict = serde_json::from_value(serde_json::to_value(&verdict).unwrap()).unwrap();
        prop_assert_eq!(back, verdict);
    }
}
