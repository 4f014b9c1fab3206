use feedgate_core::{CandidatePost, Confidence, FeedMode, PostLength, ValidationOptions};
use feedgate_validation::{validate_post_content, TextProfile};
use proptest::prelude::*;

fn post_with(body: String, tags: Vec<String>, confidence: Confidence) -> CandidatePost {
    CandidatePost {
        title: "Property Title".into(),
        body,
        post_type: "trivia".into(),
        tags,
        confidence,
        uncertainty_note: None,
    }
}

fn any_mode() -> impl Strategy<Value = FeedMode> {
    prop::sample::select(FeedMode::ALL.to_vec())
}

fn any_length() -> impl Strategy<Value = PostLength> {
    prop::sample::select(PostLength::ALL.to_vec())
}

proptest! {
    #[test]
    fn verdict_ok_iff_no_errors(
        body in "[A-Za-z0-9 ,.!?\n$%:\"]{0,600}",
        mode in any_mode(),
        length in any_length(),
        strict in any::<bool>(),
    ) {
        let post = post_with(body, vec!["tag".into()], Confidence::High);
        let verdict = validate_post_content(&post, mode, length, ValidationOptions { strict });
        prop_assert_eq!(verdict.ok(), verdict.errors().is_empty());
    }

    #[test]
    fn validation_is_deterministic(
        body in "[A-Za-z ,.\n]{0,400}",
        mode in any_mode(),
        length in any_length(),
    ) {
        let post = post_with(body, vec!["tag".into()], Confidence::Medium);
        let a = validate_post_content(&post, mode, length, ValidationOptions::strict());
        let b = validate_post_content(&post, mode, length, ValidationOptions::strict());
        prop_assert_eq!(a, b);
    }

    #[test]
    fn word_count_error_names_the_configured_range(words in 0usize..300, length in any_length()) {
        let body = vec!["word"; words].join(" ");
        let post = post_with(body, vec!["tag".into()], Confidence::High);
        let verdict = validate_post_content(&post, FeedMode::Trivia, length, ValidationOptions::lenient());
        let (min, max) = match length {
            PostLength::Short => (50, 110),
            PostLength::Medium => (120, 220),
        };
        let in_range = (min..=max).contains(&words);
        prop_assert_eq!(verdict.ok(), in_range);
        if !in_range {
            let expected = format!("Body must be {min}-{max} words. Got {words}.");
            prop_assert_eq!(verdict.errors(), &[expected][..]);
        }
    }

    #[test]
    fn lenient_errors_are_a_subset_of_strict(
        body in "[A-Za-z ,.!?\n]{0,500}",
        mode in any_mode(),
        length in any_length(),
    ) {
        let post = post_with(body, vec!["tag".into()], Confidence::High);
        let lenient = validate_post_content(&post, mode, length, ValidationOptions::lenient());
        let strict = validate_post_content(&post, mode, length, ValidationOptions::strict());
        for e in lenient.errors() {
            prop_assert!(strict.errors().contains(e), "{} missing from strict run", e);
        }
    }

    #[test]
    fn tag_count_over_six_always_fails(extra in 1usize..10) {
        let tags = (0..6 + extra).map(|i| format!("t{i}")).collect();
        let post = post_with(vec!["word"; 60].join(" "), tags, Confidence::High);
        let verdict = validate_post_content(&post, FeedMode::Trivia, PostLength::Short, ValidationOptions::lenient());
        prop_assert!(verdict.mentions("at most 6 tags"));
    }

    #[test]
    fn low_confidence_without_note_always_fails(mode in any_mode(), strict in any::<bool>()) {
        let post = post_with(vec!["word"; 60].join(" "), vec!["tag".into()], Confidence::Low);
        let verdict = validate_post_content(&post, mode, PostLength::Short, ValidationOptions { strict });
        prop_assert!(verdict.mentions("uncertainty note"));
    }

    #[test]
    fn sentence_count_never_exceeds_terminators_plus_one(body in "[a-z .!?]{0,300}") {
        let profile = TextProfile::new(&body);
        let terminators = body.chars().filter(|c| matches!(c, '.' | '!' | '?')).count();
        prop_assert!(profile.sentence_count() <= terminators + 1);
        prop_assert!(profile.longest_sentence_words() <= profile.word_count());
    }
}
