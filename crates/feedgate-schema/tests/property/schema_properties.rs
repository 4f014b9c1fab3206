use feedgate_schema::parse_generated_post;
use proptest::prelude::*;
use serde_json::json;

proptest! {
    #[test]
    fn title_accepted_iff_trimmed_length_in_bounds(title in "[ a-zA-Z]{0,120}") {
        let raw = json!({
            "title": title,
            "body": "A body that is comfortably longer than forty characters in total.",
            "post_type": "trivia",
            "tags": ["facts"],
            "confidence": "medium"
        });
        let len = title.trim().chars().count();
        let accepted = parse_generated_post(&raw).is_ok();
        prop_assert_eq!(accepted, (6..=100).contains(&len));
    }

    #[test]
    fn parsed_tags_are_trimmed_and_bounded(tags in prop::collection::vec(" ?[a-z]{2,24} ?", 1..=6)) {
        let raw = json!({
            "title": "Tagged Post",
            "body": "A body that is comfortably longer than forty characters in total.",
            "post_type": "trivia",
            "tags": tags,
            "confidence": "high"
        });
        let post = parse_generated_post(&raw).unwrap();
        prop_assert_eq!(post.tags.len(), tags.len());
        for tag in &post.tags {
            prop_assert_eq!(tag.trim(), tag.as_str());
            prop_assert!((2..=24).contains(&tag.chars().count()));
        }
    }

    #[test]
    fn never_panics_on_arbitrary_json(s in ".{0,200}") {
        let _ = feedgate_schema::parse_generated_post_str(&s);
    }
}
