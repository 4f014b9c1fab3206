use feedgate_core::config::*;
use feedgate_core::{FeedgateError, PostLength};

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = GateConfig::from_toml("").unwrap();

    assert!(config.validation.strict_by_default);

    let short = config.validation.lengths.profile(PostLength::Short);
    assert_eq!(short.min_words, 50);
    assert_eq!(short.max_words, 110);
    assert_eq!(short.max_sentences, 7);

    let medium = config.validation.lengths.profile(PostLength::Medium);
    assert_eq!(medium.min_words, 120);
    assert_eq!(medium.max_words, 220);
    assert_eq!(medium.max_sentences, 12);

    assert_eq!(config.observability.log_level, "info");
    assert_eq!(config.observability.log_env_var, "FEEDGATE_LOG");
    assert!(!config.observability.json_logs);
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[validation]
strict_by_default = false

[validation.lengths.short]
min_words = 40
max_words = 90
max_sentences = 6
"#;
    let config = GateConfig::from_toml(toml).unwrap();
    assert!(!config.validation.strict_by_default);
    assert_eq!(config.validation.lengths.short.min_words, 40);
    assert_eq!(config.validation.lengths.short.max_sentences, 6);
    // Non-overridden profile keeps defaults
    assert_eq!(config.validation.lengths.medium.min_words, 120);
    assert_eq!(config.observability.log_level, "info");
}

#[test]
fn config_serde_roundtrip() {
    let config = GateConfig::default();
    let toml_str = config.to_toml().unwrap();
    let roundtripped = GateConfig::from_toml(&toml_str).unwrap();
    assert_eq!(roundtripped, config);
}

#[test]
fn config_rejects_inverted_word_range() {
    let toml = r#"
[validation.lengths.medium]
min_words = 300
max_words = 200
max_sentences = 12
"#;
    let err = GateConfig::from_toml(toml).unwrap_err();
    assert!(matches!(err, FeedgateError::ConfigError(_)));
    assert!(err.to_string().contains("medium"));
}

#[test]
fn config_rejects_zero_sentence_budget() {
    let toml = r#"
[validation.lengths.short]
min_words = 50
max_words = 110
max_sentences = 0
"#;
    assert!(GateConfig::from_toml(toml).is_err());
}

#[test]
fn config_rejects_malformed_toml() {
    let err = GateConfig::from_toml("[validation\nstrict_by_default = ").unwrap_err();
    assert!(matches!(err, FeedgateError::ConfigError(_)));
}

#[test]
fn length_profile_bounds_are_inclusive() {
    let table = LengthTable::default();
    let short = table.profile(PostLength::Short);
    assert!(short.contains_word_count(50));
    assert!(short.contains_word_count(110));
    assert!(!short.contains_word_count(49));
    assert!(!short.contains_word_count(111));
}
