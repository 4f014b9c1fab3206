//! `ContentValidator` runs the structural, stylistic, and per-mode
//! narrative stages and folds their findings into a verdict.

use std::sync::LazyLock;

use feedgate_core::config::{GateConfig, ValidationConfig};
use feedgate_core::traits::IContentValidator;
use feedgate_core::{CandidatePost, FeedMode, PostLength, ValidationOptions, Verdict};

use crate::checks::{structural, stylistic};
use crate::events;
use crate::modes::RuleRegistry;
use crate::report::Report;
use crate::text::TextProfile;

/// Validator with default config and built-in rule sets.
static DEFAULT_VALIDATOR: LazyLock<ContentValidator> =
    LazyLock::new(|| ContentValidator::new(ValidationConfig::default()));

/// Validate with the default configuration and built-in rule sets.
///
/// Assumes `post` already passed schema parsing. Never fails: every
/// problem is an entry in the returned verdict.
pub fn validate_post_content(
    post: &CandidatePost,
    mode: FeedMode,
    length: PostLength,
    options: ValidationOptions,
) -> Verdict {
    DEFAULT_VALIDATOR.validate(post, mode, length, options)
}

/// The quality gate.
///
/// Stateless between calls; safe to share across threads.
#[derive(Debug)]
pub struct ContentValidator {
    config: ValidationConfig,
    registry: RuleRegistry,
}

impl ContentValidator {
    /// A validator with the built-in rule sets.
    pub fn new(config: ValidationConfig) -> Self {
        Self::with_registry(config, RuleRegistry::with_defaults())
    }

    pub fn with_registry(config: ValidationConfig, registry: RuleRegistry) -> Self {
        Self { config, registry }
    }

    pub fn from_gate_config(config: &GateConfig) -> Self {
        Self::new(config.validation.clone())
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Options a caller gets when it passes none.
    pub fn default_options(&self) -> ValidationOptions {
        ValidationOptions {
            strict: self.config.strict_by_default,
        }
    }

    /// Run every applicable check and return the findings with their ids.
    pub fn report(
        &self,
        post: &CandidatePost,
        mode: FeedMode,
        length: PostLength,
        options: ValidationOptions,
    ) -> Report {
        let profile = self.config.lengths.profile(length);
        let text = TextProfile::new(&post.body);
        let mut report = Report::new();

        structural::check(post, &text, profile, &mut report);
        if !options.strict {
            return report;
        }

        stylistic::check(&text, length, profile, &mut report);

        if let Some(rules) = self.registry.get(mode) {
            rules.check(post, &text, &mut report);
        }

        report
    }

    pub fn validate(
        &self,
        post: &CandidatePost,
        mode: FeedMode,
        length: PostLength,
        options: ValidationOptions,
    ) -> Verdict {
        let report = self.report(post, mode, length, options);
        events::verdict_emitted(mode, length, options.strict, report.len());
        report.into_verdict()
    }
}

impl Default for ContentValidator {
    fn default() -> Self {
        Self::new(ValidationConfig::default())
    }
}

impl IContentValidator for ContentValidator {
    fn validate(
        &self,
        post: &CandidatePost,
        mode: FeedMode,
        length: PostLength,
        options: ValidationOptions,
    ) -> Verdict {
        ContentValidator::validate(self, post, mode, length, options)
    }
}
