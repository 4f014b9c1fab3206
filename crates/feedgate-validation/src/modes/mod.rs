//! Per-mode narrative rule sets.
//!
//! Each [`FeedMode`] may register one [`ModeRules`] implementation. Modes
//! without one get only the structural and stylistic stages.

mod biography;

use std::collections::HashMap;
use std::fmt;

use feedgate_core::{CandidatePost, FeedMode};

use crate::report::Report;
use crate::text::TextProfile;

pub use biography::BiographyRules;

/// Narrative checks for one feed mode. Run only in strict mode.
pub trait ModeRules: Send + Sync {
    /// The mode this rule set applies to.
    fn mode(&self) -> FeedMode;

    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Append a finding for every rule the candidate breaks.
    fn check(&self, post: &CandidatePost, text: &TextProfile<'_>, report: &mut Report);
}

/// Lookup from feed mode to its rule set.
#[derive(Default)]
pub struct RuleRegistry {
    rules: HashMap<FeedMode, Box<dyn ModeRules>>,
}

impl RuleRegistry {
    /// A registry with no rule sets.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A registry with every built-in rule set.
    pub fn with_defaults() -> Self {
        let mut registry = Self::empty();
        registry.register(Box::new(BiographyRules));
        registry
    }

    /// Register `rules` for its mode, returning any set it replaces.
    pub fn register(&mut self, rules: Box<dyn ModeRules>) -> Option<Box<dyn ModeRules>> {
        tracing::debug!(mode = %rules.mode(), rules = rules.name(), "registering mode rules");
        self.rules.insert(rules.mode(), rules)
    }

    pub fn get(&self, mode: FeedMode) -> Option<&dyn ModeRules> {
        self.rules.get(&mode).map(|r| r.as_ref())
    }

    pub fn contains(&self, mode: FeedMode) -> bool {
        self.rules.contains_key(&mode)
    }

    /// Registered modes, in declaration order.
    pub fn modes(&self) -> Vec<FeedMode> {
        FeedMode::ALL
            .into_iter()
            .filter(|m| self.rules.contains_key(m))
            .collect()
    }
}

impl fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("modes", &self.modes())
            .finish()
    }
}
