//! Mode-agnostic style detectors.

use super::{pattern, NamedPattern};

pattern!(
    /// Stock filler expressions that pad generated prose.
    FILLER_RE,
    r"(?i)\b(?:in order to|it is important to note|it is worth noting|at the end of the day|for the most part|needless to say|it goes without saying|in today's world|when all is said and done|at this point in time|all things considered)\b"
);

pub fn all_patterns() -> Vec<NamedPattern> {
    vec![NamedPattern {
        name: "filler",
        regex: &FILLER_RE,
    }]
}
