//! Compiled lexicons and detectors.
//!
//! Word lists and thresholds are tuned against real generations; change
//! them only with a matching fixture update.

pub mod narrative;
pub mod style;

use regex::Regex;
use std::sync::LazyLock;

/// Declares a lazily compiled, process-wide regex from a literal.
macro_rules! pattern {
    ($(#[$meta:meta])* $name:ident, $regex_str:expr) => {
        $(#[$meta])*
        pub static $name: std::sync::LazyLock<regex::Regex> = std::sync::LazyLock::new(|| {
            regex::Regex::new($regex_str).expect(concat!(stringify!($name), " is a valid regex"))
        });
    };
}
pub(crate) use pattern;

/// A named detector, for diagnostics and health checks.
pub struct NamedPattern {
    pub name: &'static str,
    pub regex: &'static LazyLock<Regex>,
}

/// Every detector in the crate.
pub fn all_patterns() -> Vec<NamedPattern> {
    let mut all = style::all_patterns();
    all.extend(narrative::all_patterns());
    all
}
