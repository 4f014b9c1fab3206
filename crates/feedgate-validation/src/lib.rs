//! # feedgate-validation
//!
//! Quality gate for LLM-generated posts. Decides whether a schema-valid
//! candidate is acceptable for a feed mode and target length.
//!
//! ## Stages
//! 1. **Structural** (always): word range, tag bounds, low-confidence note
//! 2. **Stylistic** (strict only): filler phrasing, sentence length and
//!    budget, duplicate sentences
//! 3. **Narrative** (strict only, per mode): rule sets registered in a
//!    [`RuleRegistry`]; biography ships by default
//!
//! Errors accumulate across stages. The only early exit is lenient mode,
//! which stops after the structural stage.

pub mod checks;
pub mod engine;
pub mod events;
pub mod modes;
pub mod patterns;
pub mod report;
pub mod text;

pub use engine::{validate_post_content, ContentValidator};
pub use modes::{BiographyRules, ModeRules, RuleRegistry};
pub use report::Report;
pub use text::TextProfile;
