//! # feedgate-core
//!
//! Foundation crate for the FeedGate content quality gate.
//! Defines the candidate post model, feed modes, length profiles, verdicts,
//! errors, config, and the tuned linguistic constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod post;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::GateConfig;
pub use errors::{FeedgateError, FeedgateResult, SchemaError};
pub use models::{CheckId, Finding, ValidationOptions, Verdict};
pub use post::{CandidatePost, Confidence, FeedMode, PostLength};
